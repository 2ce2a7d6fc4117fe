//! # 标签映射表
//!
//! 标签到资料字段的映射是数据而非逻辑：每条规则给出一个目标和一组按优先级
//! 排列的同义标签，解析时取第一个出现在文本中的同义词。

use pallet_matchmaking_common::ProfileField;

/// 字段值的规范化方式
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    /// 取第一段 1-3 位数字
    Numeric,
    /// 身高，规范为 `英尺'英寸`
    Height,
    /// 去首尾空白后原样保留
    Text,
    /// 性别关键词
    Gender,
    /// 婚姻状况关键词
    MaritalStatus,
    /// 多偶意愿关键词
    Polygamy,
}

/// 规则的写入目标
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelTarget {
    /// 单个字段
    Field(ProfileField, FieldKind),
    /// 全名，拆分为名与姓
    FullName,
    /// 择偶年龄区间，写入上下限两个字段
    PartnerAgeRange,
}

/// 一条映射规则
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LabelRule {
    pub target: LabelTarget,
    /// 小写同义标签，靠前的优先
    pub synonyms: Vec<String>,
}

impl LabelRule {
    pub fn new(target: LabelTarget, synonyms: &[&str]) -> Self {
        Self {
            target,
            synonyms: synonyms.iter().map(|s| normalize_label(s)).collect(),
        }
    }
}

/// 标签映射表
///
/// 规则按插入顺序执行，后面的规则写同一字段时覆盖前面的结果。
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LabelTable {
    rules: Vec<LabelRule>,
}

impl LabelTable {
    /// 空表
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// 追加一条规则
    pub fn with_rule(mut self, target: LabelTarget, synonyms: &[&str]) -> Self {
        self.rules.push(LabelRule::new(target, synonyms));
        self
    }

    /// 替换某个目标的同义词；目标不存在时追加
    pub fn set_synonyms(&mut self, target: LabelTarget, synonyms: &[&str]) {
        let rule = LabelRule::new(target, synonyms);
        match self.rules.iter_mut().find(|r| r.target == target) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// 删除某个目标的规则
    pub fn remove(&mut self, target: LabelTarget) {
        self.rules.retain(|r| r.target != target);
    }

    pub fn rules(&self) -> &[LabelRule] {
        &self.rules
    }

    /// 常见婚恋简历的标签词汇
    ///
    /// `post` 写入专业方向、择偶 `complexion` 写入宗教观念，
    /// 沿用既有录入习惯，可用 [`LabelTable::set_synonyms`] 调整。
    pub fn standard() -> Self {
        use FieldKind::*;
        use LabelTarget::{Field, FullName, PartnerAgeRange};
        use ProfileField as F;

        Self::empty()
            .with_rule(FullName, &["name", "full name", "candidate name"])
            .with_rule(Field(F::Gender, Gender), &["gender", "sex"])
            .with_rule(Field(F::Age, Numeric), &["age"])
            .with_rule(Field(F::MaritalStatus, MaritalStatus), &["marital status", "status"])
            .with_rule(Field(F::Height, Height), &["height"])
            .with_rule(Field(F::Caste, Text), &["caste", "cast"])
            .with_rule(Field(F::Sect, Text), &["sect", "maslak"])
            .with_rule(Field(F::Religion, Text), &["religion"])
            .with_rule(Field(F::Education, Text), &["education", "qualification"])
            .with_rule(Field(F::FieldOfStudy, Text), &["field of study", "post"])
            .with_rule(Field(F::Occupation, Text), &["occupation", "profession", "job"])
            .with_rule(Field(F::Income, Text), &["income", "monthly income", "salary"])
            .with_rule(Field(F::City, Text), &["city", "residence"])
            .with_rule(Field(F::Country, Text), &["country", "nationality"])
            .with_rule(Field(F::About, Text), &["about", "about me"])
            .with_rule(Field(F::LookingFor, Text), &["looking for"])
            .with_rule(Field(F::Polygamy, Polygamy), &["polygamy"])
            .with_rule(Field(F::FatherOccupation, Text), &["father", "father occupation"])
            .with_rule(Field(F::MotherOccupation, Text), &["mother", "mother occupation"])
            .with_rule(Field(F::Siblings, Text), &["siblings", "brothers and sisters"])
            .with_rule(PartnerAgeRange, &["requirements for match", "partner age", "age preference"])
            .with_rule(Field(F::PartnerHeight, Height), &["partner height"])
            .with_rule(Field(F::PartnerCaste, Text), &["partner caste", "caste preference"])
            .with_rule(Field(F::PartnerEducation, Text), &["partner education", "education preference"])
            .with_rule(
                Field(F::PartnerReligiousValues, Text),
                &["religious values", "partner complexion", "complexion preference"],
            )
            .with_rule(Field(F::PartnerLocation, Text), &["partner location", "preferred city"])
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// 标签查找键：小写，内部空白合并为单个空格
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
