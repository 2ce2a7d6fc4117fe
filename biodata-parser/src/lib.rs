//! # 婚恋简历文本解析
//!
//! 管理员粘贴的非结构化简历文本 → 稀疏的资料字段更新表。
//!
//! ## 解析流程
//!
//! 1. 按行拆分，去空行与首尾空白
//! 2. 去掉行首项目符号，按第一个 `:` / `::` / `.` / `..` 拆出标签与值
//! 3. 标签小写后建查找表，重复标签以最后一次为准
//! 4. 按 [`LabelTable`] 的同义词顺序取值，再按字段类型规范化
//! 5. 只输出成功解析的字段
//!
//! 解析只是录入辅助，不做校验：无法识别的行和值直接忽略，从不返回错误。
//! 字段校验在提交到资料模块时进行。
//!
//! ```
//! use pallet_matchmaking_common::ProfileField;
//! use stardust_biodata_parser::parse_profile_text;
//!
//! let parsed = parse_profile_text("• Name: Ahmed Raza Khan\n• Age: 29 years");
//! assert_eq!(parsed.text(ProfileField::FirstName), Some("Ahmed"));
//! assert_eq!(parsed.number(ProfileField::Age), Some(29));
//! ```

mod field_map;
mod labels;
pub mod normalize;

#[cfg(test)]
mod tests;

pub use field_map::{FieldValue, ProfileFieldMap};
pub use labels::{normalize_label, FieldKind, LabelRule, LabelTable, LabelTarget};
pub use pallet_matchmaking_common::ProfileField;

use std::{collections::HashMap, sync::OnceLock};

/// 使用默认标签表解析
pub fn parse_profile_text(raw: &str) -> ProfileFieldMap {
    static DEFAULT: OnceLock<BiodataParser> = OnceLock::new();
    DEFAULT.get_or_init(BiodataParser::default).parse(raw)
}

/// 简历解析器
#[derive(Clone, Debug, Default)]
pub struct BiodataParser {
    table: LabelTable,
}

impl BiodataParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义标签表
    pub fn with_table(table: LabelTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LabelTable {
        &self.table
    }

    /// 解析文本
    pub fn parse(&self, raw: &str) -> ProfileFieldMap {
        let lookup = Self::label_lookup(raw);
        let mut out = ProfileFieldMap::new();

        for rule in self.table.rules() {
            let Some(value) = rule.synonyms.iter().find_map(|s| lookup.get(s)) else {
                continue;
            };
            Self::apply(&mut out, rule.target, value);
        }

        log::debug!("📝 简历解析完成: {} 个标签, {} 个字段", lookup.len(), out.len());
        out
    }

    /// 标签 → 值，重复标签以最后一次为准
    fn label_lookup(raw: &str) -> HashMap<String, &str> {
        let mut lookup = HashMap::new();
        for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match normalize::split_label(normalize::strip_bullets(line)) {
                Some((label, value)) => {
                    lookup.insert(normalize_label(label), value);
                },
                None => log::trace!("跳过无法识别的行: {:?}", line),
            }
        }
        lookup
    }

    fn apply(out: &mut ProfileFieldMap, target: LabelTarget, value: &str) {
        match target {
            LabelTarget::FullName => {
                if let Some((first, last)) = normalize::split_name(value) {
                    out.set_text(ProfileField::FirstName, first);
                    if let Some(last) = last {
                        out.set_text(ProfileField::LastName, last);
                    }
                }
            },
            LabelTarget::PartnerAgeRange => {
                if let Some((from, to)) = normalize::range(value) {
                    out.set_number(ProfileField::PartnerAgeFrom, from);
                    out.set_number(ProfileField::PartnerAgeTo, to);
                }
            },
            LabelTarget::Field(field, kind) => match kind {
                FieldKind::Numeric => {
                    if let Some(n) = normalize::numeric(value) {
                        out.set_number(field, n);
                    }
                },
                FieldKind::Height => out.set_text(field, normalize::height(value)),
                FieldKind::Text => out.set_text(field, value.trim()),
                FieldKind::Gender => out.set_text(field, normalize::gender(value)),
                FieldKind::MaritalStatus => out.set_text(field, normalize::marital_status(value)),
                FieldKind::Polygamy => out.set_text(field, normalize::polygamy(value)),
            },
        }
    }
}
