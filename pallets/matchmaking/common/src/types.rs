//! # 婚恋模块 - 共享类型定义
//!
//! 定义资料字段、订阅档位与浏览额度等跨 pallet 使用的数据结构。
//! 字符串标签只在边界（`from_label` / `from_tag`）被解析一次，核心逻辑只处理枚举。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

/// 去掉首尾 ASCII 空白后做大小写不敏感比较
fn label_eq(raw: &[u8], expected: &[u8]) -> bool {
    raw.trim_ascii().eq_ignore_ascii_case(expected)
}

// ============================================================================
// 性别
// ============================================================================

/// 性别
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum Gender {
    Male = 0,
    Female = 1,
    Other = 2,
}

impl Gender {
    /// 规范标签
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// 从规范标签解析
    pub fn from_tag(raw: &[u8]) -> Option<Self> {
        [Self::Male, Self::Female, Self::Other]
            .into_iter()
            .find(|g| label_eq(raw, g.tag().as_bytes()))
    }
}

// ============================================================================
// 婚姻状况
// ============================================================================

/// 婚姻状况
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum MaritalStatus {
    /// 未婚
    #[default]
    NeverMarried = 0,
    /// 已婚（寻找第二段婚姻）
    Married = 1,
    /// 离异
    Divorced = 2,
    /// 丧偶
    Widowed = 3,
    /// 分居
    Separated = 4,
}

impl MaritalStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NeverMarried => "never_married",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Separated => "separated",
        }
    }

    pub fn from_tag(raw: &[u8]) -> Option<Self> {
        [Self::NeverMarried, Self::Married, Self::Divorced, Self::Widowed, Self::Separated]
            .into_iter()
            .find(|m| label_eq(raw, m.tag().as_bytes()))
    }
}

// ============================================================================
// 多偶意愿
// ============================================================================

/// 是否接受多偶婚姻
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum PolygamyPreference {
    Yes = 0,
    No = 1,
    Maybe = 2,
}

impl PolygamyPreference {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }

    pub fn from_tag(raw: &[u8]) -> Option<Self> {
        [Self::Yes, Self::No, Self::Maybe]
            .into_iter()
            .find(|p| label_eq(raw, p.tag().as_bytes()))
    }
}

// ============================================================================
// 资料字段
// ============================================================================

/// 资料字段标识（固定 schema）
///
/// 解析器输出与 `update_profile` 的稀疏更新都以该枚举为键，
/// 未在此列出的字段无法写入。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
    PartialEq, Eq, PartialOrd, Ord, Debug,
)]
pub enum ProfileField {
    FirstName,
    LastName,
    Gender,
    Age,
    MaritalStatus,
    Height,
    Caste,
    Sect,
    Religion,
    Education,
    FieldOfStudy,
    Occupation,
    Income,
    City,
    Country,
    About,
    LookingFor,
    Polygamy,
    FatherOccupation,
    MotherOccupation,
    Siblings,
    PartnerAgeFrom,
    PartnerAgeTo,
    PartnerHeight,
    PartnerCaste,
    PartnerEducation,
    PartnerReligiousValues,
    PartnerLocation,
}

impl ProfileField {
    /// 表单字段名（snake_case）
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::MaritalStatus => "marital_status",
            Self::Height => "height",
            Self::Caste => "caste",
            Self::Sect => "sect",
            Self::Religion => "religion",
            Self::Education => "education",
            Self::FieldOfStudy => "field_of_study",
            Self::Occupation => "occupation",
            Self::Income => "income",
            Self::City => "city",
            Self::Country => "country",
            Self::About => "about",
            Self::LookingFor => "looking_for",
            Self::Polygamy => "polygamy",
            Self::FatherOccupation => "father_occupation",
            Self::MotherOccupation => "mother_occupation",
            Self::Siblings => "siblings",
            Self::PartnerAgeFrom => "partner_age_from",
            Self::PartnerAgeTo => "partner_age_to",
            Self::PartnerHeight => "partner_height",
            Self::PartnerCaste => "partner_caste",
            Self::PartnerEducation => "partner_education",
            Self::PartnerReligiousValues => "partner_religious_values",
            Self::PartnerLocation => "partner_location",
        }
    }

    /// 数值字段（年龄类）
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Age | Self::PartnerAgeFrom | Self::PartnerAgeTo)
    }
}

// ============================================================================
// 订阅档位
// ============================================================================

/// 浏览订阅档位
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum SubscriptionTier {
    /// 免费用户，不能浏览新资料
    #[default]
    Free = 0,
    Basic = 1,
    Standard = 2,
    Premium = 3,
    /// 未识别的付费档位
    Other = 4,
}

impl SubscriptionTier {
    /// 解析外部档位标签，未识别的标签归为 `Other`
    pub fn from_label(raw: &[u8]) -> Self {
        if label_eq(raw, b"free") {
            Self::Free
        } else if label_eq(raw, b"basic") {
            Self::Basic
        } else if label_eq(raw, b"standard") {
            Self::Standard
        } else if label_eq(raw, b"premium") {
            Self::Premium
        } else {
            Self::Other
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }
}

/// 权益类型
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum EntitlementKind {
    /// 按月发放额度，每月一个周期
    #[default]
    Monthly = 0,
    /// 一次性额度，永不过期
    Lifetime = 1,
}

// ============================================================================
// 浏览额度
// ============================================================================

/// 浏览额度快照
///
/// 不变量：`views_used <= views_limit`。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct ViewQuota {
    pub tier: SubscriptionTier,
    pub views_limit: u32,
    pub views_used: u32,
    /// 当前权益周期编号
    pub period: u32,
}

impl ViewQuota {
    /// 免费档或额度为零时永远不能浏览新资料
    pub fn is_blocked(&self) -> bool {
        !self.tier.is_paid() || self.views_limit == 0
    }

    pub fn can_view_new(&self) -> bool {
        !self.is_blocked() && self.views_used < self.views_limit
    }

    pub fn remaining(&self) -> u32 {
        if self.is_blocked() {
            return 0;
        }
        self.views_limit.saturating_sub(self.views_used)
    }
}

/// 浏览请求结果
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum ViewOutcome {
    /// 本周期内已浏览过，不消耗额度
    AlreadyViewed,
    /// 新浏览，已扣减一次额度
    Recorded,
}

/// 额度扣减失败原因
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum QuotaError {
    /// 额度不足或免费档
    Exhausted,
    /// 额度存储不可用
    Unavailable(DispatchError),
}

// ===== 单元测试 =====
