//! # 婚恋模块 - Trait 定义
//!
//! 定义 pallet 之间协作的核心 Trait 接口。

use crate::types::*;

/// 浏览额度提供者 Trait
///
/// 由会员 pallet 实现，是额度的唯一权威来源。
pub trait ViewQuotaProvider<AccountId> {
    /// 获取当前额度（已按周期滚动）
    fn view_quota(who: &AccountId) -> ViewQuota;

    /// 获取当前权益周期编号
    fn current_period(who: &AccountId) -> u32;

    /// 原子地"未达上限则加一"
    ///
    /// 返回扣减后的额度；失败时不产生任何写入。
    fn try_consume_view(who: &AccountId) -> Result<ViewQuota, QuotaError>;
}

/// 用户资料登记 Trait
pub trait ProfileRegistry<AccountId> {
    /// 检查用户资料是否存在
    fn profile_exists(who: &AccountId) -> bool;
}
