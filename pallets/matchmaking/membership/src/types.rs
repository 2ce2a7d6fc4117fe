//! # 婚恋会员模块 - 类型定义
//!
//! 定义浏览套餐、支付申请与浏览订阅等类型。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use pallet_matchmaking_common::{EntitlementKind, SubscriptionTier, ViewQuota};
use scale_info::TypeInfo;
use sp_runtime::traits::AtLeast32BitUnsigned;

/// 浏览套餐
///
/// 由管理员配置，档位标签到额度的映射全部在这里，不写死在代码中。
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, Debug)]
pub struct ViewPackage<Balance> {
    /// 套餐档位
    pub tier: SubscriptionTier,
    /// 权益类型
    pub kind: EntitlementKind,
    /// 每个周期的浏览次数
    pub views_per_period: u32,
    /// 月数（仅 Monthly 有效）
    pub months: u32,
    /// 链上直购价格
    pub price: Balance,
    /// 是否在售
    pub active: bool,
}

/// 支付申请状态
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, Debug)]
pub enum PaymentStatus {
    /// 等待管理员审核
    Pending,
    /// 已通过，套餐已激活
    Approved,
    /// 已拒绝
    Rejected,
}

/// 用户浏览订阅（持久化的浏览额度）
///
/// 注册即存在（`ValueQuery` 默认值）：免费档、额度 0、周期 0。
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen, Debug, Default)]
pub struct ViewSubscription<BlockNumber> {
    pub tier: SubscriptionTier,
    /// 来源套餐
    pub package_id: Option<u32>,
    pub kind: EntitlementKind,
    pub views_limit: u32,
    pub views_used: u32,
    /// 权益周期编号，每次激活、按月滚动或失效都会递增
    pub period: u32,
    /// 当前周期起始区块
    pub period_started_at: BlockNumber,
    /// 到期区块，`None` 表示不过期
    pub expires_at: Option<BlockNumber>,
}

impl<BlockNumber: AtLeast32BitUnsigned + Copy + Default> ViewSubscription<BlockNumber> {
    /// 额度快照
    pub fn quota(&self) -> ViewQuota {
        ViewQuota {
            tier: self.tier,
            views_limit: self.views_limit,
            views_used: self.views_used,
            period: self.period,
        }
    }

    /// 是否已到期
    pub fn is_expired(&self, now: BlockNumber) -> bool {
        matches!(self.expires_at, Some(expiry) if now >= expiry)
    }

    /// 推导 `now` 时刻的订阅状态
    ///
    /// - 到期：退回免费档并开启新周期
    /// - 月度权益跨月：开启新周期，已用次数清零
    /// - 终身权益与免费档：不变
    pub fn rolled(&self, now: BlockNumber, blocks_per_month: BlockNumber) -> Self {
        if self.is_expired(now) {
            return Self {
                tier: SubscriptionTier::Free,
                package_id: None,
                kind: EntitlementKind::Monthly,
                views_limit: 0,
                views_used: 0,
                period: self.period.saturating_add(1),
                period_started_at: now,
                expires_at: None,
            };
        }

        let mut next = self.clone();
        if self.kind == EntitlementKind::Monthly && self.tier.is_paid() && !blocks_per_month.is_zero() {
            let elapsed = now.saturating_sub(self.period_started_at);
            if elapsed >= blocks_per_month {
                let whole_months = elapsed / blocks_per_month;
                next.period_started_at = self
                    .period_started_at
                    .saturating_add(whole_months.saturating_mul(blocks_per_month));
                next.period = self.period.saturating_add(1);
                next.views_used = 0;
            }
        }
        next
    }

    /// 回到免费档并开启新周期
    pub fn revoked(&self, now: BlockNumber) -> Self {
        Self {
            tier: SubscriptionTier::Free,
            period: self.period.saturating_add(1),
            period_started_at: now,
            ..Default::default()
        }
    }
}
