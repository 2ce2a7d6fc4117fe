//! # 婚恋模块 - 资料浏览权限
//!
//! 本模块决定用户能否查看另一位用户的完整资料，并在放行时记录消耗。
//!
//! ## 功能概述
//!
//! - **浏览判定**：已看过的资料免费重看，新资料消耗一次额度
//! - **已浏览集合**：按 (查看者, 权益周期, 被查看者) 记录，周期切换后自然失效
//! - **谁看过我**：被查看者可查询最近的访客
//! - **历史清理**：查看者可清除已结束周期的浏览记录
//!
//! ## 判定流程
//!
//! | 步骤 | 条件 | 结果 |
//! |------|------|------|
//! | 1 | 未签名 | `AuthRequired` |
//! | 2 | 查看自己 | `AlreadyViewed`，不记录 |
//! | 3 | 本周期已看过 | `AlreadyViewed`，不扣额度（对方资料已删除也一样） |
//! | 4 | 对方无资料 | `ProfileNotFound` |
//! | 5 | 额度不足或免费档 | `QuotaExceeded` |
//! | 6 | 其余 | 扣额度并记录，`Recorded` |
//!
//! 步骤 5、6 在同一个存储层内完成：额度"未达上限则加一"与写入已浏览集合
//! 要么都生效，要么都回滚。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use alloc::vec::Vec;
use frame_support::{pallet_prelude::*, storage::with_storage_layer};
use frame_system::pallet_prelude::*;
use pallet_matchmaking_common::{
    ProfileRegistry, QuotaError, ViewOutcome, ViewQuota, ViewQuotaProvider,
};

/// 浏览请求失败原因
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ViewError {
    /// 未登录（未签名）
    AuthRequired,
    /// 额度不足，需要升级套餐
    QuotaExceeded,
    /// 目标资料不存在
    ProfileNotFound,
    /// 额度存储不可用，未记录任何浏览
    Remote(DispatchError),
}

impl From<DispatchError> for ViewError {
    fn from(e: DispatchError) -> Self {
        Self::Remote(e)
    }
}

impl From<QuotaError> for ViewError {
    fn from(e: QuotaError) -> Self {
        match e {
            QuotaError::Exhausted => Self::QuotaExceeded,
            QuotaError::Unavailable(inner) => Self::Remote(inner),
        }
    }
}

/// 基准测试辅助：准备资料与额度
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
    /// 为账户创建资料
    fn register_profile(who: &AccountId);
    /// 为账户发放浏览额度
    fn grant_views(who: &AccountId, views: u32);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Pallet 配置
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 运行时事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 浏览额度来源（会员模块）
        type Quota: ViewQuotaProvider<Self::AccountId>;

        /// 资料登记（资料模块）
        type Profiles: ProfileRegistry<Self::AccountId>;

        /// 访客列表最大长度
        #[pallet::constant]
        type MaxProfileViewers: Get<u32>;

        /// 权重信息
        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 已浏览集合
    ///
    /// Key: (查看者, 权益周期, 被查看者)
    /// Value: 首次查看的区块号
    #[pallet::storage]
    pub type ViewedProfiles<T: Config> = StorageNMap<
        _,
        (
            NMapKey<Blake2_128Concat, T::AccountId>,
            NMapKey<Twox64Concat, u32>,
            NMapKey<Blake2_128Concat, T::AccountId>,
        ),
        BlockNumberFor<T>,
    >;

    /// 谁看过我（反向索引）
    ///
    /// 只保留最近的访客，满了淘汰最早的记录。
    #[pallet::storage]
    pub type ProfileViewers<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<(T::AccountId, BlockNumberFor<T>), T::MaxProfileViewers>,
        ValueQuery,
    >;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 资料已查看
        ProfileViewed {
            viewer: T::AccountId,
            target: T::AccountId,
            outcome: ViewOutcome,
            /// 本周期剩余浏览次数
            remaining: u32,
        },
        /// 浏览记录已清理
        ViewHistoryPruned {
            viewer: T::AccountId,
            period: u32,
            removed: u32,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 浏览额度不足
        ViewQuotaExceeded,
        /// 目标资料不存在
        ProfileNotFound,
        /// 只能清理已结束的周期
        PeriodStillActive,
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 查看资料
        ///
        /// # 额度规则
        /// - 本周期已看过：免费重看
        /// - 新资料：消耗一次额度，免费档与额度为零的用户一律拒绝
        /// - 查看自己：不消耗额度
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::view_profile())]
        pub fn view_profile(origin: OriginFor<T>, target: T::AccountId) -> DispatchResult {
            let viewer = ensure_signed(origin)?;

            let outcome = Self::request_view_as(&viewer, &target)
                .map_err(Self::dispatch_error)?;
            let remaining = T::Quota::view_quota(&viewer).remaining();

            Self::deposit_event(Event::ProfileViewed { viewer, target, outcome, remaining });
            Ok(())
        }

        /// 清理已结束周期的浏览记录
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::prune_view_history(*limit))]
        pub fn prune_view_history(origin: OriginFor<T>, period: u32, limit: u32) -> DispatchResult {
            let viewer = ensure_signed(origin)?;
            ensure!(period < T::Quota::current_period(&viewer), Error::<T>::PeriodStillActive);

            let stale: Vec<T::AccountId> = ViewedProfiles::<T>::iter_key_prefix((&viewer, period))
                .take(limit as usize)
                .collect();
            for target in &stale {
                ViewedProfiles::<T>::remove((&viewer, period, target));
            }

            Self::deposit_event(Event::ViewHistoryPruned {
                viewer,
                period,
                removed: stale.len() as u32,
            });
            Ok(())
        }
    }
}

// ============================================================================
// 浏览判定
// ============================================================================

impl<T: Config> Pallet<T> {
    /// 浏览请求入口
    ///
    /// 未签名的 origin 返回 `AuthRequired`。
    pub fn request_view(origin: OriginFor<T>, target: &T::AccountId) -> Result<ViewOutcome, ViewError> {
        let viewer = ensure_signed(origin).map_err(|_| ViewError::AuthRequired)?;
        Self::request_view_as(&viewer, target)
    }

    /// 以已认证的查看者身份发起浏览请求
    pub fn request_view_as(viewer: &T::AccountId, target: &T::AccountId) -> Result<ViewOutcome, ViewError> {
        if viewer == target {
            return Ok(ViewOutcome::AlreadyViewed);
        }

        let period = T::Quota::current_period(viewer);
        if ViewedProfiles::<T>::contains_key((viewer, period, target)) {
            return Ok(ViewOutcome::AlreadyViewed);
        }
        if !T::Profiles::profile_exists(target) {
            return Err(ViewError::ProfileNotFound);
        }

        let now = frame_system::Pallet::<T>::block_number();
        let quota = with_storage_layer(|| -> Result<ViewQuota, ViewError> {
            let quota = T::Quota::try_consume_view(viewer)?;
            ViewedProfiles::<T>::insert((viewer, quota.period, target), now);
            Self::record_viewer(target, viewer, now);
            Ok(quota)
        })
        .inspect_err(|e| log::debug!("🚫 浏览被拒绝: {:?}", e))?;

        log::debug!(
            "👀 新浏览已记录, period={}, 剩余 {}",
            quota.period,
            quota.remaining()
        );
        Ok(ViewOutcome::Recorded)
    }

    fn dispatch_error(e: ViewError) -> DispatchError {
        match e {
            ViewError::AuthRequired => DispatchError::BadOrigin,
            ViewError::QuotaExceeded => Error::<T>::ViewQuotaExceeded.into(),
            ViewError::ProfileNotFound => Error::<T>::ProfileNotFound.into(),
            ViewError::Remote(inner) => inner,
        }
    }

    /// 更新反向索引（谁看过我）
    fn record_viewer(target: &T::AccountId, viewer: &T::AccountId, now: BlockNumberFor<T>) {
        ProfileViewers::<T>::mutate(target, |viewers| {
            if let Some(entry) = viewers.iter_mut().find(|(v, _)| v == viewer) {
                entry.1 = now;
                return;
            }
            if viewers.is_full() {
                if let Some((oldest, _)) = viewers.iter().enumerate().min_by_key(|(_, (_, at))| *at) {
                    viewers.remove(oldest);
                }
            }
            let _ = viewers.try_push((viewer.clone(), now));
        });
    }

    // ========================================================================
    // 查询接口
    // ========================================================================

    /// 某周期内看过的资料
    pub fn viewed_profile_ids(viewer: &T::AccountId, period: u32) -> Vec<T::AccountId> {
        ViewedProfiles::<T>::iter_key_prefix((viewer, period)).collect()
    }

    /// 当前周期是否已看过
    pub fn has_viewed(viewer: &T::AccountId, target: &T::AccountId) -> bool {
        let period = T::Quota::current_period(viewer);
        ViewedProfiles::<T>::contains_key((viewer, period, target))
    }

    /// 本周期剩余浏览次数
    pub fn remaining_views(viewer: &T::AccountId) -> u32 {
        T::Quota::view_quota(viewer).remaining()
    }

    /// 获取查看过我的用户列表
    pub fn get_profile_viewers(user: &T::AccountId) -> Vec<(T::AccountId, BlockNumberFor<T>)> {
        ProfileViewers::<T>::get(user).into_inner()
    }
}
