//! # 婚恋会员模块 (Matchmaking Membership)
//!
//! 婚恋平台的浏览套餐与额度管理模块，是浏览额度的唯一权威来源。
//!
//! ## 功能概述
//!
//! - **套餐管理**：管理员配置档位、权益类型、每期浏览次数和价格
//! - **支付审核**：用户提交线下支付凭证，管理员审核后激活套餐
//! - **链上直购**：直接向国库转账购买套餐
//! - **额度扣减**：原子地"未达上限则加一"，供互动模块调用
//!
//! ## 额度周期
//!
//! | 权益类型 | 周期 | 到期 |
//! |----------|------|------|
//! | Monthly | 每月一个周期，跨月清零 | 购买月数后退回 Free |
//! | Lifetime | 单一周期 | 永不过期 |
//!
//! 激活新套餐总是开启新周期，已浏览集合随周期编号一并失效。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod types;
pub mod weights;

pub use types::*;
pub use weights::*;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::{
        pallet_prelude::*,
        traits::{
            fungible::{Inspect, Mutate},
            tokens::Preservation,
        },
    };
    use frame_system::pallet_prelude::*;
    use pallet_matchmaking_common::{
        EntitlementKind, QuotaError, SubscriptionTier, ViewQuota, ViewQuotaProvider,
    };
    use sp_runtime::traits::{Saturating, Zero};

    /// 余额类型别名
    pub type BalanceOf<T> = <T as Config>::Balance;

    /// 支付凭证（外部交易号等）
    pub type PaymentReferenceOf<T> = BoundedVec<u8, <T as Config>::MaxPaymentRefLen>;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Pallet 配置
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 运行时事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 权重信息
        type WeightInfo: WeightInfo;

        /// Fungible 接口：用于链上直购
        type Fungible: Inspect<Self::AccountId, Balance = BalanceOf<Self>>
            + Mutate<Self::AccountId>;

        /// 余额类型
        type Balance: codec::FullCodec
            + codec::MaxEncodedLen
            + codec::DecodeWithMemTracking
            + Copy
            + MaybeSerializeDeserialize
            + core::fmt::Debug
            + Default
            + scale_info::TypeInfo
            + Saturating
            + Zero
            + PartialOrd
            + Ord
            + TryFrom<u128>
            + TryInto<u128>;

        /// 每月区块数（约 432000 块，按 6 秒/块计算）
        #[pallet::constant]
        type BlocksPerMonth: Get<BlockNumberFor<Self>>;

        /// 月度套餐最多月数
        #[pallet::constant]
        type MaxMonths: Get<u32>;

        /// 支付凭证最大长度
        #[pallet::constant]
        type MaxPaymentRefLen: Get<u32>;

        /// 国库账户
        type TreasuryAccount: Get<Self::AccountId>;

        /// 管理员 Origin（配置套餐、审核支付）
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
    }

    // ========================================================================
    // 类型定义
    // ========================================================================

    /// 支付申请
    #[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct PaymentRequest<T: Config> {
        /// 申请人
        pub who: T::AccountId,
        /// 套餐 ID
        pub package_id: u32,
        /// 支付凭证
        pub reference: PaymentReferenceOf<T>,
        /// 状态
        pub status: PaymentStatus,
        /// 提交区块
        pub submitted_at: BlockNumberFor<T>,
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 浏览套餐
    #[pallet::storage]
    pub type Packages<T: Config> = StorageMap<
        _,
        Twox64Concat,
        u32,
        ViewPackage<BalanceOf<T>>,
    >;

    /// 用户浏览订阅
    #[pallet::storage]
    pub type Subscriptions<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        ViewSubscription<BlockNumberFor<T>>,
        ValueQuery,
    >;

    /// 支付申请
    #[pallet::storage]
    pub type PaymentRequests<T: Config> = StorageMap<
        _,
        Twox64Concat,
        u64,
        PaymentRequest<T>,
    >;

    /// 下一个支付申请 ID
    #[pallet::storage]
    pub type NextPaymentId<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 用户待审核的支付申请（每人最多一个）
    #[pallet::storage]
    pub type PendingPayments<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        u64,
    >;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 套餐已配置
        PackageSet {
            package_id: u32,
            tier: SubscriptionTier,
            views_per_period: u32,
        },
        /// 套餐已删除
        PackageRemoved {
            package_id: u32,
        },
        /// 支付申请已提交
        PaymentSubmitted {
            payment_id: u64,
            who: T::AccountId,
            package_id: u32,
        },
        /// 支付申请已通过
        PaymentApproved {
            payment_id: u64,
            who: T::AccountId,
        },
        /// 支付申请已拒绝
        PaymentRejected {
            payment_id: u64,
            who: T::AccountId,
        },
        /// 套餐已激活
        PackageActivated {
            who: T::AccountId,
            package_id: u32,
            tier: SubscriptionTier,
            views_limit: u32,
            period: u32,
            expires_at: Option<BlockNumberFor<T>>,
        },
        /// 订阅已撤销
        SubscriptionRevoked {
            who: T::AccountId,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 套餐不存在
        PackageNotFound,
        /// 套餐未在售
        PackageInactive,
        /// 套餐参数无效
        InvalidPackage,
        /// 已有待审核的支付申请
        PaymentAlreadyPending,
        /// 支付申请不存在
        PaymentNotFound,
        /// 支付申请不是待审核状态
        PaymentNotPending,
        /// 支付申请 ID 溢出
        PaymentIdOverflow,
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 配置套餐（新增或覆盖）
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_package())]
        pub fn set_package(
            origin: OriginFor<T>,
            package_id: u32,
            package: ViewPackage<BalanceOf<T>>,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::validate_package(&package)?;

            Packages::<T>::insert(package_id, package);

            Self::deposit_event(Event::PackageSet {
                package_id,
                tier: package.tier,
                views_per_period: package.views_per_period,
            });
            Ok(())
        }

        /// 删除套餐
        ///
        /// 已激活的订阅不受影响。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::remove_package())]
        pub fn remove_package(origin: OriginFor<T>, package_id: u32) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(Packages::<T>::contains_key(package_id), Error::<T>::PackageNotFound);

            Packages::<T>::remove(package_id);

            Self::deposit_event(Event::PackageRemoved { package_id });
            Ok(())
        }

        /// 提交支付凭证
        ///
        /// 线下或网关支付完成后提交，等待管理员审核。
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::submit_payment())]
        pub fn submit_payment(
            origin: OriginFor<T>,
            package_id: u32,
            reference: PaymentReferenceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let package = Packages::<T>::get(package_id).ok_or(Error::<T>::PackageNotFound)?;
            ensure!(package.active, Error::<T>::PackageInactive);
            ensure!(!PendingPayments::<T>::contains_key(&who), Error::<T>::PaymentAlreadyPending);

            let payment_id = NextPaymentId::<T>::get();
            let next_id = payment_id.checked_add(1).ok_or(Error::<T>::PaymentIdOverflow)?;

            PaymentRequests::<T>::insert(payment_id, PaymentRequest {
                who: who.clone(),
                package_id,
                reference,
                status: PaymentStatus::Pending,
                submitted_at: frame_system::Pallet::<T>::block_number(),
            });
            PendingPayments::<T>::insert(&who, payment_id);
            NextPaymentId::<T>::put(next_id);

            Self::deposit_event(Event::PaymentSubmitted { payment_id, who, package_id });
            Ok(())
        }

        /// 审核通过支付申请并激活套餐
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve_payment())]
        pub fn approve_payment(origin: OriginFor<T>, payment_id: u64) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;

            let (who, package_id) = PaymentRequests::<T>::try_mutate(payment_id, |maybe_request| {
                let request = maybe_request.as_mut().ok_or(Error::<T>::PaymentNotFound)?;
                ensure!(request.status == PaymentStatus::Pending, Error::<T>::PaymentNotPending);
                request.status = PaymentStatus::Approved;
                Ok::<_, DispatchError>((request.who.clone(), request.package_id))
            })?;

            // 审核期间套餐可能已下架，按提交时的套餐 ID 激活
            let package = Packages::<T>::get(package_id).ok_or(Error::<T>::PackageNotFound)?;
            PendingPayments::<T>::remove(&who);
            Self::activate_package(&who, package_id, &package);

            Self::deposit_event(Event::PaymentApproved { payment_id, who });
            Ok(())
        }

        /// 拒绝支付申请
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::reject_payment())]
        pub fn reject_payment(origin: OriginFor<T>, payment_id: u64) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;

            let who = PaymentRequests::<T>::try_mutate(payment_id, |maybe_request| {
                let request = maybe_request.as_mut().ok_or(Error::<T>::PaymentNotFound)?;
                ensure!(request.status == PaymentStatus::Pending, Error::<T>::PaymentNotPending);
                request.status = PaymentStatus::Rejected;
                Ok::<_, DispatchError>(request.who.clone())
            })?;
            PendingPayments::<T>::remove(&who);

            log::info!("🚫 支付申请 #{} 已拒绝", payment_id);

            Self::deposit_event(Event::PaymentRejected { payment_id, who });
            Ok(())
        }

        /// 链上直购套餐
        ///
        /// 价格转入国库后立即激活。
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::purchase_package())]
        pub fn purchase_package(origin: OriginFor<T>, package_id: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let package = Packages::<T>::get(package_id).ok_or(Error::<T>::PackageNotFound)?;
            ensure!(package.active, Error::<T>::PackageInactive);

            if !package.price.is_zero() {
                T::Fungible::transfer(
                    &who,
                    &T::TreasuryAccount::get(),
                    package.price,
                    Preservation::Preserve,
                )?;
            }

            Self::activate_package(&who, package_id, &package);
            Ok(())
        }

        /// 撤销用户订阅，退回免费档
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::revoke_subscription())]
        pub fn revoke_subscription(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;

            let now = frame_system::Pallet::<T>::block_number();
            Subscriptions::<T>::mutate(&who, |sub| *sub = sub.revoked(now));

            Self::deposit_event(Event::SubscriptionRevoked { who });
            Ok(())
        }
    }

    // ========================================================================
    // 内部函数
    // ========================================================================

    impl<T: Config> Pallet<T> {
        fn validate_package(package: &ViewPackage<BalanceOf<T>>) -> DispatchResult {
            ensure!(package.tier.is_paid(), Error::<T>::InvalidPackage);
            ensure!(package.views_per_period > 0, Error::<T>::InvalidPackage);
            if package.kind == EntitlementKind::Monthly {
                ensure!(
                    package.months >= 1 && package.months <= T::MaxMonths::get(),
                    Error::<T>::InvalidPackage
                );
            }
            Ok(())
        }

        /// 激活套餐：替换当前权益并开启新周期
        pub(crate) fn activate_package(
            who: &T::AccountId,
            package_id: u32,
            package: &ViewPackage<BalanceOf<T>>,
        ) {
            let now = frame_system::Pallet::<T>::block_number();
            let blocks_per_month = T::BlocksPerMonth::get();

            let expires_at = match package.kind {
                EntitlementKind::Monthly => {
                    Some(now.saturating_add(blocks_per_month.saturating_mul(package.months.into())))
                },
                EntitlementKind::Lifetime => None,
            };

            let period = Subscriptions::<T>::mutate(who, |sub| {
                let period = sub.rolled(now, blocks_per_month).period.saturating_add(1);
                *sub = ViewSubscription {
                    tier: package.tier,
                    package_id: Some(package_id),
                    kind: package.kind,
                    views_limit: package.views_per_period,
                    views_used: 0,
                    period,
                    period_started_at: now,
                    expires_at,
                };
                period
            });

            log::info!(
                "✅ 套餐 #{} 已激活: tier={:?}, views={}, period={}",
                package_id,
                package.tier,
                package.views_per_period,
                period
            );

            Self::deposit_event(Event::PackageActivated {
                who: who.clone(),
                package_id,
                tier: package.tier,
                views_limit: package.views_per_period,
                period,
                expires_at,
            });
        }

        /// 当前时刻的订阅状态（只读）
        pub fn current_subscription(who: &T::AccountId) -> ViewSubscription<BlockNumberFor<T>> {
            let now = frame_system::Pallet::<T>::block_number();
            Subscriptions::<T>::get(who).rolled(now, T::BlocksPerMonth::get())
        }

        /// 获取订阅档位
        pub fn get_tier(who: &T::AccountId) -> SubscriptionTier {
            Self::current_subscription(who).tier
        }
    }

    // ========================================================================
    // Trait 实现
    // ========================================================================

    impl<T: Config> ViewQuotaProvider<T::AccountId> for Pallet<T> {
        fn view_quota(who: &T::AccountId) -> ViewQuota {
            Self::current_subscription(who).quota()
        }

        fn current_period(who: &T::AccountId) -> u32 {
            Self::current_subscription(who).period
        }

        fn try_consume_view(who: &T::AccountId) -> Result<ViewQuota, QuotaError> {
            let now = frame_system::Pallet::<T>::block_number();
            let blocks_per_month = T::BlocksPerMonth::get();

            Subscriptions::<T>::try_mutate(who, |sub| {
                let mut next = sub.rolled(now, blocks_per_month);
                if !next.quota().can_view_new() {
                    return Err(QuotaError::Exhausted);
                }
                next.views_used = next.views_used.saturating_add(1);
                let quota = next.quota();
                *sub = next;
                Ok(quota)
            })
        }
    }
}
