//! 资料浏览模块测试 Mock
//!
//! 接入真实的会员模块与资料模块，额度来源外包一层可注入故障的适配器。

use crate as pallet_matchmaking_interaction;
use core::cell::Cell;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU128, ConstU32},
};
use frame_system::EnsureRoot;
use pallet_matchmaking_common::{
    EntitlementKind, QuotaError, SubscriptionTier, ViewQuota, ViewQuotaProvider,
};
use pallet_matchmaking_membership::{Subscriptions, ViewSubscription};
use sp_runtime::{BuildStorage, DispatchError};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        Membership: pallet_matchmaking_membership,
        Profile: pallet_matchmaking_profile,
        Interaction: pallet_matchmaking_interaction,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = pallet_balances::AccountData<u128>;
}

impl pallet_balances::Config for Test {
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type Balance = u128;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
    type WeightInfo = ();
    type FreezeIdentifier = ();
    type MaxFreezes = ();
    type RuntimeHoldReason = ();
    type RuntimeFreezeReason = ();
    type DoneSlashHandler = ();
}

parameter_types! {
    pub const BlocksPerMonth: u64 = 100;
    pub TreasuryAccount: u64 = 100;
}

impl pallet_matchmaking_membership::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
    type Fungible = Balances;
    type Balance = u128;
    type BlocksPerMonth = BlocksPerMonth;
    type MaxMonths = ConstU32<12>;
    type MaxPaymentRefLen = ConstU32<64>;
    type TreasuryAccount = TreasuryAccount;
    type AdminOrigin = EnsureRoot<u64>;
}

impl pallet_matchmaking_profile::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxNameLen = ConstU32<32>;
    type MaxTextLen = ConstU32<256>;
    type MaxCidLen = ConstU32<64>;
    type MaxPhotos = ConstU32<9>;
    type MaxFieldsPerUpdate = ConstU32<32>;
    type AdminOrigin = EnsureRoot<u64>;
    type WeightInfo = ();
}

/// 额度存储故障模式
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuotaFault {
    None,
    /// 扣减前失败
    Offline,
    /// 扣减成功后报错
    FailAfterConsume,
}

thread_local! {
    static QUOTA_FAULT: Cell<QuotaFault> = const { Cell::new(QuotaFault::None) };
}

pub fn set_quota_fault(fault: QuotaFault) {
    QUOTA_FAULT.with(|f| f.set(fault));
}

/// 会员模块额度的故障注入适配器
pub struct FlakyQuota;

impl ViewQuotaProvider<u64> for FlakyQuota {
    fn view_quota(who: &u64) -> ViewQuota {
        Membership::view_quota(who)
    }

    fn current_period(who: &u64) -> u32 {
        Membership::current_period(who)
    }

    fn try_consume_view(who: &u64) -> Result<ViewQuota, QuotaError> {
        let offline = QuotaError::Unavailable(DispatchError::Other("quota store offline"));
        match QUOTA_FAULT.with(|f| f.get()) {
            QuotaFault::None => Membership::try_consume_view(who),
            QuotaFault::Offline => Err(offline),
            QuotaFault::FailAfterConsume => {
                Membership::try_consume_view(who)?;
                Err(offline)
            },
        }
    }
}

#[cfg(feature = "runtime-benchmarks")]
pub struct InteractionBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for InteractionBenchmarkHelper {
    fn register_profile(who: &u64) {
        let _ = Profile::create_profile(RuntimeOrigin::signed(*who), Default::default());
    }

    fn grant_views(who: &u64, views: u32) {
        grant(*who, SubscriptionTier::Premium, views, 0);
    }
}

impl pallet_matchmaking_interaction::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Quota = FlakyQuota;
    type Profiles = Profile;
    type MaxProfileViewers = ConstU32<3>;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = InteractionBenchmarkHelper;
}

/// 测试账户
pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;
pub const DAVE: u64 = 4;
pub const EVE: u64 = 5;
pub const FRANK: u64 = 6;

/// 直接写入订阅状态（周期 1，无到期）
pub fn grant(who: u64, tier: SubscriptionTier, views_limit: u32, views_used: u32) {
    Subscriptions::<Test>::insert(who, ViewSubscription {
        tier,
        package_id: Some(1),
        kind: EntitlementKind::Lifetime,
        views_limit,
        views_used,
        period: 1,
        period_started_at: 1,
        expires_at: None,
    });
}

/// 创建空资料
pub fn register(who: u64) {
    frame_support::assert_ok!(Profile::create_profile(RuntimeOrigin::signed(who), Default::default()));
}

/// 构建测试外部环境
pub fn new_test_ext() -> sp_io::TestExternalities {
    set_quota_fault(QuotaFault::None);
    let t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
