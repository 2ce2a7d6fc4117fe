//! 用户资料模块测试 Mock

use crate as pallet_matchmaking_profile;
use crate::FieldEntriesOf;
use frame_support::{derive_impl, traits::ConstU32};
use frame_system::EnsureRoot;
use pallet_matchmaking_common::ProfileField;
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Profile: pallet_matchmaking_profile,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_matchmaking_profile::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxNameLen = ConstU32<32>;
    type MaxTextLen = ConstU32<256>;
    type MaxCidLen = ConstU32<64>;
    type MaxPhotos = ConstU32<3>;
    type MaxFieldsPerUpdate = ConstU32<32>;
    type AdminOrigin = EnsureRoot<u64>;
    type WeightInfo = ();
}

/// 测试账户
pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;

/// 构建字段条目
pub fn entries(items: &[(ProfileField, &str)]) -> FieldEntriesOf<Test> {
    items
        .iter()
        .map(|(f, v)| (*f, v.as_bytes().to_vec().try_into().unwrap()))
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
}

/// 构建测试外部环境
pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
