//! # Matchmaking Interaction Pallet Weights
//!
//! 资料浏览模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn view_profile() -> Weight;
    fn prune_view_history(n: u32) -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn view_profile() -> Weight {
        Weight::from_parts(45_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn prune_view_history(n: u32) -> Weight {
        Weight::from_parts(20_000_000, 0)
            .saturating_add(Weight::from_parts(5_000_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads((n as u64).saturating_add(1)))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
}

impl WeightInfo for () {
    fn view_profile() -> Weight { Weight::from_parts(45_000_000, 0) }
    fn prune_view_history(n: u32) -> Weight {
        Weight::from_parts(20_000_000, 0)
            .saturating_add(Weight::from_parts(5_000_000, 0).saturating_mul(n.into()))
    }
}
