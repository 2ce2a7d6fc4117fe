//! # Matchmaking Profile Pallet Weights
//!
//! 婚恋资料模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn create_profile() -> Weight;
    fn update_profile() -> Weight;
    fn delete_profile() -> Weight;
    fn admin_create_profile() -> Weight;
    fn upload_photo() -> Weight;
    fn remove_photo() -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create_profile() -> Weight {
        Weight::from_parts(60_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn update_profile() -> Weight {
        Weight::from_parts(50_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn delete_profile() -> Weight {
        Weight::from_parts(35_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn admin_create_profile() -> Weight {
        Weight::from_parts(65_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn upload_photo() -> Weight {
        Weight::from_parts(30_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn remove_photo() -> Weight {
        Weight::from_parts(30_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

impl WeightInfo for () {
    fn create_profile() -> Weight { Weight::from_parts(60_000_000, 0) }
    fn update_profile() -> Weight { Weight::from_parts(50_000_000, 0) }
    fn delete_profile() -> Weight { Weight::from_parts(35_000_000, 0) }
    fn admin_create_profile() -> Weight { Weight::from_parts(65_000_000, 0) }
    fn upload_photo() -> Weight { Weight::from_parts(30_000_000, 0) }
    fn remove_photo() -> Weight { Weight::from_parts(30_000_000, 0) }
}
