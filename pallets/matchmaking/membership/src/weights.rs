//! # 婚恋会员模块 - 权重定义
//!
//! 定义各个 extrinsic 的权重。

use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfo {
    fn set_package() -> Weight;
    fn remove_package() -> Weight;
    fn submit_payment() -> Weight;
    fn approve_payment() -> Weight;
    fn reject_payment() -> Weight;
    fn purchase_package() -> Weight;
    fn revoke_subscription() -> Weight;
}

/// 默认权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn set_package() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().writes(1))
    }

    fn remove_package() -> Weight {
        Weight::from_parts(15_000_000, 0)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }

    fn submit_payment() -> Weight {
        Weight::from_parts(30_000_000, 0)
            .saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }

    fn approve_payment() -> Weight {
        Weight::from_parts(40_000_000, 0)
            .saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }

    fn reject_payment() -> Weight {
        Weight::from_parts(25_000_000, 0)
            .saturating_add(T::DbWeight::get().reads_writes(1, 2))
    }

    fn purchase_package() -> Weight {
        Weight::from_parts(60_000_000, 0)
            .saturating_add(T::DbWeight::get().reads_writes(4, 3))
    }

    fn revoke_subscription() -> Weight {
        Weight::from_parts(20_000_000, 0)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

/// 单元测试权重
impl WeightInfo for () {
    fn set_package() -> Weight {
        Weight::from_parts(15_000_000, 0)
    }

    fn remove_package() -> Weight {
        Weight::from_parts(15_000_000, 0)
    }

    fn submit_payment() -> Weight {
        Weight::from_parts(30_000_000, 0)
    }

    fn approve_payment() -> Weight {
        Weight::from_parts(40_000_000, 0)
    }

    fn reject_payment() -> Weight {
        Weight::from_parts(25_000_000, 0)
    }

    fn purchase_package() -> Weight {
        Weight::from_parts(60_000_000, 0)
    }

    fn revoke_subscription() -> Weight {
        Weight::from_parts(20_000_000, 0)
    }
}
