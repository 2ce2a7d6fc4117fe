//! # Matchmaking Interaction Pallet Benchmarking
//!
//! 资料浏览模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    /// 最重路径：新资料，扣额度并写入记录
    #[benchmark]
    fn view_profile() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 1, 0);
        T::BenchmarkHelper::register_profile(&target);
        T::BenchmarkHelper::grant_views(&caller, 10);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), target.clone());

        assert!(Pallet::<T>::has_viewed(&caller, &target));
    }

    #[benchmark]
    fn prune_view_history(n: Linear<1, 100>) -> Result<(), BenchmarkError> {
        let caller: T::AccountId = whitelisted_caller();
        T::BenchmarkHelper::grant_views(&caller, 1);
        let period = T::Quota::current_period(&caller)
            .checked_sub(1)
            .ok_or(BenchmarkError::Weightless)?;

        let now = frame_system::Pallet::<T>::block_number();
        for i in 0..n {
            let target: T::AccountId = account("target", i, 0);
            ViewedProfiles::<T>::insert((&caller, period, &target), now);
        }

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), period, n);

        assert!(Pallet::<T>::viewed_profile_ids(&caller, period).is_empty());
        Ok(())
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
