//! # Matchmaking Membership Pallet Benchmarking
//!
//! 婚恋会员模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_support::traits::{fungible::Mutate, EnsureOrigin};
use frame_system::RawOrigin;
use pallet::*;
use pallet_matchmaking_common::{EntitlementKind, SubscriptionTier};

fn sample_package<T: Config>() -> ViewPackage<BalanceOf<T>> {
    ViewPackage {
        tier: SubscriptionTier::Standard,
        kind: EntitlementKind::Monthly,
        views_per_period: 30,
        months: 1,
        price: BalanceOf::<T>::try_from(1_000u128).unwrap_or_default(),
        active: true,
    }
}

fn insert_package<T: Config>(package_id: u32) {
    Packages::<T>::insert(package_id, sample_package::<T>());
}

fn submit_pending<T: Config>(who: &T::AccountId) -> u64 {
    insert_package::<T>(1);
    let payment_id = NextPaymentId::<T>::get();
    PaymentRequests::<T>::insert(payment_id, PaymentRequest::<T> {
        who: who.clone(),
        package_id: 1,
        reference: Default::default(),
        status: PaymentStatus::Pending,
        submitted_at: frame_system::Pallet::<T>::block_number(),
    });
    PendingPayments::<T>::insert(who, payment_id);
    NextPaymentId::<T>::put(payment_id + 1);
    payment_id
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_package() -> Result<(), BenchmarkError> {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, 1u32, sample_package::<T>());

        assert!(Packages::<T>::contains_key(1));
        Ok(())
    }

    #[benchmark]
    fn remove_package() -> Result<(), BenchmarkError> {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
        insert_package::<T>(1);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, 1u32);

        assert!(!Packages::<T>::contains_key(1));
        Ok(())
    }

    #[benchmark]
    fn submit_payment() {
        let caller: T::AccountId = whitelisted_caller();
        insert_package::<T>(1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1u32, Default::default());

        assert!(PendingPayments::<T>::contains_key(&caller));
    }

    #[benchmark]
    fn approve_payment() -> Result<(), BenchmarkError> {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
        let caller: T::AccountId = whitelisted_caller();
        let payment_id = submit_pending::<T>(&caller);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, payment_id);

        assert_eq!(Subscriptions::<T>::get(&caller).package_id, Some(1));
        Ok(())
    }

    #[benchmark]
    fn reject_payment() -> Result<(), BenchmarkError> {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
        let caller: T::AccountId = whitelisted_caller();
        let payment_id = submit_pending::<T>(&caller);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, payment_id);

        assert!(!PendingPayments::<T>::contains_key(&caller));
        Ok(())
    }

    #[benchmark]
    fn purchase_package() {
        let caller: T::AccountId = whitelisted_caller();
        insert_package::<T>(1);
        let funds = BalanceOf::<T>::try_from(1_000_000_000u128).unwrap_or_default();
        T::Fungible::set_balance(&caller, funds);
        T::Fungible::set_balance(
            &T::TreasuryAccount::get(),
            BalanceOf::<T>::try_from(1_000_000u128).unwrap_or_default(),
        );

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1u32);

        assert_eq!(Subscriptions::<T>::get(&caller).package_id, Some(1));
    }

    #[benchmark]
    fn revoke_subscription() -> Result<(), BenchmarkError> {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
        let who: T::AccountId = account("member", 0, 0);
        Pallet::<T>::activate_package(&who, 1, &sample_package::<T>());

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, who.clone());

        assert_eq!(Subscriptions::<T>::get(&who).package_id, None);
        Ok(())
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
