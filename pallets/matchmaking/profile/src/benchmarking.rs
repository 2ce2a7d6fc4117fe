//! # Matchmaking Profile Pallet Benchmarking
//!
//! 婚恋资料模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use alloc::vec;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;

/// 填满单次更新上限的字段条目
fn full_entries<T: Config>() -> FieldEntriesOf<T> {
    let pool = [
        (ProfileField::FirstName, &b"Ahmed"[..]),
        (ProfileField::LastName, b"Raza Khan"),
        (ProfileField::Gender, b"male"),
        (ProfileField::Age, b"29"),
        (ProfileField::MaritalStatus, b"never_married"),
        (ProfileField::Height, b"5'9"),
        (ProfileField::Education, b"MBA"),
        (ProfileField::Occupation, b"Banker"),
        (ProfileField::City, b"Lahore"),
        (ProfileField::PartnerAgeFrom, b"22"),
        (ProfileField::PartnerAgeTo, b"28"),
    ];
    let mut out = FieldEntriesOf::<T>::default();
    for (field, value) in pool.into_iter().take(T::MaxFieldsPerUpdate::get() as usize) {
        let value = TextOf::<T>::try_from(value.to_vec()).unwrap_or_default();
        let _ = out.try_push((field, value));
    }
    out
}

fn seed_profile<T: Config>(who: &T::AccountId) {
    let entries = full_entries::<T>();
    let _ = Pallet::<T>::do_create(who.clone(), &entries, false);
}

fn cid<T: Config>(seed: u8) -> CidOf<T> {
    CidOf::<T>::try_from(vec![seed; 46]).unwrap_or_default()
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_profile() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), full_entries::<T>());

        assert!(Profiles::<T>::contains_key(&caller));
    }

    #[benchmark]
    fn update_profile() {
        let caller: T::AccountId = whitelisted_caller();
        seed_profile::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), full_entries::<T>());
    }

    #[benchmark]
    fn delete_profile() {
        let caller: T::AccountId = whitelisted_caller();
        seed_profile::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert!(!Profiles::<T>::contains_key(&caller));
    }

    #[benchmark]
    fn admin_create_profile() -> Result<(), BenchmarkError> {
        let origin = T::AdminOrigin::try_successful_origin()
            .map_err(|_| BenchmarkError::Weightless)?;
        let owner: T::AccountId = account("owner", 0, 0);

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, owner.clone(), full_entries::<T>());

        assert!(Profiles::<T>::contains_key(&owner));
        Ok(())
    }

    #[benchmark]
    fn upload_photo() {
        let caller: T::AccountId = whitelisted_caller();
        seed_profile::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), cid::<T>(1), false);
    }

    #[benchmark]
    fn remove_photo() {
        let caller: T::AccountId = whitelisted_caller();
        seed_profile::<T>(&caller);
        Profiles::<T>::mutate(&caller, |p| {
            if let Some(p) = p {
                let _ = p.photo_cids.try_push(cid::<T>(1));
            }
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), cid::<T>(1));
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
