//! Benchmarking setup for pallet-perc20

use super::*;

#[allow(unused)]
use crate::Pallet as Perc20;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    Pallet::<T>::do_grant_role(DEFAULT_ADMIN_ROLE, &admin, &admin);
    admin
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn grant_role() {
        let caller = admin::<T>();
        let member: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), MINTER_ROLE, member.clone());

        assert!(Pallet::<T>::has_role(MINTER_ROLE, &member));
    }

    #[benchmark]
    fn revoke_role() {
        let caller = admin::<T>();
        let member: T::AccountId = account("member", 0, 0);
        Pallet::<T>::do_grant_role(MINTER_ROLE, &member, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), MINTER_ROLE, member.clone());

        assert!(!Pallet::<T>::has_role(MINTER_ROLE, &member));
    }

    #[benchmark]
    fn renounce_role() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::do_grant_role(BURNER_ROLE, &caller, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), BURNER_ROLE, caller.clone());

        assert!(!Pallet::<T>::has_role(BURNER_ROLE, &caller));
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Pallet::<T>::do_grant_role(MINTER_ROLE, &caller, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;
        Pallet::<T>::do_grant_role(BURNER_ROLE, &caller, &caller);
        Pallet::<T>::do_mint(&caller, amount).expect("Mint setup");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T>::get(&caller), 0);
        assert_eq!(TotalSupply::<T>::get(), 0);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Pallet::<T>::do_mint(&caller, 10_000_000).expect("Mint setup");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Pallet::<T>::do_mint(&owner, 10_000_000).expect("Mint setup");
        Pallet::<T>::do_approve(&owner, &caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &caller), 9_000_000);
    }

    impl_benchmark_test_suite!(Perc20, crate::mock::new_test_ext(), crate::mock::Test);
}
