//! # PERC20 pallet
//!
//! A permissioned fungible token. Minting, burning and receipt of funds are
//! gated by role membership:
//!
//! - [`MINTER_ROLE`] holders may mint to any account that is not frozen.
//! - [`BURNER_ROLE`] holders may burn from their own balance.
//! - Accounts holding [`FREEZED_ROLE`] cannot receive tokens, neither from a
//!   mint nor from a transfer.
//!
//! Every role is administered by another role (by default
//! [`DEFAULT_ADMIN_ROLE`]); only members of a role's admin role may grant or
//! revoke it. The genesis admin starts with `DEFAULT_ADMIN_ROLE`,
//! `MINTER_ROLE` and `BURNER_ROLE`.

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` is deprecated upstream but still the simplest read API for clients
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use gate::{Check, GatedCall, Party, Requirement};
pub use pallet::*;
pub use roles::{RoleId, BURNER_ROLE, DEFAULT_ADMIN_ROLE, FREEZED_ROLE, MINTER_ROLE};
pub use weights::WeightInfo;

mod gate;
mod ledger;
mod roles;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::perc20";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Token name
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equal to the sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` may move out of `owner`'s balance via `transfer_from`.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Role membership. An entry exists iff the account holds the role.
    #[pallet::storage]
    pub type Roles<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, RoleId, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Admin role of each role. Unset entries resolve to `DEFAULT_ADMIN_ROLE`,
    /// which is the all-zero identifier.
    #[pallet::storage]
    #[pallet::getter(fn admin_of)]
    pub type RoleAdmin<T> = StorageMap<_, Blake2_128Concat, RoleId, RoleId, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// `account` was granted `role` by `sender`
        RoleGranted { role: RoleId, account: T::AccountId, sender: T::AccountId },
        /// `account` lost `role`. `sender` is the admin, or `account` itself on renounce.
        RoleRevoked { role: RoleId, account: T::AccountId, sender: T::AccountId },
        /// Tokens moved. `from: None` is a mint, `to: None` is a burn.
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, value: u128 },
        /// `owner` set the allowance of `spender`
        Approval { owner: T::AccountId, spender: T::AccountId, value: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is missing the role required for this call ("Caller is not a minter").
        Unauthorized,
        /// Recipient is frozen ("Must be whitelisted to recieve token").
        Blocked,
        InsufficientBalance,
        InsufficientAllowance,
        /// Arithmetic left the `u128` domain.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Grant `role` to `account`. The caller must hold the admin role of `role`.
        ///
        /// Granting a role the account already holds does nothing and emits no event.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: RoleId, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Self::admin_of(role), &sender)?;
            Self::do_grant_role(role, &account, &sender);
            Ok(())
        }

        /// Revoke `role` from `account`. The caller must hold the admin role of `role`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: RoleId,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Self::admin_of(role), &sender)?;
            Self::do_revoke_role(role, &account, &sender);
            Ok(())
        }

        /// Drop `role` from the calling account. `account` must be the caller.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(
            origin: OriginFor<T>,
            role: RoleId,
            account: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(sender == account, Error::<T>::Unauthorized);
            Self::do_revoke_role(role, &account, &sender);
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::enforce(GatedCall::Mint, &caller, Some(&to))?;
            Self::do_mint(&to, amount)
        }

        /// Burn `amount` from the caller's own balance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::enforce(GatedCall::Burn, &caller, None)?;
            Self::do_burn(&caller, amount)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::enforce(GatedCall::Transfer, &caller, Some(&to))?;
            Self::do_transfer(&caller, &to, amount)
        }

        /// Set the amount `spender` may transfer out of the caller's balance.
        /// `u128::MAX` never decreases.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount);
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::enforce(GatedCall::TransferFrom, &spender, Some(&to))?;
            let remaining = Self::remaining_allowance(&from, &spender, amount)?;
            Self::do_transfer(&from, &to, amount)?;
            if let Some(remaining) = remaining {
                Allowances::<T>::insert(&from, &spender, remaining);
            }
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying account. Receives `DEFAULT_ADMIN_ROLE`, `MINTER_ROLE` and `BURNER_ROLE`.
        pub admin: Option<T::AccountId>,
        pub token_name: Vec<u8>,
        pub token_symbol: Vec<u8>,
        pub decimals: u8,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
        /// Roles administered by something other than `DEFAULT_ADMIN_ROLE` (role, admin role)
        pub role_admins: Vec<(RoleId, RoleId)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            for (role, admin_role) in &self.role_admins {
                RoleAdmin::<T>::insert(role, admin_role);
            }

            if let Some(ref admin) = self.admin {
                for role in [DEFAULT_ADMIN_ROLE, MINTER_ROLE, BURNER_ROLE] {
                    Pallet::<T>::do_grant_role(role, admin, admin);
                }
            }

            for (account, amount) in &self.initial_balances {
                Pallet::<T>::do_mint(account, *amount).expect("Initial balances overflow u128");
            }

            log::info!(
                target: LOG_TARGET,
                "Genesis: {} initial balances, total supply {}",
                self.initial_balances.len(),
                TotalSupply::<T>::get()
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Checks that total supply equals the sum of all balances.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(sp_runtime::DispatchError::Other("Sum of balances overflows u128"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            sp_runtime::DispatchError::Other("Total supply does not match the sum of balances")
        );
        Ok(())
    }
}
