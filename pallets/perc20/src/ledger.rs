//! Balance and supply bookkeeping.
//!
//! None of these functions check roles; the gate in the calling extrinsic has
//! already done so. Each one computes every new value, failing on underflow
//! or overflow, before its first write, so an error leaves storage untouched.

use frame_support::dispatch::DispatchResult;
use sp_runtime::DispatchError;

use crate::{Allowances, Balances, Config, Error, Event, Pallet, TotalSupply};

impl<T: Config> Pallet<T> {
    pub(crate) fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Self::deposit_event(Event::Transfer { from: None, to: Some(to.clone()), value: amount });
        Ok(())
    }

    pub(crate) fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        let balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        // supply covers every balance, so this only fails on corrupted state
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(from, balance);
        Self::deposit_event(Event::Transfer { from: Some(from.clone()), to: None, value: amount });
        Ok(())
    }

    pub(crate) fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let to_balance =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, from_balance);
            Balances::<T>::insert(to, to_balance);
        }

        Self::deposit_event(Event::Transfer {
            from: Some(from.clone()),
            to: Some(to.clone()),
            value: amount,
        });
        Ok(())
    }

    pub(crate) fn do_approve(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approval {
            owner: owner.clone(),
            spender: spender.clone(),
            value: amount,
        });
    }

    /// Allowance left after `spender` moves `amount` out of `owner`'s balance.
    ///
    /// `None` means the allowance is infinite and must not be written back.
    pub(crate) fn remaining_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> Result<Option<u128>, DispatchError> {
        let current = Allowances::<T>::get(owner, spender);
        if current == u128::MAX {
            return Ok(None);
        }

        current
            .checked_sub(amount)
            .map(Some)
            .ok_or_else(|| Error::<T>::InsufficientAllowance.into())
    }
}
