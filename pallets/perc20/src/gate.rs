//! Role checks applied before any ledger mutation.
//!
//! Capability roles and the freeze role share the same membership store but
//! are read in opposite directions. Each gated call therefore declares its
//! checks as data, with the direction spelled out by [`Requirement`], instead
//! of calling `has_role` inline.

use frame_support::dispatch::DispatchResult;
use sp_runtime::RuntimeDebug;

use crate::{
    roles::{RoleId, BURNER_ROLE, FREEZED_ROLE, MINTER_ROLE},
    Config, Error, Pallet, LOG_TARGET,
};

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Requirement {
    /// The account must be a member of the role. Fails with `Unauthorized`.
    Holds(RoleId),
    /// The account must not be a member of the role. Fails with `Blocked`.
    Lacks(RoleId),
}

impl Requirement {
    fn is_met<T: Config>(&self, account: &T::AccountId) -> bool {
        match *self {
            Requirement::Holds(role) => Pallet::<T>::has_role(role, account),
            Requirement::Lacks(role) => !Pallet::<T>::has_role(role, account),
        }
    }

    fn error<T: Config>(&self) -> Error<T> {
        match self {
            Requirement::Holds(_) => Error::<T>::Unauthorized,
            Requirement::Lacks(_) => Error::<T>::Blocked,
        }
    }
}

/// The account a [`Check`] is evaluated against.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Party {
    /// Signer of the extrinsic
    Caller,
    /// Account credited by the call
    Recipient,
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct Check {
    pub party: Party,
    pub requirement: Requirement,
}

/// Calls that pass through the gate.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum GatedCall {
    Mint,
    Burn,
    Transfer,
    TransferFrom,
}

const MINT_POLICY: &[Check] = &[
    Check { party: Party::Caller, requirement: Requirement::Holds(MINTER_ROLE) },
    Check { party: Party::Recipient, requirement: Requirement::Lacks(FREEZED_ROLE) },
];

// Burning always debits the caller, so there is no recipient to check.
const BURN_POLICY: &[Check] =
    &[Check { party: Party::Caller, requirement: Requirement::Holds(BURNER_ROLE) }];

const TRANSFER_POLICY: &[Check] =
    &[Check { party: Party::Recipient, requirement: Requirement::Lacks(FREEZED_ROLE) }];

impl GatedCall {
    /// Checks for this call, evaluated in order.
    pub const fn policy(self) -> &'static [Check] {
        match self {
            GatedCall::Mint => MINT_POLICY,
            GatedCall::Burn => BURN_POLICY,
            GatedCall::Transfer | GatedCall::TransferFrom => TRANSFER_POLICY,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Evaluates the policy of `call`, stopping at the first failed check.
    ///
    /// Reads only; callers must invoke this before touching the ledger.
    pub(crate) fn enforce(
        call: GatedCall,
        caller: &T::AccountId,
        recipient: Option<&T::AccountId>,
    ) -> DispatchResult {
        for check in call.policy() {
            let account = match check.party {
                Party::Caller => Some(caller),
                Party::Recipient => recipient,
            };

            // a check on a party the call does not have fails closed
            if !account.is_some_and(|account| check.requirement.is_met::<T>(account)) {
                log::trace!(target: LOG_TARGET, "{:?} rejected by {:?}", call, check);
                return Err(check.requirement.error::<T>().into());
            }
        }

        Ok(())
    }
}
