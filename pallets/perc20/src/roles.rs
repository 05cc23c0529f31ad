//! Role registry.
//!
//! Roles are 32-byte identifiers. Apart from [`DEFAULT_ADMIN_ROLE`], the
//! well-known roles are the keccak-256 digest of their name, so the same
//! identifiers can be recomputed by any client:
//!
//! ```ignore
//! assert_eq!(MINTER_ROLE, sp_io::hashing::keccak_256(b"MINTER_ROLE"));
//! ```

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Config, Error, Event, Pallet, Roles, LOG_TARGET};

pub type RoleId = [u8; 32];

/// Administers every role that has no explicit admin, including itself.
pub const DEFAULT_ADMIN_ROLE: RoleId = [0; 32];

pub const MINTER_ROLE: RoleId = keccak_const::Keccak256::new().update(b"MINTER_ROLE").finalize();

pub const BURNER_ROLE: RoleId = keccak_const::Keccak256::new().update(b"BURNER_ROLE").finalize();

/// Blocklist role. Members cannot receive tokens.
pub const FREEZED_ROLE: RoleId = keccak_const::Keccak256::new().update(b"FREEZED_ROLE").finalize();

impl<T: Config> Pallet<T> {
    pub fn has_role(role: RoleId, account: &T::AccountId) -> bool {
        Roles::<T>::contains_key(role, account)
    }

    pub(crate) fn ensure_role(role: RoleId, account: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(role, account), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Adds `account` to `role` without any access check.
    ///
    /// Returns `false`, and emits nothing, if the account was already a member.
    pub(crate) fn do_grant_role(role: RoleId, account: &T::AccountId, sender: &T::AccountId) -> bool {
        if Self::has_role(role, account) {
            return false;
        }

        Roles::<T>::insert(role, account, ());
        log::debug!(target: LOG_TARGET, "role {:?} granted to {:?}", role, account);
        Self::deposit_event(Event::RoleGranted {
            role,
            account: account.clone(),
            sender: sender.clone(),
        });
        true
    }

    /// Removes `account` from `role` without any access check.
    ///
    /// Returns `false`, and emits nothing, if the account was not a member.
    pub(crate) fn do_revoke_role(role: RoleId, account: &T::AccountId, sender: &T::AccountId) -> bool {
        if !Self::has_role(role, account) {
            return false;
        }

        Roles::<T>::remove(role, account);
        log::debug!(target: LOG_TARGET, "role {:?} revoked from {:?}", role, account);
        Self::deposit_event(Event::RoleRevoked {
            role,
            account: account.clone(),
            sender: sender.clone(),
        });
        true
    }
}
