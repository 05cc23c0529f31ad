//! Weights for `pallet_perc20`.
//!
//! Estimated from the storage accesses of each call; replace with the output
//! of `frame-omni-bencher v1 benchmark pallet --pallet pallet_perc20` once the
//! benchmarks have been run on reference hardware.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

/// Weight functions needed for `pallet_perc20`.
pub trait WeightInfo {
	fn grant_role() -> Weight;
	fn revoke_role() -> Weight;
	fn renounce_role() -> Weight;
	fn mint() -> Weight;
	fn burn() -> Weight;
	fn transfer() -> Weight;
	fn approve() -> Weight;
	fn transfer_from() -> Weight;
}

/// Weights for `pallet_perc20` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `Perc20::RoleAdmin` (r:1 w:0)
	/// Storage: `Perc20::Roles` (r:2 w:1)
	fn grant_role() -> Weight {
		Weight::from_parts(15_000_000, 3_593)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Perc20::RoleAdmin` (r:1 w:0)
	/// Storage: `Perc20::Roles` (r:2 w:1)
	fn revoke_role() -> Weight {
		Weight::from_parts(15_000_000, 3_593)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Perc20::Roles` (r:1 w:1)
	fn renounce_role() -> Weight {
		Weight::from_parts(11_000_000, 3_593)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Perc20::Roles` (r:2 w:0)
	/// Storage: `Perc20::TotalSupply` (r:1 w:1)
	/// Storage: `Perc20::Balances` (r:1 w:1)
	fn mint() -> Weight {
		Weight::from_parts(20_000_000, 3_593)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `Perc20::Roles` (r:1 w:0)
	/// Storage: `Perc20::TotalSupply` (r:1 w:1)
	/// Storage: `Perc20::Balances` (r:1 w:1)
	fn burn() -> Weight {
		Weight::from_parts(18_000_000, 3_593)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `Perc20::Roles` (r:1 w:0)
	/// Storage: `Perc20::Balances` (r:2 w:2)
	fn transfer() -> Weight {
		Weight::from_parts(19_000_000, 6_196)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `Perc20::Allowances` (r:0 w:1)
	fn approve() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Perc20::Roles` (r:1 w:0)
	/// Storage: `Perc20::Allowances` (r:1 w:1)
	/// Storage: `Perc20::Balances` (r:2 w:2)
	fn transfer_from() -> Weight {
		Weight::from_parts(25_000_000, 6_196)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn grant_role() -> Weight {
		Weight::from_parts(15_000_000, 3_593)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn revoke_role() -> Weight {
		Weight::from_parts(15_000_000, 3_593)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn renounce_role() -> Weight {
		Weight::from_parts(11_000_000, 3_593)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn mint() -> Weight {
		Weight::from_parts(20_000_000, 3_593)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn burn() -> Weight {
		Weight::from_parts(18_000_000, 3_593)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn transfer() -> Weight {
		Weight::from_parts(19_000_000, 6_196)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn approve() -> Weight {
		Weight::from_parts(10_000_000, 0)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(25_000_000, 6_196)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
}
