// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Handle value layout
//!
//! ```text
//!  63                32 31                 0
//! +--------------------+--------------------+
//! |     generation     |   slot index + 1   |
//! +--------------------+--------------------+
//! ```
//!
//! Generations start at 1 and the index is offset by one, so no issued handle
//! is ever zero.

use interop_abi::HandleFFI;

pub(crate) const FIRST_GENERATION: u32 = 1;

#[inline]
pub(crate) fn pack(index: u32, generation: u32) -> HandleFFI {
	debug_assert!(index < u32::MAX);
	debug_assert!(generation >= FIRST_GENERATION);
	HandleFFI(((generation as u64) << 32) | (index as u64 + 1))
}

/// Split a handle into `(slot index, generation)`; `None` for values no
/// registry could have issued
#[inline]
pub(crate) fn unpack(handle: HandleFFI) -> Option<(u32, u32)> {
	let low = handle.raw() as u32;
	let generation = (handle.raw() >> 32) as u32;
	if low == 0 || generation < FIRST_GENERATION {
		return None;
	}
	Some((low - 1, generation))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pack_unpack() {
		let handle = pack(0, FIRST_GENERATION);
		assert!(!handle.is_null());
		assert_eq!(unpack(handle), Some((0, FIRST_GENERATION)));

		let handle = pack(u32::MAX - 1, u32::MAX);
		assert_eq!(unpack(handle), Some((u32::MAX - 1, u32::MAX)));
	}

	#[test]
	fn test_null_does_not_unpack() {
		assert_eq!(unpack(HandleFFI::NULL), None);
	}

	#[test]
	fn test_zero_generation_does_not_unpack() {
		assert_eq!(unpack(HandleFFI(1)), None);
	}

	#[test]
	fn test_same_slot_different_generation() {
		assert_ne!(pack(3, 1), pack(3, 2));
	}
}
