// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bridge-owned buffers handed out by value
//!
//! The caller gets a `BufferFFI` describing a leaked `Vec<u8>` and returns it
//! through `Bridge_FreeBuffer`, which rebuilds and drops the vector.

use std::mem::ManuallyDrop;

use interop_abi::BufferFFI;

pub(crate) fn owned_buffer(bytes: Vec<u8>) -> BufferFFI {
	if bytes.is_empty() {
		return BufferFFI::empty();
	}
	let mut bytes = ManuallyDrop::new(bytes);
	BufferFFI {
		ptr: bytes.as_mut_ptr(),
		len: bytes.len(),
		cap: bytes.capacity(),
	}
}

/// # Safety
/// `buffer` must be empty or come from [`owned_buffer`] and not have been
/// released before.
pub(crate) unsafe fn release_buffer(buffer: BufferFFI) {
	if buffer.ptr.is_null() {
		return;
	}
	// SAFETY: ptr/len/cap are exactly the parts of the vector leaked by owned_buffer
	drop(unsafe { Vec::from_raw_parts(buffer.ptr, buffer.len, buffer.cap) });
}
