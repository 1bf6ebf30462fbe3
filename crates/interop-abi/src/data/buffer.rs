// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ptr::null_mut;

/// FFI-safe byte buffer
///
/// Buffers returned by value from an export are owned by the bridge and must be
/// handed back through `Bridge_FreeBuffer`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BufferFFI {
	/// Pointer to the first byte, null for an empty buffer
	pub ptr: *mut u8,
	/// Number of initialized bytes
	pub len: usize,
	/// Allocated capacity in bytes
	pub cap: usize,
}

impl BufferFFI {
	/// Create an empty buffer
	pub const fn empty() -> Self {
		Self {
			ptr: null_mut(),
			len: 0,
			cap: 0,
		}
	}

	pub const fn is_empty(&self) -> bool {
		self.ptr.is_null() || self.len == 0
	}

	/// View the buffer contents
	///
	/// # Safety
	/// `ptr` must be valid for reads of `len` bytes for the returned lifetime.
	pub unsafe fn as_slice<'a>(&self) -> &'a [u8] {
		if self.is_empty() {
			&[]
		} else {
			// SAFETY: caller guarantees ptr/len describe live memory
			unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
		}
	}
}

impl Default for BufferFFI {
	fn default() -> Self {
		Self::empty()
	}
}
