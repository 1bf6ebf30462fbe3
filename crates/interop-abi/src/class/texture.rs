// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::handle::HandleFFI;

/// Virtual function table for native textures
///
/// All function pointers must be valid (non-null).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct TextureVTableFFI {
	pub get_width: extern "C" fn(instance: *mut c_void) -> i32,

	pub get_height: extern "C" fn(instance: *mut c_void) -> i32,

	/// GPU memory used by the texture in bytes
	pub get_memory_size: extern "C" fn(instance: *mut c_void) -> u64,

	/// Copy CPU-side pixel data into a caller buffer
	///
	/// # Parameters
	/// - `instance`: The texture instance pointer
	/// - `dst`: Destination bytes
	/// - `dst_len`: Capacity of `dst`
	///
	/// # Returns
	/// - Number of bytes written, never more than `dst_len`
	pub copy_pixels: extern "C" fn(instance: *mut c_void, dst: *mut u8, dst_len: usize) -> usize,

	/// Queue an asynchronous GPU readback
	///
	/// The engine performs the readback off-thread and reports completion through
	/// the `Render_Texture_ReadbackComplete` import, passing `texture` and
	/// `request_id` back.
	///
	/// # Returns
	/// - 0 if the request was accepted, non-zero otherwise
	pub request_readback: extern "C" fn(instance: *mut c_void, texture: HandleFFI, request_id: u64) -> i32,
}
