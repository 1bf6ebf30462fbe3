// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::TransformFFI;

/// Virtual function table for native scene objects
///
/// All function pointers must be valid (non-null).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct SceneObjectVTableFFI {
	/// Model rendered by this object, null if none
	pub get_model: extern "C" fn(instance: *mut c_void) -> *mut c_void,

	/// World transform
	pub get_transform: extern "C" fn(instance: *mut c_void) -> TransformFFI,

	pub set_transform: extern "C" fn(instance: *mut c_void, transform: TransformFFI),

	/// 1 if visible, 0 otherwise
	pub is_visible: extern "C" fn(instance: *mut c_void) -> u8,

	pub set_visible: extern "C" fn(instance: *mut c_void, visible: u8),
}
