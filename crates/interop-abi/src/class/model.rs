// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::{BBoxFFI, TransformFFI};

/// Virtual function table for native models
///
/// All function pointers must be valid (non-null).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ModelVTableFFI {
	/// Borrow the model name
	///
	/// # Parameters
	/// - `instance`: The model instance pointer
	/// - `len_out`: Receives the name length in bytes
	///
	/// # Returns
	/// - Pointer to UTF-8 bytes owned by the model, valid until the next call on
	///   the same instance, or null if the model has no name
	pub get_name: extern "C" fn(instance: *mut c_void, len_out: *mut usize) -> *const u8,

	/// Number of bones in the skeleton
	pub get_bone_count: extern "C" fn(instance: *mut c_void) -> i32,

	/// Bind-pose transform of a bone
	///
	/// # Parameters
	/// - `instance`: The model instance pointer
	/// - `bone`: Bone index
	/// - `output`: Receives the transform
	///
	/// # Returns
	/// - 0 on success, non-zero if the bone index is out of range
	pub get_bone_transform: extern "C" fn(instance: *mut c_void, bone: i32, output: *mut TransformFFI) -> i32,

	/// Render bounds in model space
	pub get_bounds: extern "C" fn(instance: *mut c_void) -> BBoxFFI,

	/// Physics mass in kilograms
	pub get_mass: extern "C" fn(instance: *mut c_void) -> f64,

	/// Spawn a scene object rendering this model
	///
	/// # Returns
	/// - Pointer to the new native scene object, or null on failure. The bridge
	///   registers it under `TypeTag::SceneObject`; the engine frees the handle
	///   when it destroys the object.
	pub create_scene_object: extern "C" fn(instance: *mut c_void) -> *mut c_void,
}
