// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(non_snake_case)]

use std::slice::from_raw_parts;

use interop_abi::{BBoxFFI, BufferFFI, FFI_OK, HandleFFI, ModelVTableFFI, TransformFFI, TypeTag};
use tracing::warn;

use super::{buffer::owned_buffer, dispatch, try_dispatch};

/// Model name as UTF-8; release with `Bridge_FreeBuffer`
#[unsafe(no_mangle)]
pub extern "C" fn CModel_GetName(this: HandleFFI) -> BufferFFI {
	dispatch("CModel_GetName", this, |_, model: &ModelVTableFFI, instance| {
		let mut len = 0usize;
		let name = (model.get_name)(instance, &mut len);
		if name.is_null() || len == 0 {
			return BufferFFI::empty();
		}
		// SAFETY: the engine guarantees name/len describe bytes owned by the model
		owned_buffer(unsafe { from_raw_parts(name, len) }.to_vec())
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn CModel_GetBoneCount(this: HandleFFI) -> i32 {
	dispatch("CModel_GetBoneCount", this, |_, model: &ModelVTableFFI, instance| (model.get_bone_count)(instance))
}

/// Bone transform; the empty transform for an out-of-range bone
#[unsafe(no_mangle)]
pub extern "C" fn CModel_GetBoneTransform(this: HandleFFI, bone: i32) -> TransformFFI {
	try_dispatch("CModel_GetBoneTransform", this, |_, model: &ModelVTableFFI, instance| {
		let mut transform = TransformFFI::empty();
		match (model.get_bone_transform)(instance, bone, &mut transform) {
			FFI_OK => Some(transform),
			_ => None,
		}
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn CModel_GetBounds(this: HandleFFI) -> BBoxFFI {
	dispatch("CModel_GetBounds", this, |_, model: &ModelVTableFFI, instance| (model.get_bounds)(instance))
}

#[unsafe(no_mangle)]
pub extern "C" fn CModel_GetMass(this: HandleFFI) -> f64 {
	dispatch("CModel_GetMass", this, |_, model: &ModelVTableFFI, instance| (model.get_mass)(instance))
}

/// Spawn a scene object and hand back its freshly registered handle
#[unsafe(no_mangle)]
pub extern "C" fn CModel_CreateSceneObject(this: HandleFFI) -> HandleFFI {
	try_dispatch("CModel_CreateSceneObject", this, |bridge, model: &ModelVTableFFI, instance| {
		let object = (model.create_scene_object)(instance);
		match bridge.registry().register(object, TypeTag::SceneObject) {
			Ok(handle) => Some(handle),
			Err(err) => {
				warn!(%err, "scene object created but could not be registered");
				None
			}
		}
	})
}
