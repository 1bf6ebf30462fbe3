// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(non_snake_case)]

use interop_abi::{HandleFFI, SceneObjectVTableFFI, TransformFFI, TypeTag};

use super::{dispatch, try_dispatch};

/// Handle of the rendered model; reuses the model's live handle if it has one
#[unsafe(no_mangle)]
pub extern "C" fn CSceneObject_GetModel(this: HandleFFI) -> HandleFFI {
	try_dispatch("CSceneObject_GetModel", this, |bridge, object: &SceneObjectVTableFFI, instance| {
		let model = (object.get_model)(instance);
		if model.is_null() {
			return None;
		}
		let registry = bridge.registry();
		registry.lookup(model, TypeTag::Model).or_else(|| registry.register(model, TypeTag::Model).ok())
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn CSceneObject_GetTransform(this: HandleFFI) -> TransformFFI {
	dispatch("CSceneObject_GetTransform", this, |_, object: &SceneObjectVTableFFI, instance| {
		(object.get_transform)(instance)
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn CSceneObject_SetTransform(this: HandleFFI, transform: TransformFFI) {
	dispatch("CSceneObject_SetTransform", this, |_, object: &SceneObjectVTableFFI, instance| {
		(object.set_transform)(instance, transform)
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn CSceneObject_IsVisible(this: HandleFFI) -> u8 {
	dispatch("CSceneObject_IsVisible", this, |_, object: &SceneObjectVTableFFI, instance| {
		((object.is_visible)(instance) != 0) as u8
	})
}

/// Any non-zero `visible` counts as true
#[unsafe(no_mangle)]
pub extern "C" fn CSceneObject_SetVisible(this: HandleFFI, visible: u8) {
	dispatch("CSceneObject_SetVisible", this, |_, object: &SceneObjectVTableFFI, instance| {
		(object.set_visible)(instance, (visible != 0) as u8)
	})
}
