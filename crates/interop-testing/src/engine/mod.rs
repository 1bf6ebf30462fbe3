// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-process mock of the native engine
//!
//! Mock objects are addressed by their own location: keep them in place (or
//! boxed) for as long as a handle to them is live.

mod model;
mod readback;
mod scene_object;
mod texture;

use std::ffi::c_void;

use interop_abi::{FFI_OK, HandleFFI, ModelVTableFFI, SceneObjectVTableFFI, TextureVTableFFI, TypeTag};
use interop_bridge::{
	Bridge, Result,
	export::bridge::{
		Bridge_InstallModelClass, Bridge_InstallSceneObjectClass, Bridge_InstallTextureClass, Bridge_RegisterHandle,
	},
};
pub use model::MockModel;
pub use readback::ReadbackWorker;
pub use scene_object::MockSceneObject;
pub use texture::MockTexture;

/// A mock object that can be registered with the bridge
pub trait MockObject: Sized {
	const TAG: TypeTag;

	fn as_ptr(&self) -> *mut c_void {
		self as *const Self as *mut c_void
	}
}

impl MockObject for MockModel {
	const TAG: TypeTag = TypeTag::Model;
}

impl MockObject for MockSceneObject {
	const TAG: TypeTag = TypeTag::SceneObject;
}

impl MockObject for MockTexture {
	const TAG: TypeTag = TypeTag::Texture;
}

pub struct MockEngine;

impl MockEngine {
	pub const MODEL_CLASS: ModelVTableFFI = model::VTABLE;
	pub const SCENE_OBJECT_CLASS: SceneObjectVTableFFI = scene_object::VTABLE;
	pub const TEXTURE_CLASS: TextureVTableFFI = texture::VTABLE;

	/// Install every mock class on `bridge` directly
	pub fn install_classes(bridge: &Bridge) -> Result<()> {
		bridge.classes().install(Self::MODEL_CLASS)?;
		bridge.classes().install(Self::SCENE_OBJECT_CLASS)?;
		bridge.classes().install(Self::TEXTURE_CLASS)?;
		Ok(())
	}

	/// Install every mock class through the C installers, the way a native
	/// engine would; returns the first non-OK status
	pub fn install_classes_ffi() -> i32 {
		let model = Self::MODEL_CLASS;
		let scene_object = Self::SCENE_OBJECT_CLASS;
		let texture = Self::TEXTURE_CLASS;
		// SAFETY: each pointer refers to a fully initialised vtable on the stack
		let statuses = unsafe {
			[
				Bridge_InstallModelClass(&model),
				Bridge_InstallSceneObjectClass(&scene_object),
				Bridge_InstallTextureClass(&texture),
			]
		};
		statuses.into_iter().find(|status| *status != FFI_OK).unwrap_or(FFI_OK)
	}

	/// Register `object` through `Bridge_RegisterHandle`
	pub fn register<O: MockObject>(object: &O) -> HandleFFI {
		Bridge_RegisterHandle(object.as_ptr(), O::TAG.to_u32())
	}
}
