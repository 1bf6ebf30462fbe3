// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Native class table
//!
//! One vtable per class, installed once by the engine during startup and read
//! by every export afterwards.

use std::sync::OnceLock;

use interop_abi::{ModelVTableFFI, SceneObjectVTableFFI, TextureVTableFFI, TypeTag};
use tracing::debug;

use crate::error::{BridgeError, Result};

/// A vtable type bound to the class tag its instances are registered under
pub trait NativeClass: Copy + Send + Sync + 'static {
	const TAG: TypeTag;

	fn slot(classes: &NativeClasses) -> &OnceLock<Self>;
}

#[derive(Default)]
pub struct NativeClasses {
	model: OnceLock<ModelVTableFFI>,
	scene_object: OnceLock<SceneObjectVTableFFI>,
	texture: OnceLock<TextureVTableFFI>,
}

impl NativeClasses {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn install<C: NativeClass>(&self, vtable: C) -> Result<()> {
		C::slot(self).set(vtable).map_err(|_| BridgeError::ClassAlreadyInstalled(C::TAG))?;
		debug!(class = %C::TAG, "native class installed");
		Ok(())
	}

	pub fn get<C: NativeClass>(&self) -> Option<&C> {
		C::slot(self).get()
	}

	pub fn is_installed(&self, tag: TypeTag) -> bool {
		match tag {
			TypeTag::Model => self.model.get().is_some(),
			TypeTag::SceneObject => self.scene_object.get().is_some(),
			TypeTag::Texture => self.texture.get().is_some(),
			TypeTag::Socket => false,
		}
	}
}

impl NativeClass for ModelVTableFFI {
	const TAG: TypeTag = TypeTag::Model;

	fn slot(classes: &NativeClasses) -> &OnceLock<Self> {
		&classes.model
	}
}

impl NativeClass for SceneObjectVTableFFI {
	const TAG: TypeTag = TypeTag::SceneObject;

	fn slot(classes: &NativeClasses) -> &OnceLock<Self> {
		&classes.scene_object
	}
}

impl NativeClass for TextureVTableFFI {
	const TAG: TypeTag = TypeTag::Texture;

	fn slot(classes: &NativeClasses) -> &OnceLock<Self> {
		&classes.texture
	}
}
