// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ffi::c_void;

use Shape::*;
use TypeTag::{Model, SceneObject, Texture};
use interop_abi::{
	BBoxFFI, BufferFFI, HandleFFI, ModelVTableFFI, SceneObjectVTableFFI, TextureVTableFFI, TransformFFI, TypeTag,
};

use super::{
	bridge::*,
	model::*,
	scene_object::*,
	shape::{Shape, StructShape},
	texture::*,
};

/// Address of the `extern "C"` symbol an export dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
	ptr: *const (),
	/// Number of C parameters of the symbol
	arity: usize,
}

// SAFETY: the pointer names a function item of this crate; it is never
// written through.
unsafe impl Send for ExportTarget {}
unsafe impl Sync for ExportTarget {}

impl ExportTarget {
	const fn new(ptr: *const (), arity: usize) -> Self {
		Self {
			ptr,
			arity,
		}
	}

	pub fn as_ptr(&self) -> *const () {
		self.ptr
	}

	pub fn arity(&self) -> usize {
		self.arity
	}
}

/// Static description of one exported symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportDescriptor {
	pub name: &'static str,
	/// Class of `self` for instance exports, `None` for `Bridge_*` functions
	pub class: Option<TypeTag>,
	/// Parameters in order; instance exports start with `Shape::Handle`
	pub params: &'static [Shape],
	pub ret: Shape,
	pub target: ExportTarget,
}

impl ExportDescriptor {
	/// Operation part of the name, e.g. `GetName` for `CModel_GetName`
	pub fn operation(&self) -> &'static str {
		self.name.split_once('_').map_or(self.name, |(_, operation)| operation)
	}

	/// C prototype, e.g. `int32_t CModel_GetBoneCount(uint64_t)`
	pub fn prototype(&self) -> String {
		let params: Vec<&str> = self.params.iter().map(|shape| shape.c_type()).collect();
		let params = if params.is_empty() {
			"void".to_string()
		} else {
			params.join(", ")
		};
		format!("{} {}({})", self.ret.c_type(), self.name, params)
	}
}

/// Descriptor bound to the symbol it names
///
/// The symbol is cast to the given C signature, so a descriptor whose
/// signature drifts from its symbol fails to build.
macro_rules! export {
	($class:expr, $symbol:ident($($arg:ty),*) $(-> $ret:ty)?; [$($param:expr),*] -> $shape:expr) => {
		ExportDescriptor {
			name: stringify!($symbol),
			class: $class,
			params: &[$($param),*],
			ret: $shape,
			target: ExportTarget::new(
				$symbol as unsafe extern "C" fn($($arg),*) $(-> $ret)? as *const (),
				<[&str]>::len(&[$(stringify!($arg)),*]),
			),
		}
	};
}

const TRANSFORM: Shape = Shape::Struct(StructShape::Transform);
const BBOX: Shape = Shape::Struct(StructShape::BBox);
const BUFFER: Shape = Shape::Struct(StructShape::Buffer);

pub static EXPORTS: &[ExportDescriptor] = &[
	// Bridge lifecycle and introspection
	export!(None, Bridge_Initialize(*const u8, usize) -> i32; [Bytes] -> I32),
	export!(None, Bridge_Shutdown() -> i32; [] -> I32),
	export!(None, Bridge_GetVersion() -> u32; [] -> U32),
	export!(None, Bridge_GetExportCount() -> u32; [] -> U32),
	export!(None, Bridge_GetExportName(u32) -> BufferFFI; [U32] -> BUFFER),
	export!(None, Bridge_GetMissingImportCount() -> u32; [] -> U32),
	export!(None, Bridge_FreeBuffer(BufferFFI); [BUFFER] -> Void),
	// Handles
	export!(None, Bridge_RegisterHandle(*mut c_void, u32) -> HandleFFI; [Pointer, U32] -> Handle),
	export!(None, Bridge_FreeHandle(HandleFFI); [Handle] -> Void),
	export!(None, Bridge_IsValidHandle(HandleFFI) -> u8; [Handle] -> Bool),
	export!(None, Bridge_GetHandleTag(HandleFFI) -> u32; [Handle] -> U32),
	export!(None, Bridge_GetLiveHandleCount() -> u32; [] -> U32),
	// Native classes
	export!(None, Bridge_InstallModelClass(*const ModelVTableFFI) -> i32; [Pointer] -> I32),
	export!(None, Bridge_InstallSceneObjectClass(*const SceneObjectVTableFFI) -> i32; [Pointer] -> I32),
	export!(None, Bridge_InstallTextureClass(*const TextureVTableFFI) -> i32; [Pointer] -> I32),
	// CModel
	export!(Some(Model), CModel_GetName(HandleFFI) -> BufferFFI; [Handle] -> BUFFER),
	export!(Some(Model), CModel_GetBoneCount(HandleFFI) -> i32; [Handle] -> I32),
	export!(Some(Model), CModel_GetBoneTransform(HandleFFI, i32) -> TransformFFI; [Handle, I32] -> TRANSFORM),
	export!(Some(Model), CModel_GetBounds(HandleFFI) -> BBoxFFI; [Handle] -> BBOX),
	export!(Some(Model), CModel_GetMass(HandleFFI) -> f64; [Handle] -> F64),
	export!(Some(Model), CModel_CreateSceneObject(HandleFFI) -> HandleFFI; [Handle] -> Handle),
	// CSceneObject
	export!(Some(SceneObject), CSceneObject_GetModel(HandleFFI) -> HandleFFI; [Handle] -> Handle),
	export!(Some(SceneObject), CSceneObject_GetTransform(HandleFFI) -> TransformFFI; [Handle] -> TRANSFORM),
	export!(Some(SceneObject), CSceneObject_SetTransform(HandleFFI, TransformFFI); [Handle, TRANSFORM] -> Void),
	export!(Some(SceneObject), CSceneObject_IsVisible(HandleFFI) -> u8; [Handle] -> Bool),
	export!(Some(SceneObject), CSceneObject_SetVisible(HandleFFI, u8); [Handle, Bool] -> Void),
	// CTexture
	export!(Some(Texture), CTexture_GetWidth(HandleFFI) -> i32; [Handle] -> I32),
	export!(Some(Texture), CTexture_GetHeight(HandleFFI) -> i32; [Handle] -> I32),
	export!(Some(Texture), CTexture_GetAspectRatio(HandleFFI) -> f32; [Handle] -> F32),
	export!(Some(Texture), CTexture_GetMemorySize(HandleFFI) -> u64; [Handle] -> U64),
	export!(Some(Texture), CTexture_CopyPixels(HandleFFI, *mut u8, usize) -> u64; [Handle, Bytes] -> U64),
	export!(Some(Texture), CTexture_RequestReadback(HandleFFI, u64) -> u8; [Handle, U64] -> Bool),
];

pub fn find_export(name: &str) -> Option<&'static ExportDescriptor> {
	EXPORTS.iter().find(|export| export.name == name)
}
