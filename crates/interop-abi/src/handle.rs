// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::fmt;

/// Opaque handle naming one native object across the boundary
///
/// Callers on either side must treat the value as non-interpretable data: store
/// it, compare it, pass it back. Never do arithmetic on it. The zero value is
/// reserved and always resolves to "no object".
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandleFFI(pub u64);

impl HandleFFI {
	pub const NULL: HandleFFI = HandleFFI(0);

	#[inline]
	pub const fn is_null(self) -> bool {
		self.0 == 0
	}

	#[inline]
	pub const fn raw(self) -> u64 {
		self.0
	}
}

impl fmt::Debug for HandleFFI {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HandleFFI({:#018x})", self.0)
	}
}

/// Class of the native object behind a handle
///
/// The set is closed. Raw values crossing the ABI are validated with
/// [`TypeTag::from_u32`].
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
	Model = 1,
	SceneObject = 2,
	Texture = 3,
	Socket = 4,
}

impl TypeTag {
	pub const ALL: [TypeTag; 4] = [TypeTag::Model, TypeTag::SceneObject, TypeTag::Texture, TypeTag::Socket];

	pub const fn from_u32(raw: u32) -> Option<TypeTag> {
		match raw {
			1 => Some(TypeTag::Model),
			2 => Some(TypeTag::SceneObject),
			3 => Some(TypeTag::Texture),
			4 => Some(TypeTag::Socket),
			_ => None,
		}
	}

	#[inline]
	pub const fn to_u32(self) -> u32 {
		self as u32
	}

	/// Prefix used by the exported symbols of this class, e.g. `CModel_GetName`
	pub const fn class_name(self) -> &'static str {
		match self {
			TypeTag::Model => "CModel",
			TypeTag::SceneObject => "CSceneObject",
			TypeTag::Texture => "CTexture",
			TypeTag::Socket => "CSocket",
		}
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.class_name())
	}
}
