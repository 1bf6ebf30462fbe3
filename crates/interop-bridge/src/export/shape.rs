// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

/// Structs passed by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructShape {
	Transform,
	BBox,
	Buffer,
}

/// The closed set of parameter and return shapes an export may use
///
/// Anything outside this set is a generation-time error. Nothing checks shapes
/// per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// Return only
	Void,
	Handle,
	/// `u8`, 0 or 1
	Bool,
	I32,
	U32,
	I64,
	U64,
	F32,
	F64,
	/// Pointer and length, two C parameters
	Bytes,
	/// Opaque native pointer; only on native-facing bridge functions
	Pointer,
	Struct(StructShape),
}

impl Shape {
	/// C spelling of the shape
	pub const fn c_type(self) -> &'static str {
		match self {
			Shape::Void => "void",
			Shape::Handle => "uint64_t",
			Shape::Bool => "uint8_t",
			Shape::I32 => "int32_t",
			Shape::U32 => "uint32_t",
			Shape::I64 => "int64_t",
			Shape::U64 => "uint64_t",
			Shape::F32 => "float",
			Shape::F64 => "double",
			Shape::Bytes => "uint8_t*, size_t",
			Shape::Pointer => "void*",
			Shape::Struct(StructShape::Transform) => "TransformFFI",
			Shape::Struct(StructShape::BBox) => "BBoxFFI",
			Shape::Struct(StructShape::Buffer) => "BufferFFI",
		}
	}

	/// Number of C parameters the shape occupies
	pub const fn c_arity(self) -> usize {
		match self {
			Shape::Void => 0,
			Shape::Bytes => 2,
			_ => 1,
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.c_type())
	}
}
