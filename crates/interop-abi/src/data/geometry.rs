// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3FFI {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

impl Vector3FFI {
	pub const ZERO: Vector3FFI = Vector3FFI::new(0.0, 0.0, 0.0);

	pub const fn new(x: f32, y: f32, z: f32) -> Self {
		Self {
			x,
			y,
			z,
		}
	}
}

/// Rotation quaternion, `w` last
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuaternionFFI {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32,
}

impl QuaternionFFI {
	pub const IDENTITY: QuaternionFFI = QuaternionFFI {
		x: 0.0,
		y: 0.0,
		z: 0.0,
		w: 1.0,
	};
}

/// Position, rotation and uniform scale
///
/// The all-zero value (zero quaternion) is not a valid transform and is what
/// exports return for a stale handle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformFFI {
	pub position: Vector3FFI,
	pub rotation: QuaternionFFI,
	pub scale: f32,
}

impl TransformFFI {
	pub const IDENTITY: TransformFFI = TransformFFI {
		position: Vector3FFI::ZERO,
		rotation: QuaternionFFI::IDENTITY,
		scale: 1.0,
	};

	pub const fn empty() -> Self {
		Self {
			position: Vector3FFI::ZERO,
			rotation: QuaternionFFI {
				x: 0.0,
				y: 0.0,
				z: 0.0,
				w: 0.0,
			},
			scale: 0.0,
		}
	}

	pub fn with_position(position: Vector3FFI) -> Self {
		Self {
			position,
			..Self::IDENTITY
		}
	}
}

/// Axis-aligned bounding box
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBoxFFI {
	pub mins: Vector3FFI,
	pub maxs: Vector3FFI,
}

impl BBoxFFI {
	pub const fn empty() -> Self {
		Self {
			mins: Vector3FFI::ZERO,
			maxs: Vector3FFI::ZERO,
		}
	}
}
