// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Version of the export and vtable layout
///
/// Bumped whenever an exported signature or a vtable field changes.
pub const ABI_VERSION: u32 = 3;

/// Success
pub const FFI_OK: i32 = 0;

/// A required pointer argument was null
pub const FFI_ERROR_NULL_PTR: i32 = -1;

/// The handle registry has no free slot left
pub const FFI_ERROR_EXHAUSTED: i32 = -2;

/// Raw type tag does not name a known class
pub const FFI_ERROR_UNKNOWN_TAG: i32 = -3;

/// A bridge is already installed in this process
pub const FFI_ERROR_ALREADY_INSTALLED: i32 = -4;

/// No bridge is installed in this process
pub const FFI_ERROR_NOT_INSTALLED: i32 = -5;

/// The class vtable was installed before
pub const FFI_ERROR_CLASS_INSTALLED: i32 = -6;

/// Configuration could not be parsed or failed validation
pub const FFI_ERROR_INVALID_CONFIG: i32 = -7;

/// Catch-all for failures that have no dedicated code
pub const FFI_ERROR_INTERNAL: i32 = -99;
