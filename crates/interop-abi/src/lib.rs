// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for the native/managed interop bridge
//!
//! This crate provides the stable C ABI surface shared by the native engine and
//! the bridge. It only defines FFI-safe types, vtables and function signatures;
//! every piece of behavior lives in `interop-bridge`.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod class;
pub mod constants;
pub mod data;
pub mod handle;
pub mod imports;

pub use class::*;
pub use constants::*;
pub use data::*;
pub use handle::*;
pub use imports::*;
