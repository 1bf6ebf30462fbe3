// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Native/managed interop bridge
//!
//! Three pieces share one process-wide [`Bridge`]:
//!
//! - the handle registry, mapping opaque generation-tagged handles to native
//!   object pointers
//! - the export dispatch table, flat `extern "C"` symbols that resolve `self`
//!   and forward to the native class vtables
//! - the import callback registry, typed function-pointer slots the managed
//!   runtime fills at startup and the engine invokes from any thread
//!
//! Every exported symbol is safe to call with a stale handle or before the
//! bridge is installed; it returns the sentinel of its return shape.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod boundary;
pub mod bridge;
pub mod class;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod registry;

pub use boundary::Sentinel;
pub use bridge::Bridge;
pub use class::{NativeClass, NativeClasses};
pub use config::{BridgeBuilder, BridgeConfig, LogConfig, UnsetImportPolicy};
pub use error::{BridgeError, Result};
pub use export::{EXPORTS, ExportDescriptor, ExportTarget, Shape, StructShape, find_export};
pub use import::{ImportId, ImportSlot, ImportTable};
pub use registry::{Entry, HandleRegistry};
