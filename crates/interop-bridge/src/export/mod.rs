// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Export dispatch table
//!
//! Flat, monomorphic `extern "C"` symbols named `<Class>_<Operation>` (instance
//! exports) or `Bridge_<Operation>`. Instance exports take `self` as their
//! first parameter, resolve it through the handle registry and call the
//! installed native class vtable. A stale handle, a handle of the wrong class,
//! a class that was never installed or a missing bridge all produce the
//! sentinel of the return shape.

mod buffer;
mod descriptor;
mod shape;

pub mod bridge;
pub mod model;
pub mod scene_object;
pub mod texture;

use std::{ffi::c_void, sync::Arc};

pub use descriptor::{EXPORTS, ExportDescriptor, ExportTarget, find_export};
use interop_abi::HandleFFI;
pub use shape::{Shape, StructShape};
use tracing::{trace, warn};

use crate::{
	boundary::{Sentinel, guard},
	bridge::Bridge,
	class::NativeClass,
};

pub(crate) fn installed(symbol: &'static str) -> Option<Arc<Bridge>> {
	let bridge = Bridge::current();
	if bridge.is_none() {
		warn!(symbol, "export called while no bridge is installed");
	}
	bridge
}

/// Resolve `this` as an instance of `C` and run a native operation that may
/// itself report failure
pub(crate) fn try_dispatch<C, R, F>(symbol: &'static str, this: HandleFFI, call: F) -> R
where
	C: NativeClass,
	R: Sentinel,
	F: FnOnce(&Bridge, &C, *mut c_void) -> Option<R>,
{
	guard(symbol, || {
		let bridge = installed(symbol)?;
		let Some(instance) = bridge.registry().resolve_as(this, C::TAG) else {
			trace!(symbol, handle = ?this, "stale or foreign handle");
			return None;
		};
		let Some(class) = bridge.classes().get::<C>() else {
			trace!(symbol, class = %C::TAG, "native class not installed");
			return None;
		};
		call(&bridge, class, instance)
	})
}

pub(crate) fn dispatch<C, R, F>(symbol: &'static str, this: HandleFFI, call: F) -> R
where
	C: NativeClass,
	R: Sentinel,
	F: FnOnce(&Bridge, &C, *mut c_void) -> R,
{
	try_dispatch(symbol, this, |bridge, class, instance| Some(call(bridge, class, instance)))
}
