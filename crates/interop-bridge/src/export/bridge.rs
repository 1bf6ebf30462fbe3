// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! `Bridge_*` functions: lifecycle, handles, class installation and
//! introspection

#![allow(non_snake_case)]

use std::{ffi::c_void, slice::from_raw_parts};

use interop_abi::{
	ABI_VERSION, BufferFFI, HandleFFI, ModelVTableFFI, SceneObjectVTableFFI, TextureVTableFFI, TypeTag,
};
use tracing::{debug, info};

use super::{
	EXPORTS,
	buffer::{owned_buffer, release_buffer},
	installed,
};
use crate::{
	boundary::{guard, status},
	bridge::Bridge,
	class::NativeClass,
	config::BridgeConfig,
	error::{BridgeError, Result},
	logging,
};

/// Parse the JSON config (defaults for null/empty), start logging and install
/// the process-wide bridge
///
/// # Safety
/// `config_json` must be null or valid for reads of `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Bridge_Initialize(config_json: *const u8, len: usize) -> i32 {
	status("Bridge_Initialize", || {
		let config = if config_json.is_null() || len == 0 {
			BridgeConfig::default()
		} else {
			// SAFETY: caller guarantees config_json is valid for len bytes
			BridgeConfig::from_json(unsafe { from_raw_parts(config_json, len) })?
		};
		logging::init(&config.log)?;
		let bridge = Bridge::new(config)?.install()?;
		info!(abi_version = ABI_VERSION, capacity = bridge.registry().capacity(), "bridge initialized");
		Ok(())
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn Bridge_Shutdown() -> i32 {
	status("Bridge_Shutdown", || {
		Bridge::shutdown()?;
		info!("bridge shut down");
		Ok(())
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn Bridge_GetVersion() -> u32 {
	ABI_VERSION
}

/// Register a native object; NULL on a null pointer, an unknown tag, a full
/// registry or a missing bridge
#[unsafe(no_mangle)]
pub extern "C" fn Bridge_RegisterHandle(ptr: *mut c_void, tag: u32) -> HandleFFI {
	guard("Bridge_RegisterHandle", || {
		let bridge = installed("Bridge_RegisterHandle")?;
		let registered = TypeTag::from_u32(tag)
			.ok_or(BridgeError::UnknownTypeTag(tag))
			.and_then(|tag| bridge.registry().register(ptr, tag));
		match registered {
			Ok(handle) => Some(handle),
			Err(err) => {
				debug!(%err, tag, "registration rejected");
				None
			}
		}
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn Bridge_FreeHandle(handle: HandleFFI) {
	guard("Bridge_FreeHandle", || {
		Bridge::current()?.registry().free(handle);
		Some(())
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn Bridge_IsValidHandle(handle: HandleFFI) -> u8 {
	guard("Bridge_IsValidHandle", || Some(Bridge::current()?.registry().contains(handle) as u8))
}

/// Tag of a live handle, 0 when it does not resolve
#[unsafe(no_mangle)]
pub extern "C" fn Bridge_GetHandleTag(handle: HandleFFI) -> u32 {
	guard("Bridge_GetHandleTag", || Some(Bridge::current()?.registry().resolve(handle)?.tag.to_u32()))
}

#[unsafe(no_mangle)]
pub extern "C" fn Bridge_GetLiveHandleCount() -> u32 {
	guard("Bridge_GetLiveHandleCount", || Some(Bridge::current()?.registry().len() as u32))
}

fn install_class<C: NativeClass>(vtable: *const C) -> Result<()> {
	if vtable.is_null() {
		return Err(BridgeError::NullPointer);
	}
	let bridge = Bridge::current().ok_or(BridgeError::NotInstalled)?;
	// SAFETY: non-null, and the engine passes a pointer to an initialised vtable
	bridge.classes().install(unsafe { *vtable })
}

/// # Safety
/// `vtable` must be null or point to a fully initialised vtable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Bridge_InstallModelClass(vtable: *const ModelVTableFFI) -> i32 {
	status("Bridge_InstallModelClass", || install_class(vtable))
}

/// # Safety
/// `vtable` must be null or point to a fully initialised vtable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Bridge_InstallSceneObjectClass(vtable: *const SceneObjectVTableFFI) -> i32 {
	status("Bridge_InstallSceneObjectClass", || install_class(vtable))
}

/// # Safety
/// `vtable` must be null or point to a fully initialised vtable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Bridge_InstallTextureClass(vtable: *const TextureVTableFFI) -> i32 {
	status("Bridge_InstallTextureClass", || install_class(vtable))
}

/// # Safety
/// `buffer` must be empty or have been returned by an export of this bridge,
/// and must not be freed twice.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Bridge_FreeBuffer(buffer: BufferFFI) {
	guard("Bridge_FreeBuffer", || {
		// SAFETY: forwarded from the caller
		unsafe { release_buffer(buffer) };
		Some(())
	})
}

#[unsafe(no_mangle)]
pub extern "C" fn Bridge_GetExportCount() -> u32 {
	EXPORTS.len() as u32
}

/// Name of the export at `index`; empty past the end
#[unsafe(no_mangle)]
pub extern "C" fn Bridge_GetExportName(index: u32) -> BufferFFI {
	guard("Bridge_GetExportName", || {
		let export = EXPORTS.get(index as usize)?;
		Some(owned_buffer(export.name.as_bytes().to_vec()))
	})
}

/// Number of import slots still unset; 0 without a bridge
#[unsafe(no_mangle)]
pub extern "C" fn Bridge_GetMissingImportCount() -> u32 {
	guard("Bridge_GetMissingImportCount", || Some(Bridge::current()?.imports().missing().len() as u32))
}
