// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bridge installation and teardown through the C entry points

use std::{
	sync::{
		Arc, Barrier,
		atomic::{AtomicU32, AtomicUsize, Ordering},
	},
	thread,
};

use interop_abi::{
	ABI_VERSION, FFI_ERROR_ALREADY_INSTALLED, FFI_ERROR_INVALID_CONFIG, FFI_ERROR_NOT_INSTALLED, FFI_OK, HandleFFI,
	TypeTag,
};
use interop_bridge::{
	Bridge, UnsetImportPolicy,
	config::DEFAULT_HANDLE_CAPACITY,
	export::{
		bridge::{
			Bridge_FreeBuffer, Bridge_GetLiveHandleCount, Bridge_GetVersion, Bridge_Initialize, Bridge_IsValidHandle,
			Bridge_Shutdown,
		},
		model::{CModel_GetBoneCount, CModel_GetName},
	},
	import::ffi::StoreImport_Engine_Lifecycle_Shutdown,
};
use interop_testing::{MockEngine, MockModel, exclusive};

fn initialize(config: &str) -> i32 {
	unsafe { Bridge_Initialize(config.as_ptr(), config.len()) }
}

fn name_of(handle: HandleFFI) -> Vec<u8> {
	let name = CModel_GetName(handle);
	let bytes = unsafe { name.as_slice() }.to_vec();
	unsafe { Bridge_FreeBuffer(name) };
	bytes
}

#[test]
fn test_version() {
	assert_eq!(Bridge_GetVersion(), ABI_VERSION);
}

#[test]
fn test_initialize_with_defaults() {
	exclusive(|| {
		assert_eq!(unsafe { Bridge_Initialize(std::ptr::null(), 0) }, FFI_OK);

		let bridge = Bridge::current().unwrap();
		assert_eq!(bridge.registry().capacity(), DEFAULT_HANDLE_CAPACITY);
		assert_eq!(bridge.imports().policy(), UnsetImportPolicy::Ignore);
	});
}

#[test]
fn test_initialize_twice() {
	exclusive(|| {
		assert_eq!(initialize("{}"), FFI_OK);
		assert_eq!(initialize("{}"), FFI_ERROR_ALREADY_INSTALLED);
	});
}

#[test]
fn test_initialize_with_config() {
	exclusive(|| {
		let config = r#"{"handle_capacity": 16, "unset_import": "warn", "log": {"filter": "debug"}}"#;
		assert_eq!(initialize(config), FFI_OK);

		let bridge = Bridge::current().unwrap();
		assert_eq!(bridge.registry().capacity(), 16);
		assert_eq!(bridge.imports().policy(), UnsetImportPolicy::Warn);
		assert_eq!(bridge.config().log.filter, "debug");
	});
}

#[test]
fn test_initialize_rejects_invalid_config() {
	exclusive(|| {
		assert_eq!(initialize("{ not json"), FFI_ERROR_INVALID_CONFIG);
		assert_eq!(initialize(r#"{"handle_capacity": 0}"#), FFI_ERROR_INVALID_CONFIG);
		assert_eq!(initialize(r#"{"unset_import": "explode"}"#), FFI_ERROR_INVALID_CONFIG);
		assert!(Bridge::current().is_none());
	});
}

#[test]
fn test_shutdown_without_bridge() {
	exclusive(|| {
		assert_eq!(Bridge_Shutdown(), FFI_ERROR_NOT_INSTALLED);
	});
}

static SHUTDOWNS: AtomicUsize = AtomicUsize::new(0);
static LIVE_AT_SHUTDOWN: AtomicU32 = AtomicU32::new(u32::MAX);

extern "C" fn on_shutdown() {
	LIVE_AT_SHUTDOWN.store(Bridge_GetLiveHandleCount(), Ordering::SeqCst);
	SHUTDOWNS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn test_shutdown_notifies_then_tears_down() {
	exclusive(|| {
		assert_eq!(initialize("{}"), FFI_OK);
		StoreImport_Engine_Lifecycle_Shutdown(Some(on_shutdown));
		MockEngine::install_classes(&Bridge::current().unwrap()).unwrap();

		let model = MockModel::new("citizen");
		let handle = MockEngine::register(&model);
		assert_eq!(Bridge_IsValidHandle(handle), 1);

		let bridge = Bridge::current().unwrap();
		assert_eq!(Bridge_Shutdown(), FFI_OK);
		assert_eq!(SHUTDOWNS.load(Ordering::SeqCst), 1);
		// handles are still live while the managed side is notified
		assert_eq!(LIVE_AT_SHUTDOWN.load(Ordering::SeqCst), 1);

		assert!(Bridge::current().is_none());
		assert!(bridge.registry().is_empty());
		assert_eq!(Bridge_IsValidHandle(handle), 0);
		assert_eq!(CModel_GetBoneCount(handle), 0);
		assert_eq!(model.calls(), 0);

		StoreImport_Engine_Lifecycle_Shutdown(None);
		assert_eq!(Bridge_Shutdown(), FFI_ERROR_NOT_INSTALLED);
		assert_eq!(SHUTDOWNS.load(Ordering::SeqCst), 1);
	});
}

#[test]
fn test_reinstall_after_shutdown_starts_clean() {
	exclusive(|| {
		assert_eq!(initialize("{}"), FFI_OK);
		let model = MockModel::new("citizen");
		let before = MockEngine::register(&model);
		assert_eq!(Bridge_Shutdown(), FFI_OK);

		assert_eq!(initialize("{}"), FFI_OK);
		let bridge = Bridge::current().unwrap();
		assert!(!bridge.classes().is_installed(TypeTag::Model));
		assert!(bridge.imports().missing().len() > 0);
		assert_eq!(Bridge_IsValidHandle(before), 0);
		assert_eq!(Bridge_GetLiveHandleCount(), 0);
	});
}

#[test]
fn test_handle_from_previous_bridge_stays_dead() {
	exclusive(|| {
		assert_eq!(initialize("{}"), FFI_OK);
		MockEngine::install_classes(&Bridge::current().unwrap()).unwrap();
		let alpha = MockModel::new("alpha");
		let old = MockEngine::register(&alpha);
		assert_eq!(Bridge_Shutdown(), FFI_OK);

		assert_eq!(initialize("{}"), FFI_OK);
		MockEngine::install_classes(&Bridge::current().unwrap()).unwrap();
		// first registration of the new bridge lands in the same slot
		let beta = MockModel::new("beta");
		let new = MockEngine::register(&beta);

		assert_ne!(new, old);
		assert_eq!(Bridge_IsValidHandle(old), 0);
		assert!(CModel_GetName(old).is_empty());
		assert_eq!(CModel_GetBoneCount(old), 0);
		assert_eq!(beta.calls(), 0);
		assert_eq!(name_of(new), b"beta");
	});
}

static RACED_SHUTDOWNS: AtomicUsize = AtomicUsize::new(0);

extern "C" fn on_raced_shutdown() {
	RACED_SHUTDOWNS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn test_concurrent_shutdown_tears_down_once() {
	exclusive(|| {
		assert_eq!(initialize("{}"), FFI_OK);
		StoreImport_Engine_Lifecycle_Shutdown(Some(on_raced_shutdown));

		let barrier = Arc::new(Barrier::new(8));
		let callers: Vec<_> = (0..8)
			.map(|_| {
				let barrier = Arc::clone(&barrier);
				thread::spawn(move || {
					barrier.wait();
					Bridge_Shutdown()
				})
			})
			.collect();
		let results: Vec<i32> = callers.into_iter().map(|caller| caller.join().unwrap()).collect();

		assert_eq!(results.iter().filter(|code| **code == FFI_OK).count(), 1);
		assert!(results.iter().all(|code| *code == FFI_OK || *code == FFI_ERROR_NOT_INSTALLED));
		assert_eq!(RACED_SHUTDOWNS.load(Ordering::SeqCst), 1);
		assert!(Bridge::current().is_none());
	});
}

#[test]
fn test_shutdown_leaves_newer_bridge_installed() {
	exclusive(|| {
		assert_eq!(initialize("{}"), FFI_OK);
		let stale = Bridge::current().unwrap();
		assert_eq!(Bridge_Shutdown(), FFI_OK);

		assert_eq!(initialize("{}"), FFI_OK);
		let model = MockModel::new("citizen");
		let handle = MockEngine::register(&model);
		drop(stale);

		assert_eq!(Bridge_IsValidHandle(handle), 1);
		assert_eq!(Bridge_Shutdown(), FFI_OK);
		assert_eq!(Bridge_Shutdown(), FFI_ERROR_NOT_INSTALLED);
	});
}
