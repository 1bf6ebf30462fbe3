// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Import slots driven through the `StoreImport_*` and `Invoke_*` symbols

use std::{
	slice::from_raw_parts,
	sync::atomic::{AtomicU32, AtomicU64, Ordering},
	thread,
};

use interop_abi::{HandleFFI, TypeTag};
use interop_bridge::{
	Bridge, ImportId,
	export::{bridge::Bridge_GetMissingImportCount, texture::CTexture_RequestReadback},
	import::ffi::{
		Invoke_Audio_Mixer_MixBuffer, Invoke_Engine_Lifecycle_QueryQuit, Invoke_Engine_Lifecycle_Tick,
		Invoke_Input_Keyboard_Key, Invoke_Network_Socket_Message, Invoke_Render_Texture_ReadbackComplete,
		StoreImport_Engine_Lifecycle_QueryQuit, StoreImport_Engine_Lifecycle_Tick, StoreImport_Input_Keyboard_Key,
		StoreImport_Network_Socket_Message, StoreImport_Render_Texture_ReadbackComplete,
	},
};
use interop_testing::{MockEngine, MockTexture, ReadbackWorker, exclusive, with_default_bridge};
use parking_lot::Mutex;

static LAST_KEY: AtomicU32 = AtomicU32::new(0);

extern "C" fn on_key(key: i32, pressed: u8) {
	LAST_KEY.store(((key as u32) << 8) | pressed as u32, Ordering::SeqCst);
}

#[test]
fn test_store_then_invoke() {
	with_default_bridge(|bridge| {
		assert!(!bridge.imports().is_set(ImportId::InputKeyboardKey));
		StoreImport_Input_Keyboard_Key(Some(on_key));
		assert!(bridge.imports().is_set(ImportId::InputKeyboardKey));

		Invoke_Input_Keyboard_Key(65, 1);
		assert_eq!(LAST_KEY.load(Ordering::SeqCst), (65 << 8) | 1);
	});
}

extern "C" fn never_quit() -> u8 {
	0
}

extern "C" fn always_quit() -> u8 {
	1
}

#[test]
fn test_last_writer_wins() {
	with_default_bridge(|_| {
		StoreImport_Engine_Lifecycle_QueryQuit(Some(never_quit));
		StoreImport_Engine_Lifecycle_QueryQuit(Some(always_quit));
		assert_eq!(Invoke_Engine_Lifecycle_QueryQuit(), 1);
	});
}

#[test]
fn test_null_store_keeps_previous_callback() {
	with_default_bridge(|_| {
		StoreImport_Engine_Lifecycle_QueryQuit(Some(always_quit));
		StoreImport_Engine_Lifecycle_QueryQuit(None);
		assert_eq!(Invoke_Engine_Lifecycle_QueryQuit(), 1);
	});
}

#[test]
fn test_unset_slots_return_sentinels() {
	with_default_bridge(|_| {
		assert_eq!(Invoke_Engine_Lifecycle_QueryQuit(), 0);

		let mut samples = vec![0.25f32; 64];
		assert_eq!(Invoke_Audio_Mixer_MixBuffer(samples.as_mut_ptr(), 32, 2), 0);
		assert!(samples.iter().all(|s| *s == 0.25));

		Invoke_Engine_Lifecycle_Tick(0.016);
	});
}

#[test]
fn test_store_before_install_is_ignored() {
	exclusive(|| {
		StoreImport_Engine_Lifecycle_QueryQuit(Some(always_quit));
		assert_eq!(Invoke_Engine_Lifecycle_QueryQuit(), 0);

		let bridge = Bridge::builder().build().unwrap().install().unwrap();
		assert!(!bridge.imports().is_set(ImportId::EngineLifecycleQueryQuit));
		assert_eq!(Invoke_Engine_Lifecycle_QueryQuit(), 0);
	});
}

static TICKS: AtomicU64 = AtomicU64::new(0);

extern "C" fn on_tick(delta_seconds: f64) {
	TICKS.fetch_add((delta_seconds * 1000.0) as u64, Ordering::SeqCst);
}

#[test]
fn test_missing_import_count() {
	with_default_bridge(|bridge| {
		let all = ImportId::ALL.len() as u32;
		assert_eq!(Bridge_GetMissingImportCount(), all);

		StoreImport_Engine_Lifecycle_Tick(Some(on_tick));
		StoreImport_Input_Keyboard_Key(Some(on_key));
		assert_eq!(Bridge_GetMissingImportCount(), all - 2);

		let missing = bridge.imports().missing();
		assert!(!missing.contains(&ImportId::EngineLifecycleTick));
		assert!(missing.contains(&ImportId::EngineLifecycleShutdown));
	});

	exclusive(|| assert_eq!(Bridge_GetMissingImportCount(), 0));
}

#[test]
fn test_invoke_after_uninstall_is_sentinel() {
	with_default_bridge(|_| {
		StoreImport_Engine_Lifecycle_Tick(Some(on_tick));
		Invoke_Engine_Lifecycle_Tick(0.5);
		assert_eq!(TICKS.load(Ordering::SeqCst), 500);

		StoreImport_Engine_Lifecycle_QueryQuit(Some(always_quit));
		Bridge::uninstall();
		assert_eq!(Invoke_Engine_Lifecycle_QueryQuit(), 0);
		Invoke_Engine_Lifecycle_Tick(0.5);
		assert_eq!(TICKS.load(Ordering::SeqCst), 500);
	});
}

static MESSAGES: Mutex<Vec<(u64, u32, Vec<u8>)>> = Mutex::new(Vec::new());

extern "C" fn on_message(socket: HandleFFI, connection: u32, data: *const u8, len: usize) {
	let bytes = unsafe { from_raw_parts(data, len) }.to_vec();
	MESSAGES.lock().push((socket.raw(), connection, bytes));
}

#[test]
fn test_socket_messages_from_io_threads() {
	with_default_bridge(|bridge| {
		StoreImport_Network_Socket_Message(Some(on_message));
		let socket = bridge.registry().register(0x5000 as *mut _, TypeTag::Socket).unwrap();

		let threads: Vec<_> = (0..4u32)
			.map(|connection| {
				thread::spawn(move || {
					let payload = format!("hello from {connection}");
					Invoke_Network_Socket_Message(socket, connection, payload.as_ptr(), payload.len());
				})
			})
			.collect();
		for thread in threads {
			thread.join().unwrap();
		}

		let mut messages = MESSAGES.lock().clone();
		messages.sort_by_key(|(_, connection, _)| *connection);
		assert_eq!(messages.len(), 4);
		for (connection, (raw, actual, bytes)) in messages.into_iter().enumerate() {
			assert_eq!(raw, socket.raw());
			assert_eq!(actual, connection as u32);
			assert_eq!(bytes, format!("hello from {connection}").into_bytes());
		}
	});
}

struct Readback {
	texture: u64,
	request: u64,
	pixels: Vec<u8>,
	thread: Option<String>,
}

static READBACKS: Mutex<Vec<Readback>> = Mutex::new(Vec::new());

extern "C" fn on_readback(texture: HandleFFI, request: u64, data: *const u8, len: usize) {
	READBACKS.lock().push(Readback {
		texture: texture.raw(),
		request,
		pixels: unsafe { from_raw_parts(data, len) }.to_vec(),
		thread: thread::current().name().map(str::to_string),
	});
}

#[test]
fn test_readback_completes_on_worker_thread() {
	with_default_bridge(|bridge| {
		MockEngine::install_classes(bridge).unwrap();
		StoreImport_Render_Texture_ReadbackComplete(Some(on_readback));

		let worker = ReadbackWorker::spawn();
		let texture = MockTexture::new(2, 2, 0x7F);
		texture.attach(&worker);
		let handle = MockEngine::register(&texture);

		assert_eq!(CTexture_RequestReadback(handle, 41), 1);
		assert_eq!(CTexture_RequestReadback(handle, 42), 1);
		drop(worker);

		let readbacks = READBACKS.lock();
		assert_eq!(readbacks.len(), 2);
		assert_eq!(readbacks.iter().map(|r| r.request).collect::<Vec<_>>(), vec![41, 42]);
		for readback in readbacks.iter() {
			assert_eq!(readback.texture, handle.raw());
			assert_eq!(readback.pixels, texture.pixels());
			assert_eq!(readback.thread.as_deref(), Some("mock-readback"));
		}
	});
}

#[test]
fn test_readback_invoke_without_callback() {
	with_default_bridge(|_| {
		let pixels = [1u8, 2, 3];
		Invoke_Render_Texture_ReadbackComplete(HandleFFI::NULL, 7, pixels.as_ptr(), pixels.len());
	});
}
