// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ffi::c_void, ptr::copy_nonoverlapping};

use crossbeam_channel::Sender;
use interop_abi::{FFI_OK, HandleFFI, TextureVTableFFI};
use parking_lot::Mutex;

use super::readback::{Job, ReadbackWorker};

pub struct MockTexture {
	width: i32,
	height: i32,
	pixels: Vec<u8>,
	readback: Mutex<Option<Sender<Job>>>,
}

impl MockTexture {
	/// RGBA8 texture filled with `fill`
	pub fn new(width: i32, height: i32, fill: u8) -> Self {
		let len = width.max(0) as usize * height.max(0) as usize * 4;
		Self::with_pixels(width, height, vec![fill; len])
	}

	pub fn with_pixels(width: i32, height: i32, pixels: Vec<u8>) -> Self {
		Self {
			width,
			height,
			pixels,
			readback: Mutex::new(None),
		}
	}

	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Route readback requests to `worker`; without one they are rejected
	pub fn attach(&self, worker: &ReadbackWorker) {
		*self.readback.lock() = Some(worker.sender());
	}

	/// # Safety
	/// `instance` must point to a live `MockTexture`.
	unsafe fn from_instance<'a>(instance: *mut c_void) -> &'a MockTexture {
		unsafe { &*(instance as *const MockTexture) }
	}
}

extern "C" fn get_width(instance: *mut c_void) -> i32 {
	unsafe { MockTexture::from_instance(instance) }.width
}

extern "C" fn get_height(instance: *mut c_void) -> i32 {
	unsafe { MockTexture::from_instance(instance) }.height
}

extern "C" fn get_memory_size(instance: *mut c_void) -> u64 {
	unsafe { MockTexture::from_instance(instance) }.pixels.len() as u64
}

extern "C" fn copy_pixels(instance: *mut c_void, dst: *mut u8, dst_len: usize) -> usize {
	let texture = unsafe { MockTexture::from_instance(instance) };
	let len = texture.pixels.len().min(dst_len);
	unsafe { copy_nonoverlapping(texture.pixels.as_ptr(), dst, len) };
	len
}

extern "C" fn request_readback(instance: *mut c_void, texture: HandleFFI, request_id: u64) -> i32 {
	let mock = unsafe { MockTexture::from_instance(instance) };
	let Some(sender) = mock.readback.lock().clone() else {
		return 1;
	};
	let job = Job::Readback {
		texture,
		request: request_id,
		pixels: mock.pixels.clone(),
	};
	match sender.send(job) {
		Ok(()) => FFI_OK,
		Err(_) => 1,
	}
}

pub(super) const VTABLE: TextureVTableFFI = TextureVTableFFI {
	get_width,
	get_height,
	get_memory_size,
	copy_pixels,
	request_readback,
};
