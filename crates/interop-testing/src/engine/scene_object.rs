// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	ffi::c_void,
	sync::atomic::{AtomicU8, Ordering},
};

use interop_abi::{SceneObjectVTableFFI, TransformFFI};
use parking_lot::Mutex;

pub struct MockSceneObject {
	/// Address of the model this object renders, null for none
	model: usize,
	transform: Mutex<TransformFFI>,
	/// Last raw value the bridge passed to `set_visible`
	visible: AtomicU8,
}

impl MockSceneObject {
	pub fn new(model: *mut c_void) -> Self {
		Self {
			model: model as usize,
			transform: Mutex::new(TransformFFI::IDENTITY),
			visible: AtomicU8::new(1),
		}
	}

	pub fn without_model() -> Self {
		Self::new(std::ptr::null_mut())
	}

	pub fn transform(&self) -> TransformFFI {
		*self.transform.lock()
	}

	pub fn is_visible(&self) -> bool {
		self.visible() != 0
	}

	pub fn visible(&self) -> u8 {
		self.visible.load(Ordering::SeqCst)
	}

	/// Engines may report any non-zero value as visible
	pub fn set_visible_raw(&self, visible: u8) {
		self.visible.store(visible, Ordering::SeqCst);
	}

	/// # Safety
	/// `instance` must point to a live `MockSceneObject`.
	unsafe fn from_instance<'a>(instance: *mut c_void) -> &'a MockSceneObject {
		unsafe { &*(instance as *const MockSceneObject) }
	}
}

extern "C" fn get_model(instance: *mut c_void) -> *mut c_void {
	unsafe { MockSceneObject::from_instance(instance) }.model as *mut c_void
}

extern "C" fn get_transform(instance: *mut c_void) -> TransformFFI {
	unsafe { MockSceneObject::from_instance(instance) }.transform()
}

extern "C" fn set_transform(instance: *mut c_void, transform: TransformFFI) {
	*unsafe { MockSceneObject::from_instance(instance) }.transform.lock() = transform;
}

extern "C" fn is_visible(instance: *mut c_void) -> u8 {
	unsafe { MockSceneObject::from_instance(instance) }.visible()
}

extern "C" fn set_visible(instance: *mut c_void, visible: u8) {
	unsafe { MockSceneObject::from_instance(instance) }.visible.store(visible, Ordering::SeqCst);
}

pub(super) const VTABLE: SceneObjectVTableFFI = SceneObjectVTableFFI {
	get_model,
	get_transform,
	set_transform,
	is_visible,
	set_visible,
};
