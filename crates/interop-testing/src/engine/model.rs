// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	ffi::c_void,
	ptr::null,
	sync::atomic::{AtomicUsize, Ordering},
};

use interop_abi::{BBoxFFI, FFI_OK, ModelVTableFFI, TransformFFI};
use parking_lot::Mutex;

use super::{MockObject, scene_object::MockSceneObject};

pub struct MockModel {
	name: String,
	bones: Vec<TransformFFI>,
	bounds: BBoxFFI,
	mass: f64,
	/// Scene objects spawned from this model; boxed so their addresses stay put
	spawned: Mutex<Vec<Box<MockSceneObject>>>,
	calls: AtomicUsize,
}

impl MockModel {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			bones: Vec::new(),
			bounds: BBoxFFI::empty(),
			mass: 0.0,
			spawned: Mutex::new(Vec::new()),
			calls: AtomicUsize::new(0),
		}
	}

	pub fn with_bones(mut self, bones: Vec<TransformFFI>) -> Self {
		self.bones = bones;
		self
	}

	pub fn with_bounds(mut self, bounds: BBoxFFI) -> Self {
		self.bounds = bounds;
		self
	}

	pub fn with_mass(mut self, mass: f64) -> Self {
		self.mass = mass;
		self
	}

	/// Number of vtable calls that reached this model
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn spawned(&self) -> usize {
		self.spawned.lock().len()
	}

	/// # Safety
	/// `instance` must point to a live `MockModel`.
	unsafe fn from_instance<'a>(instance: *mut c_void) -> &'a MockModel {
		let model = unsafe { &*(instance as *const MockModel) };
		model.calls.fetch_add(1, Ordering::SeqCst);
		model
	}
}

extern "C" fn get_name(instance: *mut c_void, len_out: *mut usize) -> *const u8 {
	let model = unsafe { MockModel::from_instance(instance) };
	if model.name.is_empty() || len_out.is_null() {
		return null();
	}
	unsafe { *len_out = model.name.len() };
	model.name.as_ptr()
}

extern "C" fn get_bone_count(instance: *mut c_void) -> i32 {
	let model = unsafe { MockModel::from_instance(instance) };
	model.bones.len() as i32
}

extern "C" fn get_bone_transform(instance: *mut c_void, bone: i32, output: *mut TransformFFI) -> i32 {
	let model = unsafe { MockModel::from_instance(instance) };
	match usize::try_from(bone).ok().and_then(|bone| model.bones.get(bone)) {
		Some(transform) if !output.is_null() => {
			unsafe { *output = *transform };
			FFI_OK
		}
		_ => 1,
	}
}

extern "C" fn get_bounds(instance: *mut c_void) -> BBoxFFI {
	unsafe { MockModel::from_instance(instance) }.bounds
}

extern "C" fn get_mass(instance: *mut c_void) -> f64 {
	unsafe { MockModel::from_instance(instance) }.mass
}

extern "C" fn create_scene_object(instance: *mut c_void) -> *mut c_void {
	let model = unsafe { MockModel::from_instance(instance) };
	let object = Box::new(MockSceneObject::new(instance));
	let ptr = object.as_ptr();
	model.spawned.lock().push(object);
	ptr
}

pub(super) const VTABLE: ModelVTableFFI = ModelVTableFFI {
	get_name,
	get_bone_count,
	get_bone_transform,
	get_bounds,
	get_mass,
	create_scene_object,
};
