// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	marker::PhantomData,
	ptr::null_mut,
	sync::atomic::{AtomicPtr, Ordering},
};

use tracing::{debug, warn};

use super::ImportId;

/// A bare `extern "C"` function pointer type that fits in an import slot
///
/// # Safety
/// `from_raw` must only be called with a value produced by `into_raw` on the
/// same type.
pub unsafe trait ImportFn: Copy + Send + Sync + 'static {
	fn into_raw(self) -> *mut ();

	/// # Safety
	/// `raw` must come from [`ImportFn::into_raw`] of the same type.
	unsafe fn from_raw(raw: *mut ()) -> Self;
}

macro_rules! impl_import_fn {
	($($arg:ident),*) => {
		unsafe impl<R: 'static, $($arg: 'static),*> ImportFn for extern "C" fn($($arg),*) -> R {
			#[inline]
			fn into_raw(self) -> *mut () {
				self as *mut ()
			}

			#[inline]
			unsafe fn from_raw(raw: *mut ()) -> Self {
				// SAFETY: function pointers and data pointers have the same size on every
				// supported target, and `raw` was produced by `into_raw` for this type.
				unsafe { std::mem::transmute_copy::<*mut (), Self>(&raw) }
			}
		}
	};
}

impl_import_fn!();
impl_import_fn!(A);
impl_import_fn!(A, B);
impl_import_fn!(A, B, C);
impl_import_fn!(A, B, C, D);

/// A write-once-then-read-many function pointer cell
///
/// States: unset, then set. A store publishes the pointer with release
/// ordering and loads use acquire, so a callback stored before the engine
/// starts its worker threads is visible to all of them. Storing again
/// overwrites the pointer (last writer wins). There is no way back to unset.
pub struct ImportSlot<F: ImportFn> {
	id: ImportId,
	raw: AtomicPtr<()>,
	_marker: PhantomData<F>,
}

impl<F: ImportFn> ImportSlot<F> {
	pub const fn new(id: ImportId) -> Self {
		Self {
			id,
			raw: AtomicPtr::new(null_mut()),
			_marker: PhantomData,
		}
	}

	pub fn id(&self) -> ImportId {
		self.id
	}

	/// Store a callback; `None` (a null pointer from C) is ignored and returns false
	pub fn store(&self, callback: Option<F>) -> bool {
		let Some(callback) = callback else {
			warn!(slot = self.id.name(), "null import ignored, slot keeps its current value");
			return false;
		};

		let previous = self.raw.swap(callback.into_raw(), Ordering::AcqRel);
		if previous.is_null() {
			debug!(slot = self.id.name(), "import stored");
		} else {
			debug!(slot = self.id.name(), "import overwritten, last writer wins");
		}
		true
	}

	pub fn get(&self) -> Option<F> {
		let raw = self.raw.load(Ordering::Acquire);
		if raw.is_null() {
			None
		} else {
			// SAFETY: only `store` writes non-null values, always from an `F`
			Some(unsafe { F::from_raw(raw) })
		}
	}

	pub fn is_set(&self) -> bool {
		!self.raw.load(Ordering::Acquire).is_null()
	}
}
