// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The C boundary: sentinels and the unwind guard
//!
//! Nothing may unwind across an `extern "C"` entry point. Every exported
//! function runs its body through [`guard`], which turns both "nothing to
//! return" and a caught panic into the return shape's sentinel.

use std::{
	any::Any,
	panic::{AssertUnwindSafe, catch_unwind},
};

use interop_abi::{BBoxFFI, BufferFFI, FFI_ERROR_INTERNAL, FFI_OK, HandleFFI, TransformFFI};
use tracing::{error, warn};

use crate::error::Result;

/// The "empty" value of a return shape
pub trait Sentinel {
	fn sentinel() -> Self;
}

macro_rules! zero_sentinel {
	($($ty:ty),*) => {
		$(
			impl Sentinel for $ty {
				#[inline]
				fn sentinel() -> Self {
					0 as $ty
				}
			}
		)*
	};
}

zero_sentinel!(u8, i32, u32, i64, u64, usize, f32, f64);

impl Sentinel for () {
	#[inline]
	fn sentinel() -> Self {}
}

impl Sentinel for HandleFFI {
	#[inline]
	fn sentinel() -> Self {
		HandleFFI::NULL
	}
}

impl Sentinel for TransformFFI {
	#[inline]
	fn sentinel() -> Self {
		TransformFFI::empty()
	}
}

impl Sentinel for BBoxFFI {
	#[inline]
	fn sentinel() -> Self {
		BBoxFFI::empty()
	}
}

impl Sentinel for BufferFFI {
	#[inline]
	fn sentinel() -> Self {
		BufferFFI::empty()
	}
}

/// Run the body of an exported function
///
/// `None` from the body and any panic both produce `R::sentinel()`.
pub(crate) fn guard<R, F>(symbol: &'static str, body: F) -> R
where
	R: Sentinel,
	F: FnOnce() -> Option<R>,
{
	match catch_unwind(AssertUnwindSafe(body)) {
		Ok(Some(value)) => value,
		Ok(None) => R::sentinel(),
		Err(panic) => {
			error!(symbol, "panic caught at the export boundary: {}", panic_message(&panic));
			R::sentinel()
		}
	}
}

/// Run the body of an exported function that reports a status code
///
/// `Ok` maps to `FFI_OK`, errors to their negative code, and a panic to
/// `FFI_ERROR_INTERNAL`.
pub(crate) fn status<F>(symbol: &'static str, body: F) -> i32
where
	F: FnOnce() -> Result<()>,
{
	match catch_unwind(AssertUnwindSafe(body)) {
		Ok(Ok(())) => FFI_OK,
		Ok(Err(err)) => {
			warn!(symbol, %err, "export failed");
			err.code()
		}
		Err(panic) => {
			error!(symbol, "panic caught at the export boundary: {}", panic_message(&panic));
			FFI_ERROR_INTERNAL
		}
	}
}

pub(crate) fn panic_message(panic: &Box<dyn Any + Send>) -> String {
	if let Some(s) = panic.downcast_ref::<&str>() {
		s.to_string()
	} else if let Some(s) = panic.downcast_ref::<String>() {
		s.clone()
	} else {
		"Unknown panic".to_string()
	}
}
