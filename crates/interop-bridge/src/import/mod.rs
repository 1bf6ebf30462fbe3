// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Import callback registry
//!
//! Function pointers the managed runtime hands to native code during startup.
//! Each slot gets a `StoreImport_<Namespace>_<Type>_<Event>` symbol for
//! registration and an `Invoke_<Namespace>_<Type>_<Event>` symbol the engine
//! calls to deliver the event. Invoking a slot that was never stored returns
//! the sentinel of its return shape; [`UnsetImportPolicy`] decides whether that
//! is also logged or fatal.
//!
//! Registration must happen before the engine starts the threads that invoke
//! the slots. The registry does not enforce that ordering.

mod slot;

use std::process::abort;

use interop_abi::{
	HandleFFI, KeyboardKeyFnFFI, MixBufferFnFFI, MouseMotionFnFFI, MouseWheelFnFFI, QueryQuitFnFFI,
	ReadbackCompleteFnFFI, ShutdownFnFFI, SocketConnectedFnFFI, SocketDisconnectedFnFFI, SocketMessageFnFFI,
	TextCharFnFFI, TickFnFFI, VrFrameFnFFI,
};
pub use slot::{ImportFn, ImportSlot};
use tracing::{error, warn};

use crate::{
	boundary::{Sentinel, guard},
	bridge::Bridge,
	config::UnsetImportPolicy,
};

macro_rules! define_imports {
	(
		$(
			$(#[$doc:meta])*
			$field:ident: $fn_ty:ty => $ns:ident $class:ident $event:ident ($($arg:ident: $arg_ty:ty),*) -> $ret:ty;
		)*
	) => {
		paste::paste! {
			#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
			pub enum ImportId {
				$( [<$ns $class $event>], )*
			}

			impl ImportId {
				pub const ALL: &'static [ImportId] = &[ $( ImportId::[<$ns $class $event>], )* ];

				/// `<Namespace>_<Type>_<Event>`
				pub const fn name(self) -> &'static str {
					match self {
						$(
							ImportId::[<$ns $class $event>] => concat!(
								stringify!($ns), "_", stringify!($class), "_", stringify!($event)
							),
						)*
					}
				}
			}

			/// Typed table of every import slot
			pub struct ImportTable {
				policy: UnsetImportPolicy,
				$( $field: ImportSlot<$fn_ty>, )*
			}

			impl ImportTable {
				pub fn new(policy: UnsetImportPolicy) -> Self {
					Self {
						policy,
						$( $field: ImportSlot::new(ImportId::[<$ns $class $event>]), )*
					}
				}

				pub fn is_set(&self, id: ImportId) -> bool {
					match id {
						$( ImportId::[<$ns $class $event>] => self.$field.is_set(), )*
					}
				}

				$(
					$(#[$doc])*
					pub fn $field(&self) -> &ImportSlot<$fn_ty> {
						&self.$field
					}

					pub fn [<invoke_ $field>](&self, $($arg: $arg_ty),*) -> $ret {
						match self.$field.get() {
							Some(callback) => callback($($arg),*),
							None => self.unset(ImportId::[<$ns $class $event>]),
						}
					}
				)*
			}

			/// Registration and invocation symbols
			#[allow(non_snake_case)]
			pub mod ffi {
				use super::*;

				$(
					#[unsafe(no_mangle)]
					pub extern "C" fn [<StoreImport_ $ns _ $class _ $event>](callback: Option<$fn_ty>) {
						store(ImportId::[<$ns $class $event>], |imports| {
							imports.$field().store(callback);
						});
					}

					#[unsafe(no_mangle)]
					pub extern "C" fn [<Invoke_ $ns _ $class _ $event>]($($arg: $arg_ty),*) -> $ret {
						invoke(ImportId::[<$ns $class $event>], |imports| imports.[<invoke_ $field>]($($arg),*))
					}
				)*
			}
		}
	};
}

define_imports! {
	keyboard_key: KeyboardKeyFnFFI => Input Keyboard Key (key: i32, pressed: u8) -> ();
	mouse_motion: MouseMotionFnFFI => Input Mouse Motion (dx: f32, dy: f32) -> ();
	mouse_wheel: MouseWheelFnFFI => Input Mouse Wheel (dx: f32, dy: f32) -> ();
	text_char: TextCharFnFFI => Input Text Char (codepoint: u32) -> ();

	socket_connected: SocketConnectedFnFFI => Network Socket Connected (socket: HandleFFI, connection: u32) -> ();
	socket_disconnected: SocketDisconnectedFnFFI => Network Socket Disconnected (
		socket: HandleFFI,
		connection: u32,
		reason: i32
	) -> ();
	/// Invoked from the network I/O thread
	socket_message: SocketMessageFnFFI => Network Socket Message (
		socket: HandleFFI,
		connection: u32,
		data: *const u8,
		len: usize
	) -> ();

	/// Invoked from the audio mixing thread
	mix_buffer: MixBufferFnFFI => Audio Mixer MixBuffer (samples: *mut f32, frames: u32, channels: u32) -> u32;

	/// Invoked from whichever thread finished the GPU readback
	readback_complete: ReadbackCompleteFnFFI => Render Texture ReadbackComplete (
		texture: HandleFFI,
		request: u64,
		data: *const u8,
		len: usize
	) -> ();

	vr_frame_begin: VrFrameFnFFI => Vr Frame Begin (frame: u64) -> ();
	vr_frame_end: VrFrameFnFFI => Vr Frame End (frame: u64) -> ();

	tick: TickFnFFI => Engine Lifecycle Tick (delta_seconds: f64) -> ();
	shutdown: ShutdownFnFFI => Engine Lifecycle Shutdown () -> ();
	query_quit: QueryQuitFnFFI => Engine Lifecycle QueryQuit () -> u8;
}

impl ImportTable {
	pub fn policy(&self) -> UnsetImportPolicy {
		self.policy
	}

	/// Slots that have not been stored yet
	pub fn missing(&self) -> Vec<ImportId> {
		ImportId::ALL.iter().copied().filter(|id| !self.is_set(*id)).collect()
	}

	fn unset<R: Sentinel>(&self, id: ImportId) -> R {
		match self.policy {
			UnsetImportPolicy::Ignore => {}
			UnsetImportPolicy::Warn => warn!(slot = id.name(), "unset import invoked"),
			UnsetImportPolicy::Abort => {
				error!(slot = id.name(), "unset import invoked - aborting");
				abort();
			}
		}
		R::sentinel()
	}
}

impl std::fmt::Display for ImportId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

fn store(id: ImportId, apply: impl FnOnce(&ImportTable)) {
	guard(id.name(), || {
		match Bridge::current() {
			Some(bridge) => apply(bridge.imports()),
			None => warn!(slot = id.name(), "import stored while no bridge is installed, ignored"),
		}
		Some(())
	})
}

fn invoke<R: Sentinel>(id: ImportId, call: impl FnOnce(&ImportTable) -> R) -> R {
	guard(id.name(), || {
		let bridge = Bridge::current()?;
		Some(call(bridge.imports()))
	})
}
