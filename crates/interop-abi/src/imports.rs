// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Signatures of the callbacks the managed runtime supplies to native code
//!
//! Each signature is registered through `StoreImport_<Namespace>_<Type>_<Event>`
//! and invoked by the engine through `Invoke_<Namespace>_<Type>_<Event>`.
//! Callbacks may be invoked from any engine thread (game, render, audio mixer,
//! network I/O); implementations must not assume same-thread delivery.

use crate::handle::HandleFFI;

/// Key state change. `pressed` is 1 on press, 0 on release.
pub type KeyboardKeyFnFFI = extern "C" fn(key: i32, pressed: u8);

/// Relative mouse motion since the previous event
pub type MouseMotionFnFFI = extern "C" fn(dx: f32, dy: f32);

pub type MouseWheelFnFFI = extern "C" fn(dx: f32, dy: f32);

/// Unicode scalar typed by the user
pub type TextCharFnFFI = extern "C" fn(codepoint: u32);

pub type SocketConnectedFnFFI = extern "C" fn(socket: HandleFFI, connection: u32);

pub type SocketDisconnectedFnFFI = extern "C" fn(socket: HandleFFI, connection: u32, reason: i32);

/// Message received on a connection. `data` is only valid during the call.
pub type SocketMessageFnFFI = extern "C" fn(socket: HandleFFI, connection: u32, data: *const u8, len: usize);

/// Fill an interleaved sample buffer of `frames * channels` floats
///
/// Called on the audio mixing thread. Returns the number of frames written.
pub type MixBufferFnFFI = extern "C" fn(samples: *mut f32, frames: u32, channels: u32) -> u32;

/// GPU readback finished. `data` is only valid during the call.
pub type ReadbackCompleteFnFFI = extern "C" fn(texture: HandleFFI, request: u64, data: *const u8, len: usize);

pub type VrFrameFnFFI = extern "C" fn(frame: u64);

pub type TickFnFFI = extern "C" fn(delta_seconds: f64);

pub type ShutdownFnFFI = extern "C" fn();

/// Ask the managed side whether the engine may quit. 1 means yes.
pub type QueryQuitFnFFI = extern "C" fn() -> u8;
