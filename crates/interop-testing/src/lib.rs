// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test support for the interop bridge
//!
//! [`engine`] is a small in-process stand-in for the native engine: plain Rust
//! objects exposed through real `extern "C"` vtables, plus a readback worker
//! that completes GPU readbacks from its own thread. [`harness`] serializes
//! tests that touch the process-wide bridge.

pub mod engine;
pub mod harness;

pub use engine::{MockEngine, MockModel, MockObject, MockSceneObject, MockTexture, ReadbackWorker};
pub use harness::{exclusive, with_bridge, with_default_bridge};
