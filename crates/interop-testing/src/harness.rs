// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The bridge is process-wide, so tests that install one must not overlap.
//! Every helper here holds one global lock for the duration of the test body.

use std::sync::Arc;

use interop_bridge::{Bridge, BridgeBuilder, LogConfig, logging};
use parking_lot::Mutex;

static BRIDGE_LOCK: Mutex<()> = Mutex::new(());

struct Uninstall;

impl Drop for Uninstall {
	fn drop(&mut self) {
		Bridge::uninstall();
	}
}

fn init_logging() {
	let _ = logging::init(&LogConfig {
		filter: "debug".to_string(),
		json: false,
	});
}

/// Run `f` with no bridge installed and exclusive access to the global slot
///
/// Anything `f` installs is uninstalled afterwards, even if it panics.
pub fn exclusive<T>(f: impl FnOnce() -> T) -> T {
	let _lock = BRIDGE_LOCK.lock();
	init_logging();
	Bridge::uninstall();
	let _uninstall = Uninstall;
	f()
}

/// Install a bridge built from `builder` for the duration of `f`
pub fn with_bridge<T>(builder: BridgeBuilder, f: impl FnOnce(&Arc<Bridge>) -> T) -> T {
	exclusive(|| {
		let bridge = builder.build().expect("bridge config is valid").install().expect("no bridge is installed");
		f(&bridge)
	})
}

pub fn with_default_bridge<T>(f: impl FnOnce(&Arc<Bridge>) -> T) -> T {
	with_bridge(BridgeBuilder::new(), f)
}
