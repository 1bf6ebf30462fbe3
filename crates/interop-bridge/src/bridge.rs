// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The process-wide bridge
//!
//! Startup order, enforced by the embedder:
//!
//! 1. `Bridge_Initialize` (or [`Bridge::install`] from Rust)
//! 2. `StoreImport_*` for every slot
//! 3. `Bridge_Install*Class` and object registration by the engine
//! 4. the engine's main loop
//!
//! `Bridge_Shutdown` reverses it: the shutdown import fires, every handle is
//! freed, and the bridge is uninstalled. Exports called outside that window
//! return their sentinel.

use std::sync::{
	Arc,
	atomic::{AtomicBool, AtomicU32, Ordering},
};

use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::{
	class::NativeClasses,
	config::{BridgeBuilder, BridgeConfig},
	error::{BridgeError, Result},
	import::ImportTable,
	registry::HandleRegistry,
};

static CURRENT: RwLock<Option<Arc<Bridge>>> = RwLock::new(None);

/// Highest handle generation issued by any bridge in this process
static ISSUED_GENERATION: AtomicU32 = AtomicU32::new(0);

pub struct Bridge {
	config: BridgeConfig,
	registry: HandleRegistry,
	classes: NativeClasses,
	imports: ImportTable,
	shutting_down: AtomicBool,
}

impl Bridge {
	pub fn new(config: BridgeConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			registry: HandleRegistry::with_generation_floor(config.handle_capacity, &ISSUED_GENERATION),
			classes: NativeClasses::new(),
			imports: ImportTable::new(config.unset_import),
			shutting_down: AtomicBool::new(false),
			config,
		})
	}

	pub fn builder() -> BridgeBuilder {
		BridgeBuilder::new()
	}

	pub fn config(&self) -> &BridgeConfig {
		&self.config
	}

	pub fn registry(&self) -> &HandleRegistry {
		&self.registry
	}

	pub fn classes(&self) -> &NativeClasses {
		&self.classes
	}

	pub fn imports(&self) -> &ImportTable {
		&self.imports
	}

	/// Make this bridge the one every exported symbol talks to
	#[instrument(name = "bridge::install", level = "debug", skip_all)]
	pub fn install(self) -> Result<Arc<Bridge>> {
		let mut current = CURRENT.write();
		if current.is_some() {
			return Err(BridgeError::AlreadyInstalled);
		}
		let bridge = Arc::new(self);
		*current = Some(Arc::clone(&bridge));
		debug!(capacity = bridge.config.handle_capacity, "bridge installed");
		Ok(bridge)
	}

	/// The installed bridge
	///
	/// Callers hold the returned `Arc` for the duration of one call, so an
	/// uninstall racing the call cannot drop the bridge underneath it.
	pub fn current() -> Option<Arc<Bridge>> {
		CURRENT.read().clone()
	}

	#[instrument(name = "bridge::uninstall", level = "debug")]
	pub fn uninstall() -> Option<Arc<Bridge>> {
		let bridge = CURRENT.write().take();
		if bridge.is_some() {
			debug!("bridge uninstalled");
		}
		bridge
	}

	/// Notify the managed side, drop every handle and uninstall
	///
	/// Concurrent callers race for the installed bridge; exactly one of them
	/// tears it down and the rest get `NotInstalled`.
	#[instrument(name = "bridge::shutdown", level = "debug")]
	pub fn shutdown() -> Result<()> {
		Bridge::current().ok_or(BridgeError::NotInstalled)?.teardown()
	}

	/// Shut this particular bridge down
	///
	/// Runs at most once per bridge. Only uninstalls if this bridge is still the
	/// installed one, so a stale `Arc` never removes a newer bridge.
	pub(crate) fn teardown(self: &Arc<Self>) -> Result<()> {
		if self.shutting_down.swap(true, Ordering::AcqRel) {
			debug!("bridge already shutting down");
			return Err(BridgeError::NotInstalled);
		}
		self.imports.invoke_shutdown();
		let freed = self.registry.clear();
		debug!(freed, "registry cleared");

		let mut current = CURRENT.write();
		if current.as_ref().is_some_and(|installed| Arc::ptr_eq(installed, self)) {
			*current = None;
			debug!("bridge uninstalled");
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// The only unit test touching `CURRENT`; integration tests serialize on
	// the testing harness instead.
	#[test]
	fn test_stale_teardown_keeps_newer_bridge() {
		let old = Bridge::builder().build().unwrap().install().unwrap();
		Bridge::uninstall();
		let new = Bridge::builder().build().unwrap().install().unwrap();

		assert_eq!(old.teardown(), Ok(()));
		assert!(Bridge::current().is_some_and(|installed| Arc::ptr_eq(&installed, &new)));

		assert_eq!(old.teardown(), Err(BridgeError::NotInstalled));
		assert_eq!(Bridge::shutdown(), Ok(()));
		assert!(Bridge::current().is_none());
		assert_eq!(new.teardown(), Err(BridgeError::NotInstalled));
	}

	#[test]
	fn test_bridges_never_share_handle_values() {
		let ptr = 0x1000 as *mut std::ffi::c_void;
		let first = Bridge::builder().build().unwrap();
		let old = first.registry().register(ptr, interop_abi::TypeTag::Model).unwrap();
		drop(first);

		let second = Bridge::builder().build().unwrap();
		let new = second.registry().register(ptr, interop_abi::TypeTag::Model).unwrap();
		assert_ne!(old, new);
		assert!(!second.registry().contains(old));
	}
}
