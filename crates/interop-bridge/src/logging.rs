// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Subscriber setup for embedders that do not bring their own
//!
//! The bridge itself only emits `tracing` events.

use tracing_subscriber::EnvFilter;

use crate::{
	config::LogConfig,
	error::{BridgeError, Result},
};

/// Install a global `fmt` subscriber
///
/// `RUST_LOG` takes precedence over `config.filter`. If a global subscriber is
/// already installed this is a no-op.
pub fn init(config: &LogConfig) -> Result<()> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| BridgeError::InvalidConfig(e.to_string()))?,
	};

	let installed = if config.json {
		tracing_subscriber::fmt().json().with_env_filter(filter).try_init()
	} else {
		tracing_subscriber::fmt().with_env_filter(filter).try_init()
	};

	if installed.is_err() {
		tracing::debug!("global subscriber already installed, keeping it");
	}
	Ok(())
}
