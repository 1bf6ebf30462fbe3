// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{
	bridge::Bridge,
	error::{BridgeError, Result},
};

pub const DEFAULT_HANDLE_CAPACITY: u32 = 1 << 20;

/// Largest capacity a slot index can encode; index `u32::MAX` would overflow the
/// `index + 1` packing.
pub const MAX_HANDLE_CAPACITY: u32 = u32::MAX - 1;

/// What invoking an import slot that was never stored does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetImportPolicy {
	/// Return the sentinel silently
	#[default]
	Ignore,
	/// Return the sentinel and emit a warning
	Warn,
	/// Abort the process
	Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
	/// `EnvFilter` directives, overridden by `RUST_LOG` when set
	pub filter: String,
	pub json: bool,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
			json: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
	pub handle_capacity: u32,
	pub unset_import: UnsetImportPolicy,
	pub log: LogConfig,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			handle_capacity: DEFAULT_HANDLE_CAPACITY,
			unset_import: UnsetImportPolicy::default(),
			log: LogConfig::default(),
		}
	}
}

impl BridgeConfig {
	/// Parse a JSON document; absent fields keep their defaults
	pub fn from_json(bytes: &[u8]) -> Result<Self> {
		let config: BridgeConfig =
			serde_json::from_slice(bytes).map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.handle_capacity == 0 || self.handle_capacity > MAX_HANDLE_CAPACITY {
			return Err(BridgeError::InvalidConfig(format!(
				"handle_capacity must be in 1..={}, got {}",
				MAX_HANDLE_CAPACITY, self.handle_capacity
			)));
		}
		Ok(())
	}
}

/// Builder for [`Bridge`]
pub struct BridgeBuilder {
	config: BridgeConfig,
}

impl BridgeBuilder {
	pub fn new() -> Self {
		Self {
			config: BridgeConfig::default(),
		}
	}

	pub fn from_config(config: BridgeConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn handle_capacity(mut self, capacity: u32) -> Self {
		self.config.handle_capacity = capacity;
		self
	}

	pub fn unset_import(mut self, policy: UnsetImportPolicy) -> Self {
		self.config.unset_import = policy;
		self
	}

	pub fn log(mut self, log: LogConfig) -> Self {
		self.config.log = log;
		self
	}

	pub fn build(self) -> Result<Bridge> {
		Bridge::new(self.config)
	}
}

impl Default for BridgeBuilder {
	fn default() -> Self {
		Self::new()
	}
}
