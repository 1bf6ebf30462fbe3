// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use interop_abi::{
	FFI_ERROR_ALREADY_INSTALLED, FFI_ERROR_CLASS_INSTALLED, FFI_ERROR_EXHAUSTED, FFI_ERROR_INVALID_CONFIG,
	FFI_ERROR_NOT_INSTALLED, FFI_ERROR_NULL_PTR, FFI_ERROR_UNKNOWN_TAG, TypeTag,
};

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
	#[error("handle registry exhausted: all {capacity} slots are in use")]
	RegistryExhausted {
		capacity: u32,
	},

	#[error("cannot register a null native pointer")]
	NullPointer,

	#[error("unknown type tag {0}")]
	UnknownTypeTag(u32),

	#[error("a bridge is already installed in this process")]
	AlreadyInstalled,

	#[error("no bridge is installed in this process")]
	NotInstalled,

	#[error("native class {0} is already installed")]
	ClassAlreadyInstalled(TypeTag),

	#[error("invalid bridge configuration: {0}")]
	InvalidConfig(String),
}

impl BridgeError {
	/// Negative status code reported across the C boundary
	pub fn code(&self) -> i32 {
		match self {
			BridgeError::RegistryExhausted {
				..
			} => FFI_ERROR_EXHAUSTED,
			BridgeError::NullPointer => FFI_ERROR_NULL_PTR,
			BridgeError::UnknownTypeTag(_) => FFI_ERROR_UNKNOWN_TAG,
			BridgeError::AlreadyInstalled => FFI_ERROR_ALREADY_INSTALLED,
			BridgeError::NotInstalled => FFI_ERROR_NOT_INSTALLED,
			BridgeError::ClassAlreadyInstalled(_) => FFI_ERROR_CLASS_INSTALLED,
			BridgeError::InvalidConfig(_) => FFI_ERROR_INVALID_CONFIG,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_are_negative_and_distinct() {
		let errors = [
			BridgeError::RegistryExhausted {
				capacity: 1,
			},
			BridgeError::NullPointer,
			BridgeError::UnknownTypeTag(9),
			BridgeError::AlreadyInstalled,
			BridgeError::NotInstalled,
			BridgeError::ClassAlreadyInstalled(TypeTag::Model),
			BridgeError::InvalidConfig("x".to_string()),
		];

		let mut codes: Vec<i32> = errors.iter().map(BridgeError::code).collect();
		assert!(codes.iter().all(|c| *c < 0));
		codes.sort();
		codes.dedup();
		assert_eq!(codes.len(), errors.len());
	}

	#[test]
	fn test_display() {
		let err = BridgeError::RegistryExhausted {
			capacity: 4,
		};
		assert_eq!(err.to_string(), "handle registry exhausted: all 4 slots are in use");
		assert_eq!(
			BridgeError::ClassAlreadyInstalled(TypeTag::Texture).to_string(),
			"native class CTexture is already installed"
		);
	}
}
