// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hostlink_abi::constants::{TENSOR_COMPLEX, TENSOR_INTEGER, TENSOR_REAL};
use serde::{Deserialize, Serialize};

/// Element type of a tensor
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum TensorType {
	/// 64-bit signed integer
	Integer,
	/// 64-bit floating point
	Real,
	/// Pair of 64-bit floating point numbers
	Complex,
}

impl TensorType {
	pub fn to_raw(&self) -> i64 {
		match self {
			TensorType::Integer => TENSOR_INTEGER,
			TensorType::Real => TENSOR_REAL,
			TensorType::Complex => TENSOR_COMPLEX,
		}
	}

	pub fn from_raw(value: i64) -> Option<Self> {
		match value {
			TENSOR_INTEGER => Some(TensorType::Integer),
			TENSOR_REAL => Some(TensorType::Real),
			TENSOR_COMPLEX => Some(TensorType::Complex),
			_ => None,
		}
	}

	pub fn size(&self) -> usize {
		match self {
			TensorType::Integer => 8,
			TensorType::Real => 8,
			TensorType::Complex => 16,
		}
	}
}

impl Display for TensorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TensorType::Integer => f.write_str("Integer"),
			TensorType::Real => f.write_str("Real"),
			TensorType::Complex => f.write_str("Complex"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unknown_code() {
		assert_eq!(TensorType::from_raw(0), None);
		assert_eq!(TensorType::from_raw(1), None);
		assert_eq!(TensorType::from_raw(5), None);
	}

	#[test]
	fn test_known_codes() {
		assert_eq!(TensorType::from_raw(2), Some(TensorType::Integer));
		assert_eq!(TensorType::from_raw(3), Some(TensorType::Real));
		assert_eq!(TensorType::from_raw(4), Some(TensorType::Complex));
	}
}
