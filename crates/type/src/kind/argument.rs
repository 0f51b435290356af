// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hostlink_abi::constants::*;
use serde::{Deserialize, Serialize};

/// Type of a value in a library function argument slot or a data list node
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentType {
	Undefined,
	Boolean,
	Integer,
	Real,
	Complex,
	Tensor,
	SparseArray,
	NumericArray,
	Image,
	Utf8String,
	DataStore,
}

impl ArgumentType {
	/// Scalars and strings, which are copied by value
	pub fn is_primitive(&self) -> bool {
		matches!(
			self,
			ArgumentType::Boolean
				| ArgumentType::Integer
				| ArgumentType::Real
				| ArgumentType::Complex
				| ArgumentType::Utf8String
		)
	}

	/// Host-allocated containers, which travel as handles
	pub fn is_wrapper(&self) -> bool {
		matches!(
			self,
			ArgumentType::Tensor
				| ArgumentType::SparseArray
				| ArgumentType::NumericArray
				| ArgumentType::Image
				| ArgumentType::DataStore
		)
	}
}

impl ArgumentType {
	pub fn to_raw(&self) -> i32 {
		match self {
			ArgumentType::Undefined => ARGUMENT_UNDEFINED,
			ArgumentType::Boolean => ARGUMENT_BOOLEAN,
			ArgumentType::Integer => ARGUMENT_INTEGER,
			ArgumentType::Real => ARGUMENT_REAL,
			ArgumentType::Complex => ARGUMENT_COMPLEX,
			ArgumentType::Tensor => ARGUMENT_TENSOR,
			ArgumentType::SparseArray => ARGUMENT_SPARSE_ARRAY,
			ArgumentType::NumericArray => ARGUMENT_NUMERIC_ARRAY,
			ArgumentType::Image => ARGUMENT_IMAGE,
			ArgumentType::Utf8String => ARGUMENT_UTF8_STRING,
			ArgumentType::DataStore => ARGUMENT_DATA_STORE,
		}
	}

	pub fn from_raw(value: i32) -> Option<Self> {
		match value {
			ARGUMENT_UNDEFINED => Some(ArgumentType::Undefined),
			ARGUMENT_BOOLEAN => Some(ArgumentType::Boolean),
			ARGUMENT_INTEGER => Some(ArgumentType::Integer),
			ARGUMENT_REAL => Some(ArgumentType::Real),
			ARGUMENT_COMPLEX => Some(ArgumentType::Complex),
			ARGUMENT_TENSOR => Some(ArgumentType::Tensor),
			ARGUMENT_SPARSE_ARRAY => Some(ArgumentType::SparseArray),
			ARGUMENT_NUMERIC_ARRAY => Some(ArgumentType::NumericArray),
			ARGUMENT_IMAGE => Some(ArgumentType::Image),
			ARGUMENT_UTF8_STRING => Some(ArgumentType::Utf8String),
			ARGUMENT_DATA_STORE => Some(ArgumentType::DataStore),
			_ => None,
		}
	}
}

impl Display for ArgumentType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ArgumentType::Undefined => f.write_str("Undefined"),
			ArgumentType::Boolean => f.write_str("Boolean"),
			ArgumentType::Integer => f.write_str("Integer"),
			ArgumentType::Real => f.write_str("Real"),
			ArgumentType::Complex => f.write_str("Complex"),
			ArgumentType::Tensor => f.write_str("Tensor"),
			ArgumentType::SparseArray => f.write_str("SparseArray"),
			ArgumentType::NumericArray => f.write_str("NumericArray"),
			ArgumentType::Image => f.write_str("Image"),
			ArgumentType::Utf8String => f.write_str("UTF8String"),
			ArgumentType::DataStore => f.write_str("DataStore"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [ArgumentType; 11] = [
		ArgumentType::Undefined,
		ArgumentType::Boolean,
		ArgumentType::Integer,
		ArgumentType::Real,
		ArgumentType::Complex,
		ArgumentType::Tensor,
		ArgumentType::SparseArray,
		ArgumentType::NumericArray,
		ArgumentType::Image,
		ArgumentType::Utf8String,
		ArgumentType::DataStore,
	];

	mod classify {
		use super::*;

		#[test]
		fn test_primitive_and_wrapper_are_disjoint() {
			for kind in ALL {
				assert!(!(kind.is_primitive() && kind.is_wrapper()), "{kind}");
			}
		}

		#[test]
		fn test_undefined_is_neither() {
			assert!(!ArgumentType::Undefined.is_primitive());
			assert!(!ArgumentType::Undefined.is_wrapper());
		}

		#[test]
		fn test_string_is_primitive() {
			assert!(ArgumentType::Utf8String.is_primitive());
		}

		#[test]
		fn test_data_store_is_wrapper() {
			assert!(ArgumentType::DataStore.is_wrapper());
		}
	}

	mod raw {
		use super::*;

		#[test]
		fn test_host_codes() {
			assert_eq!(ArgumentType::Tensor.to_raw(), 5);
			assert_eq!(ArgumentType::NumericArray.to_raw(), 7);
			assert_eq!(ArgumentType::DataStore.to_raw(), 10);
		}

		#[test]
		fn test_every_kind_maps_back() {
			for kind in ALL {
				assert_eq!(ArgumentType::from_raw(kind.to_raw()), Some(kind));
			}
		}

		#[test]
		fn test_unknown_code() {
			assert_eq!(ArgumentType::from_raw(11), None);
			assert_eq!(ArgumentType::from_raw(-1), None);
		}
	}
}
