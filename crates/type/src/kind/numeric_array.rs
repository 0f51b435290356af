// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hostlink_abi::constants::*;
use serde::{Deserialize, Serialize};

/// Element type of a numeric array
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericArrayType {
	Int8,
	UInt8,
	Int16,
	UInt16,
	Int32,
	UInt32,
	Int64,
	UInt64,
	Real32,
	Real64,
	/// Pair of 32-bit floating point numbers
	Complex32,
	/// Pair of 64-bit floating point numbers
	Complex64,
}

impl NumericArrayType {
	pub fn is_signed_integer(&self) -> bool {
		matches!(
			self,
			NumericArrayType::Int8 | NumericArrayType::Int16 | NumericArrayType::Int32 | NumericArrayType::Int64
		)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(
			self,
			NumericArrayType::UInt8
				| NumericArrayType::UInt16 | NumericArrayType::UInt32
				| NumericArrayType::UInt64
		)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, NumericArrayType::Real32 | NumericArrayType::Real64)
	}

	pub fn is_complex(&self) -> bool {
		matches!(self, NumericArrayType::Complex32 | NumericArrayType::Complex64)
	}
}

impl NumericArrayType {
	pub fn to_raw(&self) -> i32 {
		match self {
			NumericArrayType::Int8 => NUMERIC_ARRAY_INT8,
			NumericArrayType::UInt8 => NUMERIC_ARRAY_UINT8,
			NumericArrayType::Int16 => NUMERIC_ARRAY_INT16,
			NumericArrayType::UInt16 => NUMERIC_ARRAY_UINT16,
			NumericArrayType::Int32 => NUMERIC_ARRAY_INT32,
			NumericArrayType::UInt32 => NUMERIC_ARRAY_UINT32,
			NumericArrayType::Int64 => NUMERIC_ARRAY_INT64,
			NumericArrayType::UInt64 => NUMERIC_ARRAY_UINT64,
			NumericArrayType::Real32 => NUMERIC_ARRAY_REAL32,
			NumericArrayType::Real64 => NUMERIC_ARRAY_REAL64,
			NumericArrayType::Complex32 => NUMERIC_ARRAY_COMPLEX32,
			NumericArrayType::Complex64 => NUMERIC_ARRAY_COMPLEX64,
		}
	}

	pub fn from_raw(value: i32) -> Option<Self> {
		match value {
			NUMERIC_ARRAY_INT8 => Some(NumericArrayType::Int8),
			NUMERIC_ARRAY_UINT8 => Some(NumericArrayType::UInt8),
			NUMERIC_ARRAY_INT16 => Some(NumericArrayType::Int16),
			NUMERIC_ARRAY_UINT16 => Some(NumericArrayType::UInt16),
			NUMERIC_ARRAY_INT32 => Some(NumericArrayType::Int32),
			NUMERIC_ARRAY_UINT32 => Some(NumericArrayType::UInt32),
			NUMERIC_ARRAY_INT64 => Some(NumericArrayType::Int64),
			NUMERIC_ARRAY_UINT64 => Some(NumericArrayType::UInt64),
			NUMERIC_ARRAY_REAL32 => Some(NumericArrayType::Real32),
			NUMERIC_ARRAY_REAL64 => Some(NumericArrayType::Real64),
			NUMERIC_ARRAY_COMPLEX32 => Some(NumericArrayType::Complex32),
			NUMERIC_ARRAY_COMPLEX64 => Some(NumericArrayType::Complex64),
			_ => None,
		}
	}

	pub fn size(&self) -> usize {
		match self {
			NumericArrayType::Int8 => 1,
			NumericArrayType::UInt8 => 1,
			NumericArrayType::Int16 => 2,
			NumericArrayType::UInt16 => 2,
			NumericArrayType::Int32 => 4,
			NumericArrayType::UInt32 => 4,
			NumericArrayType::Int64 => 8,
			NumericArrayType::UInt64 => 8,
			NumericArrayType::Real32 => 4,
			NumericArrayType::Real64 => 8,
			NumericArrayType::Complex32 => 8,
			NumericArrayType::Complex64 => 16,
		}
	}
}

impl Display for NumericArrayType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			NumericArrayType::Int8 => f.write_str("Integer8"),
			NumericArrayType::UInt8 => f.write_str("UnsignedInteger8"),
			NumericArrayType::Int16 => f.write_str("Integer16"),
			NumericArrayType::UInt16 => f.write_str("UnsignedInteger16"),
			NumericArrayType::Int32 => f.write_str("Integer32"),
			NumericArrayType::UInt32 => f.write_str("UnsignedInteger32"),
			NumericArrayType::Int64 => f.write_str("Integer64"),
			NumericArrayType::UInt64 => f.write_str("UnsignedInteger64"),
			NumericArrayType::Real32 => f.write_str("Real32"),
			NumericArrayType::Real64 => f.write_str("Real64"),
			NumericArrayType::Complex32 => f.write_str("ComplexReal32"),
			NumericArrayType::Complex64 => f.write_str("ComplexReal64"),
		}
	}
}
