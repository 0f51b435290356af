// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_char;

use super::{ArrayFFI, ComplexFFI, DataStoreFFI, ImageFFI, NumericArrayFFI, TensorFFI};

/// FFI-safe value of a single library function argument or result
///
/// The active field is determined by the argument type code the host associated
/// with the slot (see `ARGUMENT_*` constants). Booleans travel as `0`/`1` integers.
#[repr(C)]
#[derive(Clone, Copy)]
pub union ArgumentFFI {
	pub boolean: i32,
	pub integer: i64,
	pub real: f64,
	pub complex: ComplexFFI,
	pub tensor: *mut TensorFFI,
	pub numeric_array: *mut NumericArrayFFI,
	pub image: *mut ImageFFI,
	pub utf8_string: *mut c_char,
	pub data_store: *mut DataStoreFFI,
}

impl ArgumentFFI {
	/// Create an argument slot holding no value
	pub const fn empty() -> Self {
		Self {
			complex: ComplexFFI::new(0.0, 0.0),
		}
	}

	pub const fn from_boolean(value: bool) -> Self {
		Self {
			boolean: value as i32,
		}
	}

	pub const fn from_integer(value: i64) -> Self {
		Self {
			integer: value,
		}
	}

	pub const fn from_real(value: f64) -> Self {
		Self {
			real: value,
		}
	}

	pub const fn from_complex(value: ComplexFFI) -> Self {
		Self {
			complex: value,
		}
	}

	/// Tensors and numeric arrays share the same raw handle type
	pub const fn from_array(array: *mut ArrayFFI) -> Self {
		Self {
			tensor: array,
		}
	}

	pub const fn from_image(image: *mut ImageFFI) -> Self {
		Self {
			image,
		}
	}

	pub const fn from_utf8_string(string: *mut c_char) -> Self {
		Self {
			utf8_string: string,
		}
	}

	pub const fn from_data_store(data_store: *mut DataStoreFFI) -> Self {
		Self {
			data_store,
		}
	}
}

impl Default for ArgumentFFI {
	fn default() -> Self {
		Self::empty()
	}
}
