// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::NumericArrayFFI;

/// Numeric array callbacks
#[repr(C)]
#[derive(Clone, Copy)]
pub struct NumericArrayCallbacks {
	/// Allocate a new numeric array
	///
	/// # Parameters
	/// - `type_code`: Element type (`NUMERIC_ARRAY_*`)
	/// - `rank`: Number of dimensions
	/// - `dims`: Pointer to `rank` extents
	/// - `output`: Pointer to receive the new handle
	///
	/// # Returns
	/// - 0 on success, non-zero if the host refused the allocation
	pub new: extern "C" fn(type_code: i32, rank: i64, dims: *const i64, output: *mut *mut NumericArrayFFI) -> i32,

	/// Deep copy a numeric array
	pub clone: extern "C" fn(array: *mut NumericArrayFFI, output: *mut *mut NumericArrayFFI) -> i32,

	/// Convert a numeric array to another element type
	///
	/// # Parameters
	/// - `array`: Source array, left untouched
	/// - `type_code`: Target element type (`NUMERIC_ARRAY_*`)
	/// - `method`: Conversion method (`CONVERT_*`)
	/// - `tolerance`: Tolerance used by the checking methods
	/// - `output`: Pointer to receive the converted copy
	///
	/// # Returns
	/// - 0 on success, non-zero if the conversion was rejected
	pub convert: extern "C" fn(
		array: *mut NumericArrayFFI,
		type_code: i32,
		method: i32,
		tolerance: f64,
		output: *mut *mut NumericArrayFFI,
	) -> i32,

	pub free: extern "C" fn(array: *mut NumericArrayFFI),

	pub disown: extern "C" fn(array: *mut NumericArrayFFI),

	pub share_count: extern "C" fn(array: *mut NumericArrayFFI) -> i64,

	pub rank: extern "C" fn(array: *mut NumericArrayFFI) -> i64,

	pub dimensions: extern "C" fn(array: *mut NumericArrayFFI) -> *const i64,

	pub flattened_length: extern "C" fn(array: *mut NumericArrayFFI) -> i64,

	/// Element type (`NUMERIC_ARRAY_*`)
	pub type_code: extern "C" fn(array: *mut NumericArrayFFI) -> i32,

	pub data: extern "C" fn(array: *mut NumericArrayFFI) -> *mut c_void,
}
