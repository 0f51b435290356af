// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::TensorFFI;

/// Tensor callbacks
#[repr(C)]
#[derive(Clone, Copy)]
pub struct TensorCallbacks {
	/// Allocate a new tensor
	///
	/// # Parameters
	/// - `type_code`: Element type (`TENSOR_*`)
	/// - `rank`: Number of dimensions
	/// - `dims`: Pointer to `rank` extents
	/// - `output`: Pointer to receive the new handle
	///
	/// # Returns
	/// - 0 on success, non-zero if the host refused the allocation
	pub new: extern "C" fn(type_code: i64, rank: i64, dims: *const i64, output: *mut *mut TensorFFI) -> i32,

	/// Deep copy a tensor
	///
	/// # Returns
	/// - 0 on success, non-zero on failure
	pub clone: extern "C" fn(tensor: *mut TensorFFI, output: *mut *mut TensorFFI) -> i32,

	/// Release a tensor the library owns exclusively
	pub free: extern "C" fn(tensor: *mut TensorFFI),

	/// Give up one share of a shared tensor
	pub disown: extern "C" fn(tensor: *mut TensorFFI),

	/// Number of live shares of a tensor
	pub share_count: extern "C" fn(tensor: *mut TensorFFI) -> i64,

	pub rank: extern "C" fn(tensor: *mut TensorFFI) -> i64,

	/// Pointer to `rank` extents, valid while the tensor is alive
	pub dimensions: extern "C" fn(tensor: *mut TensorFFI) -> *const i64,

	pub flattened_length: extern "C" fn(tensor: *mut TensorFFI) -> i64,

	/// Element type (`TENSOR_*`)
	pub type_code: extern "C" fn(tensor: *mut TensorFFI) -> i64,

	/// Pointer to the contiguous element buffer
	pub data: extern "C" fn(tensor: *mut TensorFFI) -> *mut c_void,
}
