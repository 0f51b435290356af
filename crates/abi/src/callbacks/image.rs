// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::ImageFFI;

/// Image callbacks
///
/// Boolean parameters and results travel as `0`/`1` integers.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ImageCallbacks {
	/// Allocate a new 2D image
	///
	/// # Parameters
	/// - `width`: Number of columns
	/// - `height`: Number of rows
	/// - `channels`: Number of color channels
	/// - `type_code`: Pixel type (`IMAGE_*`)
	/// - `color_space`: Color space (`COLOR_SPACE_*`)
	/// - `interleaved`: Whether channel values are interleaved per pixel
	/// - `output`: Pointer to receive the new handle
	///
	/// # Returns
	/// - 0 on success, non-zero if the host refused the allocation
	pub new_2d: extern "C" fn(
		width: i64,
		height: i64,
		channels: i64,
		type_code: i32,
		color_space: i32,
		interleaved: i32,
		output: *mut *mut ImageFFI,
	) -> i32,

	/// Allocate a new 3D image, parameters as in `new_2d` plus the number of slices
	pub new_3d: extern "C" fn(
		slices: i64,
		width: i64,
		height: i64,
		channels: i64,
		type_code: i32,
		color_space: i32,
		interleaved: i32,
		output: *mut *mut ImageFFI,
	) -> i32,

	pub clone: extern "C" fn(image: *mut ImageFFI, output: *mut *mut ImageFFI) -> i32,

	/// Convert an image to another pixel type and interleaving
	///
	/// # Returns
	/// - The converted copy, or null if the host rejected the conversion
	pub convert: extern "C" fn(image: *mut ImageFFI, type_code: i32, interleaved: i32) -> *mut ImageFFI,

	pub free: extern "C" fn(image: *mut ImageFFI),

	pub disown: extern "C" fn(image: *mut ImageFFI),

	pub share_count: extern "C" fn(image: *mut ImageFFI) -> i64,

	pub color_space: extern "C" fn(image: *mut ImageFFI) -> i32,

	pub rows: extern "C" fn(image: *mut ImageFFI) -> i64,

	pub columns: extern "C" fn(image: *mut ImageFFI) -> i64,

	/// Number of slices, 0 for 2D images
	pub slices: extern "C" fn(image: *mut ImageFFI) -> i64,

	pub channels: extern "C" fn(image: *mut ImageFFI) -> i64,

	pub alpha_channel: extern "C" fn(image: *mut ImageFFI) -> i32,

	pub interleaved: extern "C" fn(image: *mut ImageFFI) -> i32,

	/// Spatial rank, 2 or 3
	pub rank: extern "C" fn(image: *mut ImageFFI) -> i64,

	/// Total number of channel values
	pub flattened_length: extern "C" fn(image: *mut ImageFFI) -> i64,

	/// Pixel type (`IMAGE_*`)
	pub type_code: extern "C" fn(image: *mut ImageFFI) -> i32,

	pub data: extern "C" fn(image: *mut ImageFFI) -> *mut c_void,
}
