// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, ffi::c_void};

use hostlink_type::ColorSpace;

/// Shape and storage of a container holding a contiguous element buffer
///
/// An empty (abandoned) container reports rank 0, no dimensions, length 0, type code 0
/// and a null data pointer.
pub trait BufferInterface {
	fn rank(&self) -> i64;

	/// Extent of each axis, `rank()` entries
	fn dimensions(&self) -> Cow<'_, [i64]>;

	/// Number of elements, the product of `dimensions()`
	fn flattened_length(&self) -> i64;

	/// Raw host element type code
	fn type_code(&self) -> i64;

	fn raw_data(&self) -> *mut c_void;
}

/// Image metadata on top of the buffer shape
///
/// Image dimensions are `[rows, columns, channels]`, with a leading `slices` axis for
/// 3D images.
pub trait ImageInterface: BufferInterface {
	fn rows(&self) -> i64;

	fn columns(&self) -> i64;

	/// 0 for 2D images
	fn slices(&self) -> i64;

	fn channels(&self) -> i64;

	fn color_space(&self) -> ColorSpace;

	fn has_alpha_channel(&self) -> bool;

	fn is_interleaved(&self) -> bool;

	fn is_3d(&self) -> bool {
		self.slices() > 0
	}
}
