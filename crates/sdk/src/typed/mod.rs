// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Containers whose element type is fixed at compile time
//!
//! A typed container is a generic container whose element tag has been checked once,
//! which makes its buffer safe to view as a slice of the native element type.

mod image;
mod numeric_array;
mod tensor;

use std::{ffi::c_void, slice};

pub use image::Image;
pub use numeric_array::NumericArray;
pub use tensor::Tensor;

/// Number of elements described by `dims`, `None` for negative extents or overflow
pub(crate) fn element_count(dims: &[i64]) -> Option<usize> {
	dims.iter().try_fold(1usize, |acc, dim| usize::try_from(*dim).ok().and_then(|dim| acc.checked_mul(dim)))
}

/// # Safety
/// `data` must be null or point to `len` initialized values of `T` that stay valid and
/// unaliased by writers for `'a`.
pub(crate) unsafe fn view<'a, T>(data: *mut c_void, len: i64) -> &'a [T] {
	if data.is_null() || len <= 0 {
		return &[];
	}
	unsafe { slice::from_raw_parts(data as *const T, len as usize) }
}

/// # Safety
/// Same as [`view`], and no other reference to the buffer may exist for `'a`.
pub(crate) unsafe fn view_mut<'a, T>(data: *mut c_void, len: i64) -> &'a mut [T] {
	if data.is_null() || len <= 0 {
		return &mut [];
	}
	unsafe { slice::from_raw_parts_mut(data as *mut T, len as usize) }
}
