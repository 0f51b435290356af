// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Raw codes exchanged with the host
//!
//! Element type tags are plain integers on the wire. A library compiled against an
//! older or newer host may observe a tag outside the sets below, so the typed
//! enums built on top of these constants always go through a fallible lookup.

/// Host call succeeded
pub const HOST_OK: i32 = 0;

/// Host call failed (allocation refused, conversion rejected, ...)
pub const HOST_ERROR: i32 = 1;

// Argument type codes

pub const ARGUMENT_UNDEFINED: i32 = 0;
pub const ARGUMENT_BOOLEAN: i32 = 1;
pub const ARGUMENT_INTEGER: i32 = 2;
pub const ARGUMENT_REAL: i32 = 3;
pub const ARGUMENT_COMPLEX: i32 = 4;
pub const ARGUMENT_TENSOR: i32 = 5;
pub const ARGUMENT_SPARSE_ARRAY: i32 = 6;
pub const ARGUMENT_NUMERIC_ARRAY: i32 = 7;
pub const ARGUMENT_IMAGE: i32 = 8;
pub const ARGUMENT_UTF8_STRING: i32 = 9;
pub const ARGUMENT_DATA_STORE: i32 = 10;

// Tensor element type codes

pub const TENSOR_INTEGER: i64 = 2;
pub const TENSOR_REAL: i64 = 3;
pub const TENSOR_COMPLEX: i64 = 4;

// Numeric array element type codes

pub const NUMERIC_ARRAY_UNDEFINED: i32 = 0;
pub const NUMERIC_ARRAY_INT8: i32 = 1;
pub const NUMERIC_ARRAY_UINT8: i32 = 2;
pub const NUMERIC_ARRAY_INT16: i32 = 3;
pub const NUMERIC_ARRAY_UINT16: i32 = 4;
pub const NUMERIC_ARRAY_INT32: i32 = 5;
pub const NUMERIC_ARRAY_UINT32: i32 = 6;
pub const NUMERIC_ARRAY_INT64: i32 = 7;
pub const NUMERIC_ARRAY_UINT64: i32 = 8;
pub const NUMERIC_ARRAY_REAL32: i32 = 9;
pub const NUMERIC_ARRAY_REAL64: i32 = 10;
pub const NUMERIC_ARRAY_COMPLEX32: i32 = 11;
pub const NUMERIC_ARRAY_COMPLEX64: i32 = 12;

// Numeric array conversion methods

pub const CONVERT_CHECK: i32 = 1;
pub const CONVERT_CLIP_CHECK: i32 = 2;
pub const CONVERT_COERCE: i32 = 3;
pub const CONVERT_CLIP_COERCE: i32 = 4;
pub const CONVERT_ROUND: i32 = 5;
pub const CONVERT_CLIP_ROUND: i32 = 6;
pub const CONVERT_SCALE: i32 = 7;
pub const CONVERT_CLIP_SCALE: i32 = 8;

// Image element type codes

pub const IMAGE_UNDEFINED: i32 = -1;
pub const IMAGE_BIT: i32 = 1;
pub const IMAGE_BYTE: i32 = 2;
pub const IMAGE_BIT16: i32 = 3;
pub const IMAGE_REAL32: i32 = 4;
pub const IMAGE_REAL64: i32 = 5;

// Image color spaces

pub const COLOR_SPACE_UNDEFINED: i32 = -1;
pub const COLOR_SPACE_GRAY: i32 = 0;
pub const COLOR_SPACE_RGB: i32 = 1;
pub const COLOR_SPACE_HSB: i32 = 2;
pub const COLOR_SPACE_CMYK: i32 = 3;
pub const COLOR_SPACE_XYZ: i32 = 4;
pub const COLOR_SPACE_LUV: i32 = 5;
pub const COLOR_SPACE_LAB: i32 = 6;
pub const COLOR_SPACE_LCH: i32 = 7;
pub const COLOR_SPACE_AUTOMATIC: i32 = 8;
