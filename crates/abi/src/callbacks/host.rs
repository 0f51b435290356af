// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{DataStoreCallbacks, ImageCallbacks, NumericArrayCallbacks, ReportCallbacks, TensorCallbacks};

/// Complete set of host callbacks handed to a library when it is loaded
///
/// All function pointers must be valid (non-null) for the whole time the library
/// stays loaded.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct HostCallbacks {
	pub tensor: TensorCallbacks,
	pub numeric_array: NumericArrayCallbacks,
	pub image: ImageCallbacks,
	pub data_store: DataStoreCallbacks,
	pub report: ReportCallbacks,
}
