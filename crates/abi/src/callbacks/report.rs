// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_char;

/// Channel for reporting failures back to the host
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ReportCallbacks {
	/// Assign a value to a host symbol
	///
	/// # Parameters
	/// - `symbol`: NUL-terminated UTF-8 symbol name
	/// - `value`: NUL-terminated UTF-8 JSON document
	///
	/// # Returns
	/// - `HOST_OK` if the symbol was set, `HOST_ERROR` otherwise
	pub set_symbol: extern "C" fn(symbol: *const c_char, value: *const c_char) -> i32,
}
