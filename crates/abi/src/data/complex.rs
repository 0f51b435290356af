// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// FFI-safe complex scalar as passed in arguments and node values
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComplexFFI {
	/// Real part
	pub re: f64,
	/// Imaginary part
	pub im: f64,
}

impl ComplexFFI {
	pub const fn new(re: f64, im: f64) -> Self {
		Self {
			re,
			im,
		}
	}
}
