// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hostlink_abi::data::ComplexFFI;
use serde::{Deserialize, Serialize};

/// Complex number laid out as the host stores it: real part, then imaginary part
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex<T> {
	pub re: T,
	pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
	pub const fn new(re: T, im: T) -> Self {
		Self {
			re,
			im,
		}
	}
}

impl From<ComplexFFI> for Complex64 {
	fn from(value: ComplexFFI) -> Self {
		Complex::new(value.re, value.im)
	}
}

impl From<Complex64> for ComplexFFI {
	fn from(value: Complex64) -> Self {
		ComplexFFI::new(value.re, value.im)
	}
}

impl<T: Display> Display for Complex<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} + {}i", self.re, self.im)
	}
}

#[cfg(test)]
mod tests {
	use std::mem::{align_of, size_of};

	use super::*;

	#[test]
	fn test_layout_matches_host() {
		assert_eq!(size_of::<Complex64>(), 16);
		assert_eq!(size_of::<Complex32>(), 8);
		assert_eq!(align_of::<Complex64>(), align_of::<f64>());
		assert_eq!(size_of::<Complex64>(), size_of::<ComplexFFI>());
	}

	#[test]
	fn test_display() {
		assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5 + -2i");
	}
}
