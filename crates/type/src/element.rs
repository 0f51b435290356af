// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Native Rust types the host can store in its containers
//!
//! Each trait carries the tag of the implementing type as an associated constant, so
//! the tag of a native type is known at compile time and the native type of a tag
//! is recovered by dispatching over the closed set of implementors. The traits are
//! sealed: reinterpreting a host buffer is only sound for the types listed here.

use crate::{
	complex::{Complex32, Complex64},
	kind::{ImageType, NumericArrayType, TensorType},
};

mod sealed {
	pub trait Sealed {}
}

/// Element type of a tensor
pub trait TensorElement: sealed::Sealed + Copy + Default + 'static {
	const KIND: TensorType;
}

/// Element type of a numeric array
pub trait NumericArrayElement: sealed::Sealed + Copy + Default + 'static {
	const KIND: NumericArrayType;
}

/// Channel type of an image
pub trait ImageElement: sealed::Sealed + Copy + Default + 'static {
	const KIND: ImageType;
}

macro_rules! sealed {
	($($t:ty),*) => {
		$(impl sealed::Sealed for $t {})*
	};
}

sealed!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, Complex32, Complex64);

impl TensorElement for i64 {
	const KIND: TensorType = TensorType::Integer;
}

impl TensorElement for f64 {
	const KIND: TensorType = TensorType::Real;
}

impl TensorElement for Complex64 {
	const KIND: TensorType = TensorType::Complex;
}

macro_rules! numeric_array_element {
	($($t:ty => $kind:ident),* $(,)?) => {
		$(
			impl NumericArrayElement for $t {
				const KIND: NumericArrayType = NumericArrayType::$kind;
			}
		)*
	};
}

numeric_array_element!(
	i8 => Int8,
	u8 => UInt8,
	i16 => Int16,
	u16 => UInt16,
	i32 => Int32,
	u32 => UInt32,
	i64 => Int64,
	u64 => UInt64,
	f32 => Real32,
	f64 => Real64,
	Complex32 => Complex32,
	Complex64 => Complex64,
);

impl ImageElement for i8 {
	const KIND: ImageType = ImageType::Bit;
}

impl ImageElement for u8 {
	const KIND: ImageType = ImageType::Byte;
}

impl ImageElement for u16 {
	const KIND: ImageType = ImageType::Bit16;
}

impl ImageElement for f32 {
	const KIND: ImageType = ImageType::Real32;
}

impl ImageElement for f64 {
	const KIND: ImageType = ImageType::Real64;
}

#[cfg(test)]
mod tests {
	use std::mem::size_of;

	use super::*;

	fn numeric_array_kind<T: NumericArrayElement>() -> NumericArrayType {
		T::KIND
	}

	#[test]
	fn test_element_size_matches_kind() {
		assert_eq!(size_of::<u16>(), <u16 as NumericArrayElement>::KIND.size());
		assert_eq!(size_of::<Complex32>(), <Complex32 as NumericArrayElement>::KIND.size());
		assert_eq!(size_of::<Complex64>(), <Complex64 as TensorElement>::KIND.size());
		assert_eq!(size_of::<u16>(), <u16 as ImageElement>::KIND.size());
	}

	#[test]
	fn test_same_native_type_different_categories() {
		assert_eq!(<i64 as TensorElement>::KIND, TensorType::Integer);
		assert_eq!(numeric_array_kind::<i64>(), NumericArrayType::Int64);
	}

	#[test]
	fn test_image_bit_and_byte() {
		assert_eq!(<i8 as ImageElement>::KIND, ImageType::Bit);
		assert_eq!(<u8 as ImageElement>::KIND, ImageType::Byte);
	}
}
