// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hostlink_abi::constants::*;
use serde::{Deserialize, Serialize};

/// Pixel channel type of an image
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
	/// One bit per channel, stored as `i8`
	Bit,
	/// 8-bit unsigned
	Byte,
	/// 16-bit unsigned
	Bit16,
	Real32,
	Real64,
}

impl ImageType {
	pub fn to_raw(&self) -> i32 {
		match self {
			ImageType::Bit => IMAGE_BIT,
			ImageType::Byte => IMAGE_BYTE,
			ImageType::Bit16 => IMAGE_BIT16,
			ImageType::Real32 => IMAGE_REAL32,
			ImageType::Real64 => IMAGE_REAL64,
		}
	}

	pub fn from_raw(value: i32) -> Option<Self> {
		match value {
			IMAGE_BIT => Some(ImageType::Bit),
			IMAGE_BYTE => Some(ImageType::Byte),
			IMAGE_BIT16 => Some(ImageType::Bit16),
			IMAGE_REAL32 => Some(ImageType::Real32),
			IMAGE_REAL64 => Some(ImageType::Real64),
			_ => None,
		}
	}

	pub fn size(&self) -> usize {
		match self {
			ImageType::Bit => 1,
			ImageType::Byte => 1,
			ImageType::Bit16 => 2,
			ImageType::Real32 => 4,
			ImageType::Real64 => 8,
		}
	}
}

impl Display for ImageType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ImageType::Bit => f.write_str("Bit"),
			ImageType::Byte => f.write_str("Byte"),
			ImageType::Bit16 => f.write_str("Bit16"),
			ImageType::Real32 => f.write_str("Real32"),
			ImageType::Real64 => f.write_str("Real"),
		}
	}
}

/// Color space of an image
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
	#[default]
	Undefined,
	Gray,
	Rgb,
	Hsb,
	Cmyk,
	Xyz,
	Luv,
	Lab,
	Lch,
	Automatic,
}

impl ColorSpace {
	pub fn to_raw(&self) -> i32 {
		match self {
			ColorSpace::Undefined => COLOR_SPACE_UNDEFINED,
			ColorSpace::Gray => COLOR_SPACE_GRAY,
			ColorSpace::Rgb => COLOR_SPACE_RGB,
			ColorSpace::Hsb => COLOR_SPACE_HSB,
			ColorSpace::Cmyk => COLOR_SPACE_CMYK,
			ColorSpace::Xyz => COLOR_SPACE_XYZ,
			ColorSpace::Luv => COLOR_SPACE_LUV,
			ColorSpace::Lab => COLOR_SPACE_LAB,
			ColorSpace::Lch => COLOR_SPACE_LCH,
			ColorSpace::Automatic => COLOR_SPACE_AUTOMATIC,
		}
	}

	pub fn from_raw(value: i32) -> Option<Self> {
		match value {
			COLOR_SPACE_UNDEFINED => Some(ColorSpace::Undefined),
			COLOR_SPACE_GRAY => Some(ColorSpace::Gray),
			COLOR_SPACE_RGB => Some(ColorSpace::Rgb),
			COLOR_SPACE_HSB => Some(ColorSpace::Hsb),
			COLOR_SPACE_CMYK => Some(ColorSpace::Cmyk),
			COLOR_SPACE_XYZ => Some(ColorSpace::Xyz),
			COLOR_SPACE_LUV => Some(ColorSpace::Luv),
			COLOR_SPACE_LAB => Some(ColorSpace::Lab),
			COLOR_SPACE_LCH => Some(ColorSpace::Lch),
			COLOR_SPACE_AUTOMATIC => Some(ColorSpace::Automatic),
			_ => None,
		}
	}
}

impl Display for ColorSpace {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColorSpace::Undefined => f.write_str("Undefined"),
			ColorSpace::Gray => f.write_str("Grayscale"),
			ColorSpace::Rgb => f.write_str("RGB"),
			ColorSpace::Hsb => f.write_str("HSB"),
			ColorSpace::Cmyk => f.write_str("CMYK"),
			ColorSpace::Xyz => f.write_str("XYZ"),
			ColorSpace::Luv => f.write_str("LUV"),
			ColorSpace::Lab => f.write_str("LAB"),
			ColorSpace::Lch => f.write_str("LCH"),
			ColorSpace::Automatic => f.write_str("Automatic"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod image_type {
		use super::*;

		#[test]
		fn test_undefined_is_not_a_kind() {
			assert_eq!(ImageType::from_raw(IMAGE_UNDEFINED), None);
			assert_eq!(ImageType::from_raw(0), None);
		}

		#[test]
		fn test_bit_and_byte_are_distinct() {
			assert_ne!(ImageType::Bit.to_raw(), ImageType::Byte.to_raw());
			assert_eq!(ImageType::Bit.size(), ImageType::Byte.size());
		}
	}

	mod color_space {
		use super::*;

		#[test]
		fn test_undefined_is_negative() {
			assert_eq!(ColorSpace::Undefined.to_raw(), -1);
			assert_eq!(ColorSpace::from_raw(-1), Some(ColorSpace::Undefined));
		}

		#[test]
		fn test_unknown_code() {
			assert_eq!(ColorSpace::from_raw(9), None);
			assert_eq!(ColorSpace::from_raw(-2), None);
		}
	}
}
