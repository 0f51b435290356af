// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Element conversions performed by the test host

use hostlink_type::{Complex32, Complex64, ConvertMethod, ImageType, NumericArrayType};

use super::heap::{ImageObject, words};

fn read<T: Copy>(data: &[u64], index: usize) -> T {
	// SAFETY: callers stay below the element count the buffer was sized for
	unsafe { (data.as_ptr() as *const T).add(index).read() }
}

fn write<T>(data: &mut [u64], index: usize, value: T) {
	// SAFETY: as in `read`
	unsafe { (data.as_mut_ptr() as *mut T).add(index).write(value) }
}

fn load(kind: NumericArrayType, data: &[u64], index: usize) -> (f64, f64) {
	match kind {
		NumericArrayType::Int8 => (read::<i8>(data, index) as f64, 0.0),
		NumericArrayType::UInt8 => (read::<u8>(data, index) as f64, 0.0),
		NumericArrayType::Int16 => (read::<i16>(data, index) as f64, 0.0),
		NumericArrayType::UInt16 => (read::<u16>(data, index) as f64, 0.0),
		NumericArrayType::Int32 => (read::<i32>(data, index) as f64, 0.0),
		NumericArrayType::UInt32 => (read::<u32>(data, index) as f64, 0.0),
		NumericArrayType::Int64 => (read::<i64>(data, index) as f64, 0.0),
		NumericArrayType::UInt64 => (read::<u64>(data, index) as f64, 0.0),
		NumericArrayType::Real32 => (read::<f32>(data, index) as f64, 0.0),
		NumericArrayType::Real64 => (read::<f64>(data, index), 0.0),
		NumericArrayType::Complex32 => {
			let value: Complex32 = read(data, index);
			(value.re as f64, value.im as f64)
		}
		NumericArrayType::Complex64 => {
			let value: Complex64 = read(data, index);
			(value.re, value.im)
		}
	}
}

fn store(kind: NumericArrayType, data: &mut [u64], index: usize, (re, im): (f64, f64)) {
	match kind {
		NumericArrayType::Int8 => write(data, index, re as i8),
		NumericArrayType::UInt8 => write(data, index, re as u8),
		NumericArrayType::Int16 => write(data, index, re as i16),
		NumericArrayType::UInt16 => write(data, index, re as u16),
		NumericArrayType::Int32 => write(data, index, re as i32),
		NumericArrayType::UInt32 => write(data, index, re as u32),
		NumericArrayType::Int64 => write(data, index, re as i64),
		NumericArrayType::UInt64 => write(data, index, re as u64),
		NumericArrayType::Real32 => write(data, index, re as f32),
		NumericArrayType::Real64 => write(data, index, re),
		NumericArrayType::Complex32 => write(data, index, Complex32::new(re as f32, im as f32)),
		NumericArrayType::Complex64 => write(data, index, Complex64::new(re, im)),
	}
}

fn range(kind: NumericArrayType) -> (f64, f64) {
	match kind {
		NumericArrayType::Int8 => (i8::MIN as f64, i8::MAX as f64),
		NumericArrayType::UInt8 => (0.0, u8::MAX as f64),
		NumericArrayType::Int16 => (i16::MIN as f64, i16::MAX as f64),
		NumericArrayType::UInt16 => (0.0, u16::MAX as f64),
		NumericArrayType::Int32 => (i32::MIN as f64, i32::MAX as f64),
		NumericArrayType::UInt32 => (0.0, u32::MAX as f64),
		NumericArrayType::Int64 => (i64::MIN as f64, i64::MAX as f64),
		NumericArrayType::UInt64 => (0.0, u64::MAX as f64),
		NumericArrayType::Real32 | NumericArrayType::Complex32 => (f32::MIN as f64, f32::MAX as f64),
		NumericArrayType::Real64 | NumericArrayType::Complex64 => (f64::MIN, f64::MAX),
	}
}

/// Convert `length` elements, `None` when a checking method finds a lossy value
///
/// Scaling maps `[0, 1]` onto `[0, max]` between floating point and integer types
/// and falls back to coercion otherwise.
pub(crate) fn numeric(
	source: NumericArrayType,
	target: NumericArrayType,
	method: ConvertMethod,
	tolerance: f64,
	data: &[u64],
	length: usize,
) -> Option<Vec<u64>> {
	let mut output = words(length, target.size());
	let (low, high) = range(target);

	for index in 0..length {
		let (mut re, mut im) = load(source, data, index);

		if matches!(method, ConvertMethod::Scale | ConvertMethod::ClipScale) {
			let factor = match (source.is_integer(), target.is_integer()) {
				(false, true) => high,
				(true, false) => 1.0 / range(source).1,
				_ => 1.0,
			};
			re *= factor;
			im *= factor;
		}
		let rounds = !matches!(
			method,
			ConvertMethod::Check | ConvertMethod::ClipCheck | ConvertMethod::Coerce | ConvertMethod::ClipCoerce
		);
		if target.is_integer() && rounds {
			re = re.round();
			im = im.round();
		}
		if method.clips() {
			re = re.clamp(low, high);
			im = im.clamp(low, high);
		}

		store(target, &mut output, index, (re, im));

		if matches!(method, ConvertMethod::Check | ConvertMethod::ClipCheck) {
			let (stored_re, stored_im) = load(target, &output, index);
			if (stored_re - re).abs() > tolerance || (stored_im - im).abs() > tolerance {
				return None;
			}
		}
	}

	Some(output)
}

fn image_max(kind: ImageType) -> f64 {
	match kind {
		ImageType::Bit => 1.0,
		ImageType::Byte => u8::MAX as f64,
		ImageType::Bit16 => u16::MAX as f64,
		ImageType::Real32 | ImageType::Real64 => 1.0,
	}
}

fn load_pixel(kind: ImageType, data: &[u64], index: usize) -> f64 {
	match kind {
		ImageType::Bit => read::<i8>(data, index) as f64,
		ImageType::Byte => read::<u8>(data, index) as f64,
		ImageType::Bit16 => read::<u16>(data, index) as f64,
		ImageType::Real32 => read::<f32>(data, index) as f64,
		ImageType::Real64 => read::<f64>(data, index),
	}
}

fn store_pixel(kind: ImageType, data: &mut [u64], index: usize, value: f64) {
	let value = match kind {
		ImageType::Real32 | ImageType::Real64 => value,
		_ => value.round().clamp(0.0, image_max(kind)),
	};
	match kind {
		ImageType::Bit => write(data, index, value as i8),
		ImageType::Byte => write(data, index, value as u8),
		ImageType::Bit16 => write(data, index, value as u16),
		ImageType::Real32 => write(data, index, value as f32),
		ImageType::Real64 => write(data, index, value),
	}
}

/// Rescale pixel values to the target range and reorder channels
pub(crate) fn image(source: &ImageObject, target: ImageType, interleaved: bool) -> Option<ImageObject> {
	let kind = ImageType::from_raw(source.type_code)?;
	let pixels = source.pixels();
	let channels = source.channels as usize;
	let mut data = words(source.length, target.size());

	let position = |interleaved: bool, pixel: usize, channel: usize| {
		if interleaved {
			pixel * channels + channel
		} else {
			channel * pixels + pixel
		}
	};

	for pixel in 0..pixels {
		for channel in 0..channels {
			let value = load_pixel(kind, &source.data, position(source.interleaved, pixel, channel));
			let scaled = value / image_max(kind) * image_max(target);
			store_pixel(target, &mut data, position(interleaved, pixel, channel), scaled);
		}
	}

	Some(ImageObject {
		type_code: target.to_raw(),
		interleaved,
		data,
		..source.clone()
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::heap::{read_slice, write_slice};

	fn words_of<T: Copy>(values: &[T]) -> Vec<u64> {
		let mut data = words(values.len(), size_of::<T>());
		assert!(write_slice(&mut data, values));
		data
	}

	#[test]
	fn test_check_rejects_fraction() {
		let data = words_of(&[1.5f64]);
		assert!(numeric(NumericArrayType::Real64, NumericArrayType::Int32, ConvertMethod::Check, 0.0, &data, 1)
			.is_none());
	}

	#[test]
	fn test_check_accepts_within_tolerance() {
		let data = words_of(&[2.0f64, 3.25]);
		let output =
			numeric(NumericArrayType::Real64, NumericArrayType::Int32, ConvertMethod::Check, 0.5, &data, 2)
				.unwrap();
		assert_eq!(read_slice::<i32>(&output, 2), vec![2, 3]);
	}

	#[test]
	fn test_clip_coerce_saturates() {
		let data = words_of(&[-5i32, 300]);
		let output =
			numeric(NumericArrayType::Int32, NumericArrayType::UInt8, ConvertMethod::ClipCoerce, 0.0, &data, 2)
				.unwrap();
		assert_eq!(read_slice::<u8>(&output, 2), vec![0, 255]);
	}

	#[test]
	fn test_check_rejects_out_of_range() {
		let data = words_of(&[300i32]);
		assert!(numeric(NumericArrayType::Int32, NumericArrayType::UInt8, ConvertMethod::Check, 0.0, &data, 1)
			.is_none());
	}

	#[test]
	fn test_image_rescales_and_deinterleaves() {
		let source = ImageObject {
			type_code: ImageType::Byte.to_raw(),
			slices: 0,
			rows: 1,
			columns: 2,
			channels: 2,
			color_space: -1,
			interleaved: true,
			length: 4,
			data: words_of(&[0u8, 255, 51, 102]),
		};
		let output = image(&source, ImageType::Real64, false).unwrap();
		assert_eq!(read_slice::<f64>(&output.data, 4), vec![0.0, 0.2, 1.0, 0.4]);
		assert!(!output.interleaved);
	}
}
