// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use hostlink_abi::data::ArgumentFFI;
use hostlink_sdk::{
	BufferInterface, ColorSpace, Complex64, ConvertMethod, Error, GenericImage, GenericNumericArray, GenericTensor,
	Image, ImageInterface, ImageType, NumericArray, NumericArrayType, Ownership, Passing, Tensor, TensorType,
	registry,
};
use hostlink_type::error::ContainerType;

#[test]
fn test_create_reports_kind_and_dimensions() {
	let host = common::setup();

	let tensor = GenericTensor::new(TensorType::Real, &[2, 3]).unwrap();
	assert_eq!(tensor.element_type(), Some(TensorType::Real));
	assert_eq!(tensor.rank(), 2);
	assert_eq!(tensor.dimensions().as_ref(), &[2, 3]);
	assert_eq!(tensor.flattened_length(), 6);
	assert_eq!(tensor.owner(), Ownership::Library);

	let array = GenericNumericArray::new(NumericArrayType::UInt16, &[4, 1, 5]).unwrap();
	assert_eq!(array.element_type(), Some(NumericArrayType::UInt16));
	assert_eq!(array.flattened_length(), 20);

	drop(tensor);
	drop(array);
	assert_eq!(host.live_count(), 0);
	assert_eq!(host.stats().allocations, 2);
	assert_eq!(host.stats().frees, 2);
}

#[test]
fn test_create_scalar_tensor() {
	let _host = common::setup();

	let tensor = GenericTensor::new(TensorType::Integer, &[]).unwrap();
	assert_eq!(tensor.rank(), 0);
	assert_eq!(tensor.flattened_length(), 1);
}

#[test]
fn test_allocation_failure() {
	let host = common::setup();
	host.fail_next_allocation();

	let err = GenericTensor::new(TensorType::Integer, &[3]).unwrap_err();
	assert_eq!(
		err,
		Error::Allocation {
			container: ContainerType::Tensor
		}
	);
	assert_eq!(err.name(), "TensorNewError");
	assert!(err.code() < 0);

	// only the next allocation fails
	assert!(GenericTensor::new(TensorType::Integer, &[3]).is_ok());
}

#[test]
fn test_clone_is_deep() {
	let host = common::setup();

	let mut source = Tensor::from_slice(&[3], &[1i64, 2, 3]).unwrap();
	let copy = source.try_clone().unwrap();
	source.data_mut()[0] = 42;

	assert_eq!(source.data(), &[42, 2, 3]);
	assert_eq!(copy.data(), &[1, 2, 3]);
	assert_eq!(copy.owner(), Ownership::Library);
	assert_eq!(host.stats().clones, 1);
}

#[test]
fn test_clone_failure() {
	let host = common::setup();
	let tensor = GenericTensor::new(TensorType::Real, &[2]).unwrap();

	host.fail_next_clone();
	assert_eq!(
		tensor.try_clone().unwrap_err(),
		Error::Clone {
			container: ContainerType::Tensor
		}
	);
}

#[test]
fn test_automatic_drop_frees() {
	let host = common::setup();
	let raw = host.tensor(&[2], &[1i64, 2]);

	let tensor = unsafe { GenericTensor::from_raw(raw, Passing::Automatic) }.unwrap();
	assert_eq!(tensor.owner(), Ownership::Library);
	drop(tensor);

	assert!(!host.is_live(raw));
	assert_eq!(host.stats().frees, 1);
}

#[test]
fn test_automatic_pass_as_result_does_not_free() {
	let host = common::setup();
	let raw = host.tensor(&[2], &[1i64, 2]);

	let tensor = unsafe { GenericTensor::from_raw(raw, Passing::Automatic) }.unwrap();
	let mut result = ArgumentFFI::empty();
	tensor.pass_as_result(&mut result).unwrap();

	assert_eq!(unsafe { result.tensor }, raw);
	assert!(host.is_live(raw));
	assert_eq!(host.stats().frees, 0);
	assert_eq!(host.stats().double_frees, 0);
}

#[test]
fn test_manual_and_constant_keep_handle() {
	let host = common::setup();
	let raw = host.numeric_array(&[2], &[1u8, 2]);

	drop(unsafe { GenericNumericArray::from_raw(raw, Passing::Manual) }.unwrap());
	drop(unsafe { GenericNumericArray::from_raw(raw, Passing::Constant) }.unwrap());

	assert!(host.is_live(raw));
	assert_eq!(host.stats().frees, 0);
	assert_eq!(host.stats().disowns, 0);
}

#[test]
fn test_shared_clones_exactly_once() {
	let host = common::setup();
	let raw = host.tensor(&[3], &[1.0f64, 2.0, 3.0]);

	let tensor = unsafe { GenericTensor::from_raw(raw, Passing::Shared) }.unwrap();
	assert_eq!(host.stats().clones, 1);
	assert_ne!(tensor.raw(), raw);
	assert_eq!(tensor.owner(), Ownership::Shared);

	let copy = tensor.raw();
	drop(tensor);

	assert_eq!(host.stats().clones, 1);
	assert_eq!(host.stats().disowns, 1);
	assert_eq!(host.stats().frees, 0);
	assert!(!host.is_live(copy));
	assert!(host.is_live(raw));
}

#[test]
fn test_shared_disown_keeps_other_shares() {
	let host = common::setup();
	let raw = host.image::<u8>(1, 1, 1, ColorSpace::Gray, true, &[9]);

	let image = unsafe { GenericImage::from_raw(raw, Passing::Shared) }.unwrap();
	host.set_share_count(image.raw(), 2);
	assert_eq!(image.share_count(), 2);

	let copy = image.raw();
	drop(image);
	assert!(host.is_live(copy));
	assert_eq!(host.share_count(copy), 1);
}

#[test]
fn test_shared_pass_as_result_does_not_release() {
	let host = common::setup();
	let raw = host.tensor(&[1], &[7i64]);

	let tensor = unsafe { GenericTensor::from_raw(raw, Passing::Shared) }.unwrap();
	let mut result = ArgumentFFI::empty();
	tensor.pass_as_result(&mut result).unwrap();

	assert!(host.is_live(unsafe { result.tensor }));
	assert_eq!(host.stats().disowns, 0);
	assert_eq!(host.stats().double_frees, 0);
}

#[test]
fn test_null_handle_is_invalid() {
	let _host = common::setup();

	let err = unsafe { GenericTensor::from_raw(std::ptr::null_mut(), Passing::Automatic) }.unwrap_err();
	assert_eq!(
		err,
		Error::InvalidHandle {
			container: ContainerType::Tensor
		}
	);
}

#[test]
fn test_abandoned_container_is_inert() {
	let host = common::setup();
	let mut tensor = GenericTensor::new(TensorType::Integer, &[2]).unwrap();

	let raw = tensor.abandon();
	assert!(tensor.is_null());
	assert_eq!(tensor.rank(), 0);
	assert_eq!(tensor.share_count(), 0);
	assert!(tensor.try_clone().is_err());
	drop(tensor);

	assert!(host.is_live(raw));
}

#[test]
fn test_typed_from_generic_checks_kind() {
	let host = common::setup();
	let raw = host.tensor(&[2], &[1.5f64, 2.5]);
	let generic = unsafe { GenericTensor::from_raw(raw, Passing::Manual) }.unwrap();

	let err = Tensor::<i64>::try_from(generic).unwrap_err();
	assert_eq!(
		err,
		Error::TypeMismatch {
			container: ContainerType::Tensor,
			expected: TensorType::Integer.to_string(),
			actual: TensorType::Real.to_string(),
		}
	);

	let generic = unsafe { GenericTensor::from_raw(raw, Passing::Manual) }.unwrap();
	let typed = Tensor::<f64>::try_from(generic).unwrap();
	assert_eq!(typed.data(), &[1.5, 2.5]);
}

#[test]
fn test_typed_from_slice_size() {
	let _host = common::setup();

	let err = NumericArray::from_slice(&[2, 2], &[1i32, 2, 3]).unwrap_err();
	assert_eq!(
		err,
		Error::Size {
			container: ContainerType::NumericArray,
			expected: 4,
			actual: 3,
		}
	);
}

#[test]
fn test_complex_tensor() {
	let _host = common::setup();

	let tensor = Tensor::from_slice(&[2], &[Complex64::new(1.0, -1.0), Complex64::new(0.0, 2.0)]).unwrap();
	assert_eq!(tensor.element_type(), Some(TensorType::Complex));
	assert_eq!(tensor.data()[1].im, 2.0);
}

#[test]
fn test_numeric_array_convert() {
	let host = common::setup();
	let array = NumericArray::from_slice(&[3], &[1.4f64, 2.6, -3.0]).unwrap();

	let rounded = array.convert::<i16>(ConvertMethod::Round, 0.0).unwrap();
	assert_eq!(rounded.data(), &[1, 3, -3]);
	assert_eq!(rounded.owner(), Ownership::Library);
	assert_eq!(host.stats().conversions, 1);

	let err = array.convert::<i16>(ConvertMethod::Check, 0.0).unwrap_err();
	assert_eq!(err.name(), "NumericArrayConversionError");

	let clipped = array.convert::<u8>(ConvertMethod::ClipRound, 0.0).unwrap();
	assert_eq!(clipped.data(), &[1, 3, 0]);
}

#[test]
fn test_conversion_rejected_by_host() {
	let host = common::setup();
	let array = GenericNumericArray::new(NumericArrayType::Int32, &[2]).unwrap();

	host.fail_conversions(true);
	let err = array.convert(NumericArrayType::Real64, ConvertMethod::Coerce, 0.0).unwrap_err();
	assert_eq!(
		err,
		Error::Conversion {
			container: ContainerType::NumericArray,
			target: NumericArrayType::Real64.to_string(),
		}
	);
}

#[test]
fn test_image_metadata() {
	let _host = common::setup();

	let image = GenericImage::new(4, 3, 4, ImageType::Byte, ColorSpace::Rgb, true).unwrap();
	assert_eq!(image.rows(), 3);
	assert_eq!(image.columns(), 4);
	assert_eq!(image.channels(), 4);
	assert_eq!(image.slices(), 0);
	assert!(!image.is_3d());
	assert!(image.has_alpha_channel());
	assert!(image.is_interleaved());
	assert_eq!(image.color_space(), ColorSpace::Rgb);
	assert_eq!(image.element_type(), Some(ImageType::Byte));
	assert_eq!(image.rank(), 3);
	assert_eq!(image.dimensions().as_ref(), &[3, 4, 4]);
	assert_eq!(image.flattened_length(), 48);

	let volume = GenericImage::new_3d(2, 4, 3, 1, ImageType::Real32, ColorSpace::Gray, false).unwrap();
	assert!(volume.is_3d());
	assert!(!volume.has_alpha_channel());
	assert_eq!(volume.dimensions().as_ref(), &[2, 3, 4, 1]);
	assert_eq!(volume.flattened_length(), 24);
}

#[test]
fn test_image_pixels_and_convert() {
	let _host = common::setup();

	// 1x2 image, two channels, interleaved
	let image = Image::from_slice(&[1, 2, 2], ColorSpace::Undefined, true, &[0u8, 255, 51, 102]).unwrap();
	assert_eq!(image.get(0, 1, 0), Some(51));
	assert_eq!(image.get(0, 0, 1), Some(255));
	assert_eq!(image.get(1, 0, 0), None);

	let planar = image.convert::<f64>(false).unwrap();
	assert!(!planar.is_interleaved());
	assert_eq!(planar.data(), &[0.0, 0.2, 1.0, 0.4]);
	assert_eq!(planar.get(0, 1, 1), Some(0.4));

	let bytes = image.convert_type(ImageType::Bit16).unwrap();
	assert!(bytes.is_interleaved());
	assert_eq!(bytes.element_type(), Some(ImageType::Bit16));
}

#[test]
fn test_error_codes_are_registered() {
	let err = Error::UnsupportedElementKind {
		container: ContainerType::Image,
		code: 99,
	};
	let entry = registry::find_by_id(err.code()).unwrap();
	assert_eq!(entry.name, "ImageElementKindError");
}
