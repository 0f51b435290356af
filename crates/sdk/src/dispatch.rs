// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Run generic code at the element type a container carries at run time
//!
//! The element tag is read once and matched against the closed set of kinds; the
//! operation is then invoked exactly once at the matching native type. A tag outside
//! the set fails with [`Error::UnsupportedElementKind`] without invoking the operation,
//! and the container comes back untouched inside the [`DispatchError`].
//!
//! A native type can be valid in several categories (`i64` is both a tensor and a
//! numeric array element), so the category is chosen by which dispatcher is called.

use std::fmt;

use hostlink_type::{
	Complex32, Complex64, Error, ImageElement, ImageType, NumericArrayElement, NumericArrayType, Result,
	TensorElement, TensorType,
};
use tracing::trace;

use crate::{
	container::{
		BufferInterface, Container, ContainerKind, GenericImage, GenericNumericArray, GenericTensor, ImageContainer,
		NumericArrayContainer, TensorContainer,
	},
	typed::{Image, NumericArray, Tensor},
};

/// Failed dispatch
///
/// For an unknown element tag the container is handed back as it was passed in, so the
/// caller decides what happens to the handle. Converting into [`Error`] drops it, which
/// applies its release action.
pub struct DispatchError<K: ContainerKind> {
	error: Error,
	container: Option<Container<K>>,
}

impl<K: ContainerKind> DispatchError<K> {
	fn unsupported(container: Container<K>, code: i64) -> Self {
		Self {
			error: Error::UnsupportedElementKind {
				container: K::TYPE,
				code,
			},
			container: Some(container),
		}
	}

	fn operation(error: Error) -> Self {
		Self {
			error,
			container: None,
		}
	}

	pub fn error(&self) -> &Error {
		&self.error
	}

	/// The container that was not dispatched, `None` if the operation itself failed
	pub fn container(&self) -> Option<&Container<K>> {
		self.container.as_ref()
	}

	pub fn into_parts(self) -> (Error, Option<Container<K>>) {
		(self.error, self.container)
	}
}

impl<K: ContainerKind> From<DispatchError<K>> for Error {
	fn from(err: DispatchError<K>) -> Self {
		err.error
	}
}

impl<K: ContainerKind> fmt::Debug for DispatchError<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DispatchError").field("error", &self.error).field("container", &self.container).finish()
	}
}

impl<K: ContainerKind> fmt::Display for DispatchError<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.error, f)
	}
}

impl<K: ContainerKind> std::error::Error for DispatchError<K> {}

pub type DispatchResult<T, K> = std::result::Result<T, DispatchError<K>>;

/// Operation generic over the tensor element type
pub trait TensorOperation {
	type Output;

	fn apply<T: TensorElement>(self, tensor: Tensor<T>) -> Result<Self::Output>;
}

/// Operation generic over the numeric array element type
pub trait NumericArrayOperation {
	type Output;

	fn apply<T: NumericArrayElement>(self, array: NumericArray<T>) -> Result<Self::Output>;
}

/// Operation generic over the image channel type
pub trait ImageOperation {
	type Output;

	fn apply<T: ImageElement>(self, image: Image<T>) -> Result<Self::Output>;
}

pub fn dispatch_tensor<O: TensorOperation>(
	tensor: GenericTensor,
	operation: O,
) -> DispatchResult<O::Output, TensorContainer> {
	let code = tensor.type_code();
	trace!(code, "dispatching tensor");
	let Some(kind) = TensorType::from_raw(code) else {
		return Err(DispatchError::unsupported(tensor, code));
	};

	let result = match kind {
		TensorType::Integer => operation.apply(Tensor::<i64>::from_generic_unchecked(tensor)),
		TensorType::Real => operation.apply(Tensor::<f64>::from_generic_unchecked(tensor)),
		TensorType::Complex => operation.apply(Tensor::<Complex64>::from_generic_unchecked(tensor)),
	};
	result.map_err(DispatchError::operation)
}

pub fn dispatch_numeric_array<O: NumericArrayOperation>(
	array: GenericNumericArray,
	operation: O,
) -> DispatchResult<O::Output, NumericArrayContainer> {
	let code = array.type_code();
	trace!(code, "dispatching numeric array");
	let Some(kind) = i32::try_from(code).ok().and_then(NumericArrayType::from_raw) else {
		return Err(DispatchError::unsupported(array, code));
	};

	let result = match kind {
		NumericArrayType::Int8 => operation.apply(NumericArray::<i8>::from_generic_unchecked(array)),
		NumericArrayType::UInt8 => operation.apply(NumericArray::<u8>::from_generic_unchecked(array)),
		NumericArrayType::Int16 => operation.apply(NumericArray::<i16>::from_generic_unchecked(array)),
		NumericArrayType::UInt16 => operation.apply(NumericArray::<u16>::from_generic_unchecked(array)),
		NumericArrayType::Int32 => operation.apply(NumericArray::<i32>::from_generic_unchecked(array)),
		NumericArrayType::UInt32 => operation.apply(NumericArray::<u32>::from_generic_unchecked(array)),
		NumericArrayType::Int64 => operation.apply(NumericArray::<i64>::from_generic_unchecked(array)),
		NumericArrayType::UInt64 => operation.apply(NumericArray::<u64>::from_generic_unchecked(array)),
		NumericArrayType::Real32 => operation.apply(NumericArray::<f32>::from_generic_unchecked(array)),
		NumericArrayType::Real64 => operation.apply(NumericArray::<f64>::from_generic_unchecked(array)),
		NumericArrayType::Complex32 => operation.apply(NumericArray::<Complex32>::from_generic_unchecked(array)),
		NumericArrayType::Complex64 => operation.apply(NumericArray::<Complex64>::from_generic_unchecked(array)),
	};
	result.map_err(DispatchError::operation)
}

pub fn dispatch_image<O: ImageOperation>(
	image: GenericImage,
	operation: O,
) -> DispatchResult<O::Output, ImageContainer> {
	let code = image.type_code();
	trace!(code, "dispatching image");
	let Some(kind) = i32::try_from(code).ok().and_then(ImageType::from_raw) else {
		return Err(DispatchError::unsupported(image, code));
	};

	let result = match kind {
		ImageType::Bit => operation.apply(Image::<i8>::from_generic_unchecked(image)),
		ImageType::Byte => operation.apply(Image::<u8>::from_generic_unchecked(image)),
		ImageType::Bit16 => operation.apply(Image::<u16>::from_generic_unchecked(image)),
		ImageType::Real32 => operation.apply(Image::<f32>::from_generic_unchecked(image)),
		ImageType::Real64 => operation.apply(Image::<f64>::from_generic_unchecked(image)),
	};
	result.map_err(DispatchError::operation)
}
