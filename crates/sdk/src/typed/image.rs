// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{marker::PhantomData, ops::Deref};

use hostlink_type::{ColorSpace, Error, ImageElement, ImageType, Result, error::ContainerType};

use super::{element_count, view, view_mut};
use crate::container::{BufferInterface, GenericImage, ImageInterface};

/// Image with `T` channel values
pub struct Image<T: ImageElement> {
	inner: GenericImage,
	_element: PhantomData<T>,
}

impl<T: ImageElement> Image<T> {
	/// Allocate a zero-filled 2D image owned by the library
	pub fn new(width: i64, height: i64, channels: i64, color_space: ColorSpace, interleaved: bool) -> Result<Self> {
		let inner = GenericImage::new(width, height, channels, T::KIND, color_space, interleaved)?;
		Ok(Self::from_generic_unchecked(inner))
	}

	/// Allocate a zero-filled 3D image owned by the library
	pub fn new_3d(
		slices: i64,
		width: i64,
		height: i64,
		channels: i64,
		color_space: ColorSpace,
		interleaved: bool,
	) -> Result<Self> {
		let inner = GenericImage::new_3d(slices, width, height, channels, T::KIND, color_space, interleaved)?;
		Ok(Self::from_generic_unchecked(inner))
	}

	/// Allocate an image from `[rows, columns, channels]` or `[slices, rows, columns, channels]`
	/// holding `values` in storage order
	pub fn from_slice(dims: &[i64], color_space: ColorSpace, interleaved: bool, values: &[T]) -> Result<Self> {
		if let Some(expected) = element_count(dims) {
			if expected != values.len() {
				return Err(Error::Size {
					container: ContainerType::Image,
					expected,
					actual: values.len(),
				});
			}
		}

		let mut result = match dims {
			&[rows, columns, channels] => Self::new(columns, rows, channels, color_space, interleaved)?,
			&[slices, rows, columns, channels] => {
				Self::new_3d(slices, columns, rows, channels, color_space, interleaved)?
			}
			_ => {
				return Err(Error::Allocation {
					container: ContainerType::Image,
				});
			}
		};
		result.data_mut().copy_from_slice(values);
		Ok(result)
	}

	pub(crate) fn from_generic_unchecked(inner: GenericImage) -> Self {
		Self {
			inner,
			_element: PhantomData,
		}
	}

	pub fn data(&self) -> &[T] {
		// SAFETY: the pixel tag was checked against `T` and the buffer lives as long as `self`
		unsafe { view(self.inner.raw_data(), self.inner.flattened_length()) }
	}

	pub fn data_mut(&mut self) -> &mut [T] {
		// SAFETY: as in `data`, and `&mut self` excludes other views
		unsafe { view_mut(self.inner.raw_data(), self.inner.flattened_length()) }
	}

	/// Channel value of a 2D image at 0-based coordinates
	pub fn get(&self, row: i64, column: i64, channel: i64) -> Option<T> {
		let (rows, columns, channels) = (self.inner.rows(), self.inner.columns(), self.inner.channels());
		if self.inner.is_3d() || !(0..rows).contains(&row) || !(0..columns).contains(&column) {
			return None;
		}
		if !(0..channels).contains(&channel) {
			return None;
		}

		let pixel = row * columns + column;
		let index = if self.inner.is_interleaved() {
			pixel * channels + channel
		} else {
			channel * rows * columns + pixel
		};
		self.data().get(index as usize).copied()
	}

	pub fn try_clone(&self) -> Result<Self> {
		Ok(Self::from_generic_unchecked(self.inner.try_clone()?))
	}

	/// Copy into a new library-owned image of `U` channel values
	pub fn convert<U: ImageElement>(&self, interleaved: bool) -> Result<Image<U>> {
		let converted = self.inner.convert(U::KIND, interleaved)?;
		Ok(Image::from_generic_unchecked(converted))
	}

	pub fn into_generic(self) -> GenericImage {
		self.inner
	}
}

impl<T: ImageElement> TryFrom<GenericImage> for Image<T> {
	type Error = Error;

	fn try_from(value: GenericImage) -> Result<Self> {
		value.raw_checked()?;

		let code = value.type_code();
		match i32::try_from(code).ok().and_then(ImageType::from_raw) {
			Some(kind) if kind == T::KIND => Ok(Self::from_generic_unchecked(value)),
			Some(kind) => Err(Error::TypeMismatch {
				container: ContainerType::Image,
				expected: T::KIND.to_string(),
				actual: kind.to_string(),
			}),
			None => Err(Error::UnsupportedElementKind {
				container: ContainerType::Image,
				code,
			}),
		}
	}
}

impl<T: ImageElement> From<Image<T>> for GenericImage {
	fn from(value: Image<T>) -> Self {
		value.inner
	}
}

impl<T: ImageElement> Deref for Image<T> {
	type Target = GenericImage;

	fn deref(&self) -> &Self::Target {
		&self.inner
	}
}

impl<T: ImageElement> std::fmt::Debug for Image<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Image").field("kind", &T::KIND).field("inner", &self.inner).finish()
	}
}
