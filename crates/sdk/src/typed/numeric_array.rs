// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{marker::PhantomData, ops::Deref};

use hostlink_type::{ConvertMethod, Error, NumericArrayElement, NumericArrayType, Result, error::ContainerType};

use super::{element_count, view, view_mut};
use crate::container::{BufferInterface, GenericNumericArray};

/// Numeric array of `T` elements
pub struct NumericArray<T: NumericArrayElement> {
	inner: GenericNumericArray,
	_element: PhantomData<T>,
}

impl<T: NumericArrayElement> NumericArray<T> {
	/// Allocate a zero-filled numeric array owned by the library
	pub fn new(dims: &[i64]) -> Result<Self> {
		Ok(Self::from_generic_unchecked(GenericNumericArray::new(T::KIND, dims)?))
	}

	/// Allocate a numeric array owned by the library holding `values` in row-major order
	pub fn from_slice(dims: &[i64], values: &[T]) -> Result<Self> {
		if let Some(expected) = element_count(dims) {
			if expected != values.len() {
				return Err(Error::Size {
					container: ContainerType::NumericArray,
					expected,
					actual: values.len(),
				});
			}
		}

		let mut result = Self::new(dims)?;
		result.data_mut().copy_from_slice(values);
		Ok(result)
	}

	pub(crate) fn from_generic_unchecked(inner: GenericNumericArray) -> Self {
		Self {
			inner,
			_element: PhantomData,
		}
	}

	pub fn data(&self) -> &[T] {
		// SAFETY: the element tag was checked against `T` and the buffer lives as long as `self`
		unsafe { view(self.inner.raw_data(), self.inner.flattened_length()) }
	}

	pub fn data_mut(&mut self) -> &mut [T] {
		// SAFETY: as in `data`, and `&mut self` excludes other views
		unsafe { view_mut(self.inner.raw_data(), self.inner.flattened_length()) }
	}

	pub fn try_clone(&self) -> Result<Self> {
		Ok(Self::from_generic_unchecked(self.inner.try_clone()?))
	}

	/// Copy into a new library-owned array of `U` elements
	pub fn convert<U: NumericArrayElement>(&self, method: ConvertMethod, tolerance: f64) -> Result<NumericArray<U>> {
		let converted = self.inner.convert(U::KIND, method, tolerance)?;
		Ok(NumericArray::from_generic_unchecked(converted))
	}

	pub fn into_generic(self) -> GenericNumericArray {
		self.inner
	}
}

impl<T: NumericArrayElement> TryFrom<GenericNumericArray> for NumericArray<T> {
	type Error = Error;

	fn try_from(value: GenericNumericArray) -> Result<Self> {
		value.raw_checked()?;

		let code = value.type_code();
		match i32::try_from(code).ok().and_then(NumericArrayType::from_raw) {
			Some(kind) if kind == T::KIND => Ok(Self::from_generic_unchecked(value)),
			Some(kind) => Err(Error::TypeMismatch {
				container: ContainerType::NumericArray,
				expected: T::KIND.to_string(),
				actual: kind.to_string(),
			}),
			None => Err(Error::UnsupportedElementKind {
				container: ContainerType::NumericArray,
				code,
			}),
		}
	}
}

impl<T: NumericArrayElement> From<NumericArray<T>> for GenericNumericArray {
	fn from(value: NumericArray<T>) -> Self {
		value.inner
	}
}

impl<T: NumericArrayElement> Deref for NumericArray<T> {
	type Target = GenericNumericArray;

	fn deref(&self) -> &Self::Target {
		&self.inner
	}
}

impl<T: NumericArrayElement> std::fmt::Debug for NumericArray<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NumericArray").field("kind", &T::KIND).field("inner", &self.inner).finish()
	}
}
