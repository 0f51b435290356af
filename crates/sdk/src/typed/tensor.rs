// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{marker::PhantomData, ops::Deref};

use hostlink_type::{Error, Result, TensorElement, TensorType, error::ContainerType};

use super::{element_count, view, view_mut};
use crate::container::{BufferInterface, GenericTensor};

/// Tensor of `T` elements
pub struct Tensor<T: TensorElement> {
	inner: GenericTensor,
	_element: PhantomData<T>,
}

impl<T: TensorElement> Tensor<T> {
	/// Allocate a zero-filled tensor owned by the library
	pub fn new(dims: &[i64]) -> Result<Self> {
		Ok(Self::from_generic_unchecked(GenericTensor::new(T::KIND, dims)?))
	}

	/// Allocate a tensor owned by the library holding `values` in row-major order
	pub fn from_slice(dims: &[i64], values: &[T]) -> Result<Self> {
		if let Some(expected) = element_count(dims) {
			if expected != values.len() {
				return Err(Error::Size {
					container: ContainerType::Tensor,
					expected,
					actual: values.len(),
				});
			}
		}

		let mut result = Self::new(dims)?;
		result.data_mut().copy_from_slice(values);
		Ok(result)
	}

	pub(crate) fn from_generic_unchecked(inner: GenericTensor) -> Self {
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

	pub fn into_generic(self) -> GenericTensor {
		self.inner
	}
}

impl<T: TensorElement> TryFrom<GenericTensor> for Tensor<T> {
	type Error = Error;

	fn try_from(value: GenericTensor) -> Result<Self> {
		value.raw_checked()?;

		let code = value.type_code();
		match TensorType::from_raw(code) {
			Some(kind) if kind == T::KIND => Ok(Self::from_generic_unchecked(value)),
			Some(kind) => Err(Error::TypeMismatch {
				container: ContainerType::Tensor,
				expected: T::KIND.to_string(),
				actual: kind.to_string(),
			}),
			None => Err(Error::UnsupportedElementKind {
				container: ContainerType::Tensor,
				code,
			}),
		}
	}
}

impl<T: TensorElement> From<Tensor<T>> for GenericTensor {
	fn from(value: Tensor<T>) -> Self {
		value.inner
	}
}

impl<T: TensorElement> Deref for Tensor<T> {
	type Target = GenericTensor;

	fn deref(&self) -> &Self::Target {
		&self.inner
	}
}

impl<T: TensorElement> std::fmt::Debug for Tensor<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Tensor").field("kind", &T::KIND).field("inner", &self.inner).finish()
	}
}
