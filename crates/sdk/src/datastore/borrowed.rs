// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, marker::PhantomData, ops::Deref};

use hostlink_type::{Error, Result};

use crate::container::{
	Container, ContainerKind, GenericDataList, GenericImage, GenericNumericArray, GenericTensor,
};

pub type TensorRef<'a> = Borrowed<'a, GenericTensor>;
pub type NumericArrayRef<'a> = Borrowed<'a, GenericNumericArray>;
pub type ImageRef<'a> = Borrowed<'a, GenericImage>;
pub type DataListRef<'a> = Borrowed<'a, GenericDataList>;

/// Container stored in a data list, valid while the list is borrowed
///
/// The list keeps owning the handle. The view only gives shared access, so it can be
/// neither passed to the host nor moved into another list;
/// [`try_clone`](Container::try_clone) makes an independent copy.
///
/// ```compile_fail
/// # use hostlink_sdk::{GenericDataList, BufferInterface, Result, datastore::TensorRef};
/// fn outlive(list: GenericDataList) -> Result<i64> {
/// 	let tensor = list.front().unwrap().value_as::<TensorRef>()?;
/// 	drop(list);
/// 	Ok(tensor.rank())
/// }
/// ```
pub struct Borrowed<'a, C> {
	inner: C,
	_list: PhantomData<&'a GenericDataList>,
}

impl<C> Borrowed<'_, C> {
	pub(crate) fn new(inner: C) -> Self {
		Self {
			inner,
			_list: PhantomData,
		}
	}
}

impl<'a, K: ContainerKind> Borrowed<'a, Container<K>> {
	/// Checked typed view of the same handle, e.g. `typed::<Tensor<f64>>()`
	pub fn typed<T>(self) -> Result<Borrowed<'a, T>>
	where
		T: TryFrom<Container<K>, Error = Error>,
	{
		Ok(Borrowed::new(T::try_from(self.inner)?))
	}
}

impl<C> Deref for Borrowed<'_, C> {
	type Target = C;

	fn deref(&self) -> &C {
		&self.inner
	}
}

impl<C: fmt::Debug> fmt::Debug for Borrowed<'_, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Borrowed").field(&self.inner).finish()
	}
}
