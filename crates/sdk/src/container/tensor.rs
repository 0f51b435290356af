// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	ffi::c_void,
	ptr::{null, null_mut},
	slice,
};

use hostlink_abi::{
	constants::HOST_OK,
	data::{ArgumentFFI, TensorFFI},
};
use hostlink_type::{ArgumentType, Error, Result, TensorType, error::ContainerType};
use tracing::{debug, instrument, warn};

use super::{BufferInterface, ContainerKind, GenericTensor};
use crate::host::{self, Host};

/// Dense multi-dimensional array of integers, reals or complex numbers
pub enum TensorContainer {}

impl ContainerKind for TensorContainer {
	type Raw = TensorFFI;

	const TYPE: ContainerType = ContainerType::Tensor;
	const ARGUMENT_TYPE: ArgumentType = ArgumentType::Tensor;
	const SHAREABLE: bool = true;

	fn clone_raw(host: &Host, raw: *mut TensorFFI) -> *mut TensorFFI {
		let mut output = null_mut();
		if (host.tensor().clone)(raw, &mut output) != HOST_OK {
			return null_mut();
		}
		output
	}

	fn free_raw(host: &Host, raw: *mut TensorFFI) {
		(host.tensor().free)(raw)
	}

	fn disown_raw(host: &Host, raw: *mut TensorFFI) {
		(host.tensor().disown)(raw)
	}

	fn share_count_raw(host: &Host, raw: *mut TensorFFI) -> i64 {
		(host.tensor().share_count)(raw)
	}

	fn to_argument(raw: *mut TensorFFI) -> ArgumentFFI {
		ArgumentFFI::from_array(raw)
	}
}

impl GenericTensor {
	/// Allocate a zero-filled tensor owned by the library
	#[instrument(name = "container::tensor::new", level = "trace", skip_all, fields(%kind, ?dims))]
	pub fn new(kind: TensorType, dims: &[i64]) -> Result<Self> {
		let host = host::host()?;

		let mut raw = null_mut();
		let code = (host.tensor().new)(kind.to_raw(), dims.len() as i64, dims.as_ptr(), &mut raw);
		if code != HOST_OK || raw.is_null() {
			warn!(code, "host refused to allocate tensor");
			return Err(Error::Allocation {
				container: ContainerType::Tensor,
			});
		}

		debug!("allocated tensor");
		Ok(Self::owned_by_library(host, raw))
	}

	/// Element type, `None` if the host reports a tag outside [`TensorType`]
	pub fn element_type(&self) -> Option<TensorType> {
		TensorType::from_raw(self.type_code())
	}
}

impl BufferInterface for GenericTensor {
	fn rank(&self) -> i64 {
		self.query(0, |host, raw| (host.tensor().rank)(raw))
	}

	fn dimensions(&self) -> Cow<'_, [i64]> {
		let rank = self.rank();
		let dims = self.query(null(), |host, raw| (host.tensor().dimensions)(raw));
		if dims.is_null() || rank <= 0 {
			return Cow::Borrowed(&[]);
		}
		// SAFETY: the host keeps `rank` extents alive for as long as the tensor exists
		Cow::Borrowed(unsafe { slice::from_raw_parts(dims, rank as usize) })
	}

	fn flattened_length(&self) -> i64 {
		self.query(0, |host, raw| (host.tensor().flattened_length)(raw))
	}

	fn type_code(&self) -> i64 {
		self.query(0, |host, raw| (host.tensor().type_code)(raw))
	}

	fn raw_data(&self) -> *mut c_void {
		self.query(null_mut(), |host, raw| (host.tensor().data)(raw))
	}
}
