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
	data::{ArgumentFFI, NumericArrayFFI},
};
use hostlink_type::{ArgumentType, ConvertMethod, Error, NumericArrayType, Result, error::ContainerType};
use tracing::{debug, instrument, warn};

use super::{BufferInterface, ContainerKind, GenericNumericArray};
use crate::host::{self, Host};

/// Dense multi-dimensional array of any machine numeric type
pub enum NumericArrayContainer {}

impl ContainerKind for NumericArrayContainer {
	type Raw = NumericArrayFFI;

	const TYPE: ContainerType = ContainerType::NumericArray;
	const ARGUMENT_TYPE: ArgumentType = ArgumentType::NumericArray;
	const SHAREABLE: bool = true;

	fn clone_raw(host: &Host, raw: *mut NumericArrayFFI) -> *mut NumericArrayFFI {
		let mut output = null_mut();
		if (host.numeric_array().clone)(raw, &mut output) != HOST_OK {
			return null_mut();
		}
		output
	}

	fn free_raw(host: &Host, raw: *mut NumericArrayFFI) {
		(host.numeric_array().free)(raw)
	}

	fn disown_raw(host: &Host, raw: *mut NumericArrayFFI) {
		(host.numeric_array().disown)(raw)
	}

	fn share_count_raw(host: &Host, raw: *mut NumericArrayFFI) -> i64 {
		(host.numeric_array().share_count)(raw)
	}

	fn to_argument(raw: *mut NumericArrayFFI) -> ArgumentFFI {
		ArgumentFFI::from_array(raw)
	}
}

impl GenericNumericArray {
	/// Allocate a zero-filled numeric array owned by the library
	#[instrument(name = "container::numeric_array::new", level = "trace", skip_all, fields(%kind, ?dims))]
	pub fn new(kind: NumericArrayType, dims: &[i64]) -> Result<Self> {
		let host = host::host()?;

		let mut raw = null_mut();
		let code = (host.numeric_array().new)(kind.to_raw(), dims.len() as i64, dims.as_ptr(), &mut raw);
		if code != HOST_OK || raw.is_null() {
			warn!(code, "host refused to allocate numeric array");
			return Err(Error::Allocation {
				container: ContainerType::NumericArray,
			});
		}

		debug!("allocated numeric array");
		Ok(Self::owned_by_library(host, raw))
	}

	pub fn element_type(&self) -> Option<NumericArrayType> {
		NumericArrayType::from_raw(self.type_code() as i32)
	}

	/// Copy into a new library-owned array of another element type
	///
	/// `tolerance` only matters for the checking methods. The source is left untouched.
	#[instrument(name = "container::numeric_array::convert", level = "trace", skip_all, fields(%target, %method))]
	pub fn convert(&self, target: NumericArrayType, method: ConvertMethod, tolerance: f64) -> Result<Self> {
		let raw = self.raw_checked()?;

		let mut output = null_mut();
		let code =
			(self.host().numeric_array().convert)(raw, target.to_raw(), method.to_raw(), tolerance, &mut output);
		if code != HOST_OK || output.is_null() {
			warn!(code, "host rejected numeric array conversion");
			return Err(Error::Conversion {
				container: ContainerType::NumericArray,
				target: target.to_string(),
			});
		}

		debug!("converted numeric array");
		Ok(Self::owned_by_library(*self.host(), output))
	}
}

impl BufferInterface for GenericNumericArray {
	fn rank(&self) -> i64 {
		self.query(0, |host, raw| (host.numeric_array().rank)(raw))
	}

	fn dimensions(&self) -> Cow<'_, [i64]> {
		let rank = self.rank();
		let dims = self.query(null(), |host, raw| (host.numeric_array().dimensions)(raw));
		if dims.is_null() || rank <= 0 {
			return Cow::Borrowed(&[]);
		}
		// SAFETY: the host keeps `rank` extents alive for as long as the array exists
		Cow::Borrowed(unsafe { slice::from_raw_parts(dims, rank as usize) })
	}

	fn flattened_length(&self) -> i64 {
		self.query(0, |host, raw| (host.numeric_array().flattened_length)(raw))
	}

	fn type_code(&self) -> i64 {
		self.query(0, |host, raw| (host.numeric_array().type_code)(raw) as i64)
	}

	fn raw_data(&self) -> *mut c_void {
		self.query(null_mut(), |host, raw| (host.numeric_array().data)(raw))
	}
}
