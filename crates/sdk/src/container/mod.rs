// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Owning wrappers around host handles
//!
//! A [`Container`] pairs a raw handle with the [`Ownership`] its passing policy
//! assigned to it. Dropping the container applies the matching [`Release`] action,
//! so a handle is freed exactly when the library is responsible for it.

mod data_list;
mod image;
mod interface;
mod numeric_array;
mod tensor;

use std::{fmt, marker::PhantomData, ptr::null_mut};

pub use data_list::DataListContainer;
use hostlink_abi::data::ArgumentFFI;
use hostlink_type::{ArgumentType, Error, Result, error::ContainerType};
pub use image::ImageContainer;
pub use interface::{BufferInterface, ImageInterface};
pub use numeric_array::NumericArrayContainer;
pub use tensor::TensorContainer;
use tracing::{debug, instrument, trace, warn};

use crate::{
	host::{self, Host},
	policy::{Acquire, Ownership, Passing, Release},
};

pub type GenericTensor = Container<TensorContainer>;
pub type GenericNumericArray = Container<NumericArrayContainer>;
pub type GenericImage = Container<ImageContainer>;
pub type GenericDataList = Container<DataListContainer>;

/// A category of host container and the callbacks that manage its handles
pub trait ContainerKind: 'static {
	type Raw;

	const TYPE: ContainerType;
	const ARGUMENT_TYPE: ArgumentType;
	const SHAREABLE: bool;

	/// Deep copy, null if the host failed
	fn clone_raw(host: &Host, raw: *mut Self::Raw) -> *mut Self::Raw;

	fn free_raw(host: &Host, raw: *mut Self::Raw);

	fn disown_raw(host: &Host, raw: *mut Self::Raw);

	fn share_count_raw(host: &Host, raw: *mut Self::Raw) -> i64;

	fn to_argument(raw: *mut Self::Raw) -> ArgumentFFI;
}

/// RAII wrapper over one host handle
///
/// A container is never `Send` or `Sync`; host handles are used from the thread the
/// host called the library on.
pub struct Container<K: ContainerKind> {
	raw: *mut K::Raw,
	owner: Ownership,
	host: Host,
	_kind: PhantomData<K>,
}

impl<K: ContainerKind> Container<K> {
	/// Wrap a handle received from the host
	///
	/// A null handle fails with [`Error::InvalidHandle`]. [`Passing::Shared`] deep copies
	/// the handle first and fails with [`Error::NotShareable`] for kinds the host never
	/// shares.
	///
	/// # Safety
	/// A non-null `raw` must be a live handle of this container kind issued by the
	/// installed host. It must stay live for as long as `passing` leaves it with the
	/// host, and must not be released elsewhere when `passing` makes the library its
	/// owner.
	///
	/// ```compile_fail
	/// # use hostlink_sdk::{GenericTensor, Passing};
	/// let _ = GenericTensor::from_raw(std::ptr::null_mut(), Passing::Manual);
	/// ```
	#[instrument(name = "container::from_raw", level = "trace", skip_all, fields(container = %K::TYPE, %passing))]
	pub unsafe fn from_raw(raw: *mut K::Raw, passing: Passing) -> Result<Self> {
		let host = host::host()?;
		Self::from_raw_with(host, raw, passing)
	}

	pub(crate) fn from_raw_with(host: Host, raw: *mut K::Raw, passing: Passing) -> Result<Self> {
		if raw.is_null() {
			return Err(Error::InvalidHandle {
				container: K::TYPE,
			});
		}

		if passing == Passing::Shared && !K::SHAREABLE {
			return Err(Error::NotShareable {
				container: K::TYPE,
			});
		}

		let acquire = passing.acquire();
		let raw = match acquire {
			Acquire::Adopt => raw,
			Acquire::Clone => clone_handle::<K>(&host, raw)?,
		};

		let owner = passing.owner();
		trace!(?acquire, ?owner, "acquired handle");

		Ok(Self {
			raw,
			owner,
			host,
			_kind: PhantomData,
		})
	}

	/// Wrap a handle the library just obtained from the host
	pub(crate) fn owned_by_library(host: Host, raw: *mut K::Raw) -> Self {
		Self {
			raw,
			owner: Ownership::Library,
			host,
			_kind: PhantomData,
		}
	}

	/// Deep copy owned by the library, whatever this container's ownership
	#[instrument(name = "container::try_clone", level = "trace", skip_all, fields(container = %K::TYPE))]
	pub fn try_clone(&self) -> Result<Self> {
		let raw = self.raw_checked()?;
		let cloned = clone_handle::<K>(&self.host, raw)?;
		Ok(Self::owned_by_library(self.host, cloned))
	}

	/// Number of live shares of the handle, 0 for kinds the host never shares
	pub fn share_count(&self) -> i64 {
		if !K::SHAREABLE {
			return 0;
		}
		self.query(0, |host, raw| K::share_count_raw(host, raw))
	}

	pub fn owner(&self) -> Ownership {
		self.owner
	}

	pub fn raw(&self) -> *mut K::Raw {
		self.raw
	}

	pub fn is_null(&self) -> bool {
		self.raw.is_null()
	}

	/// Give up the handle without releasing it
	///
	/// The container is left empty and dropping it does nothing.
	pub fn abandon(&mut self) -> *mut K::Raw {
		std::mem::replace(&mut self.raw, null_mut())
	}

	/// Hand the handle to the host as the function result
	///
	/// The container never releases the handle afterwards.
	#[instrument(name = "container::pass_as_result", level = "trace", skip_all, fields(container = %K::TYPE))]
	pub fn pass_as_result(mut self, result: &mut ArgumentFFI) -> Result<()> {
		let raw = self.raw_checked()?;
		let owner = self.owner.after_pass();
		*result = K::to_argument(raw);
		self.abandon();
		debug!(?owner, "passed handle to host");
		Ok(())
	}

	pub(crate) fn host(&self) -> &Host {
		&self.host
	}

	pub(crate) fn raw_checked(&self) -> Result<*mut K::Raw> {
		if self.raw.is_null() {
			return Err(Error::InvalidHandle {
				container: K::TYPE,
			});
		}
		Ok(self.raw)
	}

	/// Run a host query, or return `default` for an empty container
	pub(crate) fn query<R>(&self, default: R, f: impl FnOnce(&Host, *mut K::Raw) -> R) -> R {
		if self.raw.is_null() {
			return default;
		}
		f(&self.host, self.raw)
	}
}

fn clone_handle<K: ContainerKind>(host: &Host, raw: *mut K::Raw) -> Result<*mut K::Raw> {
	let cloned = K::clone_raw(host, raw);
	if cloned.is_null() {
		warn!(container = %K::TYPE, "host failed to clone handle");
		return Err(Error::Clone {
			container: K::TYPE,
		});
	}
	debug!(container = %K::TYPE, "cloned handle");
	Ok(cloned)
}

impl<K: ContainerKind> Drop for Container<K> {
	fn drop(&mut self) {
		if self.raw.is_null() {
			return;
		}

		let release = self.owner.release();
		trace!(container = %K::TYPE, ?release, "releasing handle");
		match release {
			Release::Free => K::free_raw(&self.host, self.raw),
			Release::Disown => K::disown_raw(&self.host, self.raw),
			Release::Keep => {}
		}
	}
}

impl<K: ContainerKind> fmt::Debug for Container<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Container")
			.field("type", &K::TYPE)
			.field("raw", &self.raw)
			.field("owner", &self.owner)
			.finish()
	}
}
