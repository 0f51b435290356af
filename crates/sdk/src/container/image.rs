// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, ffi::c_void, ptr::null_mut};

use hostlink_abi::{
	constants::HOST_OK,
	data::{ArgumentFFI, ImageFFI},
};
use hostlink_type::{ArgumentType, ColorSpace, Error, ImageType, Result, error::ContainerType};
use tracing::{debug, instrument, warn};

use super::{BufferInterface, ContainerKind, GenericImage, ImageInterface};
use crate::host::{self, Host};

/// 2D or 3D raster image
pub enum ImageContainer {}

impl ContainerKind for ImageContainer {
	type Raw = ImageFFI;

	const TYPE: ContainerType = ContainerType::Image;
	const ARGUMENT_TYPE: ArgumentType = ArgumentType::Image;
	const SHAREABLE: bool = true;

	fn clone_raw(host: &Host, raw: *mut ImageFFI) -> *mut ImageFFI {
		let mut output = null_mut();
		if (host.image().clone)(raw, &mut output) != HOST_OK {
			return null_mut();
		}
		output
	}

	fn free_raw(host: &Host, raw: *mut ImageFFI) {
		(host.image().free)(raw)
	}

	fn disown_raw(host: &Host, raw: *mut ImageFFI) {
		(host.image().disown)(raw)
	}

	fn share_count_raw(host: &Host, raw: *mut ImageFFI) -> i64 {
		(host.image().share_count)(raw)
	}

	fn to_argument(raw: *mut ImageFFI) -> ArgumentFFI {
		ArgumentFFI::from_image(raw)
	}
}

fn allocation_error(code: i32) -> Error {
	warn!(code, "host refused to allocate image");
	Error::Allocation {
		container: ContainerType::Image,
	}
}

impl GenericImage {
	/// Allocate a zero-filled 2D image owned by the library
	#[instrument(name = "container::image::new", level = "trace")]
	pub fn new(
		width: i64,
		height: i64,
		channels: i64,
		kind: ImageType,
		color_space: ColorSpace,
		interleaved: bool,
	) -> Result<Self> {
		let host = host::host()?;

		let mut raw = null_mut();
		let code = (host.image().new_2d)(
			width,
			height,
			channels,
			kind.to_raw(),
			color_space.to_raw(),
			interleaved as i32,
			&mut raw,
		);
		if code != HOST_OK || raw.is_null() {
			return Err(allocation_error(code));
		}

		debug!("allocated image");
		Ok(Self::owned_by_library(host, raw))
	}

	/// Allocate a zero-filled 3D image owned by the library
	#[instrument(name = "container::image::new_3d", level = "trace")]
	pub fn new_3d(
		slices: i64,
		width: i64,
		height: i64,
		channels: i64,
		kind: ImageType,
		color_space: ColorSpace,
		interleaved: bool,
	) -> Result<Self> {
		let host = host::host()?;

		let mut raw = null_mut();
		let code = (host.image().new_3d)(
			slices,
			width,
			height,
			channels,
			kind.to_raw(),
			color_space.to_raw(),
			interleaved as i32,
			&mut raw,
		);
		if code != HOST_OK || raw.is_null() {
			return Err(allocation_error(code));
		}

		debug!("allocated 3D image");
		Ok(Self::owned_by_library(host, raw))
	}

	pub fn element_type(&self) -> Option<ImageType> {
		ImageType::from_raw(self.type_code() as i32)
	}

	/// Copy into a new library-owned image with another pixel type and interleaving
	#[instrument(name = "container::image::convert", level = "trace", skip(self))]
	pub fn convert(&self, target: ImageType, interleaved: bool) -> Result<Self> {
		let raw = self.raw_checked()?;

		let output = (self.host().image().convert)(raw, target.to_raw(), interleaved as i32);
		if output.is_null() {
			warn!("host rejected image conversion");
			return Err(Error::Conversion {
				container: ContainerType::Image,
				target: target.to_string(),
			});
		}

		debug!("converted image");
		Ok(Self::owned_by_library(*self.host(), output))
	}

	/// Like [`convert`](Self::convert), keeping the current interleaving
	pub fn convert_type(&self, target: ImageType) -> Result<Self> {
		self.convert(target, self.is_interleaved())
	}
}

impl BufferInterface for GenericImage {
	/// Number of axes including the channel axis
	fn rank(&self) -> i64 {
		self.query(0, |host, raw| (host.image().rank)(raw) + 1)
	}

	fn dimensions(&self) -> Cow<'_, [i64]> {
		if self.is_null() {
			return Cow::Borrowed(&[]);
		}

		let mut dims = Vec::with_capacity(4);
		if self.is_3d() {
			dims.push(self.slices());
		}
		dims.push(self.rows());
		dims.push(self.columns());
		dims.push(self.channels());
		Cow::Owned(dims)
	}

	fn flattened_length(&self) -> i64 {
		self.query(0, |host, raw| (host.image().flattened_length)(raw))
	}

	fn type_code(&self) -> i64 {
		self.query(0, |host, raw| (host.image().type_code)(raw) as i64)
	}

	fn raw_data(&self) -> *mut c_void {
		self.query(null_mut(), |host, raw| (host.image().data)(raw))
	}
}

impl ImageInterface for GenericImage {
	fn rows(&self) -> i64 {
		self.query(0, |host, raw| (host.image().rows)(raw))
	}

	fn columns(&self) -> i64 {
		self.query(0, |host, raw| (host.image().columns)(raw))
	}

	fn slices(&self) -> i64 {
		self.query(0, |host, raw| (host.image().slices)(raw))
	}

	fn channels(&self) -> i64 {
		self.query(0, |host, raw| (host.image().channels)(raw))
	}

	fn color_space(&self) -> ColorSpace {
		let code = self.query(ColorSpace::Undefined.to_raw(), |host, raw| (host.image().color_space)(raw));
		ColorSpace::from_raw(code).unwrap_or_default()
	}

	fn has_alpha_channel(&self) -> bool {
		self.query(false, |host, raw| (host.image().alpha_channel)(raw) != 0)
	}

	fn is_interleaved(&self) -> bool {
		self.query(false, |host, raw| (host.image().interleaved)(raw) != 0)
	}
}
