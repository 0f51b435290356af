// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Category of host container an error refers to
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerType {
	Tensor,
	NumericArray,
	Image,
	DataList,
}

pub(crate) struct ErrorNames {
	pub new: &'static str,
	pub clone: &'static str,
	pub init: &'static str,
	pub share: &'static str,
	pub conversion: &'static str,
	pub element_kind: &'static str,
	pub type_mismatch: &'static str,
	pub size: &'static str,
}

const TENSOR: ErrorNames = ErrorNames {
	new: "TensorNewError",
	clone: "TensorCloneError",
	init: "TensorInitError",
	share: "TensorShareError",
	conversion: "TensorConversionError",
	element_kind: "TensorElementKindError",
	type_mismatch: "TensorTypeError",
	size: "TensorSizeError",
};

const NUMERIC_ARRAY: ErrorNames = ErrorNames {
	new: "NumericArrayNewError",
	clone: "NumericArrayCloneError",
	init: "NumericArrayInitError",
	share: "NumericArrayShareError",
	conversion: "NumericArrayConversionError",
	element_kind: "NumericArrayElementKindError",
	type_mismatch: "NumericArrayTypeError",
	size: "NumericArraySizeError",
};

const IMAGE: ErrorNames = ErrorNames {
	new: "ImageNewError",
	clone: "ImageCloneError",
	init: "ImageInitError",
	share: "ImageShareError",
	conversion: "ImageConversionError",
	element_kind: "ImageElementKindError",
	type_mismatch: "ImageTypeError",
	size: "ImageSizeError",
};

const DATA_LIST: ErrorNames = ErrorNames {
	new: "DataListNewError",
	clone: "DataListCloneError",
	init: "DataListInitError",
	share: "DataListShareError",
	conversion: "DataListConversionError",
	element_kind: "DataListElementKindError",
	type_mismatch: "DataListTypeError",
	size: "DataListSizeError",
};

impl ContainerType {
	pub const ALL: [ContainerType; 4] = [ContainerType::Tensor, ContainerType::NumericArray, ContainerType::Image, ContainerType::DataList];

	pub(crate) fn error_names(&self) -> &'static ErrorNames {
		match self {
			ContainerType::Tensor => &TENSOR,
			ContainerType::NumericArray => &NUMERIC_ARRAY,
			ContainerType::Image => &IMAGE,
			ContainerType::DataList => &DATA_LIST,
		}
	}
}

impl Display for ContainerType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ContainerType::Tensor => f.write_str("tensor"),
			ContainerType::NumericArray => f.write_str("numeric array"),
			ContainerType::Image => f.write_str("image"),
			ContainerType::DataList => f.write_str("data list"),
		}
	}
}
