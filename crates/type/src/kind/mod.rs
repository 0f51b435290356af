// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Type tags understood by the host
//!
//! Every tag converts from its raw host code through `from_raw`, which returns `None`
//! for codes outside the known set, and back through `to_raw`.

mod argument;
mod convert;
mod image;
mod numeric_array;
mod tensor;

pub use argument::ArgumentType;
pub use convert::ConvertMethod;
pub use image::{ColorSpace, ImageType};
pub use numeric_array::NumericArrayType;
pub use tensor::TensorType;
