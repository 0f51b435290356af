// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Host callback tables

mod data_store;
mod host;
mod image;
mod numeric_array;
mod report;
mod tensor;

pub use data_store::*;
pub use host::*;
pub use image::*;
pub use numeric_array::*;
pub use report::*;
pub use tensor::*;
