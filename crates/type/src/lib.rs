// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Types shared by every hostlink library
//!
//! - [`kind`]: the closed sets of element and argument type tags the host understands
//! - [`Complex`] and the element traits binding native Rust types to those tags
//! - [`Error`] and the process-wide [`registry`] of named error codes

// #![cfg_attr(not(debug_assertions), deny(warnings))]

mod complex;
mod element;
pub mod error;
pub mod kind;

pub use complex::{Complex, Complex32, Complex64};
pub use element::{ImageElement, NumericArrayElement, TensorElement};
pub use error::{ContainerType, Error, registry};
pub use kind::{ArgumentType, ColorSpace, ConvertMethod, ImageType, NumericArrayType, TensorType};

pub type Result<T> = std::result::Result<T, Error>;
