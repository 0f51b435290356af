// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! FFI-safe handle and value types

mod argument;
mod complex;
mod handle;

pub use argument::*;
pub use complex::*;
pub use handle::*;
