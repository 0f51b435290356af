// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for hostlink libraries
//!
//! This crate provides the stable C ABI a host runtime exposes to libraries: opaque
//! handle types for the buffers it allocates, the flat argument representation used
//! for library function calls, and the callback tables a library uses to create,
//! clone, inspect and release host-owned memory.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod callbacks;
pub mod constants;
pub mod data;

pub use callbacks::*;
pub use constants::*;
pub use data::*;
