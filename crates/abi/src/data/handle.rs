// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Opaque handles to host-owned allocations
//!
//! None of these types are ever dereferenced by a library. They only travel back
//! into the host through the callback tables.

/// Opaque multi-dimensional array owned by the host
///
/// Tensors and numeric arrays share this raw type. A raw `*mut ArrayFFI` alone
/// does not tell which of the two categories it belongs to; the category must be
/// known from context (argument position, node type code, ...).
#[repr(C)]
pub struct ArrayFFI {
	_private: [u8; 0],
}

/// Raw tensor handle
pub type TensorFFI = ArrayFFI;

/// Raw numeric array handle
pub type NumericArrayFFI = ArrayFFI;

/// Opaque image owned by the host
#[repr(C)]
pub struct ImageFFI {
	_private: [u8; 0],
}

/// Opaque heterogeneous node list owned by the host
#[repr(C)]
pub struct DataStoreFFI {
	_private: [u8; 0],
}

/// Opaque node inside a [`DataStoreFFI`]
#[repr(C)]
pub struct DataStoreNodeFFI {
	_private: [u8; 0],
}
