// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_char;

use crate::data::{ArgumentFFI, DataStoreFFI, DataStoreNodeFFI};

/// Node list callbacks
///
/// Node lists cannot be shared, so there is no disown or share count entry.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct DataStoreCallbacks {
	/// Create an empty node list, null if the host refused
	pub new: extern "C" fn() -> *mut DataStoreFFI,

	/// Deep copy a node list including every nested container, null on failure
	pub copy: extern "C" fn(data_store: *mut DataStoreFFI) -> *mut DataStoreFFI,

	/// Release a node list and everything stored in it
	pub free: extern "C" fn(data_store: *mut DataStoreFFI),

	pub length: extern "C" fn(data_store: *mut DataStoreFFI) -> i64,

	/// First node, null for an empty list
	pub first_node: extern "C" fn(data_store: *mut DataStoreFFI) -> *mut DataStoreNodeFFI,

	/// Last node, null for an empty list
	pub last_node: extern "C" fn(data_store: *mut DataStoreFFI) -> *mut DataStoreNodeFFI,

	/// Successor of a node, null after the last one
	pub next_node: extern "C" fn(node: *mut DataStoreNodeFFI) -> *mut DataStoreNodeFFI,

	/// Name of a node
	///
	/// # Parameters
	/// - `node`: Node to inspect
	/// - `output`: Receives a NUL-terminated UTF-8 name, or null for a nameless node
	///
	/// # Returns
	/// - 0 on success, non-zero on failure
	pub node_name: extern "C" fn(node: *mut DataStoreNodeFFI, output: *mut *const c_char) -> i32,

	/// Argument type code (`ARGUMENT_*`) of the value stored in a node
	pub node_data_type: extern "C" fn(node: *mut DataStoreNodeFFI) -> i32,

	/// Value stored in a node
	///
	/// Containers returned this way remain owned by the node list.
	///
	/// # Returns
	/// - 0 on success, non-zero on failure
	pub node_data: extern "C" fn(node: *mut DataStoreNodeFFI, output: *mut ArgumentFFI) -> i32,

	/// Append a node at the tail
	///
	/// # Parameters
	/// - `data_store`: Target list
	/// - `name`: NUL-terminated UTF-8 name, null for a nameless node
	/// - `type_code`: Argument type code (`ARGUMENT_*`) of `value`
	/// - `value`: The value; containers are moved into the list, strings are copied
	///
	/// # Returns
	/// - 0 on success, non-zero if the host rejected the value
	pub add: extern "C" fn(
		data_store: *mut DataStoreFFI,
		name: *const c_char,
		type_code: i32,
		value: ArgumentFFI,
	) -> i32,
}
