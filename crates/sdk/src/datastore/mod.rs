// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Heterogeneous node lists
//!
//! A data list is an append-only, singly-linked sequence of nodes owned by the host.
//! Every node has an optional name, which need not be unique, and a value that is a
//! scalar, a string or another container (including another list).

mod borrowed;
mod node;
mod value;

use std::{
	ffi::c_char,
	ptr::{null, null_mut},
};

use hostlink_abi::{constants::HOST_OK, data::ArgumentFFI};
use hostlink_type::{ArgumentType, Error, Result, error::ContainerType};
pub use borrowed::{Borrowed, DataListRef, ImageRef, NumericArrayRef, TensorRef};
pub use node::{DataNode, Nodes};
use tracing::{debug, instrument, warn};
pub use value::{FromNode, NodeInput, NodeValue, Primitive};

use crate::{
	container::{Container, ContainerKind, GenericDataList},
	host, utf8,
};

impl GenericDataList {
	/// Create an empty list owned by the library
	#[instrument(name = "datastore::new", level = "trace")]
	pub fn new() -> Result<Self> {
		let host = host::host()?;

		let raw = (host.data_store().new)();
		if raw.is_null() {
			warn!("host refused to allocate data list");
			return Err(Error::Allocation {
				container: ContainerType::DataList,
			});
		}

		debug!("allocated data list");
		Ok(Self::owned_by_library(host, raw))
	}

	/// Number of nodes, asked from the host on every call
	pub fn length(&self) -> i64 {
		self.query(0, |host, raw| (host.data_store().length)(raw))
	}

	pub fn is_empty(&self) -> bool {
		self.length() == 0
	}

	pub fn iter(&self) -> Nodes<'_> {
		Nodes::new(self)
	}

	pub fn front(&self) -> Option<DataNode<'_>> {
		let raw = self.query(null_mut(), |host, raw| (host.data_store().first_node)(raw));
		DataNode::from_raw_with(*self.host(), raw).ok()
	}

	pub fn back(&self) -> Option<DataNode<'_>> {
		let raw = self.query(null_mut(), |host, raw| (host.data_store().last_node)(raw));
		DataNode::from_raw_with(*self.host(), raw).ok()
	}

	/// Names of all nodes in order
	pub fn names(&self) -> Result<Vec<Option<String>>> {
		self.iter().map(|node| node.name()).collect()
	}

	/// Values of all nodes in order
	pub fn values(&self) -> Result<Vec<NodeValue<'_>>> {
		self.iter().map(|node| node.value()).collect()
	}

	/// Append a nameless node
	pub fn push_back(&mut self, value: impl Into<NodeInput>) -> Result<()> {
		self.push_value(None, value.into())
	}

	/// Append a named node
	pub fn push_back_named(&mut self, name: &str, value: impl Into<NodeInput>) -> Result<()> {
		self.push_value(Some(name), value.into())
	}

	/// Append a value given as raw host handles
	///
	/// Raw arrays are rejected with [`Error::UnsupportedNodeType`] since tensors and
	/// numeric arrays share the raw handle type; use [`push_back_as`](Self::push_back_as).
	/// A null handle fails with [`Error::NullNode`]. Handles are moved into the list.
	pub fn push_primitive(&mut self, name: Option<&str>, value: Primitive<'_>) -> Result<()> {
		match value {
			Primitive::Boolean(value) => self.add(name, ArgumentType::Boolean, ArgumentFFI::from_boolean(value)),
			Primitive::Integer(value) => self.add(name, ArgumentType::Integer, ArgumentFFI::from_integer(value)),
			Primitive::Real(value) => self.add(name, ArgumentType::Real, ArgumentFFI::from_real(value)),
			Primitive::Complex(value) => {
				self.add(name, ArgumentType::Complex, ArgumentFFI::from_complex(value.into()))
			}
			Primitive::String(value) => self.add_string(name, value),
			Primitive::Array(_) => Err(Error::UnsupportedNodeType {
				code: ArgumentType::Undefined.to_raw(),
			}),
			Primitive::Image(raw) => {
				if raw.is_null() {
					return Err(Error::NullNode);
				}
				self.add(name, ArgumentType::Image, ArgumentFFI::from_image(raw))
			}
			Primitive::DataStore(raw) => {
				if raw.is_null() {
					return Err(Error::NullNode);
				}
				self.add(name, ArgumentType::DataStore, ArgumentFFI::from_data_store(raw))
			}
		}
	}

	/// Append a value given as raw host handles, stored as `kind`
	///
	/// This is the only way to store a raw array, whose container category `kind` must
	/// name; the host rejects a handle of another category. Any other value must match
	/// `kind` exactly.
	pub fn push_back_as(&mut self, name: Option<&str>, kind: ArgumentType, value: Primitive<'_>) -> Result<()> {
		let rejected = Error::UnsupportedNodeType {
			code: kind.to_raw(),
		};

		match value {
			Primitive::Array(_) if !kind.is_wrapper() => Err(rejected),
			Primitive::Array(raw) => {
				if raw.is_null() {
					return Err(Error::NullNode);
				}
				self.add(name, kind, ArgumentFFI::from_array(raw))
			}
			_ if value.argument_type() == Some(kind) => self.push_primitive(name, value),
			_ => Err(rejected),
		}
	}

	fn push_value(&mut self, name: Option<&str>, value: NodeInput) -> Result<()> {
		match value {
			NodeInput::Boolean(value) => self.add(name, ArgumentType::Boolean, ArgumentFFI::from_boolean(value)),
			NodeInput::Integer(value) => self.add(name, ArgumentType::Integer, ArgumentFFI::from_integer(value)),
			NodeInput::Real(value) => self.add(name, ArgumentType::Real, ArgumentFFI::from_real(value)),
			NodeInput::Complex(value) => {
				self.add(name, ArgumentType::Complex, ArgumentFFI::from_complex(value.into()))
			}
			NodeInput::String(value) => self.add_string(name, &value),
			NodeInput::Tensor(container) => self.add_container(name, container),
			NodeInput::NumericArray(container) => self.add_container(name, container),
			NodeInput::Image(container) => self.add_container(name, container),
			NodeInput::DataList(container) => self.add_container(name, container),
		}
	}

	fn add_string(&mut self, name: Option<&str>, value: &str) -> Result<()> {
		let value = utf8::to_c_string(value)?;
		// the host copies the string
		self.add(name, ArgumentType::Utf8String, ArgumentFFI::from_utf8_string(value.as_ptr() as *mut c_char))
	}

	/// Move a container into the list, which releases it from then on
	fn add_container<K: ContainerKind>(&mut self, name: Option<&str>, mut container: Container<K>) -> Result<()> {
		if container.is_null() {
			return Err(Error::NullNode);
		}
		self.add(name, K::ARGUMENT_TYPE, K::to_argument(container.raw()))?;
		container.abandon();
		Ok(())
	}

	#[instrument(name = "datastore::add", level = "trace", skip(self, value))]
	fn add(&mut self, name: Option<&str>, kind: ArgumentType, value: ArgumentFFI) -> Result<()> {
		let raw = self.raw_checked()?;
		if !kind.is_primitive() && !kind.is_wrapper() {
			return Err(Error::UnsupportedNodeType {
				code: kind.to_raw(),
			});
		}

		let name = name.map(utf8::to_c_string).transpose()?;
		let name_ptr = name.as_ref().map_or(null(), |name| name.as_ptr());

		let code = (self.host().data_store().add)(raw, name_ptr, kind.to_raw(), value);
		if code != HOST_OK {
			warn!(code, "host rejected data list node");
			return Err(Error::UnsupportedNodeType {
				code: kind.to_raw(),
			});
		}

		debug!("appended node");
		Ok(())
	}
}

impl<'a> IntoIterator for &'a GenericDataList {
	type Item = DataNode<'a>;
	type IntoIter = Nodes<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
