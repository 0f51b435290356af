// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	marker::PhantomData,
	ptr::{null, null_mut},
};

use hostlink_abi::{
	constants::HOST_OK,
	data::{ArgumentFFI, DataStoreNodeFFI},
};
use hostlink_type::{ArgumentType, Complex64, Error, Result};
use tracing::warn;

use super::{Borrowed, FromNode, NodeValue};
use crate::{
	container::{Container, ContainerKind, GenericDataList},
	host::{self, Host},
	policy::Passing,
	utf8,
};

/// One node of a data list, valid while the list is borrowed
pub struct DataNode<'a> {
	raw: *mut DataStoreNodeFFI,
	host: Host,
	_list: PhantomData<&'a GenericDataList>,
}

impl<'a> DataNode<'a> {
	/// Wrap a raw node handle, [`Error::NullNode`] if it is null
	///
	/// # Safety
	/// A non-null `raw` must be a node of a list issued by the installed host, and that
	/// list must stay alive for `'a`.
	pub unsafe fn from_raw(raw: *mut DataStoreNodeFFI) -> Result<Self> {
		Self::from_raw_with(host::host()?, raw)
	}

	pub(crate) fn from_raw_with(host: Host, raw: *mut DataStoreNodeFFI) -> Result<Self> {
		if raw.is_null() {
			return Err(Error::NullNode);
		}
		Ok(Self {
			raw,
			host,
			_list: PhantomData,
		})
	}

	pub fn raw(&self) -> *mut DataStoreNodeFFI {
		self.raw
	}

	/// Name of the node, `None` for a nameless node
	pub fn name(&self) -> Result<Option<String>> {
		let mut name = null();
		if (self.host.data_store().node_name)(self.raw, &mut name) != HOST_OK {
			warn!("host failed to read node name");
			return Err(Error::NodeData);
		}
		if name.is_null() {
			return Ok(None);
		}
		utf8::from_raw(name).map(Some)
	}

	/// Raw argument type code of the stored value
	pub fn type_code(&self) -> i32 {
		(self.host.data_store().node_data_type)(self.raw)
	}

	pub fn argument_type(&self) -> Option<ArgumentType> {
		ArgumentType::from_raw(self.type_code())
	}

	/// Read the stored value
	///
	/// Containers come back as views that the list keeps owning.
	pub fn value(&self) -> Result<NodeValue<'a>> {
		let mut raw = ArgumentFFI::empty();
		if (self.host.data_store().node_data)(self.raw, &mut raw) != HOST_OK {
			warn!("host failed to read node data");
			return Err(Error::NodeData);
		}

		let code = self.type_code();
		// SAFETY: the host filled the union field matching `code`
		let value = unsafe {
			match ArgumentType::from_raw(code) {
				Some(ArgumentType::Boolean) => NodeValue::Boolean(raw.boolean != 0),
				Some(ArgumentType::Integer) => NodeValue::Integer(raw.integer),
				Some(ArgumentType::Real) => NodeValue::Real(raw.real),
				Some(ArgumentType::Complex) => NodeValue::Complex(Complex64::from(raw.complex)),
				Some(ArgumentType::Utf8String) => NodeValue::String(utf8::from_raw(raw.utf8_string)?),
				Some(ArgumentType::Tensor) => NodeValue::Tensor(self.view(raw.tensor)?),
				Some(ArgumentType::NumericArray) => NodeValue::NumericArray(self.view(raw.numeric_array)?),
				Some(ArgumentType::Image) => NodeValue::Image(self.view(raw.image)?),
				Some(ArgumentType::DataStore) => NodeValue::DataList(self.view(raw.data_store)?),
				_ => {
					return Err(Error::UnsupportedNodeType {
						code,
					});
				}
			}
		};
		Ok(value)
	}

	/// Read the stored value as `T`, [`Error::InvalidNodeType`] if the node holds something else
	pub fn value_as<T: FromNode<'a>>(&self) -> Result<T> {
		let code = self.type_code();
		if code != T::TYPE.to_raw() {
			return Err(Error::InvalidNodeType {
				expected: T::TYPE,
				actual: code,
			});
		}

		let value = self.value()?;
		T::from_value(value).ok_or(Error::InvalidNodeType {
			expected: T::TYPE,
			actual: code,
		})
	}

	fn view<K: ContainerKind>(&self, raw: *mut K::Raw) -> Result<Borrowed<'a, Container<K>>> {
		Container::from_raw_with(self.host, raw, Passing::Manual).map(Borrowed::new)
	}

	/// The following node, `None` after the last one
	pub fn next_node(&self) -> Option<DataNode<'a>> {
		let next = (self.host.data_store().next_node)(self.raw);
		Self::from_raw_with(self.host, next).ok()
	}
}

impl std::fmt::Debug for DataNode<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DataNode").field("raw", &self.raw).field("type_code", &self.type_code()).finish()
	}
}

/// Forward iterator over the nodes of a data list
///
/// Each step asks the host for the successor, so nothing is materialized up front.
pub struct Nodes<'a> {
	next: *mut DataStoreNodeFFI,
	host: Host,
	_list: PhantomData<&'a GenericDataList>,
}

impl<'a> Nodes<'a> {
	pub(crate) fn new(list: &'a GenericDataList) -> Self {
		let next = list.query(null_mut(), |host, raw| (host.data_store().first_node)(raw));
		Self {
			next,
			host: *list.host(),
			_list: PhantomData,
		}
	}
}

impl<'a> Iterator for Nodes<'a> {
	type Item = DataNode<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let node = DataNode::from_raw_with(self.host, self.next).ok()?;
		self.next = (self.host.data_store().next_node)(node.raw);
		Some(node)
	}
}
