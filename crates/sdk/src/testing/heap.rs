// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Allocations of the test host
//!
//! Every test thread gets its own heap. Handles are fake pointers derived from the
//! allocation index and indices are never reused, so a handle used after release is
//! always recognized as dead.

use std::{
	cell::RefCell,
	collections::HashMap,
	ffi::{CStr, CString, c_char},
	mem::size_of,
};

use hostlink_abi::data::{ArgumentFFI, DataStoreNodeFFI};
use hostlink_type::{ArgumentType, ImageType, NumericArrayType, TensorType};

use crate::typed::element_count;

thread_local! {
	static HEAP: RefCell<Heap> = RefCell::new(Heap::default());
}

pub(crate) fn with_heap<R>(f: impl FnOnce(&mut Heap) -> R) -> R {
	HEAP.with(|heap| f(&mut heap.borrow_mut()))
}

pub(crate) fn reset() {
	with_heap(|heap| *heap = Heap::default());
}

pub(crate) fn handle<T>(id: usize) -> *mut T {
	((id + 1) << 4) as *mut T
}

pub(crate) fn id_of<T>(ptr: *const T) -> Option<usize> {
	let addr = ptr as usize;
	if addr == 0 || addr & 0xF != 0 {
		return None;
	}
	Some((addr >> 4) - 1)
}

/// Counters of the host calls a library made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
	/// Containers created through `new`
	pub allocations: usize,
	/// Containers created through `clone` or `copy`
	pub clones: usize,
	/// Containers created through `convert`
	pub conversions: usize,
	/// `free` calls on live handles
	pub frees: usize,
	/// `disown` calls on live handles
	pub disowns: usize,
	/// `free` or `disown` calls on handles that were already released
	pub double_frees: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArrayCategory {
	Tensor,
	NumericArray,
}

#[derive(Debug, Clone)]
pub(crate) struct ArrayObject {
	pub category: ArrayCategory,
	pub type_code: i64,
	pub dims: Vec<i64>,
	pub length: usize,
	pub data: Vec<u64>,
}

#[derive(Debug, Clone)]
pub(crate) struct ImageObject {
	pub type_code: i32,
	pub slices: i64,
	pub rows: i64,
	pub columns: i64,
	pub channels: i64,
	pub color_space: i32,
	pub interleaved: bool,
	pub length: usize,
	pub data: Vec<u64>,
}

impl ImageObject {
	pub fn pixels(&self) -> usize {
		(self.slices.max(1) * self.rows * self.columns) as usize
	}
}

#[derive(Debug, Clone, Default)]
pub(crate) struct StoreObject {
	pub nodes: Vec<usize>,
}

#[derive(Debug)]
pub(crate) enum Object {
	Array(ArrayObject),
	Image(ImageObject),
	Store(StoreObject),
}

struct Allocation {
	object: Option<Object>,
	shares: i64,
}

pub(crate) struct NodeEntry {
	pub store: usize,
	pub name: Option<CString>,
	pub type_code: i32,
	pub value: ArgumentFFI,
	string: Option<CString>,
}

#[derive(Default)]
pub(crate) struct Heap {
	allocations: Vec<Allocation>,
	nodes: Vec<NodeEntry>,
	/// Host symbols assigned by the library
	pub symbols: HashMap<String, String>,
	pub stats: HostStats,
	pub fail_next_allocation: bool,
	pub fail_next_clone: bool,
	pub fail_conversions: bool,
}

/// Zeroed storage for `length` elements of `size` bytes, 8-byte aligned
pub(crate) fn words(length: usize, size: usize) -> Vec<u64> {
	vec![0u64; (length * size).div_ceil(8)]
}

fn array_element_size(category: ArrayCategory, type_code: i64) -> Option<usize> {
	match category {
		ArrayCategory::Tensor => TensorType::from_raw(type_code).map(|kind| kind.size()),
		ArrayCategory::NumericArray => {
			i32::try_from(type_code).ok().and_then(NumericArrayType::from_raw).map(|kind| kind.size())
		}
	}
}

/// Copy `values` into the start of `data`
pub(crate) fn write_slice<T: Copy>(data: &mut [u64], values: &[T]) -> bool {
	if values.len() * size_of::<T>() > data.len() * 8 {
		return false;
	}
	// SAFETY: bounds checked above, `data` is 8-byte aligned
	unsafe { std::ptr::copy_nonoverlapping(values.as_ptr(), data.as_mut_ptr() as *mut T, values.len()) };
	true
}

/// Copy the first `length` elements out of `data`
pub(crate) fn read_slice<T: Copy>(data: &[u64], length: usize) -> Vec<T> {
	let length = length.min(data.len() * 8 / size_of::<T>().max(1));
	// SAFETY: bounds clamped above, `data` is 8-byte aligned
	unsafe { std::slice::from_raw_parts(data.as_ptr() as *const T, length) }.to_vec()
}

impl Heap {
	pub fn insert(&mut self, object: Object) -> usize {
		self.allocations.push(Allocation {
			object: Some(object),
			shares: 0,
		});
		self.allocations.len() - 1
	}

	pub fn object(&self, id: usize) -> Option<&Object> {
		self.allocations.get(id)?.object.as_ref()
	}

	pub fn object_mut(&mut self, id: usize) -> Option<&mut Object> {
		self.allocations.get_mut(id)?.object.as_mut()
	}

	pub fn array<T>(&self, ptr: *const T) -> Option<&ArrayObject> {
		match self.object(id_of(ptr)?)? {
			Object::Array(array) => Some(array),
			_ => None,
		}
	}

	pub fn image<T>(&self, ptr: *const T) -> Option<&ImageObject> {
		match self.object(id_of(ptr)?)? {
			Object::Image(image) => Some(image),
			_ => None,
		}
	}

	pub fn store<T>(&self, ptr: *const T) -> Option<&StoreObject> {
		match self.object(id_of(ptr)?)? {
			Object::Store(store) => Some(store),
			_ => None,
		}
	}

	pub fn live_count(&self) -> usize {
		self.allocations.iter().filter(|allocation| allocation.object.is_some()).count()
	}

	pub fn new_array(&mut self, category: ArrayCategory, type_code: i64, dims: &[i64]) -> Option<usize> {
		let size = array_element_size(category, type_code)?;
		self.new_array_unchecked(category, type_code, dims, size)
	}

	/// Array with any type code, as a newer host could produce
	pub fn new_array_unchecked(
		&mut self,
		category: ArrayCategory,
		type_code: i64,
		dims: &[i64],
		size: usize,
	) -> Option<usize> {
		let length = element_count(dims)?;
		Some(self.insert(Object::Array(ArrayObject {
			category,
			type_code,
			dims: dims.to_vec(),
			length,
			data: words(length, size),
		})))
	}

	#[allow(clippy::too_many_arguments)]
	pub fn new_image(
		&mut self,
		type_code: i32,
		slices: i64,
		rows: i64,
		columns: i64,
		channels: i64,
		color_space: i32,
		interleaved: bool,
	) -> Option<usize> {
		let size = ImageType::from_raw(type_code).map(|kind| kind.size()).unwrap_or(8);
		if slices < 0 || rows < 0 || columns < 0 || channels < 1 {
			return None;
		}

		let length = element_count(&[slices.max(1), rows, columns, channels])?;
		Some(self.insert(Object::Image(ImageObject {
			type_code,
			slices,
			rows,
			columns,
			channels,
			color_space,
			interleaved,
			length,
			data: words(length, size),
		})))
	}

	pub fn new_store(&mut self) -> usize {
		self.insert(Object::Store(StoreObject::default()))
	}

	/// Deep copy, including every container nested in a node list
	pub fn duplicate(&mut self, id: usize) -> Option<usize> {
		let object = match self.object(id)? {
			Object::Array(array) => Object::Array(array.clone()),
			Object::Image(image) => Object::Image(image.clone()),
			Object::Store(store) => {
				let nodes = store.nodes.clone();
				let copy = self.new_store();
				for node in nodes {
					self.copy_node(node, copy)?;
				}
				return Some(copy);
			}
		};
		Some(self.insert(object))
	}

	fn copy_node(&mut self, node: usize, store: usize) -> Option<()> {
		let entry = self.nodes.get(node)?;
		let name = entry.name.clone();
		let string = entry.string.clone();
		let type_code = entry.type_code;
		let mut value = entry.value;

		// SAFETY: the union field read matches the node type code
		unsafe {
			match ArgumentType::from_raw(type_code) {
				Some(ArgumentType::Tensor | ArgumentType::NumericArray) => {
					let copy = self.duplicate(id_of(value.tensor)?)?;
					value = ArgumentFFI::from_array(handle(copy));
				}
				Some(ArgumentType::Image) => {
					let copy = self.duplicate(id_of(value.image)?)?;
					value = ArgumentFFI::from_image(handle(copy));
				}
				Some(ArgumentType::DataStore) => {
					let copy = self.duplicate(id_of(value.data_store)?)?;
					value = ArgumentFFI::from_data_store(handle(copy));
				}
				_ => {}
			}
		}

		self.push_node(store, name, type_code, value, string);
		Some(())
	}

	fn push_node(
		&mut self,
		store: usize,
		name: Option<CString>,
		type_code: i32,
		value: ArgumentFFI,
		string: Option<CString>,
	) {
		let value = match &string {
			Some(string) => ArgumentFFI::from_utf8_string(string.as_ptr() as *mut c_char),
			None => value,
		};
		self.nodes.push(NodeEntry {
			store,
			name,
			type_code,
			value,
			string,
		});

		let node = self.nodes.len() - 1;
		if let Some(Object::Store(target)) = self.object_mut(store) {
			target.nodes.push(node);
		}
	}

	/// Append a node, moving nested containers into the list
	///
	/// # Safety
	/// `name` must be null or NUL-terminated, and `value` must hold the field matching
	/// `type_code`.
	pub unsafe fn add_node(&mut self, store: usize, name: *const c_char, type_code: i32, value: ArgumentFFI) -> bool {
		if !matches!(self.object(store), Some(Object::Store(_))) {
			return false;
		}

		let mut string = None;
		let valid = unsafe {
			match ArgumentType::from_raw(type_code) {
				Some(
					ArgumentType::Boolean | ArgumentType::Integer | ArgumentType::Real | ArgumentType::Complex,
				) => true,
				Some(ArgumentType::Utf8String) => {
					let ptr = value.utf8_string;
					if !ptr.is_null() {
						string = Some(CStr::from_ptr(ptr).to_owned());
					}
					!ptr.is_null()
				}
				Some(ArgumentType::Tensor) => {
					self.array(value.tensor).is_some_and(|array| array.category == ArrayCategory::Tensor)
				}
				Some(ArgumentType::NumericArray) => self
					.array(value.numeric_array)
					.is_some_and(|array| array.category == ArrayCategory::NumericArray),
				Some(ArgumentType::Image) => self.image(value.image).is_some(),
				Some(ArgumentType::DataStore) => {
					id_of(value.data_store) != Some(store) && self.store(value.data_store).is_some()
				}
				_ => false,
			}
		};
		if !valid {
			return false;
		}

		let name = if name.is_null() {
			None
		} else {
			Some(unsafe { CStr::from_ptr(name) }.to_owned())
		};
		self.push_node(store, name, type_code, value, string);
		true
	}

	pub fn node(&self, ptr: *const DataStoreNodeFFI) -> Option<&NodeEntry> {
		let entry = self.nodes.get(id_of(ptr)?)?;
		// nodes of released lists are dead
		self.store(handle::<u8>(entry.store))?;
		Some(entry)
	}

	pub fn next_node(&self, ptr: *const DataStoreNodeFFI) -> Option<usize> {
		let node = id_of(ptr)?;
		let entry = self.node(ptr)?;
		let nodes = &self.store(handle::<u8>(entry.store))?.nodes;
		let position = nodes.iter().position(|candidate| *candidate == node)?;
		nodes.get(position + 1).copied()
	}

	/// Drop an allocation and everything a node list holds
	pub fn release(&mut self, id: usize) {
		let Some(allocation) = self.allocations.get_mut(id) else {
			return;
		};
		let Some(object) = allocation.object.take() else {
			return;
		};

		if let Object::Store(store) = object {
			for node in store.nodes {
				let Some(entry) = self.nodes.get(node) else {
					continue;
				};
				// SAFETY: the union field read matches the node type code
				let nested = unsafe {
					match ArgumentType::from_raw(entry.type_code) {
						Some(ArgumentType::Tensor | ArgumentType::NumericArray) => id_of(entry.value.tensor),
						Some(ArgumentType::Image) => id_of(entry.value.image),
						Some(ArgumentType::DataStore) => id_of(entry.value.data_store),
						_ => None,
					}
				};
				if let Some(nested) = nested {
					self.release(nested);
				}
			}
		}
	}

	pub fn free<T>(&mut self, ptr: *const T) {
		match id_of(ptr) {
			Some(id) if self.object(id).is_some() => {
				self.stats.frees += 1;
				self.release(id);
			}
			_ => self.stats.double_frees += 1,
		}
	}

	/// Drop one share; the last share releases the allocation
	pub fn disown<T>(&mut self, ptr: *const T) {
		let Some(id) = id_of(ptr).filter(|id| self.object(*id).is_some()) else {
			self.stats.double_frees += 1;
			return;
		};

		self.stats.disowns += 1;
		let remaining = match self.allocations.get_mut(id) {
			Some(allocation) => {
				allocation.shares -= 1;
				allocation.shares
			}
			None => return,
		};
		if remaining <= 0 {
			self.release(id);
		}
	}

	pub fn share_count<T>(&self, ptr: *const T) -> i64 {
		id_of(ptr).and_then(|id| self.allocations.get(id)).map_or(0, |allocation| allocation.shares)
	}

	pub fn set_share_count<T>(&mut self, ptr: *const T, shares: i64) {
		if let Some(allocation) = id_of(ptr).and_then(|id| self.allocations.get_mut(id)) {
			allocation.shares = shares;
		}
	}

	pub fn is_live<T>(&self, ptr: *const T) -> bool {
		id_of(ptr).and_then(|id| self.object(id)).is_some()
	}
}
