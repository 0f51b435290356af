// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-process host for testing libraries without a real host
//!
//! [`TestHost`] installs [`TEST_CALLBACKS`] and gives tests raw handles the way a host
//! would pass them in, plus the bookkeeping needed to assert on frees, clones and
//! leaks. Allocations live in a thread-local heap, so tests running in parallel never
//! observe each other's handles.
//!
//! # Example
//!
//! ```ignore
//! let host = TestHost::new();
//! let raw = host.tensor(&[2], &[1i64, 2]);
//! drop(unsafe { GenericTensor::from_raw(raw, Passing::Automatic) }?);
//! assert!(!host.is_live(raw));
//! ```

mod arguments;
mod callbacks;
mod convert;
mod heap;

pub use arguments::Arguments;
pub use callbacks::TEST_CALLBACKS;
use hostlink_abi::data::{ArgumentFFI, ArrayFFI, DataStoreFFI, ImageFFI, NumericArrayFFI, TensorFFI};
use hostlink_type::{ArgumentType, ColorSpace, ImageElement, NumericArrayElement, TensorElement};
pub use heap::HostStats;
use heap::{ArrayCategory, Object, handle, id_of, read_slice, with_heap, write_slice};

use crate::{config::LinkConfig, host};

/// Handle to the test host of the current thread
///
/// Creating one installs the test callbacks and resets the heap of the current thread.
/// Handles created by an earlier `TestHost` on the same thread become dead.
pub struct TestHost {
	_private: (),
}

impl Default for TestHost {
	fn default() -> Self {
		Self::new()
	}
}

impl TestHost {
	pub fn new() -> Self {
		Self::with_config(LinkConfig::default())
	}

	pub fn with_config(config: LinkConfig) -> Self {
		host::initialize(&TEST_CALLBACKS, config);
		heap::reset();
		Self {
			_private: (),
		}
	}

	pub fn stats(&self) -> HostStats {
		with_heap(|heap| heap.stats)
	}

	/// Number of allocations not yet released
	pub fn live_count(&self) -> usize {
		with_heap(|heap| heap.live_count())
	}

	/// Reject the next `new` call of any container
	pub fn fail_next_allocation(&self) {
		with_heap(|heap| heap.fail_next_allocation = true);
	}

	/// Reject the next `clone` or `copy` call
	pub fn fail_next_clone(&self) {
		with_heap(|heap| heap.fail_next_clone = true);
	}

	/// Reject every conversion until switched off again
	pub fn fail_conversions(&self, fail: bool) {
		with_heap(|heap| heap.fail_conversions = fail);
	}

	pub fn is_live<T>(&self, raw: *mut T) -> bool {
		with_heap(|heap| heap.is_live(raw))
	}

	pub fn share_count<T>(&self, raw: *mut T) -> i64 {
		with_heap(|heap| heap.share_count(raw))
	}

	/// Pretend the host handed the buffer to `shares` additional owners
	pub fn set_share_count<T>(&self, raw: *mut T, shares: i64) {
		with_heap(|heap| heap.set_share_count(raw, shares));
	}

	/// Tensor the host passes in, filled with `values`
	pub fn tensor<T: TensorElement>(&self, dims: &[i64], values: &[T]) -> *mut TensorFFI {
		self.array(ArrayCategory::Tensor, T::KIND.to_raw(), dims, size_of::<T>(), values)
	}

	/// Tensor with an element type code the library does not know
	pub fn tensor_with_code(&self, type_code: i64, dims: &[i64]) -> *mut TensorFFI {
		self.array::<u64>(ArrayCategory::Tensor, type_code, dims, 8, &[])
	}

	pub fn numeric_array<T: NumericArrayElement>(&self, dims: &[i64], values: &[T]) -> *mut NumericArrayFFI {
		self.array(ArrayCategory::NumericArray, T::KIND.to_raw() as i64, dims, size_of::<T>(), values)
	}

	pub fn numeric_array_with_code(&self, type_code: i32, dims: &[i64]) -> *mut NumericArrayFFI {
		self.array::<u64>(ArrayCategory::NumericArray, type_code as i64, dims, 8, &[])
	}

	fn array<T: Copy>(
		&self,
		category: ArrayCategory,
		type_code: i64,
		dims: &[i64],
		size: usize,
		values: &[T],
	) -> *mut ArrayFFI {
		with_heap(|heap| {
			let id = heap.new_array_unchecked(category, type_code, dims, size).expect("valid dimensions");
			if let Some(Object::Array(array)) = heap.object_mut(id) {
				assert!(values.len() <= array.length, "more values than elements");
				write_slice(&mut array.data, values);
			}
			handle(id)
		})
	}

	/// 2D image the host passes in, `values` laid out according to `interleaved`
	pub fn image<T: ImageElement>(
		&self,
		width: i64,
		height: i64,
		channels: i64,
		color_space: ColorSpace,
		interleaved: bool,
		values: &[T],
	) -> *mut ImageFFI {
		self.image_3d(0, width, height, channels, color_space, interleaved, values)
	}

	#[allow(clippy::too_many_arguments)]
	pub fn image_3d<T: ImageElement>(
		&self,
		slices: i64,
		width: i64,
		height: i64,
		channels: i64,
		color_space: ColorSpace,
		interleaved: bool,
		values: &[T],
	) -> *mut ImageFFI {
		let raw = self.image_with_code(T::KIND.to_raw(), slices, width, height, channels);
		with_heap(|heap| {
			if let Some(Object::Image(image)) = id_of(raw).and_then(|id| heap.object_mut(id)) {
				assert!(values.len() <= image.length, "more values than elements");
				image.color_space = color_space.to_raw();
				image.interleaved = interleaved;
				write_slice(&mut image.data, values);
			}
		});
		raw
	}

	/// Image with any pixel type code
	pub fn image_with_code(
		&self,
		type_code: i32,
		slices: i64,
		width: i64,
		height: i64,
		channels: i64,
	) -> *mut ImageFFI {
		with_heap(|heap| {
			let id = heap
				.new_image(type_code, slices, height, width, channels, ColorSpace::Undefined.to_raw(), true)
				.expect("valid image dimensions");
			handle(id)
		})
	}

	/// Empty node list the host passes in
	pub fn data_store(&self) -> *mut DataStoreFFI {
		with_heap(|heap| handle(heap.new_store()))
	}

	/// Append a node the way the host builds lists it passes in
	pub fn data_store_add(
		&self,
		data_store: *mut DataStoreFFI,
		name: Option<&str>,
		kind: ArgumentType,
		value: ArgumentFFI,
	) {
		let name = name.map(|name| std::ffi::CString::new(name).expect("name without NUL"));
		let name_ptr = name.as_ref().map_or(std::ptr::null(), |name| name.as_ptr());
		let added = with_heap(|heap| {
			let id = id_of(data_store).expect("data store handle");
			unsafe { heap.add_node(id, name_ptr, kind.to_raw(), value) }
		});
		assert!(added, "host rejected a {kind} node");
	}

	/// Elements of a live tensor or numeric array
	pub fn read<T: Copy>(&self, raw: *mut ArrayFFI) -> Vec<T> {
		with_heap(|heap| heap.array(raw).map(|array| read_slice(&array.data, array.length)).unwrap_or_default())
	}

	/// Pixel values of a live image in storage order
	pub fn read_image<T: Copy>(&self, raw: *mut ImageFFI) -> Vec<T> {
		with_heap(|heap| heap.image(raw).map(|image| read_slice(&image.data, image.length)).unwrap_or_default())
	}

	/// Number of nodes of a live node list
	pub fn data_store_length(&self, raw: *mut DataStoreFFI) -> usize {
		with_heap(|heap| heap.store(raw).map_or(0, |store| store.nodes.len()))
	}

	/// Value the library last assigned to a host symbol
	pub fn symbol(&self, name: &str) -> Option<String> {
		with_heap(|heap| heap.symbols.get(name).cloned())
	}
}
