// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Host callbacks backed by the thread-local test heap

use std::{
	ffi::{CStr, c_char, c_void},
	ptr::{null, null_mut},
	slice,
};

use hostlink_abi::{
	callbacks::{
		DataStoreCallbacks, HostCallbacks, ImageCallbacks, NumericArrayCallbacks, ReportCallbacks, TensorCallbacks,
	},
	constants::{HOST_ERROR, HOST_OK},
	data::{ArgumentFFI, ArrayFFI, DataStoreFFI, DataStoreNodeFFI, ImageFFI},
};
use hostlink_type::{ColorSpace, ConvertMethod, ImageType, NumericArrayType};

use super::{
	convert,
	heap::{ArrayCategory, Heap, Object, handle, id_of, with_heap},
};

/// Callback table of the test host
pub static TEST_CALLBACKS: HostCallbacks = HostCallbacks {
	tensor: TensorCallbacks {
		new: test_tensor_new,
		clone: test_array_clone,
		free: test_array_free,
		disown: test_array_disown,
		share_count: test_array_share_count,
		rank: test_array_rank,
		dimensions: test_array_dimensions,
		flattened_length: test_array_flattened_length,
		type_code: test_tensor_type_code,
		data: test_array_data,
	},
	numeric_array: NumericArrayCallbacks {
		new: test_numeric_array_new,
		clone: test_array_clone,
		convert: test_numeric_array_convert,
		free: test_array_free,
		disown: test_array_disown,
		share_count: test_array_share_count,
		rank: test_array_rank,
		dimensions: test_array_dimensions,
		flattened_length: test_array_flattened_length,
		type_code: test_numeric_array_type_code,
		data: test_array_data,
	},
	image: ImageCallbacks {
		new_2d: test_image_new_2d,
		new_3d: test_image_new_3d,
		clone: test_image_clone,
		convert: test_image_convert,
		free: test_image_free,
		disown: test_image_disown,
		share_count: test_image_share_count,
		color_space: test_image_color_space,
		rows: test_image_rows,
		columns: test_image_columns,
		slices: test_image_slices,
		channels: test_image_channels,
		alpha_channel: test_image_alpha_channel,
		interleaved: test_image_interleaved,
		rank: test_image_rank,
		flattened_length: test_image_flattened_length,
		type_code: test_image_type_code,
		data: test_image_data,
	},
	data_store: DataStoreCallbacks {
		new: test_data_store_new,
		copy: test_data_store_copy,
		free: test_data_store_free,
		length: test_data_store_length,
		first_node: test_data_store_first_node,
		last_node: test_data_store_last_node,
		next_node: test_data_store_next_node,
		node_name: test_data_store_node_name,
		node_data_type: test_data_store_node_data_type,
		node_data: test_data_store_node_data,
		add: test_data_store_add,
	},
	report: ReportCallbacks {
		set_symbol: test_set_symbol,
	},
};

fn allocate<T>(heap: &mut Heap, output: *mut *mut T, create: impl FnOnce(&mut Heap) -> Option<usize>) -> i32 {
	if output.is_null() || std::mem::take(&mut heap.fail_next_allocation) {
		return HOST_ERROR;
	}
	match create(heap) {
		Some(id) => {
			heap.stats.allocations += 1;
			unsafe { *output = handle(id) };
			HOST_OK
		}
		None => HOST_ERROR,
	}
}

fn duplicate(heap: &mut Heap, id: Option<usize>) -> Option<usize> {
	if std::mem::take(&mut heap.fail_next_clone) {
		return None;
	}
	let copy = heap.duplicate(id?)?;
	heap.stats.clones += 1;
	Some(copy)
}

fn dims<'a>(rank: i64, dims: *const i64) -> Option<&'a [i64]> {
	match rank {
		0 => Some(&[][..]),
		rank if rank > 0 && !dims.is_null() => Some(unsafe { slice::from_raw_parts(dims, rank as usize) }),
		_ => None,
	}
}

// Tensors and numeric arrays

extern "C" fn test_tensor_new(type_code: i64, rank: i64, dims_ptr: *const i64, output: *mut *mut ArrayFFI) -> i32 {
	with_heap(|heap| {
		allocate(heap, output, |heap| heap.new_array(ArrayCategory::Tensor, type_code, dims(rank, dims_ptr)?))
	})
}

extern "C" fn test_numeric_array_new(
	type_code: i32,
	rank: i64,
	dims_ptr: *const i64,
	output: *mut *mut ArrayFFI,
) -> i32 {
	with_heap(|heap| {
		allocate(heap, output, |heap| {
			heap.new_array(ArrayCategory::NumericArray, type_code as i64, dims(rank, dims_ptr)?)
		})
	})
}

extern "C" fn test_array_clone(array: *mut ArrayFFI, output: *mut *mut ArrayFFI) -> i32 {
	if output.is_null() {
		return HOST_ERROR;
	}
	with_heap(|heap| {
		let id = heap.array(array).and(id_of(array));
		match duplicate(heap, id) {
			Some(copy) => {
				unsafe { *output = handle(copy) };
				HOST_OK
			}
			None => HOST_ERROR,
		}
	})
}

extern "C" fn test_numeric_array_convert(
	array: *mut ArrayFFI,
	type_code: i32,
	method: i32,
	tolerance: f64,
	output: *mut *mut ArrayFFI,
) -> i32 {
	if output.is_null() {
		return HOST_ERROR;
	}
	with_heap(|heap| {
		if heap.fail_conversions {
			return HOST_ERROR;
		}
		let converted = (|| {
			let source = heap.array(array)?;
			let from = NumericArrayType::from_raw(i32::try_from(source.type_code).ok()?)?;
			let to = NumericArrayType::from_raw(type_code)?;
			let method = ConvertMethod::from_raw(method)?;
			let data = convert::numeric(from, to, method, tolerance, &source.data, source.length)?;

			let mut copy = source.clone();
			copy.type_code = to.to_raw() as i64;
			copy.data = data;
			Some(copy)
		})();

		match converted {
			Some(copy) => {
				heap.stats.conversions += 1;
				unsafe { *output = handle(heap.insert(Object::Array(copy))) };
				HOST_OK
			}
			None => HOST_ERROR,
		}
	})
}

extern "C" fn test_array_free(array: *mut ArrayFFI) {
	with_heap(|heap| heap.free(array));
}

extern "C" fn test_array_disown(array: *mut ArrayFFI) {
	with_heap(|heap| heap.disown(array));
}

extern "C" fn test_array_share_count(array: *mut ArrayFFI) -> i64 {
	with_heap(|heap| heap.share_count(array))
}

extern "C" fn test_array_rank(array: *mut ArrayFFI) -> i64 {
	with_heap(|heap| heap.array(array).map_or(0, |array| array.dims.len() as i64))
}

extern "C" fn test_array_dimensions(array: *mut ArrayFFI) -> *const i64 {
	// The dims vector lives as long as the allocation.
	with_heap(|heap| heap.array(array).map_or(null(), |array| array.dims.as_ptr()))
}

extern "C" fn test_array_flattened_length(array: *mut ArrayFFI) -> i64 {
	with_heap(|heap| heap.array(array).map_or(0, |array| array.length as i64))
}

extern "C" fn test_tensor_type_code(array: *mut ArrayFFI) -> i64 {
	with_heap(|heap| heap.array(array).map_or(0, |array| array.type_code))
}

extern "C" fn test_numeric_array_type_code(array: *mut ArrayFFI) -> i32 {
	with_heap(|heap| heap.array(array).map_or(0, |array| array.type_code as i32))
}

extern "C" fn test_array_data(array: *mut ArrayFFI) -> *mut c_void {
	with_heap(|heap| match id_of(array).and_then(|id| heap.object_mut(id)) {
		Some(Object::Array(array)) => array.data.as_mut_ptr() as *mut c_void,
		_ => null_mut(),
	})
}

// Images

extern "C" fn test_image_new_2d(
	width: i64,
	height: i64,
	channels: i64,
	type_code: i32,
	color_space: i32,
	interleaved: i32,
	output: *mut *mut ImageFFI,
) -> i32 {
	test_image_new_3d(0, width, height, channels, type_code, color_space, interleaved, output)
}

#[allow(clippy::too_many_arguments)]
extern "C" fn test_image_new_3d(
	slices: i64,
	width: i64,
	height: i64,
	channels: i64,
	type_code: i32,
	color_space: i32,
	interleaved: i32,
	output: *mut *mut ImageFFI,
) -> i32 {
	if ImageType::from_raw(type_code).is_none() || ColorSpace::from_raw(color_space).is_none() {
		return HOST_ERROR;
	}
	with_heap(|heap| {
		allocate(heap, output, |heap| {
			heap.new_image(type_code, slices, height, width, channels, color_space, interleaved != 0)
		})
	})
}

extern "C" fn test_image_clone(image: *mut ImageFFI, output: *mut *mut ImageFFI) -> i32 {
	if output.is_null() {
		return HOST_ERROR;
	}
	with_heap(|heap| {
		let id = heap.image(image).and(id_of(image));
		match duplicate(heap, id) {
			Some(copy) => {
				unsafe { *output = handle(copy) };
				HOST_OK
			}
			None => HOST_ERROR,
		}
	})
}

extern "C" fn test_image_convert(image: *mut ImageFFI, type_code: i32, interleaved: i32) -> *mut ImageFFI {
	with_heap(|heap| {
		if heap.fail_conversions {
			return null_mut();
		}
		let converted = ImageType::from_raw(type_code)
			.and_then(|target| convert::image(heap.image(image)?, target, interleaved != 0));
		match converted {
			Some(copy) => {
				heap.stats.conversions += 1;
				handle(heap.insert(Object::Image(copy)))
			}
			None => null_mut(),
		}
	})
}

extern "C" fn test_image_free(image: *mut ImageFFI) {
	with_heap(|heap| heap.free(image));
}

extern "C" fn test_image_disown(image: *mut ImageFFI) {
	with_heap(|heap| heap.disown(image));
}

extern "C" fn test_image_share_count(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.share_count(image))
}

extern "C" fn test_image_color_space(image: *mut ImageFFI) -> i32 {
	with_heap(|heap| heap.image(image).map_or(-1, |image| image.color_space))
}

extern "C" fn test_image_rows(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.image(image).map_or(0, |image| image.rows))
}

extern "C" fn test_image_columns(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.image(image).map_or(0, |image| image.columns))
}

extern "C" fn test_image_slices(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.image(image).map_or(0, |image| image.slices))
}

extern "C" fn test_image_channels(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.image(image).map_or(0, |image| image.channels))
}

fn color_channels(color_space: i32) -> Option<i64> {
	match ColorSpace::from_raw(color_space)? {
		ColorSpace::Gray => Some(1),
		ColorSpace::Cmyk => Some(4),
		ColorSpace::Undefined | ColorSpace::Automatic => None,
		_ => Some(3),
	}
}

extern "C" fn test_image_alpha_channel(image: *mut ImageFFI) -> i32 {
	with_heap(|heap| {
		heap.image(image)
			.and_then(|image| Some(color_channels(image.color_space)? + 1 == image.channels))
			.unwrap_or(false) as i32
	})
}

extern "C" fn test_image_interleaved(image: *mut ImageFFI) -> i32 {
	with_heap(|heap| heap.image(image).is_some_and(|image| image.interleaved) as i32)
}

extern "C" fn test_image_rank(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.image(image).map_or(0, |image| if image.slices > 0 { 3 } else { 2 }))
}

extern "C" fn test_image_flattened_length(image: *mut ImageFFI) -> i64 {
	with_heap(|heap| heap.image(image).map_or(0, |image| image.length as i64))
}

extern "C" fn test_image_type_code(image: *mut ImageFFI) -> i32 {
	with_heap(|heap| heap.image(image).map_or(-1, |image| image.type_code))
}

extern "C" fn test_image_data(image: *mut ImageFFI) -> *mut c_void {
	with_heap(|heap| match id_of(image).and_then(|id| heap.object_mut(id)) {
		Some(Object::Image(image)) => image.data.as_mut_ptr() as *mut c_void,
		_ => null_mut(),
	})
}

// Data stores

extern "C" fn test_data_store_new() -> *mut DataStoreFFI {
	with_heap(|heap| {
		if std::mem::take(&mut heap.fail_next_allocation) {
			return null_mut();
		}
		heap.stats.allocations += 1;
		handle(heap.new_store())
	})
}

extern "C" fn test_data_store_copy(data_store: *mut DataStoreFFI) -> *mut DataStoreFFI {
	with_heap(|heap| {
		let id = heap.store(data_store).and(id_of(data_store));
		duplicate(heap, id).map_or(null_mut(), handle)
	})
}

extern "C" fn test_data_store_free(data_store: *mut DataStoreFFI) {
	with_heap(|heap| heap.free(data_store));
}

extern "C" fn test_data_store_length(data_store: *mut DataStoreFFI) -> i64 {
	with_heap(|heap| heap.store(data_store).map_or(0, |store| store.nodes.len() as i64))
}

extern "C" fn test_data_store_first_node(data_store: *mut DataStoreFFI) -> *mut DataStoreNodeFFI {
	with_heap(|heap| heap.store(data_store).and_then(|store| store.nodes.first().copied()).map_or(null_mut(), handle))
}

extern "C" fn test_data_store_last_node(data_store: *mut DataStoreFFI) -> *mut DataStoreNodeFFI {
	with_heap(|heap| heap.store(data_store).and_then(|store| store.nodes.last().copied()).map_or(null_mut(), handle))
}

extern "C" fn test_data_store_next_node(node: *mut DataStoreNodeFFI) -> *mut DataStoreNodeFFI {
	with_heap(|heap| heap.next_node(node).map_or(null_mut(), handle))
}

extern "C" fn test_data_store_node_name(node: *mut DataStoreNodeFFI, output: *mut *const c_char) -> i32 {
	if output.is_null() {
		return HOST_ERROR;
	}
	with_heap(|heap| match heap.node(node) {
		Some(entry) => {
			let name = entry.name.as_ref().map_or(null(), |name| name.as_ptr());
			unsafe { *output = name };
			HOST_OK
		}
		None => HOST_ERROR,
	})
}

extern "C" fn test_data_store_node_data_type(node: *mut DataStoreNodeFFI) -> i32 {
	with_heap(|heap| heap.node(node).map_or(0, |entry| entry.type_code))
}

extern "C" fn test_data_store_node_data(node: *mut DataStoreNodeFFI, output: *mut ArgumentFFI) -> i32 {
	if output.is_null() {
		return HOST_ERROR;
	}
	with_heap(|heap| match heap.node(node) {
		Some(entry) => {
			unsafe { *output = entry.value };
			HOST_OK
		}
		None => HOST_ERROR,
	})
}

extern "C" fn test_set_symbol(symbol: *const c_char, value: *const c_char) -> i32 {
	if symbol.is_null() || value.is_null() {
		return HOST_ERROR;
	}
	// SAFETY: both are NUL-terminated per the callback contract
	let (symbol, value) = unsafe { (CStr::from_ptr(symbol), CStr::from_ptr(value)) };
	let (Ok(symbol), Ok(value)) = (symbol.to_str(), value.to_str()) else {
		return HOST_ERROR;
	};
	with_heap(|heap| heap.symbols.insert(symbol.to_string(), value.to_string()));
	HOST_OK
}

extern "C" fn test_data_store_add(
	data_store: *mut DataStoreFFI,
	name: *const c_char,
	type_code: i32,
	value: ArgumentFFI,
) -> i32 {
	with_heap(|heap| {
		let Some(id) = heap.store(data_store).and(id_of(data_store)) else {
			return HOST_ERROR;
		};
		if unsafe { heap.add_node(id, name, type_code, value) } {
			HOST_OK
		} else {
			HOST_ERROR
		}
	})
}
