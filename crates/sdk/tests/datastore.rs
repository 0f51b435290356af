// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use hostlink_abi::data::ArgumentFFI;
use hostlink_sdk::{
	ArgumentType, BufferInterface, Complex64, DataListRef, DataNode, Error, GenericDataList, NodeValue, Ownership,
	Passing, Primitive, Tensor, TensorRef, TensorType,
};
use hostlink_type::error::ContainerType;

fn integer(node: &DataNode<'_>) -> i64 {
	node.value_as::<i64>().unwrap()
}

#[test]
fn test_nodes_keep_order_and_duplicate_names() {
	let host = common::setup();
	let mut list = GenericDataList::new().unwrap();

	list.push_back_named("a", 1i64).unwrap();
	list.push_back(2i64).unwrap();
	list.push_back_named("a", 3i64).unwrap();

	assert_eq!(list.length(), 3);
	assert_eq!(list.names().unwrap(), vec![Some("a".to_string()), None, Some("a".to_string())]);
	assert_eq!(list.iter().map(|node| integer(&node)).collect::<Vec<_>>(), vec![1, 2, 3]);
	assert_eq!(integer(&list.front().unwrap()), 1);
	assert_eq!(integer(&list.back().unwrap()), 3);

	drop(list);
	assert_eq!(host.live_count(), 0);
}

#[test]
fn test_empty_list() {
	let _host = common::setup();
	let list = GenericDataList::new().unwrap();

	assert!(list.is_empty());
	assert!(list.front().is_none());
	assert!(list.back().is_none());
	assert_eq!(list.iter().count(), 0);
}

#[test]
fn test_share_count_is_always_zero() {
	let host = common::setup();
	let list = GenericDataList::new().unwrap();
	assert_eq!(list.share_count(), 0);

	let raw = host.data_store();
	host.set_share_count(raw, 3);
	let borrowed = unsafe { GenericDataList::from_raw(raw, Passing::Manual) }.unwrap();
	assert_eq!(borrowed.share_count(), 0);
}

#[test]
fn test_shared_list_is_rejected() {
	let host = common::setup();
	let raw = host.data_store();

	let err = unsafe { GenericDataList::from_raw(raw, Passing::Shared) }.unwrap_err();
	assert_eq!(
		err,
		Error::NotShareable {
			container: ContainerType::DataList
		}
	);
	assert_eq!(host.stats().clones, 0);
}

#[test]
fn test_scalar_and_string_values() {
	let _host = common::setup();
	let mut list = GenericDataList::new().unwrap();

	list.push_back(true).unwrap();
	list.push_back(2.5f64).unwrap();
	list.push_back(Complex64::new(1.0, 2.0)).unwrap();
	list.push_back_named("greeting", "hello").unwrap();

	let values = list.values().unwrap();
	assert!(matches!(values[0], NodeValue::Boolean(true)));
	assert!(matches!(values[1], NodeValue::Real(value) if value == 2.5));
	assert!(matches!(values[2], NodeValue::Complex(value) if value == Complex64::new(1.0, 2.0)));
	assert!(matches!(&values[3], NodeValue::String(value) if value == "hello"));

	let node = list.back().unwrap();
	assert_eq!(node.argument_type(), Some(ArgumentType::Utf8String));
	assert_eq!(node.value_as::<String>().unwrap(), "hello");
}

#[test]
fn test_value_as_wrong_type() {
	let _host = common::setup();
	let mut list = GenericDataList::new().unwrap();
	list.push_back(1i64).unwrap();

	let err = list.front().unwrap().value_as::<f64>().unwrap_err();
	assert_eq!(
		err,
		Error::InvalidNodeType {
			expected: ArgumentType::Real,
			actual: ArgumentType::Integer.to_raw(),
		}
	);
}

#[test]
fn test_containers_move_into_list() {
	let host = common::setup();
	let mut list = GenericDataList::new().unwrap();

	let tensor = Tensor::from_slice(&[2], &[4i64, 5]).unwrap();
	let raw = tensor.raw();
	list.push_back_named("t", tensor).unwrap();

	// the list owns the tensor now
	assert!(host.is_live(raw));
	assert_eq!(host.stats().frees, 0);

	let stored = list.front().unwrap().value_as::<TensorRef>().unwrap();
	assert_eq!(stored.raw(), raw);
	assert_eq!(stored.dimensions().as_ref(), &[2]);
	let typed = stored.typed::<Tensor<i64>>().unwrap();
	assert_eq!(typed.data(), &[4, 5]);
	drop(typed);
	assert!(host.is_live(raw));

	drop(list);
	assert!(!host.is_live(raw));
	assert_eq!(host.live_count(), 0);
}

#[test]
fn test_nested_lists() {
	let host = common::setup();
	let mut inner = GenericDataList::new().unwrap();
	inner.push_back_named("x", 1i64).unwrap();

	let mut outer = GenericDataList::new().unwrap();
	outer.push_back_named("inner", inner).unwrap();
	outer.push_back(2i64).unwrap();

	let nested = outer.front().unwrap().value_as::<DataListRef>().unwrap();
	assert_eq!(nested.length(), 1);
	assert_eq!(nested.names().unwrap(), vec![Some("x".to_string())]);

	let copy = outer.try_clone().unwrap();
	assert_eq!(copy.length(), 2);
	assert_ne!(copy.raw(), outer.raw());

	drop(nested);
	drop(outer);
	drop(copy);
	assert_eq!(host.live_count(), 0);
}

#[test]
fn test_raw_array_needs_category() {
	let host = common::setup();
	let mut list = GenericDataList::new().unwrap();
	let raw = host.tensor(&[1], &[1.0f64]);

	let err = list.push_primitive(None, Primitive::Array(raw)).unwrap_err();
	assert_eq!(
		err,
		Error::UnsupportedNodeType {
			code: ArgumentType::Undefined.to_raw()
		}
	);

	list.push_back_as(Some("t"), ArgumentType::Tensor, Primitive::Array(raw)).unwrap();
	let node = list.front().unwrap();
	assert_eq!(node.argument_type(), Some(ArgumentType::Tensor));
	let stored = node.value_as::<TensorRef>().unwrap();
	assert_eq!(stored.element_type(), Some(TensorType::Real));
}

#[test]
fn test_copy_of_stored_container_outlives_list() {
	let host = common::setup();
	let mut list = GenericDataList::new().unwrap();
	list.push_back(Tensor::from_slice(&[3], &[1.5f64, 2.5, 3.5]).unwrap()).unwrap();

	let stored = list.front().unwrap().value_as::<TensorRef>().unwrap();
	assert_eq!(stored.owner(), Ownership::Host);
	let copy = stored.try_clone().unwrap();
	let stored_raw = stored.raw();
	drop(stored);
	assert!(host.is_live(stored_raw));

	drop(list);
	assert!(!host.is_live(stored_raw));
	assert!(host.is_live(copy.raw()));
	assert_eq!(copy.owner(), Ownership::Library);
	assert_eq!(Tensor::<f64>::try_from(copy).unwrap().data(), &[1.5, 2.5, 3.5]);
	assert_eq!(host.live_count(), 0);
	assert_eq!(host.stats().double_frees, 0);
}

#[test]
fn test_views_in_values_stay_with_list() {
	let host = common::setup();
	let mut inner = GenericDataList::new().unwrap();
	inner.push_back(1i64).unwrap();
	let mut outer = GenericDataList::new().unwrap();
	outer.push_back(inner).unwrap();
	outer.push_back(Tensor::from_slice(&[1], &[9i64]).unwrap()).unwrap();

	let values = outer.values().unwrap();
	assert!(matches!(&values[0], NodeValue::DataList(nested) if nested.length() == 1));
	assert!(matches!(&values[1], NodeValue::Tensor(tensor) if tensor.element_type() == Some(TensorType::Integer)));
	drop(values);

	assert_eq!(host.stats().frees, 0);
	drop(outer);
	assert_eq!(host.live_count(), 0);
}

#[test]
fn test_push_back_as_mismatch() {
	let _host = common::setup();
	let mut list = GenericDataList::new().unwrap();

	let err = list.push_back_as(None, ArgumentType::Real, Primitive::Integer(1)).unwrap_err();
	assert_eq!(
		err,
		Error::UnsupportedNodeType {
			code: ArgumentType::Real.to_raw()
		}
	);
	assert!(list.push_back_as(None, ArgumentType::Integer, Primitive::Integer(1)).is_ok());
}

#[test]
fn test_push_back_as_rejects_non_container_kind_for_array() {
	let host = common::setup();
	let mut list = GenericDataList::new().unwrap();
	let raw = host.tensor(&[1], &[1i64]);

	for kind in [ArgumentType::Integer, ArgumentType::Utf8String, ArgumentType::Undefined] {
		let err = list.push_back_as(None, kind, Primitive::Array(raw)).unwrap_err();
		assert_eq!(
			err,
			Error::UnsupportedNodeType {
				code: kind.to_raw()
			}
		);
	}

	let err = list.push_back_as(None, ArgumentType::Undefined, Primitive::Integer(1)).unwrap_err();
	assert_eq!(
		err,
		Error::UnsupportedNodeType {
			code: ArgumentType::Undefined.to_raw()
		}
	);
	assert!(list.is_empty());
	assert!(host.is_live(raw));
}

#[test]
fn test_host_rejects_wrong_category() {
	let host = common::setup();
	let mut list = GenericDataList::new().unwrap();
	let raw = host.numeric_array(&[1], &[1u8]);

	let err = list.push_back_as(None, ArgumentType::Tensor, Primitive::Array(raw)).unwrap_err();
	assert_eq!(
		err,
		Error::UnsupportedNodeType {
			code: ArgumentType::Tensor.to_raw()
		}
	);
	assert!(list.is_empty());
}

#[test]
fn test_null_nested_handle() {
	let _host = common::setup();
	let mut list = GenericDataList::new().unwrap();

	let err = list.push_primitive(None, Primitive::Image(std::ptr::null_mut())).unwrap_err();
	assert_eq!(err, Error::NullNode);

	let err = list.push_back_as(None, ArgumentType::NumericArray, Primitive::Array(std::ptr::null_mut())).unwrap_err();
	assert_eq!(err, Error::NullNode);

	assert_eq!(unsafe { DataNode::from_raw(std::ptr::null_mut()) }.unwrap_err(), Error::NullNode);
}

#[test]
fn test_host_built_list() {
	let host = common::setup();
	let raw = host.data_store();
	host.data_store_add(raw, Some("n"), ArgumentType::Integer, ArgumentFFI::from_integer(7));
	host.data_store_add(raw, None, ArgumentType::Boolean, ArgumentFFI::from_boolean(false));

	let list = unsafe { GenericDataList::from_raw(raw, Passing::Constant) }.unwrap();
	assert_eq!(list.length(), 2);
	assert_eq!(list.names().unwrap(), vec![Some("n".to_string()), None]);
	assert!(matches!(list.back().unwrap().value().unwrap(), NodeValue::Boolean(false)));

	drop(list);
	assert_eq!(host.data_store_length(raw), 2);
}
