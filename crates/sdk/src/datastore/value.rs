// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use hostlink_abi::data::{ArrayFFI, DataStoreFFI, ImageFFI};
use hostlink_type::{ArgumentType, Complex64, ImageElement, NumericArrayElement, TensorElement};

use super::{DataListRef, ImageRef, NumericArrayRef, TensorRef};
use crate::{
	container::{GenericDataList, GenericImage, GenericNumericArray, GenericTensor},
	typed::{Image, NumericArray, Tensor},
};

/// Value read from a data list node
///
/// Containers are views into the list, see [`Borrowed`](super::Borrowed).
#[derive(Debug)]
pub enum NodeValue<'a> {
	Boolean(bool),
	Integer(i64),
	Real(f64),
	Complex(Complex64),
	String(String),
	Tensor(TensorRef<'a>),
	NumericArray(NumericArrayRef<'a>),
	Image(ImageRef<'a>),
	DataList(DataListRef<'a>),
}

impl NodeValue<'_> {
	pub fn argument_type(&self) -> ArgumentType {
		match self {
			NodeValue::Boolean(_) => ArgumentType::Boolean,
			NodeValue::Integer(_) => ArgumentType::Integer,
			NodeValue::Real(_) => ArgumentType::Real,
			NodeValue::Complex(_) => ArgumentType::Complex,
			NodeValue::String(_) => ArgumentType::Utf8String,
			NodeValue::Tensor(_) => ArgumentType::Tensor,
			NodeValue::NumericArray(_) => ArgumentType::NumericArray,
			NodeValue::Image(_) => ArgumentType::Image,
			NodeValue::DataList(_) => ArgumentType::DataStore,
		}
	}
}

/// Value appended to a data list
///
/// Containers are moved into the list, which releases them from then on.
#[derive(Debug)]
pub enum NodeInput {
	Boolean(bool),
	Integer(i64),
	Real(f64),
	Complex(Complex64),
	String(String),
	Tensor(GenericTensor),
	NumericArray(GenericNumericArray),
	Image(GenericImage),
	DataList(GenericDataList),
}

/// Value at the level of raw host handles
///
/// A raw [`ArrayFFI`] may be either a tensor or a numeric array, so it can only be
/// stored through [`GenericDataList::push_back_as`], which names the category.
#[derive(Debug, Clone, Copy)]
pub enum Primitive<'a> {
	Boolean(bool),
	Integer(i64),
	Real(f64),
	Complex(Complex64),
	String(&'a str),
	Array(*mut ArrayFFI),
	Image(*mut ImageFFI),
	DataStore(*mut DataStoreFFI),
}

impl Primitive<'_> {
	/// `None` for raw arrays
	pub fn argument_type(&self) -> Option<ArgumentType> {
		match self {
			Primitive::Boolean(_) => Some(ArgumentType::Boolean),
			Primitive::Integer(_) => Some(ArgumentType::Integer),
			Primitive::Real(_) => Some(ArgumentType::Real),
			Primitive::Complex(_) => Some(ArgumentType::Complex),
			Primitive::String(_) => Some(ArgumentType::Utf8String),
			Primitive::Array(_) => None,
			Primitive::Image(_) => Some(ArgumentType::Image),
			Primitive::DataStore(_) => Some(ArgumentType::DataStore),
		}
	}
}

/// Types a node value can be read as
pub trait FromNode<'a>: Sized {
	const TYPE: ArgumentType;

	fn from_value(value: NodeValue<'a>) -> Option<Self>;
}

macro_rules! node_value {
	($($t:ty => $variant:ident as $tag:ident),* $(,)?) => {
		$(
			impl<'a> FromNode<'a> for $t {
				const TYPE: ArgumentType = ArgumentType::$tag;

				fn from_value(value: NodeValue<'a>) -> Option<Self> {
					match value {
						NodeValue::$variant(value) => Some(value),
						_ => None,
					}
				}
			}
		)*
	};
}

macro_rules! node_container {
	($($view:ident => $variant:ident as $tag:ident),* $(,)?) => {
		$(
			impl<'a> FromNode<'a> for $view<'a> {
				const TYPE: ArgumentType = ArgumentType::$tag;

				fn from_value(value: NodeValue<'a>) -> Option<Self> {
					match value {
						NodeValue::$variant(value) => Some(value),
						_ => None,
					}
				}
			}
		)*
	};
}

node_value!(
	bool => Boolean as Boolean,
	i64 => Integer as Integer,
	f64 => Real as Real,
	Complex64 => Complex as Complex,
	String => String as Utf8String,
);

node_container!(
	TensorRef => Tensor as Tensor,
	NumericArrayRef => NumericArray as NumericArray,
	ImageRef => Image as Image,
	DataListRef => DataList as DataStore,
);

macro_rules! node_input {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$t> for NodeInput {
				fn from(value: $t) -> Self {
					NodeInput::$variant(value)
				}
			}
		)*
	};
}

node_input!(
	bool => Boolean,
	i64 => Integer,
	f64 => Real,
	Complex64 => Complex,
	String => String,
	GenericTensor => Tensor,
	GenericNumericArray => NumericArray,
	GenericImage => Image,
	GenericDataList => DataList,
);

impl From<&str> for NodeInput {
	fn from(value: &str) -> Self {
		NodeInput::String(value.to_string())
	}
}

impl<T: TensorElement> From<Tensor<T>> for NodeInput {
	fn from(value: Tensor<T>) -> Self {
		NodeInput::Tensor(value.into_generic())
	}
}

impl<T: NumericArrayElement> From<NumericArray<T>> for NodeInput {
	fn from(value: NumericArray<T>) -> Self {
		NodeInput::NumericArray(value.into_generic())
	}
}

impl<T: ImageElement> From<Image<T>> for NodeInput {
	fn from(value: Image<T>) -> Self {
		NodeInput::Image(value.into_generic())
	}
}
