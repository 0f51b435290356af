// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! hostlink library SDK
//!
//! Wraps the raw handles a host runtime hands to a library in owning containers whose
//! release behavior is chosen by a [`Passing`] policy, and dispatches generic code over
//! the element type a container carries at run time.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod argument;
pub mod config;
pub mod container;
pub mod datastore;
pub mod dispatch;
pub mod host;
pub mod policy;
pub mod report;
pub mod testing;
pub mod typed;
mod utf8;

pub use argument::{ArgumentManager, library_function};
pub use config::LinkConfig;
pub use container::{
	BufferInterface, Container, ContainerKind, GenericDataList, GenericImage, GenericNumericArray, GenericTensor,
	ImageInterface,
};
pub use datastore::{
	Borrowed, DataListRef, DataNode, FromNode, ImageRef, NodeInput, NodeValue, NumericArrayRef, Primitive, TensorRef,
};
pub use dispatch::{
	DispatchError, DispatchResult, ImageOperation, NumericArrayOperation, TensorOperation, dispatch_image,
	dispatch_numeric_array, dispatch_tensor,
};
pub use hostlink_type::{
	ArgumentType, ColorSpace, Complex, Complex32, Complex64, ConvertMethod, Error, ImageElement, ImageType,
	NumericArrayElement, NumericArrayType, Result, TensorElement, TensorType, registry,
};
pub use policy::{Acquire, Ownership, Passing, Release};
pub use typed::{Image, NumericArray, Tensor};
