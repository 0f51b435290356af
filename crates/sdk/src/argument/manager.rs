// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cell::RefCell,
	ffi::{CString, c_char},
};

use hostlink_abi::data::ArgumentFFI;
use hostlink_type::{
	Complex64, Error, ImageElement, ImageType, NumericArrayElement, NumericArrayType, Result, TensorElement,
	TensorType, error::ContainerType,
};
use num_traits::{PrimInt, ToPrimitive};
use tracing::debug;

use crate::{
	container::{
		BufferInterface, Container, ContainerKind, GenericDataList, GenericImage, GenericNumericArray, GenericTensor,
	},
	dispatch::{
		ImageOperation, NumericArrayOperation, TensorOperation, dispatch_image, dispatch_numeric_array,
		dispatch_tensor,
	},
	policy::Passing,
	typed::{Image, NumericArray, Tensor},
	utf8,
};

thread_local! {
	/// Backing storage of the last string result, valid until the next one
	static STRING_RESULT: RefCell<CString> = RefCell::new(CString::default());
}

/// Typed access to the arguments and the result slot of one library function call
pub struct ArgumentManager<'a> {
	args: &'a [ArgumentFFI],
	result: &'a mut ArgumentFFI,
}

impl<'a> ArgumentManager<'a> {
	pub fn new(args: &'a [ArgumentFFI], result: &'a mut ArgumentFFI) -> Self {
		Self {
			args,
			result,
		}
	}

	pub fn len(&self) -> usize {
		self.args.len()
	}

	pub fn is_empty(&self) -> bool {
		self.args.is_empty()
	}

	/// Raw argument at `index`, [`Error::ArgumentIndex`] if out of range
	pub fn argument(&self, index: usize) -> Result<&ArgumentFFI> {
		self.args.get(index).ok_or(Error::ArgumentIndex {
			index,
			count: self.args.len(),
		})
	}

	pub fn get_boolean(&self, index: usize) -> Result<bool> {
		let arg = self.argument(index)?;
		Ok(unsafe { arg.boolean } != 0)
	}

	pub fn get_integer(&self, index: usize) -> Result<i64> {
		let arg = self.argument(index)?;
		Ok(unsafe { arg.integer })
	}

	pub fn get_real(&self, index: usize) -> Result<f64> {
		let arg = self.argument(index)?;
		Ok(unsafe { arg.real })
	}

	pub fn get_complex(&self, index: usize) -> Result<Complex64> {
		let arg = self.argument(index)?;
		Ok(Complex64::from(unsafe { arg.complex }))
	}

	pub fn get_string(&self, index: usize) -> Result<String> {
		let arg = self.argument(index)?;
		utf8::from_raw(unsafe { arg.utf8_string })
	}

	pub fn get_tensor(&self, index: usize, passing: Passing) -> Result<GenericTensor> {
		let arg = self.argument(index)?;
		// SAFETY: the host passes live handles in container argument slots
		unsafe { Container::from_raw(arg.tensor, passing) }
	}

	pub fn get_numeric_array(&self, index: usize, passing: Passing) -> Result<GenericNumericArray> {
		let arg = self.argument(index)?;
		// SAFETY: the host passes live handles in container argument slots
		unsafe { Container::from_raw(arg.numeric_array, passing) }
	}

	pub fn get_image(&self, index: usize, passing: Passing) -> Result<GenericImage> {
		let arg = self.argument(index)?;
		// SAFETY: the host passes live handles in container argument slots
		unsafe { Container::from_raw(arg.image, passing) }
	}

	pub fn get_data_list(&self, index: usize, passing: Passing) -> Result<GenericDataList> {
		let arg = self.argument(index)?;
		// SAFETY: the host passes live handles in container argument slots
		unsafe { Container::from_raw(arg.data_store, passing) }
	}

	/// Tensor argument checked to hold `T` elements
	pub fn get_typed_tensor<T: TensorElement>(&self, index: usize, passing: Passing) -> Result<Tensor<T>> {
		Tensor::try_from(self.get_tensor(index, passing)?)
	}

	pub fn get_typed_numeric_array<T: NumericArrayElement>(
		&self,
		index: usize,
		passing: Passing,
	) -> Result<NumericArray<T>> {
		NumericArray::try_from(self.get_numeric_array(index, passing)?)
	}

	pub fn get_typed_image<T: ImageElement>(&self, index: usize, passing: Passing) -> Result<Image<T>> {
		Image::try_from(self.get_image(index, passing)?)
	}

	/// Element type of a tensor argument, without taking ownership
	pub fn get_tensor_type(&self, index: usize) -> Result<TensorType> {
		let tensor = self.get_tensor(index, Passing::Constant)?;
		tensor.element_type().ok_or(Error::UnsupportedElementKind {
			container: ContainerType::Tensor,
			code: tensor.type_code(),
		})
	}

	pub fn get_numeric_array_type(&self, index: usize) -> Result<NumericArrayType> {
		let array = self.get_numeric_array(index, Passing::Constant)?;
		array.element_type().ok_or(Error::UnsupportedElementKind {
			container: ContainerType::NumericArray,
			code: array.type_code(),
		})
	}

	pub fn get_image_type(&self, index: usize) -> Result<ImageType> {
		let image = self.get_image(index, Passing::Constant)?;
		image.element_type().ok_or(Error::UnsupportedElementKind {
			container: ContainerType::Image,
			code: image.type_code(),
		})
	}

	/// Wrap a tensor argument and run `operation` at its element type
	///
	/// The element type is read before the argument is wrapped under `passing`, so an
	/// unknown tag fails without cloning, freeing or disowning anything.
	pub fn operate_on_tensor<O: TensorOperation>(
		&self,
		index: usize,
		passing: Passing,
		operation: O,
	) -> Result<O::Output> {
		self.get_tensor_type(index)?;
		Ok(dispatch_tensor(self.get_tensor(index, passing)?, operation)?)
	}

	pub fn operate_on_numeric_array<O: NumericArrayOperation>(
		&self,
		index: usize,
		passing: Passing,
		operation: O,
	) -> Result<O::Output> {
		self.get_numeric_array_type(index)?;
		Ok(dispatch_numeric_array(self.get_numeric_array(index, passing)?, operation)?)
	}

	pub fn operate_on_image<O: ImageOperation>(
		&self,
		index: usize,
		passing: Passing,
		operation: O,
	) -> Result<O::Output> {
		self.get_image_type(index)?;
		Ok(dispatch_image(self.get_image(index, passing)?, operation)?)
	}

	pub fn set_boolean(&mut self, value: bool) {
		*self.result = ArgumentFFI::from_boolean(value);
	}

	pub fn set_integer(&mut self, value: i64) {
		*self.result = ArgumentFFI::from_integer(value);
	}

	/// Set an integer result, clamping values outside the `i64` range
	///
	/// Returns `false` if the value had to be clamped.
	pub fn set_integer_checked<T: PrimInt>(&mut self, value: T) -> bool {
		match value.to_i64() {
			Some(value) => {
				self.set_integer(value);
				true
			}
			None => {
				let clamped = if value < T::zero() {
					i64::MIN
				} else {
					i64::MAX
				};
				debug!(clamped, "integer result out of range");
				self.set_integer(clamped);
				false
			}
		}
	}

	pub fn set_real(&mut self, value: f64) {
		*self.result = ArgumentFFI::from_real(value);
	}

	pub fn set_complex(&mut self, value: Complex64) {
		*self.result = ArgumentFFI::from_complex(value.into());
	}

	/// Set a string result
	///
	/// The string is kept in a per-thread buffer that stays valid until the next string
	/// result, which is how the host expects string results to be owned.
	pub fn set_string(&mut self, value: &str) -> Result<()> {
		let value = utf8::to_c_string(value)?;
		let ptr = STRING_RESULT.with(|buffer| {
			let mut buffer = buffer.borrow_mut();
			*buffer = value;
			buffer.as_ptr() as *mut c_char
		});
		*self.result = ArgumentFFI::from_utf8_string(ptr);
		Ok(())
	}

	/// Hand a container to the host as the result, see [`Container::pass_as_result`]
	///
	/// Typed containers go through `into_generic()` first.
	pub fn set_container<K: ContainerKind>(&mut self, container: Container<K>) -> Result<()> {
		container.pass_as_result(self.result)
	}

	/// Current content of the result slot
	pub fn result(&self) -> &ArgumentFFI {
		self.result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod index {
		use super::*;

		#[test]
		fn test_out_of_range() {
			let args = [ArgumentFFI::from_integer(1)];
			let mut result = ArgumentFFI::empty();
			let manager = ArgumentManager::new(&args, &mut result);

			assert_eq!(manager.get_integer(0).unwrap(), 1);
			assert_eq!(
				manager.get_integer(1).unwrap_err(),
				Error::ArgumentIndex {
					index: 1,
					count: 1
				}
			);
		}
	}

	mod set_integer_checked {
		use super::*;

		#[test]
		fn test_in_range() {
			let mut result = ArgumentFFI::empty();
			let mut manager = ArgumentManager::new(&[], &mut result);
			assert!(manager.set_integer_checked(42u64));
			assert_eq!(unsafe { manager.result().integer }, 42);
		}

		#[test]
		fn test_clamps_high() {
			let mut result = ArgumentFFI::empty();
			let mut manager = ArgumentManager::new(&[], &mut result);
			assert!(!manager.set_integer_checked(u64::MAX));
			assert_eq!(unsafe { manager.result().integer }, i64::MAX);
		}

		#[test]
		fn test_clamps_low() {
			let mut result = ArgumentFFI::empty();
			let mut manager = ArgumentManager::new(&[], &mut result);
			assert!(!manager.set_integer_checked(i128::MIN));
			assert_eq!(unsafe { manager.result().integer }, i64::MIN);
		}
	}

	mod set_string {
		use std::ffi::CStr;

		use super::*;

		#[test]
		fn test_buffer_holds_last_result() {
			let mut result = ArgumentFFI::empty();
			let mut manager = ArgumentManager::new(&[], &mut result);
			manager.set_string("first").unwrap();
			manager.set_string("second").unwrap();

			let value = unsafe { CStr::from_ptr(manager.result().utf8_string) };
			assert_eq!(value.to_str().unwrap(), "second");
		}

		#[test]
		fn test_interior_nul() {
			let mut result = ArgumentFFI::empty();
			let mut manager = ArgumentManager::new(&[], &mut result);
			assert!(matches!(manager.set_string("a\0b"), Err(Error::InvalidString { .. })));
		}
	}
}
