// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ffi::{CStr, CString, c_char};

use hostlink_abi::data::{ArgumentFFI, DataStoreFFI, ImageFFI, NumericArrayFFI, TensorFFI};
use hostlink_type::{Complex64, Result};

use crate::argument::{ArgumentManager, library_function};

/// Argument vector and result slot of one simulated library function call
///
/// ```ignore
/// let mut args = Arguments::new().integer(2).string("abc");
/// let code = args.call(|mgr| {
/// 	mgr.set_integer(mgr.get_integer(0)? * 2);
/// 	Ok(())
/// });
/// assert_eq!(args.result_integer(), 4);
/// ```
#[derive(Default)]
pub struct Arguments {
	args: Vec<ArgumentFFI>,
	strings: Vec<CString>,
	result: ArgumentFFI,
}

impl Arguments {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn raw(mut self, value: ArgumentFFI) -> Self {
		self.args.push(value);
		self
	}

	pub fn boolean(self, value: bool) -> Self {
		self.raw(ArgumentFFI::from_boolean(value))
	}

	pub fn integer(self, value: i64) -> Self {
		self.raw(ArgumentFFI::from_integer(value))
	}

	pub fn real(self, value: f64) -> Self {
		self.raw(ArgumentFFI::from_real(value))
	}

	pub fn complex(self, value: Complex64) -> Self {
		self.raw(ArgumentFFI::from_complex(value.into()))
	}

	/// Panics if `value` contains a NUL byte
	pub fn string(mut self, value: &str) -> Self {
		let string = CString::new(value).expect("string argument without NUL");
		let ptr = string.as_ptr() as *mut c_char;
		self.strings.push(string);
		self.raw(ArgumentFFI::from_utf8_string(ptr))
	}

	/// Raw bytes, for strings that are not valid UTF-8
	pub fn bytes(mut self, value: &[u8]) -> Self {
		let string = CString::new(value).expect("string argument without NUL");
		let ptr = string.as_ptr() as *mut c_char;
		self.strings.push(string);
		self.raw(ArgumentFFI::from_utf8_string(ptr))
	}

	pub fn tensor(self, raw: *mut TensorFFI) -> Self {
		self.raw(ArgumentFFI::from_array(raw))
	}

	pub fn numeric_array(self, raw: *mut NumericArrayFFI) -> Self {
		self.raw(ArgumentFFI::from_array(raw))
	}

	pub fn image(self, raw: *mut ImageFFI) -> Self {
		self.raw(ArgumentFFI::from_image(raw))
	}

	pub fn data_store(self, raw: *mut DataStoreFFI) -> Self {
		self.raw(ArgumentFFI::from_data_store(raw))
	}

	pub fn len(&self) -> usize {
		self.args.len()
	}

	pub fn is_empty(&self) -> bool {
		self.args.is_empty()
	}

	pub fn manager(&mut self) -> ArgumentManager<'_> {
		ArgumentManager::new(&self.args, &mut self.result)
	}

	/// Invoke `function` through the same entry guard a host call goes through
	pub fn call<F>(&mut self, function: F) -> i32
	where
		F: FnOnce(&mut ArgumentManager<'_>) -> Result<()>,
	{
		let argc = self.args.len() as i64;
		let args = self.args.as_mut_ptr();
		let result = &mut self.result as *mut ArgumentFFI;
		unsafe { library_function(argc, args, result, function) }
	}

	pub fn result(&self) -> ArgumentFFI {
		self.result
	}

	pub fn result_boolean(&self) -> bool {
		unsafe { self.result.boolean != 0 }
	}

	pub fn result_integer(&self) -> i64 {
		unsafe { self.result.integer }
	}

	pub fn result_real(&self) -> f64 {
		unsafe { self.result.real }
	}

	pub fn result_complex(&self) -> Complex64 {
		unsafe { self.result.complex }.into()
	}

	/// String result, `None` if the slot holds a null pointer
	pub fn result_string(&self) -> Option<String> {
		let ptr = unsafe { self.result.utf8_string };
		if ptr.is_null() {
			return None;
		}
		Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
	}

	pub fn result_tensor(&self) -> *mut TensorFFI {
		unsafe { self.result.tensor }
	}

	pub fn result_numeric_array(&self) -> *mut NumericArrayFFI {
		unsafe { self.result.numeric_array }
	}

	pub fn result_image(&self) -> *mut ImageFFI {
		unsafe { self.result.image }
	}

	pub fn result_data_store(&self) -> *mut DataStoreFFI {
		unsafe { self.result.data_store }
	}
}
