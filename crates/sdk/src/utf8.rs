// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ffi::{CStr, CString, c_char};

use hostlink_type::{Error, Result};

/// Copy a NUL-terminated UTF-8 string owned by the host
pub(crate) fn from_raw(ptr: *const c_char) -> Result<String> {
	if ptr.is_null() {
		return Err(Error::InvalidString {
			reason: "null string pointer".to_string(),
		});
	}

	// SAFETY: the host hands out NUL-terminated strings that outlive this call
	let value = unsafe { CStr::from_ptr(ptr) };
	value.to_str().map(str::to_owned).map_err(|err| Error::InvalidString {
		reason: err.to_string(),
	})
}

pub(crate) fn to_c_string(value: &str) -> Result<CString> {
	CString::new(value).map_err(|err| Error::InvalidString {
		reason: err.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_null() {
		assert!(matches!(from_raw(std::ptr::null()), Err(Error::InvalidString { .. })));
	}

	#[test]
	fn test_invalid_utf8() {
		let bytes = b"\xff\xfe\0";
		assert!(from_raw(bytes.as_ptr() as *const c_char).is_err());
	}

	#[test]
	fn test_interior_nul() {
		assert!(to_c_string("a\0b").is_err());
		assert_eq!(to_c_string("héllo").unwrap().as_bytes(), "héllo".as_bytes());
	}

	#[test]
	fn test_from_raw() {
		let value = CString::new("grüße").unwrap();
		assert_eq!(from_raw(value.as_ptr()).unwrap(), "grüße");
	}
}
