// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Entry point wrapper for library functions called by the host
//!
//! Return codes:
//! - `0` (`NoError`): success
//! - any other value: the registry id of the error that ended the call
//!
//! The details of a failure are also published to the host, see [`crate::report`].
//!
//! ```ignore
//! #[unsafe(no_mangle)]
//! pub unsafe extern "C" fn add_one(argc: i64, args: *mut ArgumentFFI, result: *mut ArgumentFFI) -> i32 {
//! 	unsafe {
//! 		library_function(argc, args, result, |mgr| {
//! 			mgr.set_integer(mgr.get_integer(0)? + 1);
//! 			Ok(())
//! 		})
//! 	}
//! }
//! ```

use std::{
	panic::{AssertUnwindSafe, catch_unwind},
	process::abort,
	slice,
};

use hostlink_abi::data::ArgumentFFI;
use hostlink_type::{Error, Result, registry};
use tracing::error;

use super::ArgumentManager;
use crate::{host, report};

/// Run `function` over the host's arguments, never unwinding into the host
///
/// Errors are reported by their registry id; a panic is reported as `FunctionError`
/// unless the configuration asks to abort.
///
/// # Safety
/// `args` must point to `argc` valid arguments (or be null when `argc` is 0) and
/// `result` must point to a writable result slot, both for the duration of the call.
pub unsafe fn library_function<F>(argc: i64, args: *mut ArgumentFFI, result: *mut ArgumentFFI, function: F) -> i32
where
	F: FnOnce(&mut ArgumentManager<'_>) -> Result<()>,
{
	if result.is_null() || (args.is_null() && argc > 0) || argc < 0 {
		error!(argc, "library function called with invalid arguments");
		return registry::FUNCTION_ERROR;
	}

	let outcome = catch_unwind(AssertUnwindSafe(|| {
		let args = if argc == 0 {
			&[][..]
		} else {
			// SAFETY: guaranteed by the caller
			unsafe { slice::from_raw_parts(args as *const ArgumentFFI, argc as usize) }
		};
		// SAFETY: guaranteed by the caller
		let result = unsafe { &mut *result };

		let mut manager = ArgumentManager::new(args, result);
		function(&mut manager)
	}));

	match outcome {
		Ok(Ok(())) => registry::NO_ERROR,
		Ok(Err(err)) => {
			let code = err.code();
			error!(name = err.name(), code, %err, "library function failed");
			report::report_failure(&err);
			code
		}
		Err(panic) => {
			error!(?panic, "panic in library function");
			if host::config().abort_on_panic {
				abort();
			}
			report::report_failure(&Error::Custom {
				name: "FunctionError".to_string(),
				message: "library function panicked".to_string(),
			});
			registry::FUNCTION_ERROR
		}
	}
}
