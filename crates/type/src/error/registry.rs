// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Process-wide registry of named error conditions
//!
//! The host only understands integer error codes. Ids `7` down to `0` are the host's
//! own conditions. Every other error, built-in or registered by a library, gets the
//! next free negative id in registration order, so ids are stable for the lifetime
//! of the process.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{
	Result,
	error::{ContainerType, Error},
};

pub const VERSION_ERROR: i32 = 7;
pub const FUNCTION_ERROR: i32 = 6;
pub const MEMORY_ERROR: i32 = 5;
pub const NUMERICAL_ERROR: i32 = 4;
pub const DIMENSIONS_ERROR: i32 = 3;
pub const RANK_ERROR: i32 = 2;
pub const TYPE_ERROR: i32 = 1;
pub const NO_ERROR: i32 = 0;

const HOST_ERRORS: [(&str, &str); 8] = [
	(
		"VersionError",
		"An error was caused by an incompatible function call. The library was compiled with a previous host version.",
	),
	("FunctionError", "An error occurred in the library function."),
	("MemoryError", "An error was caused by failed memory allocation or insufficient memory."),
	("NumericalError", "A numerical error was encountered."),
	("DimensionsError", "An error caused by inconsistent dimensions or by exceeding array bounds."),
	("RankError", "An error was caused by a tensor with an inconsistent rank."),
	("TypeError", "An error caused by inconsistent types was encountered."),
	("NoError", "No errors occurred."),
];

const LIBRARY_ERRORS: [(&str, &str); 11] = [
	("HostNotInitializedError", "Host callbacks were not installed before the library function ran."),
	("ArgumentIndexError", "An error was caused by an incorrect argument index."),
	("ArgumentStringError", "A string argument was not valid UTF-8 or contained an interior NUL."),
	("DataListPushBackTypeError", "Element to be added to the DataList has incorrect type."),
	("DataListNullNodeError", "DataStoreNode passed to Node wrapper was null."),
	("DataListInvalidNodeTypeError", "DataStoreNode passed to Node wrapper carries data of invalid type."),
	("DataListNodeDataError", "Failed to read the data of a DataStoreNode."),
	("ErrorRegistryIdError", "An error was raised with a non-existent id."),
	("ErrorRegistryNameError", "An error was raised with a non-existent name."),
	("ErrorRegistryConflictError", "An error was registered with a name that already exists."),
	("FailureReportError", "The host rejected a failure report."),
];

/// One registered error condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
	pub id: i32,
	pub name: String,
	pub message: String,
}

/// Table of error conditions keyed by name and id
#[derive(Debug)]
pub struct ErrorRegistry {
	entries: Vec<ErrorEntry>,
	next_id: i32,
}

impl Default for ErrorRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ErrorRegistry {
	/// Create a registry holding the host's conditions and the built-in library errors
	pub fn new() -> Self {
		let mut result = Self {
			entries: Vec::new(),
			next_id: VERSION_ERROR,
		};

		for (name, message) in HOST_ERRORS.into_iter().chain(LIBRARY_ERRORS) {
			result.insert(name, message);
		}

		for container in ContainerType::ALL {
			let names = container.error_names();
			result.insert(names.new, &format!("Failed to create a new {container}."));
			result.insert(names.clone, &format!("Failed to clone a {container}."));
			result.insert(names.init, &format!("Failed to construct a {container} from a null handle."));
			result.insert(names.share, &format!("A {container} cannot be shared with the host."));
			result.insert(names.conversion, &format!("Failed to convert a {container} to a different type."));
			result.insert(names.element_kind, &format!("A {container} has an element type that is not supported."));
			result.insert(names.type_mismatch, &format!("An error was caused by a {container} type mismatch."));
			result.insert(names.size, &format!("An error was caused by an incorrect {container} size."));
		}

		result
	}

	fn insert(&mut self, name: &str, message: &str) -> i32 {
		let id = self.next_id;
		self.next_id -= 1;
		self.entries.push(ErrorEntry {
			id,
			name: name.to_string(),
			message: message.to_string(),
		});
		id
	}

	/// Register an error condition and return its id
	///
	/// Registering an existing name again with the same message returns the existing
	/// id. A different message for an existing name is rejected.
	pub fn register(&mut self, name: &str, message: &str) -> Result<i32> {
		if let Some(existing) = self.entries.iter().find(|entry| entry.name == name) {
			if existing.message == message {
				return Ok(existing.id);
			}
			return Err(Error::ErrorNameConflict {
				name: name.to_string(),
			});
		}

		let id = self.insert(name, message);
		debug!(name, id, "registered error");
		Ok(id)
	}

	pub fn find_by_name(&self, name: &str) -> Result<&ErrorEntry> {
		self.entries.iter().find(|entry| entry.name == name).ok_or_else(|| Error::UnknownErrorName {
			name: name.to_string(),
		})
	}

	pub fn find_by_id(&self, id: i32) -> Result<&ErrorEntry> {
		self.entries.iter().find(|entry| entry.id == id).ok_or(Error::UnknownErrorId {
			id,
		})
	}

	/// All entries, in registration order
	pub fn entries(&self) -> &[ErrorEntry] {
		&self.entries
	}

	/// Export as `{ name: { "id": .., "message": .. } }` for the host's failure reporting
	pub fn to_json(&self) -> Value {
		let mut result = Map::new();
		for entry in &self.entries {
			result.insert(
				entry.name.clone(),
				json!({
					"id": entry.id,
					"message": entry.message,
				}),
			);
		}
		Value::Object(result)
	}
}

static REGISTRY: Lazy<RwLock<ErrorRegistry>> = Lazy::new(|| RwLock::new(ErrorRegistry::new()));

/// Register an error condition in the process-wide registry
pub fn register(name: &str, message: &str) -> Result<i32> {
	REGISTRY.write().register(name, message)
}

/// Register several error conditions, stopping at the first conflict
pub fn register_all<'a>(errors: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<()> {
	let mut registry = REGISTRY.write();
	for (name, message) in errors {
		registry.register(name, message)?;
	}
	Ok(())
}

pub fn find_by_name(name: &str) -> Result<ErrorEntry> {
	REGISTRY.read().find_by_name(name).cloned()
}

pub fn find_by_id(id: i32) -> Result<ErrorEntry> {
	REGISTRY.read().find_by_id(id).cloned()
}

pub fn entries() -> Vec<ErrorEntry> {
	REGISTRY.read().entries().to_vec()
}

pub fn to_json() -> String {
	REGISTRY.read().to_json().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	mod new {
		use super::*;

		#[test]
		fn test_host_ids() {
			let registry = ErrorRegistry::new();
			assert_eq!(registry.find_by_name("VersionError").unwrap().id, VERSION_ERROR);
			assert_eq!(registry.find_by_name("FunctionError").unwrap().id, FUNCTION_ERROR);
			assert_eq!(registry.find_by_name("TypeError").unwrap().id, TYPE_ERROR);
			assert_eq!(registry.find_by_name("NoError").unwrap().id, NO_ERROR);
		}

		#[test]
		fn test_library_errors_are_negative() {
			let registry = ErrorRegistry::new();
			let first = registry.find_by_name("HostNotInitializedError").unwrap();
			assert_eq!(first.id, -1);
			assert!(registry.entries().iter().skip(HOST_ERRORS.len()).all(|entry| entry.id < 0));
		}

		#[test]
		fn test_ids_are_unique() {
			let registry = ErrorRegistry::new();
			let mut ids: Vec<i32> = registry.entries().iter().map(|entry| entry.id).collect();
			let count = ids.len();
			ids.sort();
			ids.dedup();
			assert_eq!(ids.len(), count);
		}
	}

	mod register {
		use super::*;

		#[test]
		fn test_assigns_next_id() {
			let mut registry = ErrorRegistry::new();
			let last = registry.entries().last().unwrap().id;
			let first = registry.register("FirstError", "first").unwrap();
			let second = registry.register("SecondError", "second").unwrap();
			assert_eq!(first, last - 1);
			assert_eq!(second, last - 2);
		}

		#[test]
		fn test_same_message_is_noop() {
			let mut registry = ErrorRegistry::new();
			let id = registry.register("RepeatedError", "same").unwrap();
			let count = registry.entries().len();
			assert_eq!(registry.register("RepeatedError", "same").unwrap(), id);
			assert_eq!(registry.entries().len(), count);
		}

		#[test]
		fn test_conflicting_message() {
			let mut registry = ErrorRegistry::new();
			registry.register("ConflictError", "one").unwrap();
			let err = registry.register("ConflictError", "two").unwrap_err();
			assert_eq!(
				err,
				Error::ErrorNameConflict {
					name: "ConflictError".to_string()
				}
			);
			assert_eq!(err.name(), "ErrorRegistryConflictError");
		}

		#[test]
		fn test_conflict_does_not_consume_an_id() {
			let mut registry = ErrorRegistry::new();
			let first = registry.register("KeptError", "one").unwrap();
			let _ = registry.register("KeptError", "two");
			let next = registry.register("NextError", "next").unwrap();
			assert_eq!(next, first - 1);
		}

		#[test]
		fn test_builtin_name_with_other_message() {
			let mut registry = ErrorRegistry::new();
			assert!(registry.register("NoError", "something else").is_err());
		}
	}

	mod find {
		use super::*;

		#[test]
		fn test_by_id() {
			let registry = ErrorRegistry::new();
			assert_eq!(registry.find_by_id(MEMORY_ERROR).unwrap().name, "MemoryError");
		}

		#[test]
		fn test_unknown_id() {
			let registry = ErrorRegistry::new();
			assert_eq!(
				registry.find_by_id(i32::MIN).unwrap_err(),
				Error::UnknownErrorId {
					id: i32::MIN
				}
			);
		}

		#[test]
		fn test_unknown_name() {
			let registry = ErrorRegistry::new();
			assert!(matches!(registry.find_by_name("Missing"), Err(Error::UnknownErrorName { .. })));
		}
	}

	mod to_json {
		use super::*;

		#[test]
		fn test_exports_every_entry() {
			let mut registry = ErrorRegistry::new();
			let id = registry.register("JsonError", "exported").unwrap();
			let json = registry.to_json();

			assert_eq!(json.as_object().unwrap().len(), registry.entries().len());
			assert_eq!(json["JsonError"]["id"], id);
			assert_eq!(json["JsonError"]["message"], "exported");
			assert_eq!(json["NoError"]["id"], 0);
		}
	}

	mod global {
		use super::*;

		#[test]
		fn test_register_all_then_find() {
			register_all([("GlobalAError", "a"), ("GlobalBError", "b")]).unwrap();
			let a = find_by_name("GlobalAError").unwrap();
			let b = find_by_name("GlobalBError").unwrap();
			assert_eq!(find_by_id(a.id).unwrap(), a);
			assert!(b.id < a.id);
			assert!(to_json().contains("GlobalBError"));
		}
	}
}
