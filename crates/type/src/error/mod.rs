// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Errors raised by hostlink libraries
//!
//! Every [`Error`] has a registry name. Only the numeric id registered under that name
//! crosses the ABI boundary; see [`registry`].

mod container;
pub mod registry;

pub use container::ContainerType;

use crate::kind::ArgumentType;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("host callbacks are not installed")]
	HostNotInitialized,

	#[error("host refused to allocate a {container}")]
	Allocation {
		container: ContainerType,
	},

	#[error("host failed to clone a {container}")]
	Clone {
		container: ContainerType,
	},

	#[error("cannot wrap a null {container} handle")]
	InvalidHandle {
		container: ContainerType,
	},

	#[error("a {container} cannot be shared with the host")]
	NotShareable {
		container: ContainerType,
	},

	#[error("host rejected conversion of a {container} to {target}")]
	Conversion {
		container: ContainerType,
		target: String,
	},

	#[error("unsupported {container} element kind {code}")]
	UnsupportedElementKind {
		container: ContainerType,
		code: i64,
	},

	#[error("{container} holds {actual} elements, expected {expected}")]
	TypeMismatch {
		container: ContainerType,
		expected: String,
		actual: String,
	},

	#[error("{container} of {expected} elements cannot hold {actual} values")]
	Size {
		container: ContainerType,
		expected: usize,
		actual: usize,
	},

	#[error("argument type {code} cannot be stored in a data list node")]
	UnsupportedNodeType {
		code: i32,
	},

	#[error("data list node handle is null")]
	NullNode,

	#[error("data list node holds argument type {actual}, expected {expected}")]
	InvalidNodeType {
		expected: ArgumentType,
		actual: i32,
	},

	#[error("host failed to read a data list node")]
	NodeData,

	#[error("argument index {index} out of range for {count} arguments")]
	ArgumentIndex {
		index: usize,
		count: usize,
	},

	#[error("invalid string: {reason}")]
	InvalidString {
		reason: String,
	},

	#[error("error {name} is already registered with a different message")]
	ErrorNameConflict {
		name: String,
	},

	#[error("no error registered under the name {name}")]
	UnknownErrorName {
		name: String,
	},

	#[error("no error registered with id {id}")]
	UnknownErrorId {
		id: i32,
	},

	#[error("host rejected the value of symbol {symbol}")]
	Report {
		symbol: String,
	},

	#[error("{name}: {message}")]
	Custom {
		name: String,
		message: String,
	},
}

impl Error {
	/// Build an error a library registered under `name`
	pub fn custom(name: &str) -> Self {
		match registry::find_by_name(name) {
			Ok(entry) => Error::Custom {
				name: entry.name,
				message: entry.message,
			},
			Err(err) => err,
		}
	}

	/// Name under which this error is registered
	pub fn name(&self) -> &str {
		match self {
			Error::HostNotInitialized => "HostNotInitializedError",
			Error::Allocation {
				container,
			} => container.error_names().new,
			Error::Clone {
				container,
			} => container.error_names().clone,
			Error::InvalidHandle {
				container,
			} => container.error_names().init,
			Error::NotShareable {
				container,
			} => container.error_names().share,
			Error::Conversion {
				container,
				..
			} => container.error_names().conversion,
			Error::UnsupportedElementKind {
				container,
				..
			} => container.error_names().element_kind,
			Error::TypeMismatch {
				container,
				..
			} => container.error_names().type_mismatch,
			Error::Size {
				container,
				..
			} => container.error_names().size,
			Error::UnsupportedNodeType {
				..
			} => "DataListPushBackTypeError",
			Error::NullNode => "DataListNullNodeError",
			Error::InvalidNodeType {
				..
			} => "DataListInvalidNodeTypeError",
			Error::NodeData => "DataListNodeDataError",
			Error::ArgumentIndex {
				..
			} => "ArgumentIndexError",
			Error::InvalidString {
				..
			} => "ArgumentStringError",
			Error::ErrorNameConflict {
				..
			} => "ErrorRegistryConflictError",
			Error::UnknownErrorName {
				..
			} => "ErrorRegistryNameError",
			Error::UnknownErrorId {
				..
			} => "ErrorRegistryIdError",
			Error::Report {
				..
			} => "FailureReportError",
			Error::Custom {
				name,
				..
			} => name.as_str(),
		}
	}

	/// Numeric id reported to the host
	///
	/// Falls back to [`registry::FUNCTION_ERROR`] if the name is not registered.
	pub fn code(&self) -> i32 {
		registry::find_by_name(self.name()).map(|entry| entry.id).unwrap_or(registry::FUNCTION_ERROR)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod name {
		use super::*;

		#[test]
		fn test_container_errors_are_per_container() {
			let tensor = Error::Allocation {
				container: ContainerType::Tensor,
			};
			let image = Error::Allocation {
				container: ContainerType::Image,
			};
			assert_eq!(tensor.name(), "TensorNewError");
			assert_eq!(image.name(), "ImageNewError");
		}

		#[test]
		fn test_custom_uses_its_own_name() {
			let err = Error::Custom {
				name: "MyError".to_string(),
				message: "boom".to_string(),
			};
			assert_eq!(err.name(), "MyError");
		}
	}

	mod code {
		use super::*;

		#[test]
		fn test_every_builtin_name_is_registered() {
			let mut errors = vec![
				Error::HostNotInitialized,
				Error::UnsupportedNodeType {
					code: 0,
				},
				Error::NullNode,
				Error::InvalidNodeType {
					expected: ArgumentType::Integer,
					actual: 3,
				},
				Error::NodeData,
				Error::ArgumentIndex {
					index: 1,
					count: 1,
				},
				Error::InvalidString {
					reason: String::new(),
				},
				Error::ErrorNameConflict {
					name: String::new(),
				},
				Error::UnknownErrorName {
					name: String::new(),
				},
				Error::UnknownErrorId {
					id: 0,
				},
				Error::Report {
					symbol: String::new(),
				},
			];
			for container in ContainerType::ALL {
				errors.push(Error::Allocation {
					container,
				});
				errors.push(Error::Clone {
					container,
				});
				errors.push(Error::InvalidHandle {
					container,
				});
				errors.push(Error::NotShareable {
					container,
				});
				errors.push(Error::Conversion {
					container,
					target: String::new(),
				});
				errors.push(Error::UnsupportedElementKind {
					container,
					code: 0,
				});
				errors.push(Error::TypeMismatch {
					container,
					expected: String::new(),
					actual: String::new(),
				});
				errors.push(Error::Size {
					container,
					expected: 0,
					actual: 1,
				});
			}

			for err in errors {
				assert!(registry::find_by_name(err.name()).is_ok(), "{} is not registered", err.name());
				assert!(err.code() < 0, "{} has a reserved code", err.name());
			}
		}

		#[test]
		fn test_unregistered_custom_falls_back_to_function_error() {
			let err = Error::Custom {
				name: "NeverRegisteredError".to_string(),
				message: String::new(),
			};
			assert_eq!(err.code(), registry::FUNCTION_ERROR);
		}

		#[test]
		fn test_custom_after_registration() {
			let id = registry::register("ErrorCodeTestError", "raised by a test").unwrap();
			let err = Error::custom("ErrorCodeTestError");
			assert_eq!(err.code(), id);
			assert_eq!(err.to_string(), "ErrorCodeTestError: raised by a test");
		}

		#[test]
		fn test_custom_unknown_name() {
			let err = Error::custom("NoSuchErrorName");
			assert_eq!(
				err,
				Error::UnknownErrorName {
					name: "NoSuchErrorName".to_string()
				}
			);
		}
	}
}
