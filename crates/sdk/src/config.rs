// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Library-wide settings installed together with the host callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
	/// Host symbol that receives the parameters of the last failure.
	///
	/// Default: `HostLink`$LastFailureParameters`
	pub failure_details_symbol: String,

	/// Abort the process when a library function panics instead of reporting `FunctionError`.
	///
	/// Default: false
	pub abort_on_panic: bool,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			failure_details_symbol: "HostLink`$LastFailureParameters".to_string(),
			abort_on_panic: false,
		}
	}
}

impl LinkConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failure_details_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.failure_details_symbol = symbol.into();
		self
	}

	pub fn abort_on_panic(mut self, abort: bool) -> Self {
		self.abort_on_panic = abort;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = LinkConfig::default();
		assert_eq!(config.failure_details_symbol, "HostLink`$LastFailureParameters");
		assert!(!config.abort_on_panic);
	}

	#[test]
	fn test_setters() {
		let config = LinkConfig::new().failure_details_symbol("MyPaclet`$Failure").abort_on_panic(true);
		assert_eq!(config.failure_details_symbol, "MyPaclet`$Failure");
		assert!(config.abort_on_panic);
	}
}
