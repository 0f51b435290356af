// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Process-wide installation of the host callbacks
//!
//! The host hands its callback table to the library once, when the library is loaded.
//! Containers capture a [`Host`] at construction so they can still release their
//! handle if the callbacks are uninstalled while they are alive.

use hostlink_abi::callbacks::{
	DataStoreCallbacks, HostCallbacks, ImageCallbacks, NumericArrayCallbacks, ReportCallbacks, TensorCallbacks,
};
use hostlink_type::{Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::config::LinkConfig;

/// Copyable reference to the installed callback table
#[derive(Clone, Copy)]
pub struct Host {
	callbacks: &'static HostCallbacks,
}

impl Host {
	pub fn new(callbacks: &'static HostCallbacks) -> Self {
		Self {
			callbacks,
		}
	}

	pub fn tensor(&self) -> &'static TensorCallbacks {
		&self.callbacks.tensor
	}

	pub fn numeric_array(&self) -> &'static NumericArrayCallbacks {
		&self.callbacks.numeric_array
	}

	pub fn image(&self) -> &'static ImageCallbacks {
		&self.callbacks.image
	}

	pub fn data_store(&self) -> &'static DataStoreCallbacks {
		&self.callbacks.data_store
	}

	pub fn report(&self) -> &'static ReportCallbacks {
		&self.callbacks.report
	}
}

#[derive(Default)]
struct HostState {
	callbacks: Option<&'static HostCallbacks>,
	config: LinkConfig,
}

impl HostState {
	fn install(&mut self, callbacks: &'static HostCallbacks, config: LinkConfig) {
		self.callbacks = Some(callbacks);
		self.config = config;
	}

	fn clear(&mut self) {
		self.callbacks = None;
		self.config = LinkConfig::default();
	}

	fn host(&self) -> Result<Host> {
		self.callbacks.map(Host::new).ok_or(Error::HostNotInitialized)
	}
}

static STATE: Lazy<RwLock<HostState>> = Lazy::new(|| RwLock::new(HostState::default()));

/// Install the host callbacks and the library configuration
///
/// Calling it again replaces both.
pub fn initialize(callbacks: &'static HostCallbacks, config: LinkConfig) {
	debug!(?config, "installing host callbacks");
	STATE.write().install(callbacks, config);
}

/// Remove the host callbacks and restore the default configuration
pub fn uninitialize() {
	debug!("removing host callbacks");
	STATE.write().clear();
}

pub fn is_initialized() -> bool {
	STATE.read().callbacks.is_some()
}

/// The installed host, or [`Error::HostNotInitialized`]
pub fn host() -> Result<Host> {
	STATE.read().host()
}

pub fn config() -> LinkConfig {
	STATE.read().config.clone()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::TEST_CALLBACKS;

	#[test]
	fn test_empty_state() {
		let state = HostState::default();
		assert!(matches!(state.host(), Err(Error::HostNotInitialized)));
	}

	#[test]
	fn test_install_then_clear() {
		let mut state = HostState::default();
		state.install(&TEST_CALLBACKS, LinkConfig::new().abort_on_panic(true));
		assert!(state.host().is_ok());
		assert!(state.config.abort_on_panic);

		state.clear();
		assert!(state.host().is_err());
		assert_eq!(state.config, LinkConfig::default());
	}

	#[test]
	fn test_host_points_at_installed_table() {
		let mut state = HostState::default();
		state.install(&TEST_CALLBACKS, LinkConfig::default());
		let host = state.host().unwrap();
		assert!(std::ptr::eq(host.tensor(), &TEST_CALLBACKS.tensor));
		assert!(std::ptr::eq(host.data_store(), &TEST_CALLBACKS.data_store));
	}
}
