// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use hostlink_sdk::testing::TestHost;

/// Install a test subscriber (honoring `RUST_LOG`) and a fresh test host
pub fn setup() -> TestHost {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
		)
		.with_test_writer()
		.try_init();

	TestHost::new()
}
