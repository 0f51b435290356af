// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// The host configuration is process-wide, so this binary holds a single test.

mod common;

use hostlink_sdk::{Error, LinkConfig, registry, report, testing::{Arguments, TestHost}};
use serde_json::Value;

#[test]
fn test_reports_go_to_configured_symbol() {
	common::setup();
	let host = TestHost::with_config(LinkConfig::new().failure_details_symbol("Paclet`$Failure"));
	registry::register("ReportTestError", "report test failure").unwrap();

	let mut args = Arguments::new();
	let code = args.call(|_| Err(Error::custom("ReportTestError")));

	let details: Value = serde_json::from_str(&host.symbol("Paclet`$Failure").unwrap()).unwrap();
	assert_eq!(details["name"], "ReportTestError");
	assert_eq!(details["id"], code);
	assert_eq!(details["message"], "report test failure");
	assert!(host.symbol(&LinkConfig::default().failure_details_symbol).is_none());

	report::publish_errors("Paclet`$Errors").unwrap();
	let table: Value = serde_json::from_str(&host.symbol("Paclet`$Errors").unwrap()).unwrap();
	assert_eq!(table["NoError"]["id"], registry::NO_ERROR);
	assert_eq!(table["ReportTestError"]["id"], code);
	assert_eq!(table.as_object().unwrap().len(), registry::entries().len());
}
