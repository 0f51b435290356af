// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Failure reports sent to the host
//!
//! The host only sees the numeric id a library function returns. The name, message and
//! parameters of the failure are published as JSON under
//! [`LinkConfig::failure_details_symbol`](crate::LinkConfig::failure_details_symbol).

use hostlink_abi::constants::HOST_OK;
use hostlink_type::{Error, Result, registry};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::{
	host::{self, Host},
	utf8,
};

/// Publish the whole error registry as `{ name: { "id": .., "message": .. } }` under `symbol`
#[instrument(name = "report::publish_errors", level = "trace")]
pub fn publish_errors(symbol: &str) -> Result<()> {
	let host = host::host()?;
	set_symbol(&host, symbol, &registry::to_json())
}

/// Publish the error that ended a library function
///
/// A host that cannot take the report only gets a warning logged; the error id is
/// returned to it either way.
pub(crate) fn report_failure(err: &Error) {
	let Ok(host) = host::host() else {
		return;
	};

	let symbol = host::config().failure_details_symbol;
	let id = err.code();
	let message = registry::find_by_id(id).map(|entry| entry.message).unwrap_or_default();
	let details = json!({
		"name": err.name(),
		"id": id,
		"message": message,
		"parameters": err.to_string(),
	});

	if let Err(report) = set_symbol(&host, &symbol, &details.to_string()) {
		warn!(%report, "failed to report library function failure");
	}
}

fn set_symbol(host: &Host, symbol: &str, value: &str) -> Result<()> {
	let name = utf8::to_c_string(symbol)?;
	let value = utf8::to_c_string(value)?;

	if (host.report().set_symbol)(name.as_ptr(), value.as_ptr()) != HOST_OK {
		return Err(Error::Report {
			symbol: symbol.to_string(),
		});
	}

	debug!(symbol, "published symbol");
	Ok(())
}
