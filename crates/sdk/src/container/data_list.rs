// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use hostlink_abi::data::{ArgumentFFI, DataStoreFFI};
use hostlink_type::{ArgumentType, error::ContainerType};

use super::ContainerKind;
use crate::host::Host;

/// Ordered list of optionally named heterogeneous nodes
///
/// The host never shares node lists, so there is nothing to disown and the share count
/// is always 0.
pub enum DataListContainer {}

impl ContainerKind for DataListContainer {
	type Raw = DataStoreFFI;

	const TYPE: ContainerType = ContainerType::DataList;
	const ARGUMENT_TYPE: ArgumentType = ArgumentType::DataStore;
	const SHAREABLE: bool = false;

	fn clone_raw(host: &Host, raw: *mut DataStoreFFI) -> *mut DataStoreFFI {
		(host.data_store().copy)(raw)
	}

	fn free_raw(host: &Host, raw: *mut DataStoreFFI) {
		(host.data_store().free)(raw)
	}

	fn disown_raw(_host: &Host, _raw: *mut DataStoreFFI) {}

	fn share_count_raw(_host: &Host, _raw: *mut DataStoreFFI) -> i64 {
		0
	}

	fn to_argument(raw: *mut DataStoreFFI) -> ArgumentFFI {
		ArgumentFFI::from_data_store(raw)
	}
}
