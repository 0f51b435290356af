// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Runs in its own process so no test host is ever installed

use hostlink_sdk::{Error, GenericDataList, GenericTensor, TensorType, host};

#[test]
fn test_host_not_initialized() {
	assert!(!host::is_initialized());
	assert_eq!(GenericTensor::new(TensorType::Integer, &[1]).unwrap_err(), Error::HostNotInitialized);
	assert_eq!(GenericDataList::new().unwrap_err(), Error::HostNotInitialized);
	assert_eq!(Error::HostNotInitialized.name(), "HostNotInitializedError");
}
