// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use hostlink_abi::constants::*;
use serde::{Deserialize, Serialize};

/// How the host converts numeric array elements that do not fit the target type
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvertMethod {
	/// Fail if any value does not fit
	Check,
	/// Clip to the target range, fail on other losses
	ClipCheck,
	/// Coerce to the target type without checks
	Coerce,
	ClipCoerce,
	/// Round to the nearest representable value
	Round,
	ClipRound,
	/// Rescale the source range onto the target range
	Scale,
	ClipScale,
}

impl ConvertMethod {
	pub fn to_raw(&self) -> i32 {
		match self {
			ConvertMethod::Check => CONVERT_CHECK,
			ConvertMethod::ClipCheck => CONVERT_CLIP_CHECK,
			ConvertMethod::Coerce => CONVERT_COERCE,
			ConvertMethod::ClipCoerce => CONVERT_CLIP_COERCE,
			ConvertMethod::Round => CONVERT_ROUND,
			ConvertMethod::ClipRound => CONVERT_CLIP_ROUND,
			ConvertMethod::Scale => CONVERT_SCALE,
			ConvertMethod::ClipScale => CONVERT_CLIP_SCALE,
		}
	}

	pub fn from_raw(value: i32) -> Option<Self> {
		match value {
			CONVERT_CHECK => Some(ConvertMethod::Check),
			CONVERT_CLIP_CHECK => Some(ConvertMethod::ClipCheck),
			CONVERT_COERCE => Some(ConvertMethod::Coerce),
			CONVERT_CLIP_COERCE => Some(ConvertMethod::ClipCoerce),
			CONVERT_ROUND => Some(ConvertMethod::Round),
			CONVERT_CLIP_ROUND => Some(ConvertMethod::ClipRound),
			CONVERT_SCALE => Some(ConvertMethod::Scale),
			CONVERT_CLIP_SCALE => Some(ConvertMethod::ClipScale),
			_ => None,
		}
	}

	/// Whether out-of-range values are clipped before the main method applies
	pub fn clips(&self) -> bool {
		matches!(
			self,
			ConvertMethod::ClipCheck
				| ConvertMethod::ClipCoerce
				| ConvertMethod::ClipRound
				| ConvertMethod::ClipScale
		)
	}
}

impl Display for ConvertMethod {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ConvertMethod::Check => f.write_str("Check"),
			ConvertMethod::ClipCheck => f.write_str("ClipAndCheck"),
			ConvertMethod::Coerce => f.write_str("Coerce"),
			ConvertMethod::ClipCoerce => f.write_str("ClipAndCoerce"),
			ConvertMethod::Round => f.write_str("Round"),
			ConvertMethod::ClipRound => f.write_str("ClipAndRound"),
			ConvertMethod::Scale => f.write_str("Scale"),
			ConvertMethod::ClipScale => f.write_str("ClipAndScale"),
		}
	}
}
