// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Passing policies and the ownership states they lead to
//!
//! | Passing   | Acquire | Initial owner | Release on drop |
//! |-----------|---------|---------------|-----------------|
//! | Automatic | Adopt   | Library       | Free            |
//! | Manual    | Adopt   | Host          | Keep            |
//! | Shared    | Clone   | Shared        | Disown          |
//! | Constant  | Adopt   | Host          | Keep            |
//!
//! Containers the library allocates or clones itself start out [`Ownership::Library`].

use std::fmt::{Display, Formatter};

/// How a handle received from the host is to be treated
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Passing {
	/// The library owns the handle and frees it unless it is passed back
	Automatic,
	/// The host keeps ownership
	Manual,
	/// The handle is reference-counted by the host
	Shared,
	/// Read-only; the host keeps ownership
	Constant,
}

/// Who is responsible for releasing a handle
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Ownership {
	Library,
	Host,
	Shared,
}

/// What happens to a raw handle when a container is constructed from it
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Acquire {
	/// Take the handle as it is
	Adopt,
	/// Deep copy the handle and wrap the copy
	Clone,
}

/// What happens to a raw handle when its container is dropped
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Release {
	Free,
	Disown,
	Keep,
}

impl Passing {
	pub fn acquire(&self) -> Acquire {
		match self {
			Passing::Automatic => Acquire::Adopt,
			Passing::Manual => Acquire::Adopt,
			Passing::Shared => Acquire::Clone,
			Passing::Constant => Acquire::Adopt,
		}
	}

	pub fn owner(&self) -> Ownership {
		match self {
			Passing::Automatic => Ownership::Library,
			Passing::Manual => Ownership::Host,
			Passing::Shared => Ownership::Shared,
			Passing::Constant => Ownership::Host,
		}
	}
}

impl Ownership {
	pub fn release(&self) -> Release {
		match self {
			Ownership::Library => Release::Free,
			Ownership::Host => Release::Keep,
			Ownership::Shared => Release::Disown,
		}
	}

	/// Ownership once the handle has been returned to the host as a result
	pub fn after_pass(&self) -> Ownership {
		match self {
			Ownership::Library => Ownership::Host,
			Ownership::Host => Ownership::Host,
			Ownership::Shared => Ownership::Shared,
		}
	}
}

impl Display for Passing {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Passing::Automatic => f.write_str("Automatic"),
			Passing::Manual => f.write_str("Manual"),
			Passing::Shared => f.write_str("Shared"),
			Passing::Constant => f.write_str("Constant"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod passing {
		use super::*;

		#[test]
		fn test_only_shared_clones() {
			assert_eq!(Passing::Shared.acquire(), Acquire::Clone);
			for passing in [Passing::Automatic, Passing::Manual, Passing::Constant] {
				assert_eq!(passing.acquire(), Acquire::Adopt);
			}
		}

		#[test]
		fn test_release_on_drop() {
			assert_eq!(Passing::Automatic.owner().release(), Release::Free);
			assert_eq!(Passing::Manual.owner().release(), Release::Keep);
			assert_eq!(Passing::Shared.owner().release(), Release::Disown);
			assert_eq!(Passing::Constant.owner().release(), Release::Keep);
		}
	}

	mod ownership {
		use super::*;

		#[test]
		fn test_after_pass_never_frees() {
			for owner in [Ownership::Library, Ownership::Host, Ownership::Shared] {
				assert_ne!(owner.after_pass().release(), Release::Free);
			}
		}

		#[test]
		fn test_shared_stays_shared() {
			assert_eq!(Ownership::Shared.after_pass(), Ownership::Shared);
		}
	}
}
