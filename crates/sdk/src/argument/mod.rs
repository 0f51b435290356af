// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bridge between the host's flat argument array and typed library code

mod guard;
mod manager;

pub use guard::library_function;
pub use manager::ArgumentManager;
