// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only access to history, plus the hooks directory location.

mod repo;

pub use repo::{get_commit_range, open_repo, Repository};
