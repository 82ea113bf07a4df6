// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing.

pub mod layout;
mod message;
mod types;

pub use message::CommitMessage;
pub use types::CommitType;
