// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for guardian.
//!
//! This module handles loading configuration files and layering
//! command-line overrides on top of them.

pub mod default;
mod loader;
mod schema;

pub use loader::{
    apply_overrides, find_config_file, find_config_file_from, load_config, parse_config,
    RuleOverrides, CONFIG_FILES,
};
pub use schema::*;
