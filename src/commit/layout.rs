// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Optional layout check, separate from header parsing.

use crate::error::ParseError;

/// Require a blank line between the header and a body, if there is a body.
pub fn check_blank_line(message: &str) -> Result<(), ParseError> {
    match message.lines().nth(1) {
        Some(second) if !second.trim().is_empty() => Err(ParseError::MissingBlankLine),
        _ => Ok(()),
    }
}
