// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git revision shown by `guardian version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a checkout vergen falls back to placeholders; the version
    // string then degrades to the crate version alone.
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
