// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Embeds VERGEN_GIT_SHA / VERGEN_GIT_COMMIT_DATE for `cclint version`.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
