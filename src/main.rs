// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cclint - Conventional Commit Header Linter
//!
//! Exit status: 0 when every message is valid, 1 when linting fails or a
//! runtime error occurs, 2 when the configuration is unusable.

use cclint::cli::{run, Cli};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_config() { 2 } else { 1 });
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("cclint=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
