#![allow(clippy::multiple_crate_versions)]

//! Tilecast - command-line front end for the video tile layout engine.
//!
//! Logging goes to stderr and is controlled by the `TILECAST_LOG` environment
//! variable (e.g. `TILECAST_LOG=debug`). Only warnings are shown by default.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "TILECAST_LOG";

fn main() {
    init_tracing();

    if let Err(err) = tilecast_lib::cli::run() {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("tilecast: {err}");
        std::process::exit(1);
    }
}

/// Installs the global tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
