//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();
    if let Err(err) = vibe_cli::run() {
        eprintln!("vibe: {err}");
        std::process::exit(1);
    }
}

/// Send log records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
