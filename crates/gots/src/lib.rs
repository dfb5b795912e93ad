//! Command-line front end for `gots-convert`.
//!
//! Reads a Go struct or TypeScript interface from a file or stdin and
//! prints the other notation. Settings come from `config.toml` files (see
//! [`config`]) and can be overridden per invocation.

pub mod commands;
pub mod config;

pub use config::GotsConfig;

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` controls the filter unless `verbose` forces `debug`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the explicit config file if given, otherwise search from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<GotsConfig> {
    match explicit {
        Some(path) => GotsConfig::load_file(path),
        None => Ok(GotsConfig::load(&std::env::current_dir()?)),
    }
}
