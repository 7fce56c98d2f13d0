//! Tracing subscriber setup

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, ColorChoice};
use crate::error::{CliError, CliResult};

/// Filter from `RUST_LOG` when set, otherwise from the verbosity flags
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Whether log lines on stderr get ANSI colors
#[must_use]
pub fn stderr_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal(),
    }
}

/// Installs the global subscriber; logs go to stderr so stdout stays clean
pub fn init(config: &CliConfig) -> CliResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(stderr_ansi(config.color)),
        )
        .try_init()
        .map_err(|e| CliError::config(format!("failed to install logger: {e}")))
}
