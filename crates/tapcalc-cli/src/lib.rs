//! tapcalc CLI library
//!
//! Command-line front end for the `tapcalc` keypad calculator: one-shot key
//! sequences, an interactive session, and a keypad listing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, KeysArgs, PressArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{display_json, keys_json, DisplayReport, OutputFormat, Renderer};
pub use session::{run_press, run_repl, ReplSummary};
