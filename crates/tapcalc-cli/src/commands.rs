//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// tapcalc: drive a four-function keypad calculator from the terminal
#[derive(Parser, Debug)]
#[command(name = "tapcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a key sequence and print the display
    ///
    /// Keys are separated by spaces. Numbers such as `12.5` are typed one
    /// character at a time. Accepted keys: 0-9 . + - x * × / ÷ = backspace AC
    Press(PressArgs),

    /// Interactive session: one key sequence per line
    Repl(ReplArgs),

    /// Show the keypad layout and accepted keys
    Keys(KeysArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Print every display frame, not just the last one
    #[arg(long)]
    pub frames: bool,

    /// Print the display and the calculator state as JSON
    #[arg(long, conflicts_with = "frames")]
    pub json: bool,

    /// Keys to press
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Prompt printed before each line
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Print every display frame produced by a line
    #[arg(long)]
    pub frames: bool,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Print the keypad buttons as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
