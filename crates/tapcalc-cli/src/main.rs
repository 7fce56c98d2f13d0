//! tapcalc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! tapcalc press 12.5 x 2 =        # prints 25
//! tapcalc press --frames 7 / 0 =  # every frame the display showed
//! tapcalc repl                    # one key sequence per line
//! tapcalc keys                    # keypad layout
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tapcalc::Keypad;
use tapcalc_cli::{
    keys_json, logging, run_press, run_repl, Cli, CliConfig, CliResult, ColorChoice, Commands,
    KeysArgs, Renderer, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(&config)?;
    debug!(?config, "configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Press(args) => {
            let config = config.with_show_frames(args.frames).with_json(args.json);
            run_press(&config, &args.keys, &mut out)
        }
        Commands::Repl(args) => {
            let config = config.with_show_frames(args.frames);
            let stdin = io::stdin();
            let mut err = io::stderr();
            run_repl(&config, &args.prompt, stdin.lock(), &mut out, &mut err).map(|_| ())
        }
        Commands::Keys(args) => run_keys(&config, &args, &mut out),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

fn run_keys<W: Write>(config: &CliConfig, args: &KeysArgs, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    if args.json {
        writeln!(out, "{}", keys_json(keypad.buttons())?)?;
    } else {
        write!(out, "{}", Renderer::from_config(config).keys(&keypad))?;
    }
    Ok(())
}
