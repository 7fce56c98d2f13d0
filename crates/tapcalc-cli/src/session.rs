//! Running key sequences against a calculator

use std::io::{BufRead, Write};

use tapcalc::{parse_sequence, Calculator, RecordingDisplay};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{display_json, OutputFormat, Renderer};

/// Words that end an interactive session
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Presses `keys` on a fresh calculator and prints the result
pub fn run_press<W: Write>(config: &CliConfig, keys: &[String], out: &mut W) -> CliResult<()> {
    let input = keys.join(" ");
    let actions = parse_sequence(&input).map_err(|e| CliError::invalid_keys(&input, e))?;
    info!(keys = actions.len(), "pressing key sequence");

    let mut calc = Calculator::new(RecordingDisplay::new());
    calc.press_all(actions);

    let renderer = Renderer::from_config(config);
    match OutputFormat::from_config(config) {
        OutputFormat::Text => writeln!(out, "{}", renderer.display_line(calc.display_text()))?,
        OutputFormat::Frames => write!(out, "{}", renderer.frames(calc.display().frames()))?,
        OutputFormat::Json => {
            let json = display_json(calc.display_text(), calc.state())?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Summary of an interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Lines pressed successfully
    pub accepted: usize,
    /// Lines rejected as invalid keys
    pub rejected: usize,
}

/// Reads key sequences line by line until EOF or a quit word
///
/// Bad lines are reported on `err` and the session carries on with the
/// calculator untouched.
pub fn run_repl<R, W, E>(
    config: &CliConfig,
    prompt: &str,
    input: R,
    out: &mut W,
    err: &mut E,
) -> CliResult<ReplSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let renderer = Renderer::from_config(config);
    let mut calc = Calculator::new(RecordingDisplay::new());
    let mut summary = ReplSummary::default();
    let mut lines = input.lines();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&line) {
            break;
        }

        let actions = match parse_sequence(line) {
            Ok(actions) => actions,
            Err(e) => {
                summary.rejected += 1;
                writeln!(err, "error: {}", CliError::invalid_keys(line, e))?;
                continue;
            }
        };

        let start = calc.display().frame_count();
        calc.press_all(actions);
        summary.accepted += 1;
        debug!(line, display = calc.display_text(), "line pressed");

        if config.show_frames {
            write!(out, "{}", renderer.frames(&calc.display().frames()[start..]))?;
        } else {
            writeln!(out, "{}", renderer.display_line(calc.display_text()))?;
        }
        calc.display_mut().truncate_history();
    }

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "session ended"
    );
    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    fn keys(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn press(config: &CliConfig, words: &[&str]) -> String {
        let mut out = Vec::new();
        run_press(config, &keys(words), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn repl(config: &CliConfig, input: &str) -> (String, String, ReplSummary) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_repl(config, "", input.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
        )
    }

    // ===== press =====

    #[test]
    fn test_press_prints_final_display() {
        assert_eq!(press(&plain(), &["5", "+", "3", "="]), "8\n");
    }

    #[test]
    fn test_press_joins_multi_digit_arguments() {
        assert_eq!(press(&plain(), &["12.5", "x", "2", "="]), "25\n");
    }

    #[test]
    fn test_press_division_by_zero() {
        assert_eq!(
            press(&plain(), &["7", "/", "0", "="]),
            "Cannot divide by 0!\n"
        );
    }

    #[test]
    fn test_press_frames() {
        let config = plain().with_show_frames(true);
        // the operator key alone does not redraw the display
        assert_eq!(press(&config, &["5", "+", "3"]), "  0  0\n  1  5\n  2  3\n");
    }

    #[test]
    fn test_press_json() {
        let config = plain().with_json(true);
        let text = press(&config, &["6", "x", "7", "="]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["display"], "42");
        assert_eq!(value["state"]["last_action"], "equals");
        assert_eq!(value["state"]["reset_on_next_digit"], true);
    }

    #[test]
    fn test_press_rejects_unknown_key() {
        let mut out = Vec::new();
        let result = run_press(&plain(), &keys(&["1", "%", "2"]), &mut out);
        assert!(matches!(result, Err(CliError::InvalidKeys { .. })));
        assert!(out.is_empty());
    }

    // ===== repl =====

    #[test]
    fn test_repl_keeps_state_between_lines() {
        let (out, err, summary) = repl(&plain(), "2 +\n3\n=\n");
        assert_eq!(out, "2\n3\n5\n\n");
        assert!(err.is_empty());
        assert_eq!(summary.accepted, 3);
    }

    #[test]
    fn test_repl_survives_bad_line() {
        let (out, err, summary) = repl(&plain(), "9\nfoo\nx 2 =\n");
        assert_eq!(out, "9\n18\n\n");
        assert!(err.contains("unknown key 'foo'"));
        assert_eq!(summary, ReplSummary { accepted: 2, rejected: 1 });
    }

    #[test]
    fn test_repl_quit_word_stops_reading() {
        let (out, _, summary) = repl(&plain(), "1\nquit\n2\n");
        assert_eq!(out, "1\n");
        assert_eq!(summary.accepted, 1);
    }

    #[test]
    fn test_repl_skips_blank_lines() {
        let (out, _, summary) = repl(&plain(), "\n   \n4\n");
        assert_eq!(out, "4\n\n");
        assert_eq!(summary.accepted, 1);
    }

    #[test]
    fn test_repl_frames_per_line() {
        let config = plain().with_show_frames(true);
        let (out, _, _) = repl(&config, "4\n+ 1 = 5\nexit\n");
        // only the frames each line produced; the digit after equals blanks first
        assert_eq!(out, "  0  4\n  0  1\n  1  5\n  2  (blank)\n  3  5\n");
    }

    #[test]
    fn test_repl_prints_prompt() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_repl(&plain(), "> ", "1\n".as_bytes(), &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> 1\n> \n");
    }
}
