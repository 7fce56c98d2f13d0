//! Output formatting for display text, frames and keypad listings

use console::style;
use serde::{Deserialize, Serialize};
use tapcalc::{CalcError, CalculatorState, Keypad, KeypadButton};

use crate::config::CliConfig;
use crate::error::CliResult;

/// How a finished key sequence is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// The final display text
    #[default]
    Text,
    /// Every frame the display was shown, one per line
    Frames,
    /// Final display and state snapshot as JSON
    Json,
}

impl OutputFormat {
    /// Picks the format the configuration asks for
    #[must_use]
    pub const fn from_config(config: &CliConfig) -> Self {
        if config.json {
            Self::Json
        } else if config.show_frames {
            Self::Frames
        } else {
            Self::Text
        }
    }
}

/// JSON document printed by `press --json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayReport {
    /// Text on the display
    pub display: String,
    /// Calculator state after the last key
    pub state: CalculatorState,
}

/// Renders display text and keypad listings, styled or plain
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether to use colors
    pub use_color: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Create a renderer honoring the configured color choice
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.use_color())
    }

    /// One display frame; error messages are highlighted
    #[must_use]
    pub fn display_line(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        if CalcError::is_display_message(text) {
            style(text).red().bold().to_string()
        } else {
            style(text).bold().to_string()
        }
    }

    /// Numbered frames, blank frames shown as `(blank)`
    #[must_use]
    pub fn frames(&self, frames: &[String]) -> String {
        let mut out = String::new();
        for (i, frame) in frames.iter().enumerate() {
            let index = if self.use_color {
                style(format!("{i:>3}")).dim().to_string()
            } else {
                format!("{i:>3}")
            };
            let text = if frame.is_empty() {
                if self.use_color {
                    style("(blank)").dim().italic().to_string()
                } else {
                    "(blank)".to_string()
                }
            } else {
                self.display_line(frame)
            };
            out.push_str(&format!("{index}  {text}\n"));
        }
        out
    }

    /// Keypad grid followed by the accepted key names
    #[must_use]
    pub fn keys(&self, keypad: &Keypad) -> String {
        let title = if self.use_color {
            style("Keypad").bold().underlined().to_string()
        } else {
            "=== Keypad ===".to_string()
        };
        let mut out = format!("{title}\n{}\n", keypad.render());
        out.push_str("Keys: 0-9 . + - x * × / ÷ = backspace AC\n");
        out.push_str("Numbers such as 12.5 may be typed as one key.\n");
        out
    }
}

/// JSON for `press --json`
pub fn display_json(display: &str, state: &CalculatorState) -> CliResult<String> {
    let report = DisplayReport {
        display: display.to_string(),
        state: state.clone(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// JSON for `keys --json`
pub fn keys_json(buttons: &[KeypadButton]) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(buttons)?)
}
