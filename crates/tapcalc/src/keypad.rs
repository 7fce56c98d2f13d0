//! Keypad: button layout and input dispatch
//!
//! Maps raw button values and keyboard keys onto [`KeypadAction`]s that
//! [`crate::Calculator::press`] understands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Digit, Operator};

/// Error for a button value or key the keypad does not know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    /// Nothing to parse
    #[error("empty key")]
    Empty,
    /// Unrecognized button value or key name
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Enter a digit
    Digit(Digit),
    /// Enter a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Delete the last typed character
    Backspace,
    /// Reset everything
    AllClear,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Parses a button value as a web keypad sends it
    ///
    /// Digits, `.`, `+`, `-`, `x`/`*`/`×`, `/`/`÷`, `=`, `backspace` and
    /// `all-clear` (or `AC`).
    pub fn from_button_value(value: &str) -> Result<Self, ParseKeyError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ParseKeyError::Empty);
        }

        let mut chars = value.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Digit::from_char(c) {
                return Ok(Self::Digit(d));
            }
            if let Some(op) = Operator::from_symbol(c) {
                return Ok(Self::Operator(op));
            }
            match c {
                '.' => return Ok(Self::Decimal),
                '=' => return Ok(Self::Equals),
                _ => {}
            }
        }

        match value {
            "backspace" | "⌫" => Ok(Self::Backspace),
            "all-clear" | "AC" | "ac" => Ok(Self::AllClear),
            _ => Err(ParseKeyError::UnknownKey(value.to_string())),
        }
    }

    /// Maps a keyboard key name to an action
    ///
    /// Accepts everything [`Self::from_button_value`] does, plus `Enter`,
    /// `Backspace`, `Delete`, `Escape` and `c`/`C`.
    pub fn from_key(key: &str) -> Result<Self, ParseKeyError> {
        match key {
            "Enter" => Ok(Self::Equals),
            "Backspace" | "Delete" => Ok(Self::Backspace),
            "Escape" | "c" | "C" => Ok(Self::AllClear),
            other => Self::from_button_value(other),
        }
    }
}

impl std::str::FromStr for KeypadAction {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Parses a whitespace-separated key sequence
///
/// Each token is a key name, except that a run of digits and decimal points
/// such as `12.5` is pressed one character at a time.
pub fn parse_sequence(input: &str) -> Result<Vec<KeypadAction>, ParseKeyError> {
    let mut actions = Vec::new();
    for token in input.split_whitespace() {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            for c in token.chars() {
                actions.push(KeypadAction::from_button_value(c.encode_utf8(&mut [0; 4]))?);
            }
        } else {
            actions.push(KeypadAction::from_key(token)?);
        }
    }
    Ok(actions)
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// Element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button, deriving its ID from the action
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Backspace => "btn-backspace".to_string(),
            KeypadAction::AllClear => "btn-all-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Standard keypad layout
///
/// ```text
/// [ AC ] [ ⌫ ] [ ÷ ] [ × ]
/// [ 7  ] [ 8 ] [ 9 ] [ - ]
/// [ 4  ] [ 5 ] [ 6 ] [ + ]
/// [ 1  ] [ 2 ] [ 3 ] [ = ]
/// [ 0  ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{AllClear, Backspace, Decimal, Equals, Operator as Op};

        let digit = |d: u8| Digit::new(d).map(KeypadAction::Digit);
        let layout: [[Option<KeypadAction>; 4]; 5] = [
            [
                Some(AllClear),
                Some(Backspace),
                Some(Op(Operator::Divide)),
                Some(Op(Operator::Multiply)),
            ],
            [digit(7), digit(8), digit(9), Some(Op(Operator::Subtract))],
            [digit(4), digit(5), digit(6), Some(Op(Operator::Add))],
            [digit(1), digit(2), digit(3), Some(Equals)],
            [digit(0), Some(Decimal), None, None],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter_map(move |(col, cell)| cell.map(|a| KeypadButton::new(a, row, col)))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets the button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that performs an action
    #[must_use]
    pub fn find_by_action(&self, action: KeypadAction) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Processes a button click and returns its action
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<KeypadAction> {
        self.find_by_id(id).map(|b| b.action)
    }

    /// Renders the layout as a text grid
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .filter_map(|col| self.button_at(row, col))
                .map(|b| format!("[{:^4}]", b.action.label()))
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
