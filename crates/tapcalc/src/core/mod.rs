//! Core calculator types
//!
//! Operands, operators, arithmetic and result rendering. Nothing in here
//! knows about displays or keypads; the state machine in [`crate::machine`]
//! wires these pieces together.

mod format;
mod operations;
mod state;

pub use format::{format_number, round_result, ROUNDING_PLACES};
pub use operations::{evaluate, Operator};
pub use state::{CalculatorState, Digit, InvalidDigit, LastAction, Operand};

use thiserror::Error;

/// Result type for calculator arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic failure
///
/// The state machine catches these and recovers locally, so callers of the
/// action handlers never see this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Divisor was exactly zero under `÷`
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit in a finite `f64`
    #[error("Result out of range")]
    Overflow,
}

impl CalcError {
    /// Every error, in declaration order
    pub const ALL: [Self; 2] = [Self::DivisionByZero, Self::Overflow];

    /// Text shown on the display when this error interrupts a calculation
    #[must_use]
    pub const fn display_message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by 0!",
            Self::Overflow => "Number too large!",
        }
    }

    /// True when `text` is what some error puts on the display
    #[must_use]
    pub fn is_display_message(text: &str) -> bool {
        Self::ALL.iter().any(|e| e.display_message() == text)
    }
}
