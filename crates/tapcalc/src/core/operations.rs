//! The four arithmetic operators and two-operand evaluation

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult, Operand};

/// Arithmetic operator selectable on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol as shown on the keypad
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parses an operator symbol
    ///
    /// Accepts the keypad glyphs plus their ASCII stand-ins (`x`, `*`, `/`).
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | 'x' | 'X' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two numbers
    ///
    /// Fails on a zero divisor, and on any result that is not finite.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        if !result.is_finite() {
            return Err(CalcError::Overflow);
        }
        Ok(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluates `a op b` on two typed operands
///
/// The result is not rounded; see [`super::round_result`].
pub fn evaluate(op: Operator, a: &Operand, b: &Operand) -> CalcResult<f64> {
    op.apply(a.value(), b.value())
}
