//! tapcalc - button-driven four-function calculator
//!
//! A small state machine that turns keypad presses (digits, decimal point,
//! operators, equals, backspace, all clear) into a two-operand expression and
//! a single line of display text.
//!
//! The display is injected: anything implementing [`DisplaySink`] receives
//! the text to show after each state change.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut calc = Calculator::new(RecordingDisplay::new());
//! calc.press_all(parse_sequence("12 + 0.5 =").unwrap());
//! assert_eq!(calc.display_text(), "12.5");
//!
//! calc.press_all(parse_sequence("÷ 0 =").unwrap());
//! assert_eq!(calc.display_text(), "Cannot divide by 0!");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod keypad;
pub mod machine;

pub use crate::core::{
    CalcError, CalcResult, CalculatorState, Digit, InvalidDigit, LastAction, Operand, Operator,
};
pub use display::{DisplaySink, FnDisplay, RecordingDisplay};
pub use keypad::{parse_sequence, Keypad, KeypadAction, KeypadButton, ParseKeyError};
pub use machine::Calculator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_number, round_result, CalcError, CalcResult, CalculatorState, Digit,
        LastAction, Operand, Operator,
    };
    pub use crate::display::{DisplaySink, FnDisplay, RecordingDisplay};
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::keypad::{parse_sequence, Keypad, KeypadAction, KeypadButton, ParseKeyError};
    pub use crate::machine::Calculator;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn press(calc: &mut Calculator<RecordingDisplay>, keys: &str) {
        calc.press_all(parse_sequence(keys).unwrap());
    }

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::default();
        press(&mut calc, "2 + 3 =");
        assert_eq!(calc.display_text(), "5");
    }

    #[test]
    fn test_evaluate_direct() {
        let a = Operand::new();
        let b = Operand::new();
        assert_eq!(
            evaluate(Operator::Divide, &a, &b),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_all_operations() {
        let cases = [
            ("10 + 5 =", "15"),
            ("10 - 3 =", "7"),
            ("6 x 7 =", "42"),
            ("20 / 4 =", "5"),
            ("1 / 3 =", "0.333333"),
            ("2 / 3 =", "0.666667"),
            ("3 - 5 =", "-2"),
        ];
        for (keys, expected) in cases {
            let mut calc = Calculator::default();
            press(&mut calc, keys);
            assert_eq!(calc.display_text(), expected, "keys {keys}");
        }
    }

    #[test]
    fn test_left_to_right_chain() {
        // no precedence: (2 + 3) x 4
        let mut calc = Calculator::default();
        press(&mut calc, "2 + 3 x 4 =");
        assert_eq!(calc.display_text(), "20");
    }

    #[test]
    fn test_result_feeds_next_calculation() {
        let mut calc = Calculator::default();
        press(&mut calc, "1 / 3 = x 3 =");
        assert_eq!(calc.display_text(), "0.999999");
    }
}
