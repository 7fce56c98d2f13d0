//! Calculator state: operands, pending operator and last-action tag

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{format_number, Operator};

/// Returned when a number outside `0..=9` is used as a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a decimal digit")]
pub struct InvalidDigit(pub u8);

/// A single decimal digit, `0` through `9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` if `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value of the digit
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The digit as an ASCII character
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operand text as typed so far
///
/// Only exposes the edits a keypad can make, so the text always holds at
/// most one decimal point and reads back as a finite number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    /// Creates an empty operand
    #[must_use]
    pub const fn new() -> Self {
        Self(String::new())
    }

    #[cfg(test)]
    pub(crate) fn from_text(text: &str) -> Self {
        Self(text.to_string())
    }

    /// The operand text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing has been typed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the text is exactly `"0"`
    #[must_use]
    pub fn is_bare_zero(&self) -> bool {
        self.0 == "0"
    }

    /// True when the text already contains a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Appends a digit, replacing a bare `"0"` instead of extending it
    ///
    /// Returns `false` (and changes nothing) for a `0` typed onto a bare `"0"`,
    /// or for a digit that would push the value past the largest finite `f64`.
    pub fn push_digit(&mut self, digit: Digit) -> bool {
        if self.is_bare_zero() {
            if digit.value() == 0 {
                return false;
            }
            self.0.clear();
        }
        self.0.push(digit.as_char());
        if !self.value().is_finite() {
            self.0.pop();
            return false;
        }
        true
    }

    /// Appends a decimal point, seeding `"0."` when empty
    ///
    /// Returns `false` if the operand already has a decimal point.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.has_decimal_point() {
            return false;
        }
        if self.0.is_empty() {
            self.0.push('0');
        }
        self.0.push('.');
        true
    }

    /// Removes the last character
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Replaces the text with a rendered number
    pub fn set_number(&mut self, value: f64) {
        self.0 = format_number(value);
    }

    /// Empties the operand
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Numeric value of the text
    #[must_use]
    pub fn value(&self) -> f64 {
        // "" and a lone sign never reach evaluation; read them as zero
        self.0.parse().unwrap_or(0.0)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The most recent accepted action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastAction {
    /// Nothing yet, or just recovered from an error
    #[default]
    None,
    /// A digit (or a decimal point that started a fresh expression)
    Digit,
    /// An operator
    Operator,
    /// Equals produced a result
    Equals,
}

/// Everything the calculator remembers between actions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) first_operand: Operand,
    pub(crate) second_operand: Operand,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) last_action: LastAction,
    pub(crate) reset_on_next_digit: bool,
}

impl CalculatorState {
    /// Creates the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The first operand
    #[must_use]
    pub fn first_operand(&self) -> &Operand {
        &self.first_operand
    }

    /// The second operand (empty until an operator is chosen)
    #[must_use]
    pub fn second_operand(&self) -> &Operand {
        &self.second_operand
    }

    /// The operator waiting for its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// The most recent accepted action
    #[must_use]
    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Whether the next digit or decimal point starts a new expression
    #[must_use]
    pub fn reset_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// True when the display holds a finished result or an error
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.last_action == LastAction::Equals || self.reset_on_next_digit
    }

    /// The operand new input goes into
    #[must_use]
    pub fn target_operand(&self) -> &Operand {
        if self.pending_operator.is_some() {
            &self.second_operand
        } else {
            &self.first_operand
        }
    }

    pub(crate) fn target_operand_mut(&mut self) -> &mut Operand {
        if self.pending_operator.is_some() {
            &mut self.second_operand
        } else {
            &mut self.first_operand
        }
    }

    /// Drops both operands and the pending operator
    pub(crate) fn clear_expression(&mut self) {
        self.first_operand.clear();
        self.second_operand.clear();
        self.pending_operator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    // ===== Digit =====

    #[test]
    fn test_digit_new_bounds() {
        assert!(Digit::new(0).is_some());
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('7'), Digit::new(7));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('.'), None);
    }

    #[test]
    fn test_digit_as_char() {
        for d in 0..=9 {
            assert_eq!(
                digit(d).as_char(),
                char::from_digit(u32::from(d), 10).unwrap()
            );
        }
    }

    #[test]
    fn test_digit_try_from() {
        assert_eq!(Digit::try_from(4), Ok(digit(4)));
        assert_eq!(Digit::try_from(12), Err(InvalidDigit(12)));
        assert_eq!(InvalidDigit(12).to_string(), "12 is not a decimal digit");
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&digit(3)).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Digit>("8").unwrap(), digit(8));
        assert!(serde_json::from_str::<Digit>("11").is_err());
    }

    // ===== Operand =====

    #[test]
    fn test_operand_push_digits() {
        let mut op = Operand::new();
        assert!(op.push_digit(digit(1)));
        assert!(op.push_digit(digit(2)));
        assert_eq!(op.as_str(), "12");
    }

    #[test]
    fn test_operand_refuses_digit_past_f64_max() {
        let mut op = Operand::new();
        for _ in 0..308 {
            assert!(op.push_digit(digit(9)));
        }
        assert!(!op.push_digit(digit(9)));
        assert_eq!(op.as_str().len(), 308);
        assert!(op.value().is_finite());
    }

    #[test]
    fn test_operand_collapses_leading_zero() {
        let mut op = Operand::new();
        assert!(op.push_digit(digit(0)));
        assert!(!op.push_digit(digit(0)));
        assert_eq!(op.as_str(), "0");
        assert!(op.push_digit(digit(5)));
        assert_eq!(op.as_str(), "5");
    }

    #[test]
    fn test_operand_zero_point_keeps_zeros() {
        let mut op = Operand::new();
        op.push_digit(digit(0));
        op.push_decimal_point();
        op.push_digit(digit(0));
        op.push_digit(digit(7));
        assert_eq!(op.as_str(), "0.07");
    }

    #[test]
    fn test_operand_decimal_seeds_zero() {
        let mut op = Operand::new();
        assert!(op.push_decimal_point());
        assert_eq!(op.as_str(), "0.");
    }

    #[test]
    fn test_operand_single_decimal_point() {
        let mut op = Operand::from_text("1");
        assert!(op.push_decimal_point());
        assert!(!op.push_decimal_point());
        assert_eq!(op.as_str(), "1.");
    }

    #[test]
    fn test_operand_pop() {
        let mut op = Operand::from_text("12");
        assert_eq!(op.pop(), Some('2'));
        assert_eq!(op.pop(), Some('1'));
        assert_eq!(op.pop(), None);
        assert!(op.is_empty());
    }

    #[test]
    fn test_operand_value() {
        assert_eq!(Operand::from_text("12.5").value(), 12.5);
        assert_eq!(Operand::from_text("3.").value(), 3.0);
        assert_eq!(Operand::from_text("-4").value(), -4.0);
        assert_eq!(Operand::new().value(), 0.0);
    }

    #[test]
    fn test_operand_set_number() {
        let mut op = Operand::from_text("9");
        op.set_number(0.5);
        assert_eq!(op.as_str(), "0.5");
        op.set_number(-0.0);
        assert_eq!(op.as_str(), "0");
    }

    #[test]
    fn test_operand_serializes_as_string() {
        let op = Operand::from_text("0.");
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"0.\"");
    }

    // ===== CalculatorState =====

    #[test]
    fn test_state_default_is_cleared() {
        let state = CalculatorState::new();
        assert!(state.first_operand().is_empty());
        assert!(state.second_operand().is_empty());
        assert_eq!(state.pending_operator(), None);
        assert_eq!(state.last_action(), LastAction::None);
        assert!(!state.reset_on_next_digit());
        assert!(!state.is_finalized());
    }

    #[test]
    fn test_state_target_follows_pending_operator() {
        let mut state = CalculatorState::new();
        state.target_operand_mut().push_digit(digit(4));
        assert_eq!(state.first_operand().as_str(), "4");

        state.pending_operator = Some(Operator::Add);
        state.target_operand_mut().push_digit(digit(2));
        assert_eq!(state.second_operand().as_str(), "2");
        assert_eq!(state.target_operand().as_str(), "2");
    }

    #[test]
    fn test_state_is_finalized() {
        let mut state = CalculatorState::new();
        state.last_action = LastAction::Equals;
        assert!(state.is_finalized());

        state.last_action = LastAction::None;
        state.reset_on_next_digit = true;
        assert!(state.is_finalized());
    }

    #[test]
    fn test_state_json_shape() {
        let mut state = CalculatorState::new();
        state.first_operand = Operand::from_text("5");
        state.pending_operator = Some(Operator::Multiply);
        state.last_action = LastAction::Operator;

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["first_operand"], "5");
        assert_eq!(json["pending_operator"], "Multiply");
        assert_eq!(json["last_action"], "operator");
        assert_eq!(json["reset_on_next_digit"], false);
    }
}
