//! Unified calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against every way of operating the calculator: pressing actions directly
//! or clicking keypad buttons by element ID.

use crate::core::CalculatorState;
use crate::display::RecordingDisplay;
use crate::keypad::{parse_sequence, Keypad, KeypadAction, ParseKeyError};
use crate::machine::Calculator;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Performs one keypad action
    fn press(&mut self, action: KeypadAction);

    /// Text currently on the display
    fn display(&self) -> String;

    /// Snapshot of the calculator state
    fn state(&self) -> CalculatorState;

    /// All clear
    fn clear(&mut self) {
        self.press(KeypadAction::AllClear);
    }

    /// Parses and presses a key sequence such as `"12 + 3 ="`
    fn enter_keys(&mut self, keys: &str) -> Result<(), ParseKeyError> {
        for action in parse_sequence(keys)? {
            self.press(action);
        }
        Ok(())
    }
}

impl CalculatorDriver for Calculator<RecordingDisplay> {
    fn press(&mut self, action: KeypadAction) {
        Calculator::press(self, action);
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn state(&self) -> CalculatorState {
        Calculator::state(self).clone()
    }
}

/// Driver that operates the calculator through keypad button clicks
#[derive(Debug, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    calc: Calculator<RecordingDisplay>,
    clicks: Vec<String>,
}

impl KeypadDriver {
    /// Creates a driver over the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicks a button by element ID; unknown IDs are ignored
    pub fn click(&mut self, id: &str) -> bool {
        let Some(action) = self.keypad.handle_click(id) else {
            return false;
        };
        self.clicks.push(id.to_string());
        self.calc.press(action);
        true
    }

    /// IDs of every button clicked so far
    #[must_use]
    pub fn clicks(&self) -> &[String] {
        &self.clicks
    }

    /// The underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<RecordingDisplay> {
        &self.calc
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, action: KeypadAction) {
        if let Some(id) = self.keypad.find_by_action(action).map(|b| b.id.clone()) {
            self.click(&id);
        }
    }

    fn display(&self) -> String {
        self.calc.display_text().to_string()
    }

    fn state(&self) -> CalculatorState {
        self.calc.state().clone()
    }
}

// ===== Unified scenario checks =====
// These run against ANY CalculatorDriver implementation

fn enter<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    let result = driver.enter_keys(keys);
    assert!(result.is_ok(), "bad key sequence {keys:?}: {result:?}");
}

/// Verifies a plain addition, one display frame at a time
pub fn verify_simple_addition<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "5");
    assert_eq!(driver.display(), "5");
    enter(driver, "+");
    assert_eq!(driver.display(), "5");
    enter(driver, "3");
    assert_eq!(driver.display(), "3");
    enter(driver, "=");
    assert_eq!(driver.display(), "8");
}

/// Verifies division by zero reports an error and the next digit starts over
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "7 ÷ 0 =");
    assert_eq!(driver.display(), "Cannot divide by 0!");
    enter(driver, "9");
    assert_eq!(driver.display(), "9");
    assert_eq!(driver.state().first_operand().as_str(), "9");
}

/// Verifies leading zeros collapse
pub fn verify_leading_zeros<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "0 0");
    assert_eq!(driver.display(), "0");
    enter(driver, "5");
    assert_eq!(driver.display(), "5");
}

/// Verifies a second decimal point is ignored
pub fn verify_single_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "1 . . 5");
    assert_eq!(driver.display(), "1.5");
}

/// Verifies a second operator press replaces the first without computing
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "9 + - 1 =");
    assert_eq!(driver.display(), "8");
}

/// Verifies float noise is rounded away
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "0.1 + 0.2 =");
    assert_eq!(driver.display(), "0.3");
}

/// Verifies backspace is locked after equals but not after typing
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    enter(driver, "4 2 backspace");
    assert_eq!(driver.display(), "4");
    enter(driver, "x 2 = backspace");
    assert_eq!(driver.display(), "8");
}

/// Complete verification suite
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_simple_addition(driver);
    verify_division_by_zero(driver);
    verify_leading_zeros(driver);
    verify_single_decimal_point(driver);
    verify_operator_replacement(driver);
    verify_rounding(driver);
    verify_backspace(driver);
}
