//! Calculator state machine
//!
//! Turns keypad actions into operand edits, intermediate evaluation and
//! display updates. Every handler runs to completion and leaves the display
//! in sync with the state; handlers that change nothing show nothing.

use tracing::{debug, trace, warn};

use crate::core::{
    evaluate, round_result, CalcError, CalculatorState, Digit, LastAction, Operand, Operator,
};
use crate::display::{DisplaySink, RecordingDisplay};
use crate::keypad::KeypadAction;

/// Four-function calculator driven by button presses
#[derive(Debug)]
pub struct Calculator<D> {
    state: CalculatorState,
    display: D,
}

impl Default for Calculator<RecordingDisplay> {
    fn default() -> Self {
        Self::new(RecordingDisplay::new())
    }
}

impl Calculator<RecordingDisplay> {
    /// Text currently on the recording display
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.current()
    }
}

impl<D: DisplaySink> Calculator<D> {
    /// Creates a cleared calculator; the display shows `"0"`
    pub fn new(display: D) -> Self {
        let mut calc = Self {
            state: CalculatorState::new(),
            display,
        };
        calc.reset();
        calc
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The display sink
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display sink
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// All clear: forget everything and show `"0"`
    pub fn reset(&mut self) {
        self.state = CalculatorState::new();
        debug!("reset");
        self.display.show("0");
    }

    /// Enters a digit into the operand being typed
    pub fn input_digit(&mut self, digit: Digit) {
        if self.state.is_finalized() {
            self.state.clear_expression();
            self.state.reset_on_next_digit = false;
            self.display.show("");
        }

        if !self.state.target_operand_mut().push_digit(digit) {
            trace!(%digit, "digit ignored");
            return;
        }

        self.state.last_action = LastAction::Digit;
        self.show_target();
    }

    /// Enters a decimal point into the operand being typed
    pub fn input_decimal(&mut self) {
        if self.state.is_finalized() {
            self.state.clear_expression();
            self.state.first_operand.push_decimal_point();
            self.state.last_action = LastAction::Digit;
            self.state.reset_on_next_digit = false;
            self.show_target();
            return;
        }

        if !self.state.target_operand_mut().push_decimal_point() {
            trace!("operand already has a decimal point");
            return;
        }
        self.show_target();
    }

    /// Chooses the operator, evaluating any complete pending expression first
    pub fn input_operator(&mut self, op: Operator) {
        if self.state.first_operand.is_empty() {
            trace!(%op, "operator ignored without a first operand");
            return;
        }

        if self.state.last_action == LastAction::Operator {
            debug!(%op, "pending operator replaced");
            self.state.pending_operator = Some(op);
            return;
        }

        if let Some(pending) = self.state.pending_operator {
            if !self.state.second_operand.is_empty() {
                if let Err(err) = self.apply_pending(pending) {
                    self.recover(err);
                    return;
                }
                self.show_first();
            }
        }

        self.state.pending_operator = Some(op);
        self.state.reset_on_next_digit = false;
        self.state.last_action = LastAction::Operator;
        debug!(%op, "operator pending");
    }

    /// Evaluates the pending expression
    pub fn equals(&mut self) {
        let Some(pending) = self.state.pending_operator else {
            trace!("equals ignored without a pending operator");
            return;
        };
        if self.state.second_operand.is_empty() {
            trace!("equals ignored without a second operand");
            return;
        }

        if let Err(err) = self.apply_pending(pending) {
            self.recover(err);
            return;
        }

        self.state.pending_operator = None;
        self.state.last_action = LastAction::Equals;
        self.state.reset_on_next_digit = true;
        self.show_first();
    }

    /// Deletes the last character of the operand being typed
    pub fn backspace(&mut self) {
        if self.state.is_finalized() {
            trace!("backspace ignored on a finished result");
            return;
        }

        self.state.target_operand_mut().pop();
        self.show_target();
    }

    /// Dispatches one keypad action to its handler
    pub fn press(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(d) => self.input_digit(d),
            KeypadAction::Decimal => self.input_decimal(),
            KeypadAction::Operator(op) => self.input_operator(op),
            KeypadAction::Equals => self.equals(),
            KeypadAction::Backspace => self.backspace(),
            KeypadAction::AllClear => self.reset(),
        }
    }

    /// Presses every action in order
    pub fn press_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = KeypadAction>,
    {
        for action in actions {
            self.press(action);
        }
    }

    /// Folds `first op second` into the first operand, rounded
    fn apply_pending(&mut self, op: Operator) -> Result<(), CalcError> {
        let raw = evaluate(op, &self.state.first_operand, &self.state.second_operand)?;
        let result = round_result(raw);
        debug!(
            first = %self.state.first_operand,
            %op,
            second = %self.state.second_operand,
            result,
            "evaluated"
        );
        self.state.first_operand.set_number(result);
        self.state.second_operand.clear();
        Ok(())
    }

    /// Shows the error and arranges for the next entry to start fresh
    fn recover(&mut self, err: CalcError) {
        warn!(error = %err, "calculation aborted");
        self.display.show(err.display_message());
        self.state.clear_expression();
        self.state.last_action = LastAction::None;
        self.state.reset_on_next_digit = true;
    }

    fn show_target(&mut self) {
        let text = displayed(self.state.target_operand());
        self.display.show(text);
    }

    fn show_first(&mut self) {
        let text = displayed(&self.state.first_operand);
        self.display.show(text);
    }
}

/// Operand text as displayed: an empty operand reads `"0"`
fn displayed(operand: &Operand) -> &str {
    if operand.is_empty() {
        "0"
    } else {
        operand.as_str()
    }
}
