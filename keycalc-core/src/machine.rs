//! Entry state machine - turns keypad actions into state transitions.
//!
//! Each action is applied to a [`CalculatorState`] atomically. Operators
//! and equals call into the [`engine`](crate::engine); a failed
//! calculation puts the record into the absorbing error state, and the
//! next action of any kind resets it.

use crate::engine;
use crate::error::CalcError;
use crate::operator::Operator;
use crate::state::{CalculatorState, OperandRole};
use serde::{Deserialize, Serialize};

/// A logical keypad action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    ToggleSign,
    Backspace,
    /// Full reset, available in every state.
    Clear,
}

impl Action {
    /// Creates a digit action, or `None` if `d` is not a decimal digit.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Action::Digit(d))
    }
}

/// What an action did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one field changed.
    Updated,
    /// A guard made the action a no-op.
    Unchanged,
    /// The record was returned to the reset configuration.
    Reset,
    /// A calculation failed and the record is now errored.
    Failed(CalcError),
}

impl CalculatorState {
    /// Applies one action in place.
    pub fn apply(&mut self, action: Action) -> Outcome {
        if self.errored || action == Action::Clear {
            tracing::debug!(?action, errored = self.errored, "resetting calculator");
            self.reset();
            return Outcome::Reset;
        }

        let before = self.clone();
        let result = match action {
            Action::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => {
                    self.enter(c);
                    Ok(())
                }
                None => {
                    tracing::warn!(digit = d, "ignoring out-of-range digit");
                    Ok(())
                }
            },
            Action::DecimalPoint => {
                self.enter('.');
                Ok(())
            }
            Action::Operator(op) => self.choose_operator(op),
            Action::Equals => self.equals(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Backspace => {
                self.backspace();
                Ok(())
            }
            Action::Clear => Ok(()),
        };

        match result {
            Err(error) => {
                tracing::warn!(?action, %error, "calculation failed");
                self.errored = true;
                Outcome::Failed(error)
            }
            Ok(()) if *self == before => Outcome::Unchanged,
            Ok(()) => {
                tracing::debug!(?action, display = %self.display, "applied");
                Outcome::Updated
            }
        }
    }

    /// Applies a sequence of actions, returning the last outcome.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Outcome {
        actions
            .into_iter()
            .fold(Outcome::Unchanged, |_, action| self.apply(action))
    }

    /// Consumes the state and returns the state after `action`.
    pub fn next(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// Digit and decimal point entry.
    fn enter(&mut self, c: char) {
        let current = self.entry_text();
        if c == '0' && current == Some("0") {
            return;
        }
        if c == '.' && current.is_some_and(|text| text.contains('.')) {
            return;
        }

        let text = if self.starts_fresh_entry() {
            if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            }
        } else {
            let mut text = current.unwrap_or(&self.display).to_string();
            text.push(c);
            text
        };

        if self.evaluated {
            // The stale operator and second operand stay until an operator
            // or equals reads them.
            self.evaluated = false;
            self.role = OperandRole::First;
            self.first_operand = Some(text.clone());
        } else if self.role == OperandRole::First {
            self.first_operand = Some(text.clone());
        } else {
            self.second_operand = Some(text.clone());
            self.awaiting_second_operand = false;
        }
        self.display = text;
    }

    fn choose_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if self.evaluated {
            self.operator = Some(op);
            self.role = OperandRole::Second;
            self.awaiting_second_operand = true;
            self.evaluated = false;
            return Ok(());
        }

        if self.role == OperandRole::First {
            if self.first_operand.is_none() {
                self.first_operand = Some(self.display.clone());
            }
            self.operator = Some(op);
            self.role = OperandRole::Second;
            self.awaiting_second_operand = true;
            return Ok(());
        }

        let pending = match self.operator {
            Some(pending) if !self.awaiting_second_operand => pending,
            _ => {
                self.operator = Some(op);
                return Ok(());
            }
        };

        // Chained operation: settle the pending one before taking `op`.
        let result = engine::evaluate(self.first_text(), pending, self.second_text())?;
        self.first_operand = Some(result.clone());
        self.display = result;
        self.operator = Some(op);
        self.role = OperandRole::Second;
        self.awaiting_second_operand = true;
        Ok(())
    }

    fn equals(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.operator else {
            // Nothing pending: the result is zero at the first operand's precision.
            let result = engine::zero_result(engine::fractional_digit_count(self.first_text()));
            self.finish(result);
            return Ok(());
        };

        let second = self.second_text().to_string();
        let result = engine::evaluate(self.first_text(), op, &second)?;
        self.second_operand = Some(second);
        self.finish(result);
        Ok(())
    }

    fn finish(&mut self, result: String) {
        self.first_operand = Some(result.clone());
        self.display = result;
        self.role = OperandRole::First;
        self.awaiting_second_operand = false;
        self.evaluated = true;
    }

    fn toggle_sign(&mut self) -> Result<(), CalcError> {
        if self.awaiting_second_operand || self.display == "0" {
            return Ok(());
        }

        let negated = engine::negate(&self.display)?;
        if self.editing_first() {
            self.evaluated = false;
            self.role = OperandRole::First;
            self.first_operand = Some(negated.clone());
        } else {
            self.second_operand = Some(negated.clone());
        }
        self.display = negated;
        Ok(())
    }

    fn backspace(&mut self) {
        if self.awaiting_second_operand {
            return;
        }

        let mut text = self.display.clone();
        text.pop();
        if text.is_empty() || text == "-" {
            text = "0".to_string();
        }

        if self.editing_first() {
            self.evaluated = false;
            self.role = OperandRole::First;
            self.first_operand = (text != "0").then(|| text.clone());
        } else {
            self.awaiting_second_operand = text == "0";
            self.second_operand = Some(text.clone());
        }
        self.display = text;
    }

    /// First operand as the engine sees it.
    fn first_text(&self) -> &str {
        self.first_operand.as_deref().unwrap_or(&self.display)
    }

    /// Second operand as the engine sees it. The displayed value stands in
    /// until one has been entered.
    fn second_text(&self) -> &str {
        self.second_operand.as_deref().unwrap_or(&self.display)
    }
}
