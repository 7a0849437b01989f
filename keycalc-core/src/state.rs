//! Calculator state record.

use crate::operator::Operator;
use serde::{Deserialize, Serialize};

/// Which operand slot the display text currently feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandRole {
    #[default]
    First,
    Second,
}

/// The state of one calculator.
///
/// Created in the reset configuration and mutated in place by
/// [`CalculatorState::apply`]. One record per session; the
/// record is not shared between callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the operand being edited, or of the last result.
    pub display: String,

    /// Slot that `display` feeds.
    pub role: OperandRole,

    /// First operand. `None` until a digit has been entered for it.
    pub first_operand: Option<String>,

    /// Second operand. `None` until entry begins; kept after evaluation so
    /// repeated equals re-applies it.
    pub second_operand: Option<String>,

    /// Pending operator.
    pub operator: Option<Operator>,

    /// An operator was chosen and no digit of the second operand typed yet.
    pub awaiting_second_operand: bool,

    /// Set by equals until the next entry begins.
    pub evaluated: bool,

    /// Absorbing error flag; the next action resets.
    pub errored: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            role: OperandRole::First,
            first_operand: None,
            second_operand: None,
            operator: None,
            awaiting_second_operand: false,
            evaluated: false,
            errored: false,
        }
    }
}

impl CalculatorState {
    /// Creates a calculator in the reset configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the reset configuration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if the record equals the reset configuration.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true while the first operand slot is active.
    ///
    /// After equals the result is the first operand, whatever `role` says.
    pub fn editing_first(&self) -> bool {
        self.evaluated || self.role == OperandRole::First
    }

    /// Text of the operand that a digit would extend, if it has any.
    ///
    /// While awaiting the second operand, any stored second operand is left
    /// over from an earlier calculation and does not count.
    pub fn entry_text(&self) -> Option<&str> {
        if self.editing_first() {
            self.first_operand.as_deref()
        } else if self.awaiting_second_operand {
            None
        } else {
            self.second_operand.as_deref()
        }
    }

    /// Returns true if the next digit starts a new operand instead of
    /// extending the current one.
    pub fn starts_fresh_entry(&self) -> bool {
        self.evaluated
            || (self.role == OperandRole::First && self.first_operand.is_none())
            || self.awaiting_second_operand
    }

    /// Checks the structural invariants of the record.
    pub fn is_consistent(&self) -> bool {
        let single_point = self.display.matches('.').count() <= 1;
        let flags_exclusive = !(self.evaluated && self.awaiting_second_operand);
        let first_entered = self.first_operand.is_some() || self.role == OperandRole::First;
        single_point && flags_exclusive && first_entered
    }
}
