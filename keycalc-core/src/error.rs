//! Core error types.

use thiserror::Error;

/// Errors from the calculation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid operand: '{text}'")]
    InvalidOperand { text: String },

    #[error("result out of range")]
    Overflow,
}

impl CalcError {
    /// Returns an error code suitable for display or machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::InvalidOperand { .. } => "INVALID_OPERAND",
            CalcError::Overflow => "OVERFLOW",
        }
    }

    /// Returns true if the error came from dividing by zero.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }
}
