//! # keycalc-core
//!
//! Input-processing core for a four-function keypad calculator.
//!
//! This crate provides:
//! - The calculation engine (textual operands, precision-preserving results)
//! - The calculator state record
//! - The entry state machine that applies keypad actions to the record
//! - Operator symbols and error types

pub mod engine;
pub mod error;
pub mod machine;
pub mod operator;
pub mod state;

pub use engine::{evaluate, evaluate_symbol};
pub use error::CalcError;
pub use machine::{Action, Outcome};
pub use operator::{Operator, ParseOperatorError};
pub use state::{CalculatorState, OperandRole};
