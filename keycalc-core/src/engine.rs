//! Calculation engine - applies one operator to two textual operands.
//!
//! Results are fixed-point text whose precision is the larger of the two
//! operands' fractional digit counts, so `1.1 + 3.1` yields `4.2` rather
//! than the nearest binary float.

use crate::error::CalcError;
use crate::operator::Operator;

/// Largest precision that is pre-rounded by scaling. Beyond this the
/// scale factor itself loses integer precision.
const MAX_SCALED_PRECISION: usize = 15;

/// Evaluates `a op b` and formats the result.
pub fn evaluate(a: &str, op: Operator, b: &str) -> Result<String, CalcError> {
    let lhs = parse_operand(a)?;
    let rhs = parse_operand(b)?;
    let precision = precision_of(a, b);

    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                tracing::trace!(a, b, "division by zero");
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    if !value.is_finite() {
        return Err(CalcError::Overflow);
    }

    let result = format_fixed(value, precision);
    tracing::trace!(a, b, op = %op, precision, result = %result, "evaluated");
    Ok(result)
}

/// Evaluates with a raw operator symbol.
///
/// An unrecognized symbol yields zero formatted to the operands' precision
/// instead of an error.
pub fn evaluate_symbol(a: &str, symbol: &str, b: &str) -> Result<String, CalcError> {
    match symbol.parse::<Operator>() {
        Ok(op) => evaluate(a, op, b),
        Err(e) => {
            tracing::debug!("{}, defaulting to zero", e);
            Ok(zero_result(precision_of(a, b)))
        }
    }
}

/// Negates the numeric value of `text`.
///
/// The value goes through `f64`, so trailing zeros and a trailing decimal
/// point are not preserved: `"2.50"` becomes `"-2.5"`.
pub fn negate(text: &str) -> Result<String, CalcError> {
    let value = parse_operand(text)?;
    Ok(format_number(-value))
}

/// Zero formatted to `precision` decimal places, the result of an
/// operation with no usable operator.
pub fn zero_result(precision: usize) -> String {
    format_fixed(0.0, precision)
}

/// Number of characters after the first `.`, or 0 without one.
pub fn fractional_digit_count(text: &str) -> usize {
    text.split_once('.')
        .map(|(_, frac)| frac.chars().count())
        .unwrap_or(0)
}

fn precision_of(a: &str, b: &str) -> usize {
    fractional_digit_count(a).max(fractional_digit_count(b))
}

fn parse_operand(text: &str) -> Result<f64, CalcError> {
    // f64::from_str also accepts "inf" and "NaN", which no key sequence produces.
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidOperand {
            text: text.to_string(),
        }),
    }
}

/// Formats with exactly `precision` fractional digits, rounding half away
/// from zero.
fn format_fixed(value: f64, precision: usize) -> String {
    let rounded = if precision <= MAX_SCALED_PRECISION {
        let scale = 10f64.powi(precision as i32);
        let scaled = (value * scale).round() / scale;
        if scaled.is_finite() {
            scaled
        } else {
            value
        }
    } else {
        value
    };
    format!("{:.*}", precision, positive_zero(rounded))
}

/// Shortest text that parses back to `value`.
fn format_number(value: f64) -> String {
    positive_zero(value).to_string()
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
