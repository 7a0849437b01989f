//! Binary arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four supported arithmetic operators.
///
/// Serialized as its canonical symbol (`+`, `−`, `×`, `÷`). Parsing also
/// accepts the ASCII spellings a keyboard can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "−", alias = "-")]
    Subtract,
    #[serde(rename = "×", alias = "x", alias = "*")]
    Multiply,
    #[serde(rename = "÷", alias = "/")]
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Returns the canonical display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Maps a single key character to an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            'x' | 'X' | '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string is not an operator symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator: '{0}'")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_char(c).ok_or_else(|| ParseOperatorError(s.to_string()))
            }
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("%".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        let rendered: Vec<String> = Operator::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(rendered, vec!["+", "−", "×", "÷"]);
    }

    #[test]
    fn test_serde_symbols() {
        assert_eq!(serde_json::to_string(&Operator::Multiply).unwrap(), "\"×\"");
        let op: Operator = serde_json::from_str("\"/\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }
}
