//! Key to action mapping.
//!
//! Every key maps to exactly one keypad action:
//!
//! | Key               | Action         |
//! |-------------------|----------------|
//! | `0`-`9`           | digit          |
//! | `.`               | decimal point  |
//! | `+`               | add            |
//! | `-` `−`           | subtract       |
//! | `x` `*` `×`       | multiply       |
//! | `/` `÷`           | divide         |
//! | `=`               | equals         |
//! | `n` `~`           | toggle sign    |
//! | `b` `<`           | backspace      |
//! | `c`               | clear          |

use keycalc_core::{Action, Operator};
use thiserror::Error;

/// Error mapping keys to actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key '{key}' at column {column}")]
    UnknownKey { key: char, column: usize },
}

/// Maps a single key to its action.
pub fn action_for_key(key: char) -> Option<Action> {
    if let Some(d) = key.to_digit(10) {
        return Some(Action::Digit(d as u8));
    }
    if let Some(op) = Operator::from_char(key) {
        return Some(Action::Operator(op));
    }
    match key {
        '.' => Some(Action::DecimalPoint),
        '=' => Some(Action::Equals),
        'n' | 'N' | '~' => Some(Action::ToggleSign),
        'b' | 'B' | '<' => Some(Action::Backspace),
        'c' | 'C' => Some(Action::Clear),
        _ => None,
    }
}

/// Maps a line of keys to actions. Whitespace is skipped; any unknown key
/// rejects the whole line.
pub fn parse_keys(line: &str) -> Result<Vec<Action>, KeyError> {
    line.chars()
        .enumerate()
        .filter(|(_, key)| !key.is_whitespace())
        .map(|(i, key)| {
            action_for_key(key).ok_or(KeyError::UnknownKey {
                key,
                column: i + 1,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for d in 0..=9u8 {
            let key = char::from(b'0' + d);
            assert_eq!(action_for_key(key), Some(Action::Digit(d)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(action_for_key('+'), Some(Action::Operator(Operator::Add)));
        assert_eq!(action_for_key('−'), Some(Action::Operator(Operator::Subtract)));
        assert_eq!(action_for_key('x'), Some(Action::Operator(Operator::Multiply)));
        assert_eq!(action_for_key('÷'), Some(Action::Operator(Operator::Divide)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key('.'), Some(Action::DecimalPoint));
        assert_eq!(action_for_key('='), Some(Action::Equals));
        assert_eq!(action_for_key('~'), Some(Action::ToggleSign));
        assert_eq!(action_for_key('<'), Some(Action::Backspace));
        assert_eq!(action_for_key('c'), Some(Action::Clear));
        assert_eq!(action_for_key('%'), None);
    }

    #[test]
    fn test_parse_line() {
        let actions = parse_keys("12 + 3.5 =").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Digit(1),
                Action::Digit(2),
                Action::Operator(Operator::Add),
                Action::Digit(3),
                Action::DecimalPoint,
                Action::Digit(5),
                Action::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert_eq!(
            parse_keys("1 + q"),
            Err(KeyError::UnknownKey {
                key: 'q',
                column: 5
            })
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_keys("   "), Ok(vec![]));
    }
}
