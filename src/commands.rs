//! One-shot command execution.

use crate::config::Config;
use crate::keymap;
use crate::Commands;
use keycalc_core::CalculatorState;
use keycalc_display::{current_clock, format_display};

/// Executes a command and returns the formatted output.
pub fn execute(cmd: Commands, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        Commands::Repl => unreachable!(),

        Commands::Eval { keys, json } => {
            let mut state = CalculatorState::new();
            state.apply_all(keymap::parse_keys(&keys)?);

            if json {
                Ok(serde_json::to_string_pretty(&state)?)
            } else {
                Ok(format_display(&state.display, state.errored, &config.display))
            }
        }

        Commands::Clock => Ok(current_clock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(keys: &str, json: bool) -> String {
        let cmd = Commands::Eval {
            keys: keys.to_string(),
            json,
        };
        execute(cmd, &Config::default()).unwrap()
    }

    #[test]
    fn test_eval_display() {
        assert_eq!(eval("1.1+3.1=", false), "4.2");
        assert_eq!(eval("3+2==", false), "7");
        assert_eq!(eval("1234567890", false), "1.23457e9");
        assert_eq!(eval("8/0=", false), "don't do that");
    }

    #[test]
    fn test_eval_json() {
        let output = eval("3+2=", true);
        let state: CalculatorState = serde_json::from_str(&output).unwrap();
        assert_eq!(state.display, "5");
        assert_eq!(state.second_operand.as_deref(), Some("2"));
        assert!(state.evaluated);
    }

    #[test]
    fn test_eval_unknown_key() {
        let cmd = Commands::Eval {
            keys: "2^3".to_string(),
            json: false,
        };
        assert!(execute(cmd, &Config::default()).is_err());
    }
}
