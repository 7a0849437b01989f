//! Interactive REPL.

use crate::config::Config;
use crate::keymap;
use colored::Colorize;
use keycalc_core::{CalcError, CalculatorState, OperandRole, Outcome};
use keycalc_display::{current_clock, format_display};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

const HELP_TEXT: &str = r#"
Type keys and press Enter; each line is applied left to right.

Keys:
  0-9 .           Digits and decimal point
  + - x /         Add, subtract, multiply, divide (also * × ÷ −)
  =               Equals (repeat to re-apply the last operation)
  n ~             Toggle sign
  b <             Backspace
  c               Clear

Commands:
  help            Show this help
  state           Show the calculator state as JSON
  clock           Show the time
  quit, exit      Exit the REPL
"#;

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "keycalc".bold().cyan());

    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(rl_config)?;

    let history_path = config.repl.history_path();
    let _ = rl.load_history(&history_path);

    println!("Type 'help' for available keys.\n");

    let mut state = CalculatorState::new();
    println!("{}\n", render(&state, config));

    loop {
        let prompt = format!("{} ", config.repl.prompt.cyan());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match execute_repl_line(&mut state, line, config) {
                    Ok(Some(output)) => println!("{}\n", output),
                    Ok(None) => break,
                    Err(e) => println!("{}: {}\n", "Error".red(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                println!("{}: {:?}", "Error".red(), err);
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(&history_path) {
        tracing::warn!("failed to save history to {}: {}", history_path.display(), e);
    }

    Ok(())
}

/// Executes one line. `Ok(None)` ends the session.
fn execute_repl_line(
    state: &mut CalculatorState,
    line: &str,
    config: &Config,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    match line.to_lowercase().as_str() {
        "help" | "?" => return Ok(Some(HELP_TEXT.to_string())),
        "quit" | "exit" | "q" => return Ok(None),
        "state" => return Ok(Some(serde_json::to_string_pretty(state)?)),
        "clock" => return Ok(Some(current_clock())),
        _ => {}
    }

    let actions = keymap::parse_keys(line)?;
    let outcome = state.apply_all(actions);
    if let Outcome::Failed(error) = &outcome {
        log_failure(error);
    }
    Ok(Some(render(state, config)))
}

/// Division by zero is ordinary user input; anything else is worth a warning.
fn log_failure(error: &CalcError) {
    if error.is_division_by_zero() {
        tracing::info!(code = error.error_code(), "calculator errored");
    } else {
        tracing::warn!(code = error.error_code(), %error, "calculation failed");
    }
}

/// Formats the display line, with the pending operator while the second
/// operand is being entered.
fn render(state: &CalculatorState, config: &Config) -> String {
    let text = format_display(&state.display, state.errored, &config.display);
    let mut line = if state.errored {
        text.red().bold().to_string()
    } else {
        text.bold().to_string()
    };

    if !state.errored && state.role == OperandRole::Second {
        if let Some(op) = state.operator {
            line.push_str(&format!("  {}", op.to_string().yellow()));
        }
    }
    if config.repl.show_clock {
        line.push_str(&format!("  {}", current_clock().dimmed()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> Config {
        colored::control::set_override(false);
        Config::default()
    }

    fn run_lines(lines: &[&str]) -> (CalculatorState, Vec<Option<String>>) {
        let config = plain_config();
        let mut state = CalculatorState::new();
        let outputs = lines
            .iter()
            .map(|line| execute_repl_line(&mut state, line, &config).unwrap())
            .collect();
        (state, outputs)
    }

    #[test]
    fn test_line_applies_keys() {
        let (state, outputs) = run_lines(&["12+3-", "4="]);
        assert_eq!(outputs[0].as_deref(), Some("15  −"));
        assert_eq!(outputs[1].as_deref(), Some("11"));
        assert_eq!(state.display, "11");
    }

    #[test]
    fn test_errored_line_shows_placeholder() {
        let (state, outputs) = run_lines(&["5/0=", "7"]);
        assert_eq!(outputs[0].as_deref(), Some("don't do that"));
        // The next key only resets.
        assert_eq!(outputs[1].as_deref(), Some("0"));
        assert!(state.is_initial());
    }

    #[test]
    fn test_long_result_is_exponential() {
        let (_, outputs) = run_lines(&["99999x99999="]);
        assert_eq!(outputs[0].as_deref(), Some("9.99980e9"));
    }

    #[test]
    fn test_meta_commands() {
        let (_, outputs) = run_lines(&["help", "state", "QUIT"]);
        assert!(outputs[0].as_deref().unwrap().contains("Toggle sign"));
        assert!(outputs[1].as_deref().unwrap().contains("\"display\": \"0\""));
        assert_eq!(outputs[2], None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let config = plain_config();
        let mut state = CalculatorState::new();
        let err = execute_repl_line(&mut state, "1+y", &config).unwrap_err();
        assert_eq!(err.to_string(), "unknown key 'y' at column 3");
        assert!(state.is_initial());
    }
}
