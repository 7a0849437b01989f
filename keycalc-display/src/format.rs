//! Display text formatting.

use serde::{Deserialize, Serialize};

/// Placeholder shown while the calculator is errored.
pub const DEFAULT_ERROR_TEXT: &str = "don't do that";

/// Options for [`format_display`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Longest text shown verbatim, in characters.
    pub max_width: usize,
    /// Mantissa digits after the point in exponential form.
    pub exponent_digits: usize,
    /// Text shown instead of the value while errored.
    pub error_text: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_width: 9,
            exponent_digits: 5,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

/// Renders the calculator's display text.
///
/// Errored calculators show the placeholder. Text wider than
/// `max_width` switches to exponential form without a `+` on the
/// exponent (`1234567890` renders as `1.23457e9`).
pub fn format_display(text: &str, errored: bool, options: &DisplayOptions) -> String {
    if errored {
        return options.error_text.clone();
    }

    if text.chars().count() > options.max_width {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                return format!("{:.*e}", options.exponent_digits, value);
            }
            _ => tracing::debug!(text, "display text is not numeric, showing as is"),
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, errored: bool) -> String {
        format_display(text, errored, &DisplayOptions::default())
    }

    #[test]
    fn test_short_text_is_verbatim() {
        assert_eq!(render("12345678", false), "12345678");
        assert_eq!(render("123456789", false), "123456789");
        assert_eq!(render("0.", false), "0.");
        assert_eq!(render("-2.0", false), "-2.0");
    }

    #[test]
    fn test_long_text_is_exponential() {
        assert_eq!(render("1234567890", false), "1.23457e9");
        assert_eq!(render("-123456789", false), "-1.23457e8");
        assert_eq!(render("0.000000123", false), "1.23000e-7");
    }

    #[test]
    fn test_errored_shows_placeholder() {
        assert_eq!(render("1234567890", true), "don't do that");
        assert_eq!(render("12345678", true), "don't do that");
    }

    #[test]
    fn test_custom_options() {
        let options = DisplayOptions {
            max_width: 4,
            exponent_digits: 2,
            error_text: "Error".to_string(),
        };
        assert_eq!(format_display("12345", false, &options), "1.23e4");
        assert_eq!(format_display("1234", false, &options), "1234");
        assert_eq!(format_display("1", true, &options), "Error");
    }

    #[test]
    fn test_options_yaml_defaults() {
        let options: DisplayOptions = serde_yaml::from_str("max_width: 12").unwrap();
        assert_eq!(options.max_width, 12);
        assert_eq!(options.exponent_digits, 5);
        assert_eq!(options.error_text, DEFAULT_ERROR_TEXT);
    }
}
