//! # keycalc-display
//!
//! Rendering helpers for keycalc front ends:
//! - Display text formatting (error placeholder, exponential form)
//! - 12-hour clock formatting

pub mod clock;
pub mod format;

pub use clock::{current_clock, format_clock};
pub use format::{format_display, DisplayOptions};
