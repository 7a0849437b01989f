//! 12-hour clock formatting.

use chrono::{Local, Timelike};

/// Formats a time as `h:mm`. Afternoon hours are reduced by 12; the
/// midnight hour stays `0`.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    let hour = match time.hour() {
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02}", hour, time.minute())
}

/// Formats the current local time.
pub fn current_clock() -> String {
    format_clock(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> String {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        format_clock(&time)
    }

    #[test]
    fn test_noon_and_morning() {
        assert_eq!(at(12, 0), "12:00");
        assert_eq!(at(12, 15), "12:15");
        assert_eq!(at(9, 5), "9:05");
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(at(13, 0), "1:00");
        assert_eq!(at(13, 15), "1:15");
        assert_eq!(at(23, 59), "11:59");
    }

    #[test]
    fn test_midnight() {
        assert_eq!(at(0, 7), "0:07");
    }

    #[test]
    fn test_current_clock_shape() {
        let clock = current_clock();
        let (hour, minute) = clock.split_once(':').unwrap();
        let hour: u32 = hour.parse().unwrap();
        assert!(hour <= 12);
        assert_eq!(minute.len(), 2);
    }
}
