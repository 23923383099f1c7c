//! Calendar predicates over a single clock reading.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// The instant a time-dependent decision is made for.
pub type ClockReading = NaiveDateTime;

/// True on December 25 of any year, at any time of day.
pub fn is_christmas(reading: &ClockReading) -> bool {
    reading.month() == 12 && reading.day() == 25
}

pub fn hour_of_day(reading: &ClockReading) -> u32 {
    reading.hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> ClockReading {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_christmas_ignores_year_and_time() {
        assert!(is_christmas(&at(2024, 12, 25, 0, 0)));
        assert!(is_christmas(&at(1999, 12, 25, 23, 59)));
        assert!(!is_christmas(&at(2024, 12, 24, 23, 59)));
        assert!(!is_christmas(&at(2024, 11, 25, 12, 0)));
    }

    #[test]
    fn test_hour_of_day() {
        assert_eq!(hour_of_day(&at(2024, 1, 1, 19, 59)), 19);
    }
}
