use crate::domain::calendar::{self, ClockReading};
use crate::domain::ports::ClockRef;

/// First hour of the day the business is open.
pub const OPENING_HOUR: u32 = 8;
/// First hour of the day the business is closed again.
pub const CLOSING_HOUR: u32 = 20;

/// Decides whether the business is open from the hour of a clock reading.
pub struct AvailabilityClock {
    clock: ClockRef,
}

impl AvailabilityClock {
    pub fn new(clock: ClockRef) -> Self {
        Self { clock }
    }

    /// Open from 08:00 inclusive until 20:00 exclusive.
    pub fn is_open(reading: &ClockReading) -> bool {
        (OPENING_HOUR..CLOSING_HOUR).contains(&calendar::hour_of_day(reading))
    }

    /// Reads the clock once and checks the opening hours against it.
    pub fn is_open_now(&self) -> bool {
        Self::is_open(&self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn at(h: u32, min: u32, s: u32) -> ClockReading {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_opening_boundaries() {
        assert!(!AvailabilityClock::is_open(&at(7, 59, 59)));
        assert!(AvailabilityClock::is_open(&at(8, 0, 0)));
        assert!(AvailabilityClock::is_open(&at(19, 59, 59)));
        assert!(!AvailabilityClock::is_open(&at(20, 0, 0)));
        assert!(!AvailabilityClock::is_open(&at(20, 1, 0)));
        assert!(!AvailabilityClock::is_open(&at(0, 0, 0)));
    }

    #[test]
    fn test_same_reading_same_answer() {
        let reading = at(8, 0, 0);
        assert_eq!(
            AvailabilityClock::is_open(&reading),
            AvailabilityClock::is_open(&reading)
        );
    }

    #[test]
    fn test_is_open_now_uses_clock() {
        let open = AvailabilityClock::new(Arc::new(FixedClock(at(12, 0, 0))));
        assert!(open.is_open_now());

        let closed = AvailabilityClock::new(Arc::new(FixedClock(at(22, 0, 0))));
        assert!(!closed.is_open_now());
    }
}
