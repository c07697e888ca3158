use chrono::{DateTime, Duration, Utc};
use std::sync::{PoisonError, RwLock};
use ticktack_core::LocalTime;
use ticktack_ports::Clock;

/// Clock that only moves when told to
///
/// Useful for deterministic tests and replays: frames sample the same
/// instant until [`advance`](Self::advance) or [`set_time`](Self::set_time)
/// moves it.
pub struct ManualClock {
    current: RwLock<LocalTime>,
}

impl ManualClock {
    /// Create a manual clock frozen at `initial_time`
    pub fn new(initial_time: LocalTime) -> Self {
        Self {
            current: RwLock::new(initial_time),
        }
    }

    /// Create a manual clock frozen at the UNIX epoch, in UTC
    pub fn at_epoch() -> Self {
        Self::new(DateTime::<Utc>::default().fixed_offset())
    }

    /// Advance the clock by `duration` (negative moves it back)
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current += duration;
        log::trace!("ManualClock advanced by {} to {}", duration, *current);
    }

    /// Jump to `time`, including its offset
    ///
    /// Warning: This can cause time discontinuities. Use with caution.
    pub fn set_time(&self, time: LocalTime) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> LocalTime {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn noon() -> LocalTime {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new(noon());
        std::thread::sleep(std::time::Duration::from_millis(5));

        assert_eq!(clock.now(), noon());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_advance_and_set_time() {
        let clock = ManualClock::new(noon());

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - noon(), Duration::seconds(5));

        clock.advance(Duration::milliseconds(-2_500));
        assert_eq!(clock.now() - noon(), Duration::milliseconds(2_500));

        let later = noon() + Duration::days(3);
        clock.set_time(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn test_epoch_clock() {
        let clock = ManualClock::at_epoch();
        assert_eq!(clock.now().timestamp(), 0);
        assert_eq!(clock.now().offset().local_minus_utc(), 0);
    }
}
