use chrono::Local;
use ticktack_core::LocalTime;
use ticktack_ports::Clock;

/// Real system clock in the host's local timezone
///
/// Each reading carries the local offset in effect at that instant, so a
/// DST change shows up as a new offset on the next frame.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> LocalTime {
        Local::now().fixed_offset()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
