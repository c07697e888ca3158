use ticktack_core::LocalTime;

/// Port for the wall-clock source
///
/// This allows the frame loop to use different time sources:
/// - Real local system time in production
/// - Manually advanced time for deterministic tests
/// - A fixed UTC offset applied over another clock
pub trait Clock: Send + Sync {
    /// Get the current local time, including the offset it was read at
    fn now(&self) -> LocalTime;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
