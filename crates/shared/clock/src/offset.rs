use chrono::{FixedOffset, Offset, Utc};
use std::sync::Arc;
use ticktack_core::LocalTime;
use ticktack_ports::Clock;

/// Largest offset representable by [`FixedOffset`], in minutes
const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Clock that re-expresses another clock's readings at a fixed UTC offset
///
/// The instant is unchanged; only the calendar fields (and the offset the
/// sampler sees) move. This is plain offset arithmetic: no timezone rules,
/// no DST.
pub struct OffsetClock {
    /// Clock providing the instant
    source: Arc<dyn Clock>,
    /// Target offset, east of UTC
    offset: FixedOffset,
    /// Name/identifier for this clock
    name: String,
}

impl OffsetClock {
    /// Create a clock reading `source` at `offset_minutes` east of UTC
    ///
    /// # Arguments
    /// * `source` - Clock providing the instant
    /// * `offset_minutes` - Offset from UTC (positive = east, e.g. 60 for CET)
    /// * `name` - Identifier for this clock (e.g., "Tokyo")
    ///
    /// Offsets beyond a full day are clamped to ±23:59.
    pub fn new(source: Arc<dyn Clock>, offset_minutes: i32, name: impl Into<String>) -> Arc<Self> {
        let name = name.into();
        let clamped = offset_minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES);
        if clamped != offset_minutes {
            log::warn!(
                "OffsetClock '{}': offset {} min out of range, clamped to {}",
                name,
                offset_minutes,
                clamped
            );
        }

        let offset = FixedOffset::east_opt(clamped * 60).unwrap_or_else(|| Utc.fix());
        Arc::new(Self {
            source,
            offset,
            name,
        })
    }

    /// Create a clock reading `source` in UTC
    pub fn utc(source: Arc<dyn Clock>, name: impl Into<String>) -> Arc<Self> {
        Self::new(source, 0, name)
    }

    /// Get the configured offset, in minutes east of UTC
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Get reference to the underlying clock
    pub fn source_clock(&self) -> &Arc<dyn Clock> {
        &self.source
    }
}

impl Clock for OffsetClock {
    fn now(&self) -> LocalTime {
        self.source.now().with_timezone(&self.offset)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
