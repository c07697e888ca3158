use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the virtual event channel that fires on every frame
pub const TICK: &str = "tick";

/// Calendar/time granularity tracked by a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    /// Day of the week (Sunday = 0), not day of the month
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Unit {
    /// Every unit, largest first
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
    ];

    /// Lowercase event name for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
        }
    }

    /// Resolve an event name to a unit. `tick` and unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.as_str() == name)
    }

    /// Returns true if the unit carries a progress value
    pub fn has_progress(&self) -> bool {
        !matches!(self, Unit::Millisecond)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_tick_is_not_a_unit() {
        assert_eq!(Unit::parse(TICK), None);
        assert_eq!(Unit::parse("Second"), None);
        assert_eq!(Unit::parse("fortnight"), None);
    }

    #[test]
    fn test_only_millisecond_lacks_progress() {
        let without: Vec<_> = Unit::ALL.into_iter().filter(|u| !u.has_progress()).collect();
        assert_eq!(without, vec![Unit::Millisecond]);
    }
}
