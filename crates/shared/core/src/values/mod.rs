use chrono::{DateTime, FixedOffset};

/// Local wall-clock reading: calendar fields plus the UTC offset they were read at
pub type LocalTime = DateTime<FixedOffset>;

/// Raw numeric reading of a time unit
pub type UnitValue = i64;

/// Timezone offset in whole minutes, signed as `UTC - local`
///
/// Positive west of Greenwich, so `+02:00` yields `-120`.
pub fn timezone_offset_minutes(time: &LocalTime) -> i64 {
    -i64::from(time.offset().local_minus_utc()) / 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timezone_offset_sign() {
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let west = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();

        let t_east = east.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let t_west = west.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(timezone_offset_minutes(&t_east), -120);
        assert_eq!(timezone_offset_minutes(&t_west), 330);
    }
}
