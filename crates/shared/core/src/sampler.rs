//! Decomposition of a local wall-clock reading into a [`Sample`].
//!
//! Progress formulas differ per unit:
//!
//! - `year`: whole days elapsed since local Jan 1 (rounded up) over 365 or 366
//!   days, using the simple `year % 4 == 0` leap rule
//! - `month`: day of the month over the number of days in the current month
//! - `day`: hour over 24
//! - `hour`, `minute`, `second`: the local-time millisecond count expressed in
//!   the unit, wrapped by the next larger period, minus the unit's own value
//! - `millisecond`: no progress

use chrono::{Datelike, Timelike};

use crate::entities::{Sample, Unit, UnitState};
use crate::values::{LocalTime, UnitValue, timezone_offset_minutes};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: i64 = 86_400_000;

/// Build the sample for `now`, flagging changes against `previous`
///
/// With no previous sample, no unit carries a `has_changed` flag.
pub fn decompose(now: LocalTime, previous: Option<&Sample>) -> Sample {
    let local_ms = local_epoch_millis(&now) as f64;

    let year = UnitValue::from(now.year());
    let month = UnitValue::from(now.month0());
    let day = UnitValue::from(now.weekday().num_days_from_sunday());
    let hour = UnitValue::from(now.hour());
    let minute = UnitValue::from(now.minute());
    let second = UnitValue::from(now.second());
    let millisecond = UnitValue::from(subsec_millis(&now));

    let mut sample = Sample {
        year: UnitState::new(year, Some(year_progress(&now))),
        month: UnitState::new(month, Some(month_progress(&now))),
        day: UnitState::new(day, Some(hour as f64 / 24.0)),
        hour: UnitState::new(hour, Some((local_ms / MS_PER_HOUR) % 24.0 - hour as f64)),
        minute: UnitState::new(
            minute,
            Some((local_ms / MS_PER_MINUTE) % 60.0 - minute as f64),
        ),
        second: UnitState::new(
            second,
            Some((local_ms / MS_PER_SECOND) % 60.0 - second as f64),
        ),
        millisecond: UnitState::new(millisecond, None),
    };

    if let Some(previous) = previous {
        for unit in Unit::ALL {
            let state = sample.unit_mut(unit);
            state.has_changed = Some(state.value != previous.unit(unit).value);
        }
    }

    sample
}

/// Epoch milliseconds shifted into local time
fn local_epoch_millis(now: &LocalTime) -> i64 {
    now.timestamp_millis() - timezone_offset_minutes(now) * 60_000
}

// Leap seconds report up to 1999 ms
fn subsec_millis(now: &LocalTime) -> u32 {
    now.timestamp_subsec_millis().min(999)
}

fn year_progress(now: &LocalTime) -> f64 {
    let days_in_year = if now.year() % 4 == 0 { 366.0 } else { 365.0 };
    let elapsed_ms = i64::from(now.ordinal0()) * MS_PER_DAY
        + i64::from(now.num_seconds_from_midnight()) * 1_000
        + i64::from(subsec_millis(now));

    (elapsed_ms as f64 / MS_PER_DAY as f64).ceil() / days_in_year
}

fn month_progress(now: &LocalTime) -> f64 {
    f64::from(now.day()) / f64::from(days_in_month(now.year(), now.month()))
}

/// Gregorian month length; `month` is 1-based
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
