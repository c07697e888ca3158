use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::{Unit, UnitState};

/// Every unit's state, computed at one frame tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub year: UnitState,
    pub month: UnitState,
    pub day: UnitState,
    pub hour: UnitState,
    pub minute: UnitState,
    pub second: UnitState,
    pub millisecond: UnitState,
}

impl Sample {
    /// State of a single unit
    pub fn unit(&self, unit: Unit) -> &UnitState {
        match unit {
            Unit::Year => &self.year,
            Unit::Month => &self.month,
            Unit::Day => &self.day,
            Unit::Hour => &self.hour,
            Unit::Minute => &self.minute,
            Unit::Second => &self.second,
            Unit::Millisecond => &self.millisecond,
        }
    }

    pub(crate) fn unit_mut(&mut self, unit: Unit) -> &mut UnitState {
        match unit {
            Unit::Year => &mut self.year,
            Unit::Month => &mut self.month,
            Unit::Day => &mut self.day,
            Unit::Hour => &mut self.hour,
            Unit::Minute => &mut self.minute,
            Unit::Second => &mut self.second,
            Unit::Millisecond => &mut self.millisecond,
        }
    }

    /// Look up a unit by event name. `tick` and unknown names yield `None`.
    pub fn get(&self, name: &str) -> Option<&UnitState> {
        Unit::parse(name).map(|unit| self.unit(unit))
    }

    /// Units whose value moved since the previous sample, largest first
    pub fn changed_units(&self) -> Vec<Unit> {
        Unit::ALL
            .into_iter()
            .filter(|unit| self.unit(*unit).changed())
            .collect()
    }

    /// Iterate over `(unit, state)` pairs, largest unit first
    pub fn iter(&self) -> impl Iterator<Item = (Unit, &UnitState)> {
        Unit::ALL.into_iter().map(move |unit| (unit, self.unit(unit)))
    }
}

impl Index<Unit> for Sample {
    type Output = UnitState;

    fn index(&self, unit: Unit) -> &UnitState {
        self.unit(unit)
    }
}
