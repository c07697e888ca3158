use serde::{Deserialize, Serialize};

use crate::values::UnitValue;

/// Reading of one unit within a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitState {
    /// Current raw value of the unit
    pub value: UnitValue,
    /// Position within the unit's period; absent for milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Whether `value` differs from the previous sample; absent on the first sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_changed: Option<bool>,
}

impl UnitState {
    pub fn new(value: UnitValue, progress: Option<f64>) -> Self {
        Self {
            value,
            progress,
            has_changed: None,
        }
    }

    /// True only when a previous sample exists and the value moved
    pub fn changed(&self) -> bool {
        self.has_changed == Some(true)
    }
}
