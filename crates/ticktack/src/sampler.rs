use std::sync::Arc;
use ticktack_core::{Sample, decompose};
use ticktack_ports::Clock;

/// Reads a clock and turns the reading into a [`Sample`]
pub struct TimeSampler {
    clock: Arc<dyn Clock>,
}

impl TimeSampler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Sample the clock now, flagging changes against `previous`
    pub fn sample(&self, previous: Option<&Sample>) -> Sample {
        decompose(self.clock.now(), previous)
    }

    /// Get reference to the underlying clock
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}
