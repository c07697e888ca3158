mod sample;
mod unit;
mod unit_state;

pub use sample::Sample;
pub use unit::{TICK, Unit};
pub use unit_state::UnitState;
