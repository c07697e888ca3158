//! Ticktack Core Domain
//!
//! Pure domain types for the Ticktack frame clock: time units, per-unit
//! state, samples, and the decomposition of a local wall-clock reading into
//! a sample with change detection.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod sampler;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Sample, TICK, Unit, UnitState};
pub use sampler::decompose;
pub use values::{LocalTime, UnitValue, timezone_offset_minutes};
