//! Ticktack Ports
//!
//! Port definitions (traits) for the Ticktack frame clock.
//! These define the boundaries between the frame loop and its host: where
//! time comes from and how frames are scheduled.

mod clock;
mod error;
mod frame;

pub use clock::Clock;
pub use error::{DispatchError, DispatchResult};
pub use frame::{FrameCallback, FrameScheduler};
