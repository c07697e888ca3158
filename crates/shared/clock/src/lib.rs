//! Ticktack Clock Adapters
//!
//! Implementations of the [`Clock`] port:
//!
//! - [`SystemClock`]: the host's local wall clock
//! - [`ManualClock`]: frozen until advanced, for tests and replays
//! - [`OffsetClock`]: another clock re-read at a fixed UTC offset
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use ticktack_clock::{ManualClock, OffsetClock, SystemClock};
//! use chrono::Duration;
//!
//! // Real local time
//! let local = Arc::new(SystemClock::new());
//!
//! // Same instant, read in UTC+09:00
//! let tokyo = OffsetClock::new(local.clone(), 9 * 60, "Tokyo");
//!
//! // Deterministic time for tests
//! let manual = ManualClock::at_epoch();
//! manual.advance(Duration::seconds(1));
//! ```

mod manual;
mod offset;
mod system;

pub use manual::ManualClock;
pub use offset::OffsetClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use ticktack_ports::Clock;
