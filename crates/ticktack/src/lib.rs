//! Ticktack - Frame-Driven Clock
//!
//! Samples wall-clock time once per animation frame, decomposes it into
//! calendar/time digits, and dispatches callbacks for the digits that
//! changed:
//!
//! - **TimeSampler**: reads a [`Clock`] and builds a [`Sample`] with change flags
//! - **Dispatcher**: runs callbacks of changed units, plus every `tick` callback
//! - **Frame loop**: re-arms itself on the host's [`FrameScheduler`] each frame
//! - **FrameQueue / FrameDriver**: an in-process scheduler and a tokio loop
//!   that drives it at a fixed rate
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────┐   frame    ┌──────────────┐
//!   │ FrameScheduler│ ─────────▶ │  Frame loop  │ ── re-arm ──┐
//!   └───────────────┘            └──────┬───────┘             │
//!           ▲                           │ previous sample     │
//!           └───────────────────────────┼─────────────────────┘
//!                                       ▼
//!                               ┌──────────────┐    Clock::now()
//!                               │  TimeSampler │ ◀───────────────
//!                               └──────┬───────┘
//!                                      │ sample
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Dispatcher  │ ──▶ callbacks(sample, unit state)
//!                               └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use std::rc::Rc;
//! use ticktack::{FrameDriver, FrameQueue, Ticktack};
//!
//! let frames = Rc::new(FrameQueue::new());
//! let clock = Ticktack::with_system_clock(frames.clone());
//!
//! clock.on("second", |sample, second| {
//!     println!("{:02}:{:02}:{:02}", sample.hour.value, sample.minute.value, second.unwrap().value);
//! });
//! clock.on("tick", |sample, _| {
//!     // sub-second hand position
//!     let _ = sample.second.progress;
//! });
//!
//! FrameDriver::new(frames).run().await;
//! ```
//!
//! Progress values for `hour`, `minute` and `second` are the local-time
//! remainder within the unit, computed from the millisecond timestamp rather
//! than normalized like `year`, `month` and `day`. The `day` unit is the day
//! of the week (Sunday = 0).

mod dispatch;
pub mod driver;
mod frame_loop;
mod frame_queue;
mod registry;
mod sampler;

pub use dispatch::DispatchReport;
pub use driver::{DriverConfig, FrameDriver};
pub use frame_loop::{LoopState, Ticktack};
pub use frame_queue::FrameQueue;
pub use registry::Callback;
pub use sampler::TimeSampler;

// Re-export the pieces callers need alongside the loop
pub use ticktack_clock::{ManualClock, OffsetClock, SystemClock};
pub use ticktack_core::{LocalTime, Sample, TICK, Unit, UnitState};
pub use ticktack_ports::{Clock, DispatchError, FrameCallback, FrameScheduler};
