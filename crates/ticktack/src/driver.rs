//! Async frame driver
//!
//! Stands in for a display's refresh callback: runs a [`FrameQueue`] on a
//! fixed tokio interval. Frame callbacks are `!Send`, so the driver runs on
//! the current task and never spawns.

use log::{info, trace, warn};
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

use crate::FrameQueue;

/// Configuration for the frame driver
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Time between frames
    pub frame_interval: Duration,
    /// Stop after this many frames (None = run forever)
    pub max_frames: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_micros(16_667), // ~60 Hz
            max_frames: None,
        }
    }
}

/// Runs frames of a [`FrameQueue`] at a fixed rate
pub struct FrameDriver {
    frames: Rc<FrameQueue>,
    config: DriverConfig,
}

impl FrameDriver {
    /// Create a driver with default configuration
    pub fn new(frames: Rc<FrameQueue>) -> Self {
        Self::with_config(frames, DriverConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(frames: Rc<FrameQueue>, mut config: DriverConfig) -> Self {
        if config.frame_interval.is_zero() {
            let fallback = DriverConfig::default().frame_interval;
            warn!(
                "Zero frame interval is not allowed, using {:?}",
                fallback
            );
            config.frame_interval = fallback;
        }

        Self { frames, config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Drive frames until `max_frames` is reached, returning the frames run
    ///
    /// The first frame runs immediately. Late frames are skipped rather than
    /// run in a burst.
    pub async fn run(&self) -> u64 {
        let mut interval = time::interval(self.config.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Frame driver started ({:?} per frame, limit {:?})",
            self.config.frame_interval, self.config.max_frames
        );

        let mut frames = 0;
        while self.config.max_frames.is_none_or(|max| frames < max) {
            interval.tick().await;
            let ran = self.frames.run_frame();
            frames += 1;
            trace!("Frame {} ran {} callbacks", frames, ran);
        }

        info!("Frame driver stopped after {} frames", frames);
        frames
    }
}
