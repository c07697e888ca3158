//! The per-frame loop and its registration surface

use log::{debug, trace};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;
use ticktack_clock::SystemClock;
use ticktack_core::{Sample, TICK, Unit, UnitState};
use ticktack_ports::{Clock, FrameScheduler};

use crate::dispatch::{self, DispatchReport};
use crate::registry::{Registry, SharedCallback};
use crate::sampler::TimeSampler;

/// Lifecycle of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// No callback registered yet; nothing scheduled
    #[default]
    Uninitialized,
    /// Re-arming itself on every frame
    Running,
}

struct Shared {
    sampler: TimeSampler,
    scheduler: Rc<dyn FrameScheduler>,
    state: Cell<LoopState>,
    current: Cell<Option<Sample>>,
    registry: RefCell<Registry>,
    last_report: RefCell<DispatchReport>,
    frames: Cell<u64>,
}

/// Frame-driven clock
///
/// Samples the clock once per frame and runs the callbacks of every unit
/// whose value changed, plus every `tick` callback. Cloning yields another
/// handle to the same clock. Once the last handle is dropped the loop stops
/// re-arming and queued frame callbacks do nothing.
#[derive(Clone)]
pub struct Ticktack {
    shared: Rc<Shared>,
}

impl Ticktack {
    /// Create a clock reading `clock` and scheduling through `scheduler`
    ///
    /// Nothing is sampled or scheduled until the first [`on`](Self::on).
    pub fn new(clock: Arc<dyn Clock>, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            shared: Rc::new(Shared {
                sampler: TimeSampler::new(clock),
                scheduler,
                state: Cell::new(LoopState::Uninitialized),
                current: Cell::new(None),
                registry: RefCell::new(Registry::default()),
                last_report: RefCell::new(DispatchReport::default()),
                frames: Cell::new(0),
            }),
        }
    }

    /// Create a clock reading the host's local time
    pub fn with_system_clock(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self::new(Arc::new(SystemClock::new()), scheduler)
    }

    /// Register `callback` for `event`
    ///
    /// `event` is a unit name (`"year"` .. `"millisecond"`) or `"tick"`.
    /// Other names are accepted but only ever see the first-frame call.
    /// The callback also runs once on the next frame, whatever changed, and
    /// the loop starts on the first registration.
    pub fn on<F>(&self, event: impl Into<String>, callback: F)
    where
        F: FnMut(&Sample, Option<&UnitState>) + 'static,
    {
        let event = event.into();
        let callback: SharedCallback = Rc::new(RefCell::new(callback));

        let (index, is_new) = self
            .shared
            .registry
            .borrow_mut()
            .register(&event, callback.clone());

        if is_new {
            if event != TICK && Unit::parse(&event).is_none() {
                debug!("Registered '{}', which is not a time unit", event);
            } else {
                debug!("Registered event '{}'", event);
            }
        }

        self.schedule_immediate(event, index, callback);
        self.ensure_running();
    }

    /// Current lifecycle state
    pub fn state(&self) -> LoopState {
        self.shared.state.get()
    }

    /// Latest sample, if the loop has started
    pub fn current_sample(&self) -> Option<Sample> {
        self.shared.current.get()
    }

    /// Event names in first-registration order
    pub fn registered_events(&self) -> Vec<String> {
        self.shared.registry.borrow().events().to_vec()
    }

    pub fn callback_count(&self, event: &str) -> usize {
        self.shared.registry.borrow().callback_count(event)
    }

    /// Dispatch summary of the most recent frame
    pub fn last_report(&self) -> DispatchReport {
        self.shared.last_report.borrow().clone()
    }

    /// Frames the loop has run since it started
    pub fn frames(&self) -> u64 {
        self.shared.frames.get()
    }

    /// Name of the clock being sampled
    pub fn clock_name(&self) -> String {
        self.shared.sampler.clock().name().to_string()
    }

    fn schedule_immediate(&self, event: String, index: usize, callback: SharedCallback) {
        let shared = Rc::downgrade(&self.shared);
        self.shared.scheduler.request_frame(Box::new(move || {
            let Some(sample) = shared.upgrade().and_then(|shared| shared.current.get()) else {
                return;
            };
            // Failures are logged by invoke
            let _ = dispatch::invoke(&callback, &event, index, &sample);
        }));
    }

    fn ensure_running(&self) {
        if self.shared.state.get() == LoopState::Running {
            return;
        }

        self.shared.state.set(LoopState::Running);
        self.shared.resample();
        Shared::schedule_tick(&self.shared);
        debug!(
            "Frame loop started on {}",
            self.shared.sampler.clock().name()
        );
    }
}

impl Shared {
    fn resample(&self) -> Sample {
        let previous = self.current.get();
        let next = self.sampler.sample(previous.as_ref());
        self.current.set(Some(next));
        next
    }

    fn schedule_tick(shared: &Rc<Shared>) {
        let weak: Weak<Shared> = Rc::downgrade(shared);
        shared.scheduler.request_frame(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                Shared::tick(&shared);
            } else {
                debug!("Frame loop dropped, not re-arming");
            }
        }));
    }

    fn tick(shared: &Rc<Shared>) {
        Shared::schedule_tick(shared);

        let sample = shared.resample();
        let entries = shared.registry.borrow().entries();
        let report = dispatch::dispatch(&sample, &entries);

        let frame = shared.frames.get() + 1;
        shared.frames.set(frame);
        trace!(
            "Frame {}: changed {:?}, {} callbacks, {} failed",
            frame,
            sample.changed_units(),
            report.invoked,
            report.failures.len()
        );
        *shared.last_report.borrow_mut() = report;
    }
}
