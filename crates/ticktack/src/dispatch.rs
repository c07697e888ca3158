//! Per-frame callback dispatch
//!
//! Each callback runs inside `catch_unwind`: a panicking callback is logged
//! and reported, and dispatch moves on to the next one.

use log::warn;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use ticktack_core::{Sample, TICK, UnitState};
use ticktack_ports::{DispatchError, DispatchResult};

use crate::registry::{Entry, SharedCallback};

/// Outcome of dispatching one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    /// Callbacks invoked, including those that failed
    pub invoked: usize,
    /// Failures, in dispatch order
    pub failures: Vec<DispatchError>,
}

impl DispatchReport {
    fn record(&mut self, result: DispatchResult<()>) {
        self.invoked += 1;
        if let Err(err) = result {
            self.failures.push(err);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Returns true if callbacks under `event` run for this sample
pub(crate) fn should_fire(event: &str, sample: &Sample) -> bool {
    event == TICK || sample.get(event).is_some_and(UnitState::changed)
}

/// Run every callback whose event fires for `sample`, in entry order
pub(crate) fn dispatch(sample: &Sample, entries: &[Entry]) -> DispatchReport {
    let mut report = DispatchReport::default();

    for entry in entries.iter().filter(|e| should_fire(&e.event, sample)) {
        for (index, callback) in entry.callbacks.iter().enumerate() {
            report.record(invoke(callback, &entry.event, index, sample));
        }
    }

    report
}

/// Run a single callback with the state of its event's unit
pub(crate) fn invoke(
    callback: &SharedCallback,
    event: &str,
    index: usize,
    sample: &Sample,
) -> DispatchResult<()> {
    let Ok(mut callback) = callback.try_borrow_mut() else {
        let err = DispatchError::CallbackBusy {
            event: event.to_string(),
            index,
        };
        warn!("{}", err);
        return Err(err);
    };

    let state = sample.get(event);
    panic::catch_unwind(AssertUnwindSafe(|| (&mut *callback)(sample, state))).map_err(|payload| {
        let err = DispatchError::CallbackPanicked {
            event: event.to_string(),
            index,
            message: panic_message(payload.as_ref()),
        };
        warn!("{}", err);
        err
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use chrono::{FixedOffset, TimeZone};
    use std::cell::RefCell;
    use std::rc::Rc;
    use ticktack_core::decompose;

    fn pair() -> (Sample, Sample) {
        let utc = FixedOffset::east_opt(0).unwrap();
        let prior = decompose(utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 59).unwrap(), None);
        let next = decompose(utc.with_ymd_and_hms(2024, 3, 3, 12, 1, 0).unwrap(), Some(&prior));
        (prior, next)
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, label: &str) -> SharedCallback {
        let log = log.clone();
        let label = label.to_string();
        Rc::new(RefCell::new(move |_: &Sample, _: Option<&UnitState>| {
            log.borrow_mut().push(label.clone());
        }))
    }

    #[test]
    fn test_should_fire() {
        let (prior, next) = pair();

        assert!(should_fire("tick", &prior));
        assert!(!should_fire("second", &prior));
        assert!(should_fire("second", &next));
        assert!(should_fire("minute", &next));
        assert!(!should_fire("hour", &next));
        assert!(!should_fire("fortnight", &next));
    }

    #[test]
    fn test_dispatch_order() {
        let (_, next) = pair();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut registry = Registry::default();
        registry.register("hour", recorder(&log, "hour-a"));
        registry.register("second", recorder(&log, "second-a"));
        registry.register("tick", recorder(&log, "tick-a"));
        registry.register("minute", recorder(&log, "minute-a"));
        registry.register("second", recorder(&log, "second-b"));

        let report = dispatch(&next, &registry.entries());

        assert_eq!(
            *log.borrow(),
            vec!["second-a", "second-b", "tick-a", "minute-a"]
        );
        assert_eq!(report.invoked, 4);
        assert!(report.is_clean());
    }

    #[test]
    fn test_callback_receives_unit_state() {
        let (_, next) = pair();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut registry = Registry::default();
        let sink = seen.clone();
        registry.register(
            "minute",
            Rc::new(RefCell::new(move |sample: &Sample, state: Option<&UnitState>| {
                sink.borrow_mut().push((sample.hour.value, state.copied()));
            })),
        );
        let sink = seen.clone();
        registry.register(
            "tick",
            Rc::new(RefCell::new(move |sample: &Sample, state: Option<&UnitState>| {
                sink.borrow_mut().push((sample.hour.value, state.copied()));
            })),
        );

        dispatch(&next, &registry.entries());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (12, Some(next.minute)));
        assert_eq!(seen[1], (12, None));
    }

    #[test]
    fn test_panicking_callback_is_isolated() {
        let (_, next) = pair();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut registry = Registry::default();
        registry.register(
            "second",
            Rc::new(RefCell::new(|_: &Sample, _: Option<&UnitState>| {
                panic!("boom");
            })),
        );
        registry.register("second", recorder(&log, "after"));

        let report = dispatch(&next, &registry.entries());

        assert_eq!(*log.borrow(), vec!["after"]);
        assert_eq!(report.invoked, 2);
        assert_eq!(
            report.failures,
            vec![DispatchError::CallbackPanicked {
                event: "second".to_string(),
                index: 0,
                message: "boom".to_string(),
            }]
        );
    }

    #[test]
    fn test_busy_callback_is_skipped() {
        let (_, next) = pair();
        let log = Rc::new(RefCell::new(Vec::new()));
        let callback = recorder(&log, "busy");

        let _guard = callback.borrow_mut();
        let result = invoke(&callback, "tick", 3, &next);

        assert_eq!(
            result,
            Err(DispatchError::CallbackBusy {
                event: "tick".to_string(),
                index: 3,
            })
        );
    }

    #[test]
    fn test_panic_message_formats() {
        let owned = panic::catch_unwind::<_, ()>(|| panic!("{} failed", "frame")).unwrap_err();
        assert_eq!(panic_message(owned.as_ref()), "frame failed");

        let opaque = panic::catch_unwind::<_, ()>(|| panic::panic_any(7_u8)).unwrap_err();
        assert_eq!(panic_message(opaque.as_ref()), "non-string panic payload");
    }
}
