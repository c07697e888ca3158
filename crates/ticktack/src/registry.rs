use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use ticktack_core::{Sample, UnitState};

/// User callback: receives the full sample and the state of the unit it was
/// registered for (`None` for `tick` and names that are not units)
pub type Callback = dyn FnMut(&Sample, Option<&UnitState>);

pub(crate) type SharedCallback = Rc<RefCell<Callback>>;

/// Callbacks of one event name, snapshotted for a frame
pub(crate) struct Entry {
    pub event: String,
    pub callbacks: Vec<SharedCallback>,
}

/// Event name → callbacks, remembering first-registration order
#[derive(Default)]
pub(crate) struct Registry {
    order: Vec<String>,
    callbacks: HashMap<String, Vec<SharedCallback>>,
}

impl Registry {
    /// Append `callback` under `event`
    ///
    /// Returns the callback's index within the event and whether the event
    /// name was seen for the first time.
    pub fn register(&mut self, event: &str, callback: SharedCallback) -> (usize, bool) {
        let is_new = !self.callbacks.contains_key(event);
        if is_new {
            self.order.push(event.to_string());
        }

        let list = self.callbacks.entry(event.to_string()).or_default();
        list.push(callback);
        (list.len() - 1, is_new)
    }

    /// Event names in first-registration order
    pub fn events(&self) -> &[String] {
        &self.order
    }

    pub fn callback_count(&self, event: &str) -> usize {
        self.callbacks.get(event).map_or(0, Vec::len)
    }

    /// Snapshot of every event and its callbacks, in dispatch order
    pub fn entries(&self) -> Vec<Entry> {
        self.order
            .iter()
            .map(|event| Entry {
                event: event.clone(),
                callbacks: self.callbacks.get(event).cloned().unwrap_or_default(),
            })
            .collect()
    }
}
