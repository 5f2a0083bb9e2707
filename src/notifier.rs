//! Lifecycle notification fan-out.
//!
//! Observers subscribe for `start`/`drag`/`end` and are called
//! synchronously, in subscription order, with no payload beyond the phase.
//! Emission walks a snapshot of the observer list, so an observer may
//! subscribe, unsubscribe, or call back into the controller mid-emit
//! without invalidating the iteration.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A drag lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    /// A session opened on pointer-down.
    Start,
    /// The element was moved during a session.
    Drag,
    /// The session closed on pointer-up.
    End,
}

/// Handle for removing a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(DragPhase)>;

/// Observer list the controller owns and delegates to.
#[derive(Default)]
pub struct DragNotifier {
    next_id: u64,
    observers: Vec<(ObserverId, Observer)>,
}

impl DragNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; returns its removal handle.
    pub fn subscribe(&mut self, observer: impl Fn(DragPhase) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Rc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id was never registered
    /// or was already removed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Snapshot of the current observers, in subscription order.
    ///
    /// Cheap (`Rc` clones). The caller invokes the snapshot with no
    /// borrow of the controller held, which is what makes re-entrant
    /// calls from observers safe.
    pub fn snapshot(&self) -> Vec<Observer> {
        self.observers.iter().map(|(_, obs)| obs.clone()).collect()
    }
}

impl std::fmt::Debug for DragNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}
