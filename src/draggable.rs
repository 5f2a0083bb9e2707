//! The drag interaction controller.
//!
//! `Draggable` is a cheap cloneable handle over shared single-threaded
//! state. Configuration methods mutate that state and return a handle, so
//! the usual setup chains:
//!
//! ```ignore
//! let drag = draggable::draggable(el)
//!     .add_source(Box::new(mouse))
//!     .add_source(Box::new(touch))
//!     .set_containment(Some(canvas))
//!     .build();
//! ```
//!
//! Pointer samples are fed in by the host through the `handle_pointer_*`
//! methods in `crate::input`; observers registered with [`subscribe`]
//! hear `start`/`drag`/`end`.
//!
//! [`subscribe`]: Draggable::subscribe

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DraggableConfig;
use crate::element::ElementHandle;
use crate::input::DragState;
use crate::notifier::{DragNotifier, DragPhase, ObserverId};
use crate::source::PointerSource;

pub(crate) struct DraggableInner {
    pub(crate) el: ElementHandle,
    pub(crate) config: DraggableConfig,
    pub(crate) state: DragState,
    pub(crate) notifier: DragNotifier,
    pub(crate) sources: Vec<Box<dyn PointerSource>>,
    pub(crate) bound: bool,
}

/// Drag interaction controller for a single element.
#[derive(Clone)]
pub struct Draggable {
    pub(crate) inner: Rc<RefCell<DraggableInner>>,
}

impl Draggable {
    /// Create an unbound controller for the given element.
    pub fn new(el: ElementHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DraggableInner {
                el,
                config: DraggableConfig::default(),
                state: DragState::default(),
                notifier: DragNotifier::new(),
                sources: Vec::new(),
                bound: false,
            })),
        }
    }

    // ------------------------------------------------------------------
    // Configuration API (chainable, unconditional mutations)
    // ------------------------------------------------------------------

    /// Register a pointer input source to bind at [`build`](Self::build)
    /// time.
    pub fn add_source(&self, source: Box<dyn PointerSource>) -> Self {
        self.inner.borrow_mut().sources.push(source);
        self.clone()
    }

    /// Disable x-axis movement. There is no inverse; re-enabling means
    /// constructing a new controller.
    pub fn disable_x_axis(&self) -> Self {
        self.inner.borrow_mut().config.x_axis = false;
        self.clone()
    }

    /// Disable y-axis movement. Same asymmetry as
    /// [`disable_x_axis`](Self::disable_x_axis).
    pub fn disable_y_axis(&self) -> Self {
        self.inner.borrow_mut().config.y_axis = false;
        self.clone()
    }

    /// Set (or with `None`, clear) the containment element.
    pub fn set_containment(&self, el: Option<ElementHandle>) -> Self {
        self.inner.borrow_mut().config.containment = el;
        self.clone()
    }

    /// Set the handle element used for future bind operations. Has no
    /// effect on already-bound sources.
    pub fn set_handle(&self, el: ElementHandle) -> Self {
        self.inner.borrow_mut().config.handle = Some(el);
        self.clone()
    }

    /// Reposition the element immediately, bypassing drag state.
    ///
    /// Works in any state, emits no lifecycle notification, and is safe
    /// to call from inside a `drag` observer (last write wins).
    pub fn move_to(&self, x: f32, y: f32) -> Self {
        let el = self.inner.borrow().el.clone();
        el.translate(x, y);
        self.clone()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Bind all registered sources to the handle element (the configured
    /// handle, or the dragged element itself). Required before any drag
    /// can start; idempotent.
    pub fn build(&self) -> Self {
        let mut inner = self.inner.borrow_mut();
        if !inner.bound {
            let target = inner.config.handle.clone().unwrap_or_else(|| inner.el.clone());
            for source in &mut inner.sources {
                source.bind(&target);
            }
            inner.bound = true;
            tracing::debug!(sources = inner.sources.len(), "draggable bound");
        }
        drop(inner);
        self.clone()
    }

    /// Unbind all sources and cancel any open session. Idempotent; the
    /// controller accepts no drags until [`build`](Self::build) is called
    /// again.
    pub fn destroy(&self) -> Self {
        let mut inner = self.inner.borrow_mut();
        if inner.bound {
            for source in &mut inner.sources {
                source.unbind();
            }
            inner.bound = false;
            tracing::debug!("draggable unbound");
        }
        if inner.state.is_dragging() {
            // Teardown is the one non-pointer way a session ends; no
            // `end` notification for it.
            inner.state.reset();
            inner.el.set_dragging(false);
        }
        drop(inner);
        self.clone()
    }

    /// Register a lifecycle observer; returns its removal handle.
    pub fn subscribe(&self, observer: impl Fn(DragPhase) + 'static) -> ObserverId {
        self.inner.borrow_mut().notifier.subscribe(observer)
    }

    /// Remove a lifecycle observer.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.inner.borrow_mut().notifier.unsubscribe(id)
    }

    /// Whether a drag session is currently open.
    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().state.is_dragging()
    }

    /// Deliver a phase to a snapshot of the observers, with no internal
    /// borrow held so observers can call back into the controller.
    pub(crate) fn emit(&self, phase: DragPhase) {
        let observers = self.inner.borrow().notifier.snapshot();
        for observer in observers {
            observer(phase);
        }
    }
}

/// Construction entry point: a controller for `el`.
pub fn draggable(el: ElementHandle) -> Draggable {
    Draggable::new(el)
}
