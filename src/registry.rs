use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::event::Event;

/// Boxed error type listeners hand back when they fail. The emitter
/// never inspects these beyond logging them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Implemented by anything that wants to see every emitted event.
///
/// How a listener forwards events to a backend (statsd, Graphite,
/// whatever) is entirely its own business; the contract here is only
/// that `observe` gets called once per event, in registration order.
/// Returning an error marks this listener's attempt as failed without
/// affecting the others.
pub trait Listener: Send + Sync + 'static {
    fn observe(&self, event: &Event) -> std::result::Result<(), BoxError>;
}

impl<F> Listener for F
where
    F: Fn(&Event) -> std::result::Result<(), BoxError> + Send + Sync + 'static,
{
    fn observe(&self, event: &Event) -> std::result::Result<(), BoxError> {
        self(event)
    }
}

pub(crate) type ListenerSnapshot = SmallVec<[Arc<dyn Listener>; 8]>;

/// Holds registered listeners in registration order.
///
/// The host environment used to discover these dynamically; here callers
/// register them explicitly, which also makes tests trivial. Register is
/// the heavyweight path — dispatch just clones the `Arc`s out from under
/// a read lock and runs lock-free from there.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RwLock<Vec<Arc<dyn Listener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Default::default(),
        }
    }

    /// Append a listener. Invocation order is registration order, which
    /// is deterministic within a process run.
    pub fn register<L: Listener>(&self, listener: L) {
        self.listeners.write().push(Arc::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Clone the current listener set out of the lock so dispatch never
    /// holds it while listener code runs.
    pub(crate) fn snapshot(&self) -> ListenerSnapshot {
        self.listeners.read().iter().cloned().collect()
    }
}
