use std::sync::{
    atomic::{AtomicBool, Ordering},
    LazyLock,
};

use crate::{
    error::{Error, Result},
    event::{Event, EventType},
    registry::{Listener, ListenerRegistry},
    timers::TimerRegistry,
};

/// Process-wide default emitter, for hosts that don't need multiple
/// instances. Everything also works on a locally-owned [`Emitter`],
/// which is what the tests use.
pub static DEFAULT_EMITTER: LazyLock<Emitter> = LazyLock::new(Emitter::new);

/// Validates events and fans them out to every registered listener.
///
/// The emitter owns all the shared state in one place — the listener
/// registry, the timer registry, and the debug flag — instead of
/// scattering it across process-wide globals. Dispatch is synchronous:
/// `emit` returns once every listener has been attempted, and a hanging
/// listener stalls the emitting call site. Callers that need isolation
/// from that have to impose their own timeout around the listener.
pub struct Emitter {
    listeners: ListenerRegistry,
    timers: TimerRegistry,
    debug: AtomicBool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            listeners: ListenerRegistry::new(),
            timers: TimerRegistry::new(),
            debug: AtomicBool::new(false),
        }
    }

    /// Register a listener to be invoked on every subsequent emit.
    pub fn register<L: Listener>(&self, listener: L) {
        self.listeners.register(listener);
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    /// Mirror the host's stored debug flag into the emitter. When set,
    /// every emitted event also lands in the diagnostic log at debug
    /// level. Purely observational; dispatch is identical either way.
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Emit a typed event to every registered listener.
    ///
    /// Success means every listener was invoked or failed independently;
    /// listener errors are logged and never surface here. The only error
    /// out of the typed path is an empty event name.
    pub fn emit(&self, name: &str, ty: EventType, value: i64) -> Result<()> {
        let event = Event::new(name, ty, value)?;
        self.dispatch(&event);
        Ok(())
    }

    /// Untyped entry point for callers holding wire strings, e.g. hosts
    /// driving instrumentation from configuration. Validates the type
    /// against the fixed enum and the value for integer-ness before any
    /// listener runs, so malformed input never causes a partial
    /// dispatch.
    pub fn emit_raw(&self, name: &str, ty: &str, value: f64) -> Result<()> {
        let ty = EventType::from_name(ty).ok_or_else(|| Error::InvalidEventType {
            event: name.to_owned(),
            found: ty.to_owned(),
        })?;
        // f64 holds integral values well outside i64, so the range check
        // is load-bearing, not paranoia.
        if !value.is_finite()
            || value.fract() != 0.0
            || value < i64::MIN as f64
            || value > i64::MAX as f64
        {
            return Err(Error::InvalidEventValue {
                event: name.to_owned(),
                value,
            });
        }
        self.emit(name, ty, value as i64)
    }

    /// Count the event once. The overwhelmingly common case.
    pub fn count(&self, name: &str) -> Result<()> {
        self.count_by(name, 1)
    }

    pub fn count_by(&self, name: &str, delta: i64) -> Result<()> {
        self.emit(name, EventType::Count, delta)
    }

    pub fn gauge(&self, name: &str, reading: i64) -> Result<()> {
        self.emit(name, EventType::Gauge, reading)
    }

    pub fn set(&self, name: &str, member: i64) -> Result<()> {
        self.emit(name, EventType::Set, member)
    }

    pub fn time(&self, name: &str, millis: i64) -> Result<()> {
        self.emit(name, EventType::Time, millis)
    }

    fn dispatch(&self, event: &Event) {
        if self.debug_enabled() {
            tracing::debug!(message = "emit", name = event.name(), ty = %event.ty(), value = event.value());
        }
        // NOTE(rossdylan): Snapshot under the read lock, invoke outside
        // it. Listeners registered mid-dispatch see the next event, not
        // this one.
        let listeners = self.listeners.snapshot();
        for listener in listeners.iter() {
            if let Err(e) = listener.observe(event) {
                tracing::warn!(message = "listener failed", name = event.name(), error = %e);
            }
        }
    }
}
