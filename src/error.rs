use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by event validation and timer lookups.
///
/// Validation errors abort an emit before any listener runs, so malformed
/// input never produces a partial dispatch. Listener failures are not part
/// of this taxonomy; the emitter logs and swallows them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The event type string was not one of count, gauge, set, or time.
    /// Always a caller bug, never coerced.
    #[error("event {event:?} has invalid type {found:?} (expected count, gauge, set, or time)")]
    InvalidEventType { event: String, found: String },

    /// The event value was not representable as an integer.
    #[error("event {event:?} has non-integer value {value}")]
    InvalidEventValue { event: String, value: f64 },

    /// Event names are dot-delimited paths and must be non-empty.
    #[error("event name must be non-empty")]
    EmptyEventName,

    /// A stop or read was issued against a timer that was never started
    /// (or was already destroyed).
    #[error("no timer named {name:?}")]
    TimerNotFound { name: String },
}
