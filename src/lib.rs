//! Named, typed metric events with listener fan-out, plus stopwatch-style
//! process spans built on the same primitive.
//!
//! ```
//! use events64::{Emitter, Event, EventType};
//!
//! let emitter = Emitter::new();
//! emitter.register(|event: &Event| -> Result<(), events64::BoxError> {
//!     println!("{} {} {}", event.name(), event.ty(), event.value());
//!     Ok(())
//! });
//!
//! emitter.count("requests.http")?;
//! emitter.process_start("rebuild")?;
//! // ... the actual work ...
//! emitter.process_end("rebuild")?;
//! # Ok::<(), events64::Error>(())
//! ```
//!
//! The emitter validates before it dispatches, so a bad type or value
//! never reaches a listener, and one broken listener never starves the
//! rest. Timers live in a process-wide registry keyed by name; spans
//! compose the two into the usual invoked / time_to_complete / completed
//! / statuses event sequence.

pub(crate) mod emitter;
pub(crate) mod error;
pub(crate) mod event;
pub(crate) mod process;
pub(crate) mod registry;
pub(crate) mod timers;

pub use emitter::{Emitter, DEFAULT_EMITTER};
pub use error::{Error, Result};
pub use event::{Event, EventType};
pub use process::{DEFAULT_GROUP, DEFAULT_STATUS};
pub use registry::{BoxError, Listener, ListenerRegistry};
pub use timers::TimerRegistry;
