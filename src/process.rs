//! Process spans: a named unit of work bracketed by start/end calls,
//! emitting a standard event sequence around a registry timer. This is
//! the composition layer over [`Emitter`] and [`TimerRegistry`]; it adds
//! no state of its own.
//!
//! [`TimerRegistry`]: crate::timers::TimerRegistry

use crate::{emitter::Emitter, error::Result, event::EventType};

/// Event group used when the caller doesn't supply one.
pub const DEFAULT_GROUP: &str = "logger";

/// Status recorded by [`Emitter::process_end`].
pub const DEFAULT_STATUS: &str = "ok";

// Timer keys derive from the process name alone; the group only shows up
// in the event names. Two spans with the same name collide regardless of
// group — a deliberate asymmetry kept from the original behavior.
const PROCESS_TIMER_PREFIX: &str = "logger_process_timer_";

fn process_timer_key(name: &str) -> String {
    format!("{PROCESS_TIMER_PREFIX}{name}")
}

impl Emitter {
    /// [`Emitter::process_start_with`] under the default group.
    pub fn process_start(&self, name: &str) -> Result<()> {
        self.process_start_with(name, DEFAULT_GROUP)
    }

    /// Open a span for `name`: emit `processes.{group}.{name}.invoked`
    /// and start its timer. A span already running under the same name
    /// is discarded first, in-flight elapsed time included — starting is
    /// always a clean slate.
    pub fn process_start_with(&self, name: &str, group: &str) -> Result<()> {
        let key = process_timer_key(name);
        self.timers().destroy(&key);
        self.emit(
            &format!("processes.{group}.{name}.invoked"),
            EventType::Count,
            1,
        )?;
        self.timers().start(&key);
        Ok(())
    }

    /// [`Emitter::process_end_with`] under the default group and status.
    pub fn process_end(&self, name: &str) -> Result<()> {
        self.process_end_with(name, DEFAULT_GROUP, DEFAULT_STATUS)
    }

    /// Close the span: stop the timer, then emit
    /// `processes.{group}.{name}.time_to_complete` (time, elapsed ms),
    /// `.completed` (count), and `.statuses.{status}` (count), and
    /// destroy the timer.
    ///
    /// Without a matching [`Emitter::process_start`] this fails with
    /// [`Error::TimerNotFound`] and emits nothing — we don't fabricate a
    /// duration for a span that never opened.
    ///
    /// `status` lands verbatim in the event name. Callers own sanitizing
    /// statuses that may contain dots if the downstream sink treats dots
    /// as path separators.
    ///
    /// [`Error::TimerNotFound`]: crate::error::Error::TimerNotFound
    pub fn process_end_with(&self, name: &str, group: &str, status: &str) -> Result<()> {
        let key = process_timer_key(name);
        let elapsed = self.timers().stop(&key)?;
        self.emit(
            &format!("processes.{group}.{name}.time_to_complete"),
            EventType::Time,
            elapsed as i64,
        )?;
        self.emit(
            &format!("processes.{group}.{name}.completed"),
            EventType::Count,
            1,
        )?;
        self.emit(
            &format!("processes.{group}.{name}.statuses.{status}"),
            EventType::Count,
            1,
        )?;
        self.timers().destroy(&key);
        Ok(())
    }
}
