use std::time::Instant;

use dashmap::DashMap;

use crate::error::{Error, Result};

/// A single named stopwatch. Anchored to [`Instant`] so wall-clock skew
/// after process start can't produce negative or jumping elapsed values.
#[derive(Debug, Clone, Copy)]
struct Timer {
    started: Instant,
    stopped: Option<Instant>,
}

impl Timer {
    fn elapsed_ms(&self) -> u64 {
        let end = self.stopped.unwrap_or_else(Instant::now);
        end.duration_since(self.started).as_millis() as u64
    }
}

/// Process-wide storage for named timers. Timers are in-memory only and
/// nothing survives a restart.
///
/// A name maps to at most one live timer: `start` replaces any existing
/// entry rather than erroring, so stale entries from an abandoned span
/// can't accumulate. `stop` and `read` against a missing timer surface
/// [`Error::TimerNotFound`] — we never report a zero or fabricated
/// elapsed time for a timer that was never started.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: DashMap<String, Timer>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self {
            timers: DashMap::new(),
        }
    }

    /// Start (or restart) the named timer. An existing timer under the
    /// same name is discarded first, in-flight elapsed time included.
    pub fn start(&self, name: &str) {
        self.timers.insert(
            name.to_owned(),
            Timer {
                started: Instant::now(),
                stopped: None,
            },
        );
    }

    /// Record the stop timestamp and return the elapsed milliseconds.
    /// The timer stays readable until destroyed, and reads after a stop
    /// keep reporting the frozen value.
    pub fn stop(&self, name: &str) -> Result<u64> {
        let mut timer = self.timers.get_mut(name).ok_or_else(|| Error::TimerNotFound {
            name: name.to_owned(),
        })?;
        timer.stopped = Some(Instant::now());
        Ok(timer.elapsed_ms())
    }

    /// Elapsed milliseconds, truncated to an integer. A running timer
    /// reports elapsed-so-far; a stopped one reports stop − start.
    pub fn read(&self, name: &str) -> Result<u64> {
        self.timers
            .get(name)
            .map(|timer| timer.elapsed_ms())
            .ok_or_else(|| Error::TimerNotFound {
                name: name.to_owned(),
            })
    }

    /// Remove the entry. Destroying a timer that doesn't exist is a
    /// silent no-op so cleanup paths can run unconditionally.
    pub fn destroy(&self, name: &str) {
        self.timers.remove(name);
    }
}
