use std::fmt;

use crate::error::{Error, Result};

/// The fixed set of event kinds we know how to dispatch. The value
/// semantics shift per kind: a count is a signed delta, a gauge is an
/// absolute reading, a set carries the member being added, and a time is
/// a duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Count,
    Gauge,
    Set,
    Time,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Count,
        EventType::Gauge,
        EventType::Set,
        EventType::Time,
    ];

    /// Parse the wire name of an event type. Anything outside the fixed
    /// enum returns `None`; callers attach the event context when they
    /// build the error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "count" => Some(EventType::Count),
            "gauge" => Some(EventType::Gauge),
            "set" => Some(EventType::Set),
            "time" => Some(EventType::Time),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Count => "count",
            EventType::Gauge => "gauge",
            EventType::Set => "set",
            EventType::Time => "time",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, typed, valued occurrence. Events are plain values;
/// they carry no identity beyond their fields and nothing here persists
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    ty: EventType,
    value: i64,
}

impl Event {
    /// Build an event, rejecting empty names. Names are dot-delimited
    /// hierarchical paths like `processes.logger.build.invoked`.
    pub fn new(name: impl Into<String>, ty: EventType, value: i64) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyEventName);
        }
        Ok(Self { name, ty, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> EventType {
        self.ty
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}
