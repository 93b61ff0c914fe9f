//! Raw scheduling events as fetched from the event source.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What an event means for availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A window during which booking is allowed.
    Opening,
    /// A window already booked, blocking availability.
    Appointment,
}

/// A raw scheduling event.
///
/// Instants are naive: the whole system works in one local reference frame
/// and never converts timezones. `weekly_recurring` may be absent on fetched
/// records, meaning a one-off event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    #[serde(default)]
    pub weekly_recurring: bool,
}

impl Event {
    /// A one-off event.
    pub fn once(kind: EventKind, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind,
            starts_at,
            ends_at,
            weekly_recurring: false,
        }
    }

    /// An event repeating every 7 days from its original start.
    pub fn weekly(kind: EventKind, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Self {
        Self {
            kind,
            starts_at,
            ends_at,
            weekly_recurring: true,
        }
    }
}
