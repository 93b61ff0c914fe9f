//! # slot-engine
//!
//! Deterministic 30-minute booking-slot availability.
//!
//! Given a start date and a window of N calendar days, the engine expands
//! "opening" and "appointment" events (one-off or weekly-recurring) into
//! concrete 30-minute slot instants, subtracts booked slots from open ones,
//! and buckets what survives by calendar day. Every day in the window gets a
//! bucket, empty days included.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{compute_availability, Event, EventKind};
//!
//! // A weekly opening from the past, and one booked appointment inside it.
//! let events = vec![
//!     Event::weekly(
//!         EventKind::Opening,
//!         "2014-08-04T09:30:00".parse().unwrap(),
//!         "2014-08-04T12:30:00".parse().unwrap(),
//!     ),
//!     Event::once(
//!         EventKind::Appointment,
//!         "2014-08-11T10:30:00".parse().unwrap(),
//!         "2014-08-11T11:30:00".parse().unwrap(),
//!     ),
//! ];
//!
//! let start = NaiveDate::from_ymd_opt(2014, 8, 10).unwrap();
//! let days = compute_availability(&events, start, 7);
//! assert_eq!(days[1].slots, ["9:30", "10:00", "11:30", "12:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`expander`] — recurrence expansion and window clipping
//! - [`slots`] — the 30-minute slot grid and `H:MM` formatting
//! - [`availability`] — per-day assembly and the query entry points
//! - [`source`] — the async event-retrieval boundary
//! - [`event`] — raw event records
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod event;
pub mod expander;
pub mod slots;
pub mod source;

pub use availability::{
    compute_availability, get_availabilities, get_availabilities_for_days, AvailabilityDay,
    DEFAULT_WINDOW_DAYS,
};
pub use error::SlotError;
pub use event::{Event, EventKind};
pub use expander::expand_events;
pub use source::{EventSource, InMemoryEventSource};
