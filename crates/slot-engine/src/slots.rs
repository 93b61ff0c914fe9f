//! The 30-minute slot grid.
//!
//! A slot is identified by its start instant at minute resolution. The
//! ordered set doubles as the dedup structure: inserting the same instant
//! twice is a no-op, and iteration is chronological.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Length of one bookable slot.
pub const SLOT_MINUTES: i64 = 30;

/// Slot start instants, deduplicated and chronologically ordered.
pub type SlotSet = BTreeSet<NaiveDateTime>;

/// Iterate the slot starts inside the half-open interval `[start, end)`.
///
/// Emits `start`, `start + 30min`, ... while the offset stays strictly below
/// `end - start`. The final slot may begin before `end` and extend past it:
/// a slot denotes availability starting at that instant, not containment.
/// An empty or inverted interval yields nothing.
pub fn slot_starts(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> impl Iterator<Item = NaiveDateTime> {
    let interval = (end - start).num_minutes();
    (0..interval)
        .step_by(SLOT_MINUTES as usize)
        .map(move |offset| start + Duration::minutes(offset))
}

/// Format a time-of-day as `H:MM`, with no leading zero on the hour.
pub fn format_slot_time(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}
