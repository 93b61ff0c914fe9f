//! Recurrence expansion — raw events into concrete slot instants.
//!
//! Weekly events repeat indefinitely, so expansion is bounded in two steps:
//! fast-forward the event to the first occurrence that can still touch the
//! window, then step week by week until the window is passed.

use chrono::{Duration, NaiveDateTime};

use crate::event::Event;
use crate::slots::{slot_starts, SlotSet};

/// Expand events into the slot instants they cover inside
/// `[window_start, window_end)`.
///
/// Non-recurring events are clipped to the window and discretized once.
/// Weekly-recurring events advance in 7-day steps; an occurrence that clips
/// to nothing contributes nothing. Occurrences landing on an instant already
/// in the set collapse into it, so overlapping events dedupe naturally.
pub fn expand_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> SlotSet {
    let mut slots = SlotSet::new();

    for event in events {
        if !event.weekly_recurring {
            insert_clipped(&mut slots, event.starts_at, event.ends_at, window_start, window_end);
            continue;
        }

        let mut starts_at = event.starts_at;
        let mut ends_at = event.ends_at;

        // An arbitrarily old event would otherwise walk week by week from its
        // original date; jump straight to the first occurrence whose end can
        // still reach the window.
        if ends_at < window_start {
            let weeks = (window_start - ends_at).num_weeks() + 1;
            starts_at += Duration::weeks(weeks);
            ends_at += Duration::weeks(weeks);
        }

        while starts_at < window_end {
            insert_clipped(&mut slots, starts_at, ends_at, window_start, window_end);
            starts_at += Duration::weeks(1);
            ends_at += Duration::weeks(1);
        }
    }

    slots
}

/// Clip `[starts_at, ends_at)` to the window and insert the surviving slots.
fn insert_clipped(
    slots: &mut SlotSet,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) {
    let start = starts_at.max(window_start);
    let end = ends_at.min(window_end);
    slots.extend(slot_starts(start, end));
}
