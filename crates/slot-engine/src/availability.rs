//! Per-day availability assembly and the query entry points.
//!
//! This is where the two expanded slot sets meet: opening slots minus
//! appointment slots, bucketed by calendar day relative to the window start.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, EventKind};
use crate::expander::expand_events;
use crate::slots::{format_slot_time, SlotSet};
use crate::source::EventSource;

/// Window length used when the caller does not specify one.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// One calendar day of bookable slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    /// The calendar date this bucket covers.
    pub date: NaiveDate,
    /// Slot start times as `H:MM`, ascending by time-of-day.
    pub slots: Vec<String>,
}

/// Fetch events and compute availability for the default 7-day window.
pub async fn get_availabilities(
    source: &dyn EventSource,
    start_date: NaiveDate,
) -> Result<Vec<AvailabilityDay>> {
    get_availabilities_for_days(source, start_date, DEFAULT_WINDOW_DAYS).await
}

/// Fetch events and compute availability for
/// `[start_date, start_date + number_of_days)`.
///
/// Awaits exactly one collaborator call; a fetch failure aborts the whole
/// query. The rest of the pipeline is pure and synchronous.
pub async fn get_availabilities_for_days(
    source: &dyn EventSource,
    start_date: NaiveDate,
    number_of_days: i64,
) -> Result<Vec<AvailabilityDay>> {
    let window_start = start_date.and_time(NaiveTime::MIN);
    let events = source.fetch_events(window_start).await?;
    Ok(compute_availability(&events, start_date, number_of_days))
}

/// Compute availability from already-fetched events.
///
/// Openings and appointments are expanded separately into slot sets; a slot
/// is available when it is an opening instant with no appointment on the
/// same instant. `number_of_days <= 0` yields an empty result, not an error.
pub fn compute_availability(
    events: &[Event],
    start_date: NaiveDate,
    number_of_days: i64,
) -> Vec<AvailabilityDay> {
    if number_of_days <= 0 {
        return Vec::new();
    }

    let window_start = start_date.and_time(NaiveTime::MIN);
    let window_end = window_start + Duration::days(number_of_days);

    let openings = expand_events(
        events.iter().filter(|e| e.kind == EventKind::Opening),
        window_start,
        window_end,
    );
    let appointments = expand_events(
        events.iter().filter(|e| e.kind == EventKind::Appointment),
        window_start,
        window_end,
    );

    assemble(&openings, &appointments, start_date, number_of_days)
}

/// Bucket opening slots by day, dropping any instant an appointment covers.
///
/// Every day in the window gets a bucket, present even when no event touches
/// it. Slot sets iterate chronologically, so each bucket fills in ascending
/// time order.
pub fn assemble(
    openings: &SlotSet,
    appointments: &SlotSet,
    start_date: NaiveDate,
    number_of_days: i64,
) -> Vec<AvailabilityDay> {
    let mut days: Vec<AvailabilityDay> = (0..number_of_days.max(0))
        .map(|offset| AvailabilityDay {
            date: start_date + Duration::days(offset),
            slots: Vec::new(),
        })
        .collect();

    for slot in openings {
        if appointments.contains(slot) {
            continue;
        }
        let offset = (slot.date() - start_date).num_days();
        // Clipping already bounds slots to the window; anything else is ignored.
        if (0..number_of_days).contains(&offset) {
            days[offset as usize].slots.push(format_slot_time(slot.time()));
        }
    }

    days
}
