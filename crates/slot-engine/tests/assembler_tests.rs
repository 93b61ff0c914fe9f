//! Tests for per-day bucketing of expanded slot sets.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::availability::assemble;
use slot_engine::slots::{format_slot_time, SlotSet};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn dt(s: &str) -> NaiveDateTime {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn slot_set(instants: &[&str]) -> SlotSet {
    instants.iter().map(|s| dt(s)).collect()
}

// ── Bucket pre-seeding ──────────────────────────────────────────────────────

#[test]
fn every_day_gets_a_bucket_even_with_no_slots() {
    let days = assemble(&SlotSet::new(), &SlotSet::new(), date("2014-08-10"), 5);

    assert_eq!(days.len(), 5);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day.date, date("2014-08-10") + chrono::Duration::days(i as i64));
        assert!(day.slots.is_empty());
    }
}

#[test]
fn non_positive_day_count_yields_no_buckets() {
    let openings = slot_set(&["2014-08-10T09:00:00"]);

    assert!(assemble(&openings, &SlotSet::new(), date("2014-08-10"), 0).is_empty());
    assert!(assemble(&openings, &SlotSet::new(), date("2014-08-10"), -1).is_empty());
}

// ── Set difference ──────────────────────────────────────────────────────────

#[test]
fn appointment_instant_blocks_exactly_that_slot() {
    let openings = slot_set(&[
        "2014-08-10T09:00:00",
        "2014-08-10T09:30:00",
        "2014-08-10T10:00:00",
    ]);
    let appointments = slot_set(&["2014-08-10T09:30:00"]);

    let days = assemble(&openings, &appointments, date("2014-08-10"), 1);

    assert_eq!(days[0].slots, ["9:00", "10:00"]);
}

#[test]
fn appointment_on_a_different_instant_blocks_nothing() {
    let openings = slot_set(&["2014-08-10T09:00:00"]);
    // Same time-of-day, next week: a distinct instant.
    let appointments = slot_set(&["2014-08-17T09:00:00"]);

    let days = assemble(&openings, &appointments, date("2014-08-10"), 1);

    assert_eq!(days[0].slots, ["9:00"]);
}

// ── Day bucketing ───────────────────────────────────────────────────────────

#[test]
fn slots_around_midnight_land_on_their_own_days() {
    let openings = slot_set(&["2014-08-10T23:30:00", "2014-08-11T00:00:00"]);

    let days = assemble(&openings, &SlotSet::new(), date("2014-08-10"), 2);

    assert_eq!(days[0].slots, ["23:30"]);
    assert_eq!(days[1].slots, ["0:00"]);
}

#[test]
fn slots_outside_the_window_are_ignored() {
    let openings = slot_set(&[
        "2014-08-09T10:00:00",
        "2014-08-10T10:00:00",
        "2014-08-12T10:00:00",
    ]);

    let days = assemble(&openings, &SlotSet::new(), date("2014-08-10"), 2);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].slots, ["10:00"]);
    assert!(days[1].slots.is_empty());
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn buckets_are_ascending_regardless_of_insertion_order() {
    // Collected out of order, as two overlapping openings would produce.
    let openings: SlotSet = [
        "2014-08-10T14:00:00",
        "2014-08-10T09:00:00",
        "2014-08-10T11:30:00",
        "2014-08-10T09:30:00",
    ]
    .iter()
    .map(|s| dt(s))
    .collect();

    let days = assemble(&openings, &SlotSet::new(), date("2014-08-10"), 1);

    assert_eq!(days[0].slots, ["9:00", "9:30", "11:30", "14:00"]);
}

// ── Time formatting ─────────────────────────────────────────────────────────

#[test]
fn times_format_without_leading_hour_zero() {
    assert_eq!(format_slot_time(dt("2014-08-10T01:30:00").time()), "1:30");
    assert_eq!(format_slot_time(dt("2014-08-10T09:00:00").time()), "9:00");
    assert_eq!(format_slot_time(dt("2014-08-10T13:00:00").time()), "13:00");
    assert_eq!(format_slot_time(dt("2014-08-10T00:00:00").time()), "0:00");
}
