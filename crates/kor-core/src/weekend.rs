//! Weekend overlap detection for a stay.

use chrono::Datelike;

use crate::datetime::{Instant, is_weekend_day};

/// Five weekdays in a row is the longest run without a weekend day, so any
/// span covering six or more calendar days must touch one.
const MAX_WEEKDAY_RUN: i64 = 5;

/// Returns `true` if any calendar day from `start`'s date through `end`'s
/// date (inclusive) is a Saturday or Sunday.
///
/// Days are local wall-clock dates, so a stay from Friday 23:00 to Saturday
/// 01:00 overlaps the weekend. An empty or reversed range never does.
pub fn overlaps_weekend(start: Instant, end: Instant) -> bool {
    if start >= end {
        return false;
    }

    let first = start.date();
    let last = end.date();
    if last.signed_duration_since(first).num_days() >= MAX_WEEKDAY_RUN {
        return true;
    }

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .any(|day| is_weekend_day(day.weekday()))
}
