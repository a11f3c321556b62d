//! Canonical local date-time text (`DD.MM.YY HH:MM`).
//!
//! All times are local wall-clock values; no timezone is attached. Parsing
//! never fails loudly: text that does not decode to a real instant yields
//! `None` and the caller decides how to report it.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use regex::Regex;

/// A resolved point in local wall-clock time, at second precision.
pub type Instant = NaiveDateTime;

/// `DD.MM.YY(YY) HH:MM(:SS)` with `.` or `/` separators and loose spacing
/// around the date separators.
static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(\d{1,2})\s*[./]\s*(\d{1,2})\s*[./]\s*(\d{4}|\d{2})",
        r"\s+(\d{1,2}):(\d{1,2})(?::(\d{1,2}))?$",
    ))
    .unwrap()
});

/// Year-first formats accepted when the canonical pattern does not match.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const CANONICAL_FORMAT: &str = "%d.%m.%y %H:%M";

const DAY_NAMES: [&str; 7] = [
    "Pondělí", "Úterý", "Středa", "Čtvrtek", "Pátek", "Sobota", "Neděle",
];

/// Parses a date-time in the canonical format, falling back to unambiguous
/// ISO-style text.
///
/// Two-digit years are read as `2000 + YY`; missing seconds default to zero.
/// Impossible calendar dates such as `31.02.24` are rejected.
pub fn parse(text: &str) -> Option<Instant> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_canonical(trimmed).or_else(|| parse_fallback(trimmed))
}

/// Formats an instant as `DD.MM.YY HH:MM`. Seconds are dropped.
pub fn format(instant: Instant) -> String {
    instant.format(CANONICAL_FORMAT).to_string()
}

/// Czech name of the instant's weekday.
pub fn day_name(instant: Instant) -> &'static str {
    DAY_NAMES[instant.weekday().num_days_from_monday() as usize]
}

/// Returns `true` for Saturday and Sunday.
pub const fn is_weekend_day(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

fn parse_canonical(text: &str) -> Option<Instant> {
    let caps = CANONICAL_RE.captures(text)?;
    let field = |idx: usize| -> Option<u32> {
        caps.get(idx).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let day = field(1)?;
    let month = field(2)?;
    let mut year = i32::try_from(field(3)?).ok()?;
    let hour = field(4)?;
    let minute = field(5)?;
    let second = field(6)?;

    if year < 100 {
        year += 2000;
    }

    if !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return None;
    }

    // from_ymd_opt refuses dates the month cannot hold, so no day overflow
    // ever rolls into the following month.
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

fn parse_fallback(text: &str) -> Option<Instant> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return truncate_subsec(dt.with_timezone(&Local).naive_local());
    }

    for fmt in FALLBACK_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return truncate_subsec(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn truncate_subsec(instant: Instant) -> Option<Instant> {
    instant.with_nanosecond(0)
}
