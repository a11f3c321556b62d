//! Elapsed time between an arrival and a departure.

use crate::datetime::{self, Instant};

/// Zero-length stay, used when no meaningful duration exists.
pub const ZERO_DURATION: &str = "00:00:00";

/// Shown while editing when departure is not after arrival.
pub const DATE_ORDER_ERROR: &str = "Chyba data";

/// Shown while editing when either side does not parse.
pub const INVALID_INPUT: &str = "Neplatný vstup";

/// Outcome of checking an arrival/departure pair during interactive editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElapsedCheck {
    /// Both sides parse and departure is strictly later.
    Valid(String),
    /// Both sides parse but departure is not after arrival.
    OutOfOrder,
    /// At least one side could not be parsed.
    Unparseable,
}

impl ElapsedCheck {
    /// Text to display in the elapsed column.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Valid(text) => text,
            Self::OutOfOrder => DATE_ORDER_ERROR.to_string(),
            Self::Unparseable => INVALID_INPUT.to_string(),
        }
    }
}

/// Formats milliseconds as `HH:MM:SS`.
///
/// Sub-second remainders are floored, hours are not wrapped at 24, and
/// negative input is clamped to zero.
pub fn format_duration(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Duration between two instants, or [`ZERO_DURATION`] when not increasing.
pub fn elapsed_between(arrival: Instant, departure: Instant) -> String {
    if arrival >= departure {
        return ZERO_DURATION.to_string();
    }
    format_duration(departure.signed_duration_since(arrival).num_milliseconds())
}

/// Duration between two canonical date-time strings.
///
/// Returns [`ZERO_DURATION`] if either side fails to parse or the pair is
/// not strictly increasing.
pub fn elapsed(arrival: &str, departure: &str) -> String {
    match (datetime::parse(arrival), datetime::parse(departure)) {
        (Some(a), Some(d)) => elapsed_between(a, d),
        _ => ZERO_DURATION.to_string(),
    }
}

/// Stricter variant of [`elapsed`] that distinguishes the failure cases.
pub fn check_elapsed(arrival: &str, departure: &str) -> ElapsedCheck {
    match (datetime::parse(arrival), datetime::parse(departure)) {
        (Some(a), Some(d)) if a < d => ElapsedCheck::Valid(elapsed_between(a, d)),
        (Some(_), Some(_)) => ElapsedCheck::OutOfOrder,
        _ => ElapsedCheck::Unparseable,
    }
}

/// Whether an elapsed value is one of the interactive error markers.
pub fn is_error_marker(text: &str) -> bool {
    text == DATE_ORDER_ERROR || text == INVALID_INPUT
}
