//! Travel records and their session-only editing state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::datetime::{self, Instant};
use crate::duration;
use crate::weekend;

/// Opaque, never-reused identifier of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One stay in a country: the exported shape plus its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRecord {
    pub id: RecordId,
    /// Arrival in canonical `DD.MM.YY HH:MM` text.
    pub arrival: String,
    /// Departure in canonical text.
    pub departure: String,
    pub country: String,
    /// `HH:MM:SS`, or an error marker while being edited.
    pub elapsed: String,
}

impl TravelRecord {
    /// Creates a record with a fresh id and computed elapsed time.
    pub fn new(
        arrival: impl Into<String>,
        departure: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let arrival = arrival.into();
        let departure = departure.into();
        let elapsed = duration::elapsed(&arrival, &departure);
        Self {
            id: RecordId::new(),
            arrival,
            departure,
            country: country.into(),
            elapsed,
        }
    }

    pub fn arrival_instant(&self) -> Option<Instant> {
        datetime::parse(&self.arrival)
    }

    pub fn departure_instant(&self) -> Option<Instant> {
        datetime::parse(&self.departure)
    }

    /// Both ends, when they parse and arrival is strictly before departure.
    pub fn valid_span(&self) -> Option<(Instant, Instant)> {
        let arrival = self.arrival_instant()?;
        let departure = self.departure_instant()?;
        (arrival < departure).then_some((arrival, departure))
    }

    /// Recomputes `elapsed` with the interactive rules (error markers).
    pub(crate) fn refresh_elapsed_checked(&mut self) {
        self.elapsed = duration::check_elapsed(&self.arrival, &self.departure).into_text();
    }
}

/// A record as held in an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableRecord {
    #[serde(flatten)]
    pub record: TravelRecord,
    /// Fields are open for modification.
    pub editing: bool,
    /// Created this session and never saved. Excluded from export and sorting.
    pub is_new: bool,
    /// Committed values captured when editing began; restored on cancel.
    #[serde(skip)]
    pub(crate) snapshot: Option<TravelRecord>,
}

impl EditableRecord {
    /// Wraps a committed record.
    pub fn saved(record: TravelRecord) -> Self {
        Self {
            record,
            editing: false,
            is_new: false,
            snapshot: None,
        }
    }

    /// The blank template used by the add operations: a one-hour stay
    /// starting at `now`, open for editing.
    pub fn template(now: Instant) -> Self {
        let arrival = datetime::format(now);
        let departure = datetime::format(now + chrono::Duration::hours(1));
        Self {
            record: TravelRecord::new(arrival, departure, ""),
            editing: true,
            is_new: true,
            snapshot: None,
        }
    }

    pub const fn id(&self) -> RecordId {
        self.record.id
    }

    /// How a table should present this row.
    pub fn status(&self) -> RowStatus {
        if self.is_new {
            return RowStatus::New;
        }
        if duration::is_error_marker(&self.record.elapsed) {
            return RowStatus::Error;
        }
        match self.record.valid_span() {
            Some((a, d)) if weekend::overlaps_weekend(a, d) => RowStatus::Weekend,
            _ => RowStatus::Normal,
        }
    }

    /// Czech weekday of the arrival, or `-` when it does not parse.
    pub fn arrival_day_name(&self) -> &'static str {
        self.record.arrival_instant().map_or("-", datetime::day_name)
    }
}

/// Presentation category of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Normal,
    /// The stay touches a Saturday or Sunday.
    Weekend,
    /// Unsaved new row.
    New,
    /// Elapsed column carries an error marker.
    Error,
}

/// An editable field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Arrival,
    Departure,
    Country,
}

/// Unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0} (expected arrival, departure or country)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrival" | "příjezd" | "prijezd" => Ok(Self::Arrival),
            "departure" | "odjezd" => Ok(Self::Departure),
            "country" | "země" | "zeme" => Ok(Self::Country),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}
