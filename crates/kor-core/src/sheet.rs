//! Tabular shapes for spreadsheet import and export.
//!
//! A [`Sheet`] is the decoded first worksheet of an uploaded file: a header
//! row and data rows of loosely typed cells. Export produces [`ExportRow`]s
//! carrying the localized column labels.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::datetime::{self, Instant};
use crate::error::ImportError;

pub const ARRIVAL_LABEL: &str = "Příjezd";
pub const DEPARTURE_LABEL: &str = "Odjezd";
pub const COUNTRY_LABEL: &str = "Země";
pub const ELAPSED_LABEL: &str = "Čas";

/// Column labels in export order.
pub const EXPORT_HEADERS: [&str; 4] = [
    ARRIVAL_LABEL,
    DEPARTURE_LABEL,
    COUNTRY_LABEL,
    ELAPSED_LABEL,
];

/// Used when the earliest exported arrival cannot be dated.
pub const UNDATED_REPORT_STEM: &str = "PrekroceniHranicReport";

const SECONDS_PER_DAY: i64 = 86_400;

/// Largest serial the 1900 date system can express (9999-12-31).
const MAX_SERIAL: f64 = 2_958_466.0;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A single spreadsheet cell as delivered by the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    /// Day serial in the 1900 date system; the fraction is the time of day.
    /// `raw` is the text the reader saw, kept for non-date columns.
    Serial { value: f64, raw: String },
    /// A date-time the reader already decoded.
    Date(Instant),
}

impl CellValue {
    /// Normalizes a date cell to canonical text.
    ///
    /// Text that decodes to a date-time is rewritten in the canonical
    /// form. Anything else, including serials that do not map to a date, is
    /// passed through trimmed and will then fail to parse.
    pub fn to_date_text(&self) -> String {
        let decoded = match self {
            Self::Date(instant) => Some(*instant),
            Self::Serial { value, .. } => serial_to_instant(*value),
            Self::Text(text) => datetime::parse(text),
            Self::Empty => None,
        };
        decoded.map_or_else(|| self.to_plain_text(), datetime::format)
    }

    /// Trimmed text content of the cell.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.trim().to_string(),
            Self::Serial { raw, .. } => raw.trim().to_string(),
            Self::Date(instant) => datetime::format(*instant),
        }
    }

    /// A numeric cell from a reader that only delivers the value.
    pub fn number(value: f64) -> Self {
        Self::Serial {
            value,
            raw: value.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_string())
        }
    }
}

/// Converts a 1900-system day serial to an instant.
///
/// Serial 60 is the fictitious 29 February 1900 and lands on 1 March, as
/// does serial 61. The time of day is rounded to the nearest second.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "serials are range-checked above and a day has far fewer seconds than f64 can hold"
)]
pub fn serial_to_instant(serial: f64) -> Option<Instant> {
    if !serial.is_finite() || serial <= 0.0 || serial >= MAX_SERIAL {
        return None;
    }

    let total_seconds = (serial * SECONDS_PER_DAY as f64).round() as i64;
    let days = total_seconds / SECONDS_PER_DAY;
    let seconds = u32::try_from(total_seconds % SECONDS_PER_DAY).ok()?;

    let epoch = if days > 60 {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    };
    let date = epoch.checked_add_days(chrono::Days::new(u64::try_from(days).ok()?))?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(date.and_time(time))
}

/// Decoded worksheet: headers plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Cell at `row`/`col`; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// Positions of the logical columns within a [`Sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub arrival: usize,
    pub departure: usize,
    pub country: usize,
    /// Optional: elapsed is recomputed when absent.
    pub elapsed: Option<usize>,
}

/// Locates columns by case-insensitive header match.
///
/// Arrival, departure and country match by substring (`příjezd`/`prijzed`,
/// `odjezd`, `země`/`zeme`); elapsed must equal `čas` or `cas`.
pub fn locate_columns(headers: &[String]) -> Result<Columns, ImportError> {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let find = |pred: &dyn Fn(&str) -> bool| lowered.iter().position(|h| pred(h.as_str()));

    let arrival = find(&|h| h.contains("příjezd") || h.contains("prijzed"));
    let departure = find(&|h| h.contains("odjezd"));
    let country = find(&|h| h.contains("země") || h.contains("zeme"));
    let elapsed = find(&|h| h == "čas" || h == "cas");

    match (arrival, departure, country) {
        (Some(arrival), Some(departure), Some(country)) => Ok(Columns {
            arrival,
            departure,
            country,
            elapsed,
        }),
        _ => {
            let missing = [
                (arrival, ARRIVAL_LABEL),
                (departure, DEPARTURE_LABEL),
                (country, COUNTRY_LABEL),
            ]
            .into_iter()
            .filter_map(|(found, label)| found.is_none().then_some(label))
            .collect();
            Err(ImportError::MissingColumns { missing })
        }
    }
}

/// One exported line, with session-only fields dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Příjezd")]
    pub arrival: String,
    #[serde(rename = "Odjezd")]
    pub departure: String,
    #[serde(rename = "Země")]
    pub country: String,
    #[serde(rename = "Čas")]
    pub elapsed: String,
}

impl ExportRow {
    pub fn as_array(&self) -> [&str; 4] {
        [
            self.arrival.as_str(),
            self.departure.as_str(),
            self.country.as_str(),
            self.elapsed.as_str(),
        ]
    }
}

/// Rows ready to be written, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBatch {
    pub rows: Vec<ExportRow>,
}

impl ExportBatch {
    /// Report file name `{MM}_{YY}_{identifier}.{extension}`.
    ///
    /// Month and year come from the earliest row's arrival. The identifier
    /// joins the sanitized, non-empty plate and driver name with `_`, or
    /// uses `fallback` when both are blank.
    pub fn file_name(
        &self,
        license_plate: Option<&str>,
        driver_name: Option<&str>,
        fallback: &str,
        extension: &str,
    ) -> String {
        let Some(first) = self.rows.first().and_then(|row| datetime::parse(&row.arrival)) else {
            return format!("{UNDATED_REPORT_STEM}.{extension}");
        };

        let parts: Vec<String> = [license_plate, driver_name]
            .into_iter()
            .flatten()
            .map(sanitize_file_part)
            .filter(|part| !part.is_empty())
            .collect();
        let identifier = if parts.is_empty() {
            fallback.to_string()
        } else {
            parts.join("_")
        };

        format!(
            "{:02}_{:02}_{identifier}.{extension}",
            first.month(),
            first.year() % 100
        )
    }
}

/// Trims, then collapses every run of whitespace or `\/?%*:|"<>` to `_`.
pub fn sanitize_file_part(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace()
            || matches!(ch, '\\' | '/' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>')
        {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
