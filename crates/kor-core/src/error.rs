//! Error types surfaced by record operations.
//!
//! Unparseable dates are not errors here: they are `None` from
//! [`crate::datetime::parse`] and sentinel text in the elapsed column.

use thiserror::Error;

use crate::record::RecordId;

/// Import failures that reject the whole batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// One or more required columns could not be located by header.
    #[error("missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },

    /// The source contains no data rows.
    #[error("the sheet contains no data rows")]
    EmptySheet,
}

/// Export failures, reported before anything is written.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExportError {
    /// Every record is still unsaved, or the collection is empty.
    #[error("no saved records to export")]
    NothingToExport,
}

/// Reasons a row edit cannot be committed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// Arrival or departure is not a valid date-time.
    #[error("invalid date or time, expected DD.MM.YY HH:MM")]
    InvalidInput,

    /// Departure is not strictly after arrival.
    #[error("departure must be after arrival")]
    DepartureNotAfterArrival,

    /// No record with this id exists.
    #[error("record {0} not found")]
    NotFound(RecordId),
}
