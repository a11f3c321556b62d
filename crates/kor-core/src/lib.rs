//! Core logic for border-crossing reports.
//!
//! This crate contains:
//! - Date-time codec: the canonical `DD.MM.YY HH:MM` text format
//! - Durations: elapsed time per stay, with interactive error markers
//! - Weekend detection over a stay's calendar days
//! - Reconciliation: ordering, editing, import and export of records

pub mod datetime;
pub mod duration;
mod error;
pub mod reconcile;
pub mod record;
pub mod sheet;
pub mod weekend;

pub use datetime::Instant;
pub use error::{ExportError, ImportError, SaveError};
pub use reconcile::{ImportOutcome, RecordSet, sort_records};
pub use record::{EditableRecord, Field, RecordId, RowStatus, TravelRecord, UnknownField};
pub use sheet::{CellValue, ExportBatch, ExportRow, Sheet};
