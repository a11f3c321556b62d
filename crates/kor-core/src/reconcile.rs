//! Record collection operations.
//!
//! A [`RecordSet`] is an immutable value: every operation borrows the current
//! collection and returns the next one. The caller owns the single current
//! version and swaps it after each step.
//!
//! # Ordering
//!
//! Saved records are kept in ascending arrival order. Records whose arrival
//! does not parse go last in their original relative order. Unsaved (`is_new`)
//! records sit wherever they were inserted until their first save.

use tracing::{debug, warn};

use crate::datetime::{self, Instant};
use crate::duration;
use crate::error::{ExportError, ImportError, SaveError};
use crate::record::{EditableRecord, Field, RecordId, TravelRecord};
use crate::sheet::{ExportBatch, ExportRow, Sheet, locate_columns};

/// Stable ascending sort by parsed arrival; unparseable arrivals go last.
pub fn sort_records(mut records: Vec<EditableRecord>) -> Vec<EditableRecord> {
    // (true, None) orders after every (false, Some(_)); ties keep their order.
    records.sort_by_cached_key(|rec| {
        let arrival = rec.record.arrival_instant();
        (arrival.is_none(), arrival)
    });
    records
}

/// Sorts saved records among themselves while unsaved records keep their
/// positions.
fn sort_saved(records: Vec<EditableRecord>) -> Vec<EditableRecord> {
    let total = records.len();
    let (unsaved, saved): (Vec<_>, Vec<_>) = records
        .into_iter()
        .enumerate()
        .partition(|(_, rec)| rec.is_new);
    let mut saved = sort_records(saved.into_iter().map(|(_, rec)| rec).collect()).into_iter();
    let mut unsaved = unsaved.into_iter().peekable();

    let mut out = Vec::with_capacity(total);
    for slot in 0..total {
        let next = match unsaved.next_if(|(idx, _)| *idx == slot) {
            Some((_, rec)) => Some(rec),
            None => saved.next(),
        };
        out.extend(next);
    }
    out
}

/// Result of a bulk import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// The imported records, sorted.
    pub records: RecordSet,
    pub imported: usize,
    /// Rows rejected for bad dates, blank country or non-increasing order.
    pub skipped: usize,
}

/// The ordered collection of records of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<EditableRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records as given, without sorting.
    pub fn from_records(records: Vec<EditableRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EditableRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EditableRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&EditableRecord> {
        self.records.iter().find(|rec| rec.id() == id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|rec| rec.id() == id)
    }

    #[must_use]
    pub fn sorted(&self) -> Self {
        Self::from_records(sort_records(self.records.clone()))
    }

    /// Inserts a blank one-hour record starting at `now` at the top.
    #[must_use]
    pub fn add_at_top(&self, now: Instant) -> (Self, RecordId) {
        let template = EditableRecord::template(now);
        let id = template.id();
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(template);
        records.extend(self.records.iter().cloned());
        debug!(%id, "added record at top");
        (Self::from_records(records), id)
    }

    /// Inserts a blank record directly above or below `reference`.
    ///
    /// Falls back to [`add_at_top`](Self::add_at_top) if `reference` is not
    /// in the collection.
    #[must_use]
    pub fn add_relative(&self, reference: RecordId, above: bool, now: Instant) -> (Self, RecordId) {
        let Some(index) = self.position(reference) else {
            debug!(%reference, "reference record not found, adding at top");
            return self.add_at_top(now);
        };

        let template = EditableRecord::template(now);
        let id = template.id();
        let at = if above { index } else { index + 1 };
        let mut records = self.records.clone();
        records.insert(at, template);
        debug!(%id, %reference, above, "added record relative to reference");
        (Self::from_records(records), id)
    }

    /// Replaces the record with the same id.
    ///
    /// The first save of a new record (incoming `editing == false`) clears
    /// `is_new` and re-sorts the saved records; other unsaved records stay
    /// where they are. Any other update is an in-place replacement. Unknown
    /// ids leave the collection unchanged.
    #[must_use]
    pub fn update(&self, mut record: EditableRecord) -> Self {
        let Some(index) = self.position(record.id()) else {
            debug!(id = %record.id(), "update for unknown record ignored");
            return self.clone();
        };

        let mut records = self.records.clone();
        if records[index].is_new && !record.editing {
            record.is_new = false;
            records[index] = record;
            debug!("new record saved, re-sorting");
            return Self::from_records(sort_saved(records));
        }

        records[index] = record;
        Self::from_records(records)
    }

    /// Removes the record with this id.
    #[must_use]
    pub fn delete(&self, id: RecordId) -> Self {
        let records = self
            .records
            .iter()
            .filter(|rec| rec.id() != id)
            .cloned()
            .collect();
        Self::from_records(records)
    }

    /// Opens a record for editing.
    ///
    /// Saved records remember their committed values so that
    /// [`cancel`](Self::cancel) can restore them.
    #[must_use]
    pub fn begin_edit(&self, id: RecordId) -> Self {
        let Some(rec) = self.get(id) else {
            return self.clone();
        };
        if rec.editing {
            return self.clone();
        }

        let mut rec = rec.clone();
        if !rec.is_new {
            rec.snapshot = Some(rec.record.clone());
        }
        rec.editing = true;
        self.update(rec)
    }

    /// Sets one field of a record being edited and refreshes `elapsed`.
    ///
    /// A blank `value` keeps the current content. While editing, `elapsed`
    /// shows [`duration::DATE_ORDER_ERROR`] or [`duration::INVALID_INPUT`]
    /// instead of a zero duration.
    #[must_use]
    pub fn edit_field(&self, id: RecordId, field: Field, value: &str) -> Self {
        let opened = self.begin_edit(id);
        let Some(rec) = opened.get(id) else {
            return opened;
        };

        let mut rec = rec.clone();
        if !value.trim().is_empty() {
            let slot = match field {
                Field::Arrival => &mut rec.record.arrival,
                Field::Departure => &mut rec.record.departure,
                Field::Country => &mut rec.record.country,
            };
            *slot = value.to_string();
        }
        rec.record.refresh_elapsed_checked();
        opened.update(rec)
    }

    /// Commits an edit.
    ///
    /// Both dates must parse and departure must follow arrival. On success the
    /// record leaves editing mode through [`update`](Self::update), so a new
    /// record joins the chronological order.
    pub fn save(&self, id: RecordId) -> Result<Self, SaveError> {
        let rec = self.get(id).ok_or(SaveError::NotFound(id))?;
        let (Some(arrival), Some(departure)) =
            (rec.record.arrival_instant(), rec.record.departure_instant())
        else {
            return Err(SaveError::InvalidInput);
        };
        if arrival >= departure {
            return Err(SaveError::DepartureNotAfterArrival);
        }

        let mut rec = rec.clone();
        rec.record.elapsed = duration::elapsed_between(arrival, departure);
        rec.editing = false;
        rec.snapshot = None;
        Ok(self.update(rec))
    }

    /// Abandons an edit.
    ///
    /// A never-saved record is removed. A saved record returns to its values
    /// from before the edit began.
    #[must_use]
    pub fn cancel(&self, id: RecordId) -> Self {
        let Some(rec) = self.get(id) else {
            return self.clone();
        };
        if rec.is_new {
            return self.delete(id);
        }

        let mut rec = rec.clone();
        if let Some(original) = rec.snapshot.take() {
            rec.record = original;
        } else {
            rec.record.elapsed = duration::elapsed(&rec.record.arrival, &rec.record.departure);
        }
        rec.editing = false;
        self.update(rec)
    }

    /// Saved records in chronological order, session fields dropped.
    pub fn export(&self) -> Result<ExportBatch, ExportError> {
        let saved: Vec<EditableRecord> = self
            .records
            .iter()
            .filter(|rec| !rec.is_new)
            .cloned()
            .collect();
        if saved.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let rows: Vec<ExportRow> = sort_records(saved)
            .into_iter()
            .map(|rec| ExportRow {
                arrival: rec.record.arrival,
                departure: rec.record.departure,
                country: rec.record.country,
                elapsed: rec.record.elapsed,
            })
            .collect();
        debug!(rows = rows.len(), "prepared export");
        Ok(ExportBatch { rows })
    }

    /// Builds a fresh collection from a worksheet.
    ///
    /// Rows need two valid, strictly increasing dates and a non-blank country;
    /// others are skipped and counted. A non-blank elapsed cell is kept as is,
    /// otherwise elapsed is computed.
    pub fn import(sheet: &Sheet) -> Result<ImportOutcome, ImportError> {
        if sheet.rows.is_empty() {
            return Err(ImportError::EmptySheet);
        }
        let columns = locate_columns(&sheet.headers)?;

        let mut accepted = Vec::new();
        let mut skipped = 0;
        for row in 0..sheet.rows.len() {
            let arrival = sheet.cell(row, columns.arrival).to_date_text();
            let departure = sheet.cell(row, columns.departure).to_date_text();
            let country = sheet.cell(row, columns.country).to_plain_text();

            let (Some(a), Some(d)) = (datetime::parse(&arrival), datetime::parse(&departure))
            else {
                warn!(row, %arrival, %departure, %country, "skipping row with invalid dates");
                skipped += 1;
                continue;
            };
            if country.is_empty() {
                warn!(row, %arrival, %departure, "skipping row without country");
                skipped += 1;
                continue;
            }
            if a >= d {
                warn!(
                    row,
                    %arrival,
                    %departure,
                    "skipping row where departure is not after arrival"
                );
                skipped += 1;
                continue;
            }

            let supplied = columns
                .elapsed
                .map(|col| sheet.cell(row, col).to_plain_text())
                .filter(|text| !text.is_empty());
            let elapsed = supplied.unwrap_or_else(|| duration::elapsed_between(a, d));

            accepted.push(EditableRecord::saved(TravelRecord {
                id: RecordId::new(),
                arrival: datetime::format(a),
                departure: datetime::format(d),
                country,
                elapsed,
            }));
        }

        let imported = accepted.len();
        debug!(imported, skipped, "import finished");
        Ok(ImportOutcome {
            records: Self::from_records(sort_records(accepted)),
            imported,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::sheet::CellValue;

    fn ts(day: u32, hour: u32) -> Instant {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn saved(arrival: &str, departure: &str, country: &str) -> EditableRecord {
        EditableRecord::saved(TravelRecord::new(arrival, departure, country))
    }

    fn countries(set: &RecordSet) -> Vec<&str> {
        set.records()
            .iter()
            .map(|rec| rec.record.country.as_str())
            .collect()
    }

    fn three() -> RecordSet {
        RecordSet::from_records(vec![
            saved("10.03.24 08:00", "10.03.24 12:00", "A"),
            saved("11.03.24 08:00", "11.03.24 12:00", "B"),
            saved("12.03.24 08:00", "12.03.24 12:00", "C"),
        ])
    }

    fn sheet(rows: &[[&str; 4]]) -> Sheet {
        let mut sheet = Sheet::new(
            ["Příjezd", "Odjezd", "Země", "Čas"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        for row in rows {
            sheet.push_row(row.iter().map(|c| CellValue::from(*c)).collect());
        }
        sheet
    }

    #[test]
    fn test_sort_by_arrival_with_unparseable_last() {
        let records = vec![
            saved("bad one", "", "X1"),
            saved("12.03.24 08:00", "", "C"),
            saved("10.03.24 08:00", "", "A"),
            saved("also bad", "", "X2"),
            saved("11.03.24 08:00", "", "B"),
        ];
        let sorted = RecordSet::from_records(sort_records(records));
        assert_eq!(countries(&sorted), ["A", "B", "C", "X1", "X2"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_arrivals() {
        let records = vec![
            saved("10.03.24 08:00", "", "first"),
            saved("09.03.24 08:00", "", "early"),
            saved("10.03.2024 8:00", "", "second"),
        ];
        let sorted = RecordSet::from_records(sort_records(records));
        assert_eq!(countries(&sorted), ["early", "first", "second"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let set = RecordSet::from_records(vec![
            saved("x", "", "X"),
            saved("12.03.24 08:00", "", "C"),
            saved("10.03.24 08:00", "", "A"),
        ]);
        let once = set.sorted();
        assert_eq!(once.sorted(), once);
    }

    #[test]
    fn test_add_at_top() {
        let (set, id) = three().add_at_top(ts(20, 9));
        assert_eq!(set.len(), 4);
        let first = &set.records()[0];
        assert_eq!(first.id(), id);
        assert!(first.is_new && first.editing);
        assert_eq!(first.record.arrival, "20.03.24 09:00");
        assert_eq!(first.record.departure, "20.03.24 10:00");
        assert_eq!(first.record.elapsed, "01:00:00");
    }

    #[test]
    fn test_add_relative_above_takes_reference_index() {
        let base = three();
        let reference = base.records()[1].id();
        let (set, id) = base.add_relative(reference, true, ts(20, 9));
        assert_eq!(set.position(id), Some(1));
        assert_eq!(set.position(reference), Some(2));
        assert_eq!(countries(&set), ["A", "", "B", "C"]);
    }

    #[test]
    fn test_add_relative_below() {
        let base = three();
        let reference = base.records()[2].id();
        let (set, id) = base.add_relative(reference, false, ts(20, 9));
        assert_eq!(set.position(id), Some(3));
        assert!(set.get(id).unwrap().is_new);
    }

    #[test]
    fn test_add_relative_unknown_reference_goes_to_top() {
        let (set, id) = three().add_relative(RecordId::new(), false, ts(20, 9));
        assert_eq!(set.position(id), Some(0));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_new_record_is_not_sorted_until_saved() {
        let (set, id) = three().add_at_top(ts(20, 9));
        let set = set.edit_field(id, Field::Country, "AT");
        assert_eq!(set.position(id), Some(0));

        let set = set.save(id).unwrap();
        assert_eq!(countries(&set), ["A", "B", "C", "AT"]);
        let rec = set.get(id).unwrap();
        assert!(!rec.is_new);
        assert!(!rec.editing);
    }

    #[test]
    fn test_saving_one_new_record_leaves_other_new_records_in_place() {
        let base = three();
        let (set, pending) = base.add_at_top(ts(1, 8));
        let reference = set.records()[2].id();
        let (set, saved_id) = set.add_relative(reference, false, ts(9, 8));
        let set = set.edit_field(saved_id, Field::Country, "HU");
        assert_eq!(countries(&set), ["", "A", "B", "HU", "C"]);

        let set = set.save(saved_id).unwrap();
        assert_eq!(countries(&set), ["", "HU", "A", "B", "C"]);
        assert_eq!(set.position(pending), Some(0));
        assert!(set.get(pending).unwrap().is_new);
    }

    #[test]
    fn test_update_in_place_does_not_sort() {
        let base = three();
        let mut changed = base.records()[0].clone();
        changed.record.arrival = "30.03.24 08:00".to_string();
        let set = base.update(changed);
        assert_eq!(countries(&set), ["A", "B", "C"]);
        assert_eq!(set.records()[0].record.arrival, "30.03.24 08:00");
    }

    #[test]
    fn test_update_new_record_still_editing_keeps_flag() {
        let (set, id) = three().add_at_top(ts(1, 9));
        let mut rec = set.get(id).unwrap().clone();
        rec.record.country = "PL".to_string();
        let set = set.update(rec);
        assert!(set.get(id).unwrap().is_new);
        assert_eq!(set.position(id), Some(0));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let base = three();
        let stranger = saved("01.03.24 08:00", "01.03.24 09:00", "Z");
        assert_eq!(base.update(stranger), base);
    }

    #[test]
    fn test_delete() {
        let base = three();
        let id = base.records()[1].id();
        let set = base.delete(id);
        assert_eq!(countries(&set), ["A", "C"]);
        assert_eq!(set.delete(id), set);
    }

    #[test]
    fn test_edit_field_sets_error_markers() {
        let base = three();
        let id = base.records()[0].id();

        let set = base.edit_field(id, Field::Departure, "09.03.24 08:00");
        assert_eq!(set.get(id).unwrap().record.elapsed, duration::DATE_ORDER_ERROR);

        let set = set.edit_field(id, Field::Departure, "not a date");
        assert_eq!(set.get(id).unwrap().record.elapsed, duration::INVALID_INPUT);

        let set = set.edit_field(id, Field::Departure, "10.03.24 09:30");
        assert_eq!(set.get(id).unwrap().record.elapsed, "01:30:00");
        assert!(set.get(id).unwrap().editing);
    }

    #[test]
    fn test_edit_field_blank_keeps_value() {
        let base = three();
        let id = base.records()[0].id();
        let set = base.edit_field(id, Field::Country, "   ");
        assert_eq!(set.get(id).unwrap().record.country, "A");
    }

    #[test]
    fn test_save_rejects_invalid_pairs() {
        let base = three();
        let id = base.records()[0].id();

        let bad = base.edit_field(id, Field::Arrival, "31.02.24 08:00");
        assert_eq!(bad.save(id).unwrap_err(), SaveError::InvalidInput);

        let reversed = base.edit_field(id, Field::Arrival, "10.03.24 13:00");
        assert_eq!(
            reversed.save(id).unwrap_err(),
            SaveError::DepartureNotAfterArrival
        );

        let missing = RecordId::new();
        assert_eq!(base.save(missing).unwrap_err(), SaveError::NotFound(missing));
    }

    #[test]
    fn test_save_existing_record_keeps_position() {
        let base = three();
        let id = base.records()[0].id();
        let set = base
            .edit_field(id, Field::Arrival, "30.03.24 08:00")
            .edit_field(id, Field::Departure, "30.03.24 09:00")
            .save(id)
            .unwrap();
        assert_eq!(set.position(id), Some(0));
        assert_eq!(set.get(id).unwrap().record.elapsed, "01:00:00");
    }

    #[test]
    fn test_cancel_new_record_deletes_it() {
        let (set, id) = three().add_at_top(ts(20, 9));
        let set = set.cancel(id);
        assert_eq!(countries(&set), ["A", "B", "C"]);
        assert!(set.get(id).is_none());
    }

    #[test]
    fn test_cancel_restores_snapshot() {
        let base = three();
        let id = base.records()[1].id();
        let set = base
            .edit_field(id, Field::Country, "DE")
            .edit_field(id, Field::Departure, "garbage");
        let set = set.cancel(id);
        let rec = set.get(id).unwrap();
        assert_eq!(rec.record, base.records()[1].record);
        assert!(!rec.editing);
    }

    #[test]
    fn test_cancel_without_snapshot_recomputes_elapsed() {
        let mut rec = saved("10.03.24 08:00", "10.03.24 12:00", "A");
        rec.editing = true;
        rec.record.elapsed = duration::INVALID_INPUT.to_string();
        let id = rec.id();
        let set = RecordSet::from_records(vec![rec]).cancel(id);
        assert_eq!(set.get(id).unwrap().record.elapsed, "04:00:00");
    }

    #[test]
    fn test_export_skips_new_and_sorts() {
        let set = RecordSet::from_records(vec![
            saved("12.03.24 08:00", "12.03.24 09:00", "C"),
            saved("10.03.24 08:00", "10.03.24 09:00", "A"),
        ]);
        let (set, _) = set.add_at_top(ts(1, 8));
        let batch = set.export().unwrap();
        let exported: Vec<&str> = batch.rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(exported, ["A", "C"]);
        assert_eq!(batch.rows[0].elapsed, "01:00:00");
    }

    #[test]
    fn test_export_all_new_is_error() {
        let (set, _) = RecordSet::new().add_at_top(ts(1, 8));
        let (set, _) = set.add_at_top(ts(2, 8));
        assert_eq!(set.export().unwrap_err(), ExportError::NothingToExport);
        assert_eq!(
            RecordSet::new().export().unwrap_err(),
            ExportError::NothingToExport
        );
    }

    #[test]
    fn test_import_accepts_valid_rows_sorted() {
        let outcome = RecordSet::import(&sheet(&[
            ["12.03.24 08:00", "12.03.24 10:30", "DE", ""],
            ["10.03.24 08:00", "10.03.24 09:00", " AT ", "99:00:00"],
        ]))
        .unwrap();
        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.skipped, 0);
        let recs = outcome.records.records();
        assert_eq!(recs[0].record.country, "AT");
        assert_eq!(recs[0].record.elapsed, "99:00:00");
        assert_eq!(recs[1].record.elapsed, "02:30:00");
        assert!(recs.iter().all(|r| !r.is_new && !r.editing));
        assert_ne!(recs[0].id(), recs[1].id());
    }

    #[test]
    fn test_import_skips_and_counts_bad_rows() {
        let outcome = RecordSet::import(&sheet(&[
            ["31.02.24 10:00", "01.03.24 10:00", "CZ", ""],
            ["10.03.24 08:00", "10.03.24 09:00", "", ""],
            ["10.03.24 10:00", "10.03.24 09:00", "CZ", ""],
            ["10.03.24 08:00", "10.03.24 09:00", "CZ", ""],
        ]))
        .unwrap();
        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.skipped, 3);
    }

    #[test]
    fn test_import_normalizes_serial_and_native_dates() {
        let mut sheet = Sheet::new(
            ["prijzed", "odjezd", "zeme"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        sheet.push_row(vec![
            CellValue::number(45_366.354_166_666_7),
            CellValue::Date(ts(15, 12)),
            CellValue::from("SK"),
        ]);
        let outcome = RecordSet::import(&sheet).unwrap();
        let rec = &outcome.records.records()[0].record;
        assert_eq!(rec.arrival, "15.03.24 08:30");
        assert_eq!(rec.departure, "15.03.24 12:00");
        assert_eq!(rec.elapsed, "03:30:00");
    }

    #[test]
    fn test_import_stores_dates_in_canonical_form() {
        let outcome = RecordSet::import(&sheet(&[[
            "15.3.2024 8:30:00",
            "2024-03-15T10:00:00",
            "CZ",
            "",
        ]]))
        .unwrap();
        let rec = &outcome.records.records()[0].record;
        assert_eq!(rec.arrival, "15.03.24 08:30");
        assert_eq!(rec.departure, "15.03.24 10:00");
        assert_eq!(rec.elapsed, "01:30:00");

        let batch = outcome.records.export().unwrap();
        assert_eq!(
            batch.rows[0].as_array(),
            ["15.03.24 08:30", "15.03.24 10:00", "CZ", "01:30:00"]
        );
    }

    #[test]
    fn test_import_keeps_numeric_text_columns_verbatim() {
        let mut sheet = Sheet::new(
            ["Příjezd", "Odjezd", "Země", "Čas"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        sheet.push_row(vec![
            CellValue::from("12.03.24 08:00"),
            CellValue::from("12.03.24 10:30"),
            CellValue::Serial {
                value: 7.0,
                raw: "007".to_string(),
            },
            CellValue::Serial {
                value: 1.5,
                raw: "1.50".to_string(),
            },
        ]);
        let outcome = RecordSet::import(&sheet).unwrap();
        let rec = &outcome.records.records()[0].record;
        assert_eq!(rec.country, "007");
        assert_eq!(rec.elapsed, "1.50");
    }

    #[test]
    fn test_import_missing_columns_is_fatal() {
        let mut sheet = Sheet::new(vec!["Odjezd".to_string(), "Země".to_string()]);
        sheet.push_row(vec![CellValue::from("x"), CellValue::from("y")]);
        assert!(matches!(
            RecordSet::import(&sheet),
            Err(ImportError::MissingColumns { .. })
        ));
    }

    #[test]
    fn test_import_empty_sheet() {
        assert_eq!(
            RecordSet::import(&sheet(&[])).unwrap_err(),
            ImportError::EmptySheet
        );
    }
}
