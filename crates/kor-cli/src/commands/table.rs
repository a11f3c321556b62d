//! Plain-text and JSON rendering of a record collection.

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use kor_core::sheet::{ARRIVAL_LABEL, COUNTRY_LABEL, DEPARTURE_LABEL, ELAPSED_LABEL};
use kor_core::{EditableRecord, RecordSet, RowStatus};

const COLUMN_GAP: &str = "  ";

/// Shown instead of a table when there is nothing to list.
pub const EMPTY_TABLE: &str = "No records. Add one or load a report.";

fn status_label(rec: &EditableRecord) -> &'static str {
    match rec.status() {
        RowStatus::New => "nový",
        _ if rec.editing => "úpravy",
        RowStatus::Error => "chyba",
        RowStatus::Weekend => "víkend",
        RowStatus::Normal => "",
    }
}

/// Renders records as an aligned table with 1-based row numbers.
pub fn render_table(set: &RecordSet) -> String {
    if set.is_empty() {
        return format!("{EMPTY_TABLE}\n");
    }

    let header: [String; 7] = [
        "#",
        ARRIVAL_LABEL,
        "Den v týdnu",
        DEPARTURE_LABEL,
        COUNTRY_LABEL,
        ELAPSED_LABEL,
        "Stav",
    ]
    .map(str::to_string);

    let rows: Vec<[String; 7]> = set
        .records()
        .iter()
        .enumerate()
        .map(|(idx, rec)| {
            [
                (idx + 1).to_string(),
                rec.record.arrival.clone(),
                rec.arrival_day_name().to_string(),
                rec.record.departure.clone(),
                rec.record.country.clone(),
                rec.record.elapsed.clone(),
                status_label(rec).to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 7];
    for line in std::iter::once(&header).chain(&rows) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&rows) {
        let mut text = String::new();
        for (idx, (cell, width)) in line.iter().zip(widths).enumerate() {
            if idx > 0 {
                text.push_str(COLUMN_GAP);
            }
            // Format pads by char count, matching the width computation.
            let _ = write!(text, "{cell:<width$}");
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct RecordJson<'a> {
    #[serde(flatten)]
    record: &'a EditableRecord,
    day: &'static str,
    status: RowStatus,
}

/// Renders records as a JSON array.
pub fn render_json(set: &RecordSet) -> Result<String> {
    let rows: Vec<RecordJson<'_>> = set
        .records()
        .iter()
        .map(|record| RecordJson {
            record,
            day: record.arrival_day_name(),
            status: record.status(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
