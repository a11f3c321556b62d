//! Shared utilities for CLI commands: CSV I/O and the current time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, Timelike};

use kor_core::sheet::EXPORT_HEADERS;
use kor_core::{CellValue, ExportBatch, Instant, Sheet};

/// Current local wall-clock time, truncated to the minute.
pub fn local_now() -> Instant {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Classifies a raw CSV field.
///
/// Numeric fields are treated as spreadsheet day serials, blank fields as
/// empty, everything else as text.
pub fn classify_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Serial {
            value,
            raw: raw.to_string(),
        },
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Reads the header row and data rows of a CSV file.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut sheet = Sheet::new(headers);

    for (idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("failed to read row {} of {}", idx + 2, path.display()))?;
        sheet.push_row(record.iter().map(classify_cell).collect());
    }

    tracing::debug!(rows = sheet.rows.len(), path = %path.display(), "read sheet");
    Ok(sheet)
}

/// Writes a batch as CSV into `dir`, returning the path written.
pub fn write_batch(batch: &ExportBatch, dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(file_name);

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(EXPORT_HEADERS)?;
    for row in &batch.rows {
        writer.write_record(row.as_array())?;
    }
    writer.flush().context("failed to flush report")?;

    tracing::debug!(path = %path.display(), rows = batch.rows.len(), "wrote report");
    Ok(path)
}
