//! `kor import`: read a CSV report into records.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use kor_core::{ImportOutcome, RecordSet};

use super::table;
use super::util::read_sheet;

/// Reads and imports a CSV report.
pub fn load(path: &Path) -> Result<ImportOutcome> {
    let sheet = read_sheet(path)?;
    let outcome = RecordSet::import(&sheet)
        .with_context(|| format!("failed to import {}", path.display()))?;
    tracing::info!(
        imported = outcome.imported,
        skipped = outcome.skipped,
        "imported report"
    );
    Ok(outcome)
}

/// One-line-per-fact summary of an import.
pub fn summary(outcome: &ImportOutcome) -> String {
    let mut lines = Vec::new();
    if outcome.skipped > 0 {
        lines.push(format!(
            "{} rows skipped because of invalid or missing data.",
            outcome.skipped
        ));
    }
    if outcome.imported == 0 {
        lines.push("No valid records found in file.".to_string());
    } else {
        lines.push(format!("Imported {} records.", outcome.imported));
    }
    lines.join("\n")
}

pub fn run<W: Write>(writer: &mut W, path: &Path, json: bool) -> Result<()> {
    let outcome = load(path)?;

    if json {
        writeln!(writer, "{}", table::render_json(&outcome.records)?)?;
        return Ok(());
    }

    write!(writer, "{}", table::render_table(&outcome.records))?;
    writeln!(writer)?;
    writeln!(writer, "{}", summary(&outcome))?;
    Ok(())
}
