//! `kor export`: normalize a CSV report and write it under its report name.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use kor_core::RecordSet;

use super::{import, util};
use crate::Config;
use crate::cli::ReportArgs;

/// File extension of written reports.
const REPORT_EXTENSION: &str = "csv";

/// Exports the saved records of `set` into the configured output directory.
pub fn write_report(set: &RecordSet, config: &Config) -> Result<PathBuf> {
    let batch = set.export()?;
    let file_name = batch.file_name(
        config.license_plate.as_deref(),
        config.driver_name.as_deref(),
        &config.report_fallback_name,
        REPORT_EXTENSION,
    );
    util::write_batch(&batch, &config.output_dir, &file_name)
}

pub fn run<W: Write>(writer: &mut W, args: &ReportArgs, config: &Config) -> Result<PathBuf> {
    let outcome = import::load(&args.file)?;
    writeln!(writer, "{}", import::summary(&outcome))?;

    let path = write_report(&outcome.records, config)?;
    writeln!(writer, "Wrote {}", path.display())?;
    Ok(path)
}
