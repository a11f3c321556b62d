//! `kor weekend`: does a stay touch a Saturday or Sunday?

use std::io::Write;

use anyhow::Result;

use kor_core::{datetime, weekend};

pub fn run<W: Write>(writer: &mut W, start: &str, end: &str) -> Result<bool> {
    let (Some(start_at), Some(end_at)) = (datetime::parse(start), datetime::parse(end)) else {
        anyhow::bail!("could not parse {start:?} or {end:?} (expected DD.MM.YY HH:MM)");
    };

    let overlaps = weekend::overlaps_weekend(start_at, end_at);
    writeln!(writer, "{}", if overlaps { "yes" } else { "no" })?;
    Ok(overlaps)
}
