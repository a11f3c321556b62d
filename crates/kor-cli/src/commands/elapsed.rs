//! `kor elapsed`: time spent between arrival and departure.

use std::io::Write;

use anyhow::Result;

use kor_core::duration;

pub fn run<W: Write>(
    writer: &mut W,
    arrival: &str,
    departure: &str,
    interactive: bool,
) -> Result<()> {
    let text = if interactive {
        duration::check_elapsed(arrival, departure).into_text()
    } else {
        duration::elapsed(arrival, departure)
    };
    writeln!(writer, "{text}")?;
    Ok(())
}
