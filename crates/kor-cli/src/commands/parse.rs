//! `kor parse`: decode a date-time and show how it is understood.

use std::io::Write;

use anyhow::Result;

use kor_core::datetime;

pub fn run<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let Some(instant) = datetime::parse(text) else {
        anyhow::bail!("could not parse date-time: {text:?} (expected DD.MM.YY HH:MM)");
    };

    writeln!(writer, "{}", datetime::format(instant))?;
    writeln!(writer, "ISO: {}", instant.format("%Y-%m-%dT%H:%M:%S"))?;
    writeln!(writer, "Den: {}", datetime::day_name(instant))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn parse_prints_canonical_iso_and_day() {
        let mut out = Vec::new();
        run(&mut out, "15.3.2024 8:30:45").unwrap();
        assert_snapshot!(String::from_utf8(out).unwrap(), @r"
        15.03.24 08:30
        ISO: 2024-03-15T08:30:45
        Den: Pátek
        ");
    }

    #[test]
    fn parse_rejects_invalid_date() {
        let mut out = Vec::new();
        let err = run(&mut out, "31.02.24 10:00").unwrap_err();
        assert!(err.to_string().contains("could not parse"));
        assert!(out.is_empty());
    }
}
