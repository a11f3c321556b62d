//! `kor session`: line-oriented editing of one in-memory collection.
//!
//! Each input line is one command. Rows are addressed by their 1-based
//! position in the current listing or by full record id. Nothing outlives
//! the session unless exported.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};

use kor_core::{EditableRecord, Field, Instant, RecordId, RecordSet};

use super::{export, import, table};
use crate::Config;

const HELP: &str = "\
Commands:
  list                          show all records
  add                           add a blank record at the top
  add-above <row>               add a blank record above a row
  add-below <row>               add a blank record below a row
  edit <row>                    start editing a row
  set <row> <field> <value>     change arrival, departure or country
  save <row>                    commit an edit
  cancel <row>                  abandon an edit (removes unsaved rows)
  delete <row>                  remove a row
  load <file.csv>               replace all records with an imported report
  export [dir]                  write the saved records as a report
  quit                          end the session";

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive state: the current collection and where "now" comes from.
pub struct Session<F> {
    records: RecordSet,
    config: Config,
    now: F,
}

impl<F: Fn() -> Instant> Session<F> {
    pub fn new(records: RecordSet, config: Config, now: F) -> Self {
        Self {
            records,
            config,
            now,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Runs one command line against the collection.
    pub fn execute<W: Write>(&mut self, line: &str, writer: &mut W) -> Result<Flow> {
        let (command, rest) = next_token(line);
        match command {
            "" => {}
            "help" => writeln!(writer, "{HELP}")?,
            "list" => write!(writer, "{}", table::render_table(&self.records))?,
            "add" => {
                let (next, id) = self.records.add_at_top((self.now)());
                self.records = next;
                writeln!(writer, "Added row {}.", self.row_number(id))?;
            }
            "add-above" | "add-below" => {
                // An unknown reference falls back to adding at the top.
                let reference = self.resolve(rest.trim()).unwrap_or_default();
                let above = command == "add-above";
                let (next, id) = self.records.add_relative(reference, above, (self.now)());
                self.records = next;
                writeln!(writer, "Added row {}.", self.row_number(id))?;
            }
            "edit" => {
                let id = self.resolve(rest.trim())?;
                self.records = self.records.begin_edit(id);
                writeln!(writer, "Editing row {}.", self.row_number(id))?;
            }
            "set" => {
                let (row, rest) = next_token(rest);
                let (field, value) = next_token(rest);
                let id = self.resolve(row)?;
                let field: Field = field.parse()?;
                self.records = self.records.edit_field(id, field, value.trim());
                if let Some(rec) = self.records.get(id) {
                    writeln!(writer, "Row {}: {}", self.row_number(id), rec.record.elapsed)?;
                }
            }
            "save" => {
                let id = self.resolve(rest.trim())?;
                self.records = self.records.save(id)?;
                writeln!(writer, "Saved row {}.", self.row_number(id))?;
            }
            "cancel" => {
                let id = self.resolve(rest.trim())?;
                self.records = self.records.cancel(id);
                writeln!(writer, "Cancelled.")?;
            }
            "delete" => {
                let id = self.resolve(rest.trim())?;
                let row = self.row_number(id);
                self.records = self.records.delete(id);
                writeln!(writer, "Deleted row {row}.")?;
            }
            "load" => {
                let path = rest.trim();
                if path.is_empty() {
                    bail!("usage: load <file.csv>");
                }
                let outcome = import::load(Path::new(path))?;
                writeln!(writer, "{}", import::summary(&outcome))?;
                self.records = outcome.records;
            }
            "export" => {
                let mut config = self.config.clone();
                if !rest.trim().is_empty() {
                    config.output_dir = PathBuf::from(rest.trim());
                }
                let path = export::write_report(&self.records, &config)?;
                writeln!(writer, "Wrote {}", path.display())?;
            }
            "quit" | "exit" => return Ok(Flow::Quit),
            other => bail!("unknown command: {other} (try 'help')"),
        }
        Ok(Flow::Continue)
    }

    /// Finds a record by 1-based row number or full id.
    fn resolve(&self, token: &str) -> Result<RecordId> {
        if token.is_empty() {
            bail!("missing row number");
        }
        if let Ok(row) = token.parse::<usize>() {
            return row
                .checked_sub(1)
                .and_then(|idx| self.records.records().get(idx))
                .map(EditableRecord::id)
                .ok_or_else(|| anyhow!("no row {row}"));
        }
        let id: RecordId = token
            .parse()
            .with_context(|| format!("not a row number or record id: {token}"))?;
        if self.records.get(id).is_none() {
            bail!("no record with id {id}");
        }
        Ok(id)
    }

    fn row_number(&self, id: RecordId) -> usize {
        self.records.position(id).map_or(0, |idx| idx + 1)
    }
}

/// Splits off the first whitespace-delimited token.
fn next_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (input, ""),
    }
}

/// Reads commands until `quit` or end of input. Command errors are reported
/// and the session carries on.
pub fn run<R, W, F>(input: R, writer: &mut W, session: &mut Session<F>) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> Instant,
{
    writeln!(writer, "Type 'help' for commands.")?;
    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read command {}", idx + 1))?;
        match session.execute(&line, writer) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                tracing::debug!(command = %line, "command failed");
                writeln!(writer, "error: {err:#}")?;
            }
        }
    }
    Ok(())
}
