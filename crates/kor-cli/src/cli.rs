//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Border-crossing report tool.
///
/// Records arrival/departure times per country, computes time spent in each
/// and converts between spreadsheet exports.
#[derive(Debug, Parser)]
#[command(name = "kor", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a date-time (e.g. "15.03.24 08:30") and show its canonical form.
    Parse {
        /// Text to parse.
        text: String,
    },

    /// Compute the time between an arrival and a departure.
    Elapsed {
        /// Arrival, `DD.MM.YY HH:MM`.
        arrival: String,

        /// Departure, `DD.MM.YY HH:MM`.
        departure: String,

        /// Report invalid or out-of-order input instead of 00:00:00.
        #[arg(long)]
        interactive: bool,
    },

    /// Check whether a stay touches a Saturday or Sunday.
    Weekend {
        /// Start, `DD.MM.YY HH:MM`.
        start: String,

        /// End, `DD.MM.YY HH:MM`.
        end: String,
    },

    /// Import a CSV report and show the resulting records.
    Import {
        /// CSV file with Příjezd, Odjezd, Země and optional Čas columns.
        file: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Import a CSV report and write it back as a normalized, sorted report.
    Export(ReportArgs),

    /// Edit records interactively, one command per line on stdin.
    Session {
        /// CSV report to start the session with.
        #[arg(long)]
        load: Option<PathBuf>,

        #[command(flatten)]
        report: ReportOptions,
    },
}

/// Arguments of the `export` command.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV file to read.
    pub file: PathBuf,

    #[command(flatten)]
    pub options: ReportOptions,
}

/// Report naming and destination, overriding the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportOptions {
    /// Vehicle license plate.
    #[arg(long)]
    pub plate: Option<String>,

    /// Driver name.
    #[arg(long)]
    pub driver: Option<String>,

    /// Directory to write the report into.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
