use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use kor_cli::commands::session::{self, Session};
use kor_cli::commands::{elapsed, export, import, parse, util, weekend};
use kor_cli::{Cli, Commands, Config};
use kor_core::RecordSet;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so command output stays clean on stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Parse { text }) => parse::run(&mut out, text)?,
        Some(Commands::Elapsed {
            arrival,
            departure,
            interactive,
        }) => elapsed::run(&mut out, arrival, departure, *interactive)?,
        Some(Commands::Weekend { start, end }) => {
            weekend::run(&mut out, start, end)?;
        }
        Some(Commands::Import { file, json }) => import::run(&mut out, file, *json)?,
        Some(Commands::Export(args)) => {
            let config = config.with_overrides(
                args.options.plate.clone(),
                args.options.driver.clone(),
                args.options.out_dir.clone(),
            );
            export::run(&mut out, args, &config)?;
        }
        Some(Commands::Session { load, report }) => {
            let config = config.with_overrides(
                report.plate.clone(),
                report.driver.clone(),
                report.out_dir.clone(),
            );
            let records = match load {
                Some(path) => {
                    let outcome = import::load(path)?;
                    writeln!(out, "{}", import::summary(&outcome))?;
                    outcome.records
                }
                None => RecordSet::new(),
            };
            let mut session = Session::new(records, config, util::local_now);
            session::run(io::stdin().lock(), &mut out, &mut session)?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    out.flush()?;
    Ok(())
}
