//! Browse a delimited user file as a paged, sortable terminal table.
//!
//! Usage:
//!   userview [users.txt] [--page-size N] [--sort COLUMN] [--desc]
//!   userview users.txt --check
//!
//! Without a path, `user.txt` next to the executable is used. Lines that fail
//! to parse are skipped and listed on stderr once the table is closed.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use userview::constants::DEFAULT_INPUT_FILE;
use userview::settings::{Settings, default_settings_path};
use userview::tui::Viewer;
use userview::{LineError, QueryEngine, SortColumn, SortDirection, load_file, logging};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Id,
    FirstName,
    LastName,
    Email,
    Gender,
    IpAddress,
}

impl From<SortArg> for SortColumn {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => SortColumn::Id,
            SortArg::FirstName => SortColumn::FirstName,
            SortArg::LastName => SortColumn::LastName,
            SortArg::Email => SortColumn::Email,
            SortArg::Gender => SortColumn::Gender,
            SortArg::IpAddress => SortColumn::IpAddress,
        }
    }
}

/// Browse a delimited user record file.
#[derive(Parser)]
#[command(name = "userview", version)]
struct Cli {
    /// Record file (header line, then `,` or `;` separated records)
    input: Option<PathBuf>,

    /// Rows per page
    #[arg(short = 'n', long)]
    page_size: Option<usize>,

    /// Initial sort column
    #[arg(short, long, value_enum)]
    sort: Option<SortArg>,

    /// Start in descending order
    #[arg(long)]
    desc: bool,

    /// Settings file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Only parse the file and report rejected lines
    #[arg(long)]
    check: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.config.clone().or_else(default_settings_path);
    let mut settings = Settings::load_or_default(settings_path.as_deref());
    apply_overrides(&mut settings, &cli);

    logging::init(settings.log_path().as_deref(), &settings.log_filter);

    let input = match cli.input {
        Some(path) => path,
        None => default_input_path()?,
    };
    if !input.exists() {
        eprintln!("File not found: {}", input.display());
        process::exit(1);
    }

    let outcome =
        load_file(&input).with_context(|| format!("failed to load {}", input.display()))?;

    if cli.check {
        report_errors(&outcome.errors);
        println!(
            "{} records, {} rejected lines",
            outcome.records.len(),
            outcome.errors.len()
        );
        if outcome.has_errors() {
            process::exit(2);
        }
        return Ok(());
    }

    let skipped = outcome.errors.len();
    let engine = QueryEngine::with_options(outcome.records, settings.view_options());
    let mut viewer = Viewer::new(engine, skipped);
    viewer.run().context("terminal error")?;

    report_errors(&outcome.errors);
    Ok(())
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(size) = cli.page_size {
        settings.page_size = size;
    }
    if let Some(sort) = cli.sort {
        settings.sort_column = sort.into();
    }
    if cli.desc {
        settings.sort_direction = SortDirection::Descending;
    }
    if let Some(path) = &cli.log_file {
        settings.log_file = Some(path.clone());
    }
}

fn default_input_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate executable")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.join(DEFAULT_INPUT_FILE))
}

fn report_errors(errors: &[LineError]) {
    for error in errors {
        eprintln!("{error}");
    }
}
