//! Hotspot-labels - aerial survey hotspot label validation tool.
//!
//! This crate cross-checks hotspot detection records against the timestamps
//! embedded in their thermal and color image filenames, summarizes the
//! dataset, and exports per-image bounding-box annotations.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod stats;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, GlobalArgs, InputArgs};
use config::{Config, config_file_path, load_default_config, save_default_config, validate_config};
use output::{AnnotationSet, CsvWriter};
use pipeline::{Source, gather_stats, load_records};
use record::{FilterSet, HotspotRecord};
use stats::write_report;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the hotspot-labels CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet);

    let config = load_default_config()?;
    validate_config(&config)?;

    match cli.command {
        Command::Stats { input } => run_stats(&input, &cli.global, &config),
        Command::Filter { input, output } => run_filter(&input, output.as_deref(), &config),
        Command::Annotations {
            input,
            output,
            compact,
        } => run_annotations(&input, output.as_deref(), compact, &cli.global, &config),
        Command::Config { action } => handle_config_command(action),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Stdout carries the report and exported data.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Compile the filter from the command line, falling back to the config.
fn resolve_filters(input: &InputArgs, config: &Config) -> Result<FilterSet> {
    let spec = input
        .filter
        .as_deref()
        .or(config.defaults.filter.as_deref());
    FilterSet::parse(spec)
}

fn read_input(input: &InputArgs, config: &Config) -> Result<Vec<HotspotRecord>> {
    let filters = resolve_filters(input, config)?;
    let source = if input.is_stdin() {
        Source::Stdin
    } else {
        Source::File(&input.input)
    };
    load_records(source, &filters)
}

fn progress_enabled(global: &GlobalArgs, config: &Config) -> bool {
    !global.quiet && !global.no_progress && config.defaults.progress
}

fn run_stats(input: &InputArgs, global: &GlobalArgs, config: &Config) -> Result<()> {
    let records = read_input(input, config)?;
    let stats = gather_stats(&records, progress_enabled(global, config))?;

    let mut stdout = std::io::stdout().lock();
    write_report(&stats, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn run_filter(input: &InputArgs, output: Option<&Path>, config: &Config) -> Result<()> {
    let records = read_input(input, config)?;

    match output {
        Some(path) => {
            let mut writer = CsvWriter::create(path)?;
            write_csv(&mut writer, &records)?;
            info!("Wrote {} record(s) to {}", records.len(), path.display());
        }
        None => {
            let mut writer = CsvWriter::new(std::io::stdout().lock());
            write_csv(&mut writer, &records)?;
        }
    }

    Ok(())
}

fn write_csv<W: Write>(writer: &mut CsvWriter<W>, records: &[HotspotRecord]) -> Result<()> {
    writer.write_header()?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.finalize()
}

fn run_annotations(
    input: &InputArgs,
    output: Option<&Path>,
    compact: bool,
    global: &GlobalArgs,
    config: &Config,
) -> Result<()> {
    let records = read_input(input, config)?;
    let stats = gather_stats(&records, progress_enabled(global, config))?;
    let annotations = AnnotationSet::from_stats(&stats);
    let pretty = !compact && config.output.pretty_json;

    match output {
        Some(path) => {
            annotations.save(path, pretty)?;
            info!(
                "Wrote {} bounding box(es) to {}",
                annotations.bbox_count(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            annotations
                .write_json(&mut stdout, pretty)
                .map_err(std::io::Error::from)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
