//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Validate and summarize aerial survey hotspot labels.
#[derive(Debug, Parser)]
#[command(name = "hotspot-labels")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print dataset statistics.
    Stats {
        /// Input selection.
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write the rows that pass the filter as CSV.
    Filter {
        /// Input selection.
        #[command(flatten)]
        input: InputArgs,
        /// Output CSV file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write per-image bounding boxes as JSON.
    Annotations {
        /// Input selection.
        #[command(flatten)]
        input: InputArgs,
        /// Output JSON file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Input file and row filter.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Hotspot CSV file (`-` for stdin).
    pub input: PathBuf,

    /// Row filter, e.g. `hotspot_type=Animal,species_id=12` (overrides config).
    #[arg(short, long, env = "HOTSPOT_LABELS_FILTER")]
    pub filter: Option<String>,
}

impl InputArgs {
    /// Whether the input should be read from stdin.
    pub fn is_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

/// Options accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Suppress progress and informational output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats_with_filter() {
        let cli = Cli::try_parse_from([
            "hotspot-labels",
            "stats",
            "hotspots.csv",
            "--filter",
            "species_id=12",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.global.verbose, 1);
        let Command::Stats { input } = cli.command else {
            unreachable!("expected stats command");
        };
        assert_eq!(input.input, PathBuf::from("hotspots.csv"));
        assert_eq!(input.filter.as_deref(), Some("species_id=12"));
        assert!(!input.is_stdin());
    }

    #[test]
    fn test_parse_annotations_options() {
        let cli = Cli::try_parse_from([
            "hotspot-labels",
            "--quiet",
            "annotations",
            "-",
            "-o",
            "out.json",
            "--compact",
        ])
        .unwrap();

        assert!(cli.global.quiet);
        let Command::Annotations {
            input,
            output,
            compact,
        } = cli.command
        else {
            unreachable!("expected annotations command");
        };
        assert!(input.is_stdin());
        assert_eq!(output, Some(PathBuf::from("out.json")));
        assert!(compact);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["hotspot-labels"]).is_err());
    }
}
