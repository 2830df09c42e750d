//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `gradebook add <name> <grade>` - Add a student
//! - `gradebook list|show|search|filter` - Inspect the roster
//! - `gradebook stats` - Aggregate statistics
//! - `gradebook config` - Manage persisted defaults

mod edit;
mod query;
mod stats;

pub use edit::{AddCommand, RemoveCommand, SetCommand};
pub use query::{FilterCommand, ListCommand, SearchCommand, ShowCommand};
pub use stats::StatsCommand;

use crate::config::{AppSettings, Paths};
use crate::error::CliResult;
use crate::output;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Gradebook - a command-line student record store.
///
/// Manages a roster of student records (name + grade) persisted as a
/// JSON file, with search, filtering, and aggregate statistics.
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command-line gradebook for student records", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the roster file
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student to the roster
    #[command(alias = "a")]
    Add(AddCommand),

    /// Remove a student by index
    #[command(alias = "rm")]
    Remove(RemoveCommand),

    /// Update a student's grade by index
    Set(SetCommand),

    /// List all students
    #[command(alias = "ls")]
    List(ListCommand),

    /// Show a single student by index
    Show(ShowCommand),

    /// Search students by name
    #[command(alias = "find")]
    Search(SearchCommand),

    /// Filter students by grade range
    Filter(FilterCommand),

    /// Show roster statistics
    Stats(StatsCommand),

    /// Show or update persisted defaults
    Config(ConfigCommand),
}

/// Show or update persisted defaults.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Set the default roster file path
    #[arg(long, value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Set the default output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        let mut settings = AppSettings::load()?;

        let mut changed = false;
        if let Some(ref path) = self.roster {
            settings.roster_file = Some(path.clone());
            changed = true;
        }
        if let Some(format) = self.output {
            settings.default_output_format = format.to_string();
            changed = true;
        }

        if changed {
            settings.save()?;
            if !quiet {
                output::print_success("Settings updated");
            }
        } else {
            println!("default_output_format = {}", settings.default_output_format);
            println!(
                "roster_file = {}",
                settings
                    .roster_file
                    .unwrap_or_else(|| Paths::get().roster_file())
                    .display()
            );
        }

        Ok(())
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Resolve the output format: explicit flag first, then the persisted default.
pub(crate) fn resolve_format(flag: Option<OutputFormat>) -> OutputFormat {
    flag.unwrap_or_else(|| {
        AppSettings::load()
            .map(|s| s.default_output_format.parse().unwrap_or_default())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["gradebook", "add", "Alice", "8.5"]).unwrap();
        assert!(matches!(cli.command, Commands::Add(_)));

        let cli = Cli::try_parse_from(["gradebook", "filter", "6", "8", "-o", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Filter(_)));
    }

    #[test]
    fn test_cli_rejects_negative_index() {
        assert!(Cli::try_parse_from(["gradebook", "show", "-1"]).is_err());
    }

    #[test]
    fn test_output_format_round_trip() {
        for format in [OutputFormat::Plain, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
