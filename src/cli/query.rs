//! Roster inspection subcommands.
//!
//! Handles `gradebook list`, `show`, `search`, and `filter`.

use crate::cli::{resolve_format, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::query;
use crate::store::{Roster, Student};
use crate::types::Grade;
use clap::Parser;
use std::path::Path;

/// List all students.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, roster_path: &Path) -> CliResult<()> {
        let roster = Roster::load(roster_path);
        output::print_students(roster.students(), resolve_format(self.output))?;
        Ok(())
    }
}

/// Show a single student by index.
#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// Index of the student to show
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(&self, roster_path: &Path) -> CliResult<()> {
        let roster = Roster::load(roster_path);

        let detail = output::format_detail(roster.students(), self.index)
            .ok_or_else(|| CliError::Other(format!("no student at index {}", self.index)))?;
        println!("{}", detail);

        Ok(())
    }
}

/// Search students by name.
#[derive(Parser, Debug)]
pub struct SearchCommand {
    /// Case-insensitive substring to match against names
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(&self, roster_path: &Path) -> CliResult<()> {
        let roster = Roster::load(roster_path);
        let results = query::search_by_name(roster.students(), &self.term);
        print_results(&results, resolve_format(self.output))
    }
}

/// Filter students by grade range.
#[derive(Parser, Debug)]
pub struct FilterCommand {
    /// Lower bound, inclusive
    #[arg(value_name = "MIN")]
    pub min: String,

    /// Upper bound, inclusive
    #[arg(value_name = "MAX")]
    pub max: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl FilterCommand {
    /// Execute the filter command.
    pub fn execute(&self, roster_path: &Path) -> CliResult<()> {
        let min: Grade = self.min.parse()?;
        let max: Grade = self.max.parse()?;

        let roster = Roster::load(roster_path);
        let results = query::filter_by_grade(roster.students(), min, max);
        print_results(&results, resolve_format(self.output))
    }
}

/// Print query results; plain output uses the bare list format.
fn print_results(students: &[Student], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => {
            println!("{}", output::format_list(students));
            Ok(())
        }
        _ => Ok(output::print_students(students, format)?),
    }
}
