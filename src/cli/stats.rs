//! Statistics subcommand.
//!
//! Handles `gradebook stats`: roster size, average, best, and worst.

use crate::error::CliResult;
use crate::output;
use crate::stats;
use crate::store::Roster;
use clap::Parser;
use console::style;
use std::path::Path;

/// Show roster statistics.
#[derive(Parser, Debug)]
pub struct StatsCommand {}

impl StatsCommand {
    /// Execute the stats command.
    pub fn execute(&self, roster_path: &Path) -> CliResult<()> {
        let roster = Roster::load(roster_path);
        let students = roster.students();

        if students.is_empty() {
            output::print_info(output::NO_STUDENTS);
            return Ok(());
        }

        println!();
        println!("  {} {}", style("Students:").bold(), students.len());
        println!(
            "  {} {:.2}",
            style("Average:").bold(),
            stats::average(students)
        );

        if let Some(best) = stats::best(students) {
            println!(
                "  {} {} (Voto: {})",
                style("Best:").bold(),
                best.name,
                best.grade
            );
        }
        if let Some(worst) = stats::worst(students) {
            println!(
                "  {} {} (Voto: {})",
                style("Worst:").bold(),
                worst.name,
                worst.grade
            );
        }
        println!();

        Ok(())
    }
}
