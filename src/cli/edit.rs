//! Roster mutation subcommands.
//!
//! Handles `gradebook add`, `gradebook remove`, and `gradebook set`.
//! Each command loads the roster, applies one change, and saves.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::{Roster, Student};
use crate::types::Grade;
use clap::Parser;
use std::path::Path;

/// Add a student to the roster.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Student name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Grade on the 0-10 scale (e.g., "7.5")
    #[arg(value_name = "GRADE")]
    pub grade: String,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, roster_path: &Path, quiet: bool) -> CliResult<()> {
        let grade: Grade = self.grade.parse()?;

        let mut roster = Roster::load(roster_path);
        roster.add(Student::new(self.name.clone(), grade));
        roster.save(roster_path)?;

        if !quiet {
            output::print_success(&format!("Added {} (Voto: {})", self.name, grade));
        }

        Ok(())
    }
}

/// Remove a student from the roster.
#[derive(Parser, Debug)]
pub struct RemoveCommand {
    /// Index of the student to remove
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(&self, roster_path: &Path, quiet: bool) -> CliResult<()> {
        let mut roster = Roster::load(roster_path);

        let removed = roster
            .remove(self.index)
            .ok_or_else(|| CliError::Other(format!("no student at index {}", self.index)))?;
        roster.save(roster_path)?;

        if !quiet {
            output::print_success(&format!("Removed {}", removed.name));
        }

        Ok(())
    }
}

/// Update a student's grade.
#[derive(Parser, Debug)]
pub struct SetCommand {
    /// Index of the student to update
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// New grade on the 0-10 scale
    #[arg(value_name = "GRADE")]
    pub grade: String,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(&self, roster_path: &Path, quiet: bool) -> CliResult<()> {
        let grade: Grade = self.grade.parse()?;

        let mut roster = Roster::load(roster_path);
        let updated = roster
            .set_grade(self.index, grade)
            .cloned()
            .ok_or_else(|| CliError::Other(format!("no student at index {}", self.index)))?;
        roster.save(roster_path)?;

        if !quiet {
            output::print_success(&format!("Updated {} (Voto: {})", updated.name, updated.grade));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let add = AddCommand {
            name: "Alice".to_string(),
            grade: "8.5".to_string(),
        };
        add.execute(&path, true).unwrap();

        let roster = Roster::load(&path);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().name, "Alice");

        let remove = RemoveCommand { index: 0 };
        remove.execute(&path, true).unwrap();
        assert!(Roster::load(&path).is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_grade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let add = AddCommand {
            name: "Alice".to_string(),
            grade: "11".to_string(),
        };
        assert!(add.execute(&path, true).is_err());
        assert!(Roster::load(&path).is_empty());
    }

    #[test]
    fn test_remove_out_of_range_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        let remove = RemoveCommand { index: 5 };
        assert!(remove.execute(&path, true).is_err());
    }

    #[test]
    fn test_set_updates_grade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        AddCommand {
            name: "Bob".to_string(),
            grade: "5".to_string(),
        }
        .execute(&path, true)
        .unwrap();

        SetCommand {
            index: 0,
            grade: "6.5".to_string(),
        }
        .execute(&path, true)
        .unwrap();

        let roster = Roster::load(&path);
        assert_eq!(roster.get(0).unwrap().grade.value(), 6.5);
    }
}
