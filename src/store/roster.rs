//! JSON-backed student roster.
//!
//! The roster is held fully in memory and mirrored to a single JSON
//! file on demand. Loading is infallible: a missing or unreadable file
//! and invalid JSON both yield an empty roster, with the condition
//! reported through `tracing`.

use crate::error::{StoreError, StoreResult};
use crate::types::Grade;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A single student record.
///
/// The grade is serialized under the `voto` wire name for
/// compatibility with existing roster files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Display name, not required to be unique.
    pub name: String,
    /// Grade on the 0-10 scale.
    #[serde(rename = "voto")]
    pub grade: Grade,
}

impl Student {
    /// Create a new student record.
    pub fn new(name: impl Into<String>, grade: Grade) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }
}

/// In-memory ordered list of students with JSON persistence.
///
/// Insertion order is preserved; indices are the handle for detail
/// lookup, removal, and grade updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from an existing list of students.
    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Get the students as a slice.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students in the roster.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Append a student to the end of the roster.
    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Get a student by index.
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Remove a student by index, returning it if the index was valid.
    pub fn remove(&mut self, index: usize) -> Option<Student> {
        if index < self.students.len() {
            Some(self.students.remove(index))
        } else {
            None
        }
    }

    /// Update a student's grade by index, returning the updated record.
    pub fn set_grade(&mut self, index: usize, grade: Grade) -> Option<&Student> {
        self.students.get_mut(index).map(|student| {
            student.grade = grade;
            &*student
        })
    }

    /// Load a roster from a JSON file.
    ///
    /// A missing or unreadable file and invalid JSON all yield an empty
    /// roster rather than an error; the condition is logged.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "roster file not readable, starting empty");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<Student>>(&content) {
            Ok(students) => {
                debug!(path = %path.display(), count = students.len(), "roster loaded");
                Self { students }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid roster JSON, starting empty");
                Self::new()
            }
        }
    }

    /// Save the roster to a JSON file, overwriting any existing content.
    ///
    /// The file is an indented JSON array of `{name, voto}` objects.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::DirectoryError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(&self.students)?;
        fs::write(path, content).map_err(|e| StoreError::SaveFailed(e.to_string()))?;

        debug!(path = %path.display(), count = self.students.len(), "roster saved");
        Ok(())
    }
}
