//! # Gradebook - A Command-Line Student Record Store
//!
//! Gradebook manages a roster of student records (name + grade) backed
//! by a single JSON file, with validation, search, filtering, and
//! aggregate statistics.
//!
//! ## Features
//!
//! - **Validated Grades**: the `Grade` newtype keeps every value on the 0-10 scale
//! - **JSON Persistence**: indented `{name, voto}` records, tolerant loading
//! - **Query Operations**: case-insensitive name search and grade range filters
//! - **Statistics**: average, best, and worst with deterministic tie-breaking
//! - **Multiple Output Formats**: plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use gradebook::{Grade, Roster, Student};
//! use std::path::Path;
//!
//! fn main() {
//!     let mut roster = Roster::load(Path::new("roster.json"));
//!
//!     let grade = Grade::new(8.5).unwrap();
//!     roster.add(Student::new("Alice", grade));
//!
//!     if let Err(e) = roster.save(Path::new("roster.json")) {
//!         eprintln!("save failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`store`] - The in-memory roster and its JSON persistence
//! - [`query`] - Search and filter operations
//! - [`stats`] - Aggregate statistics
//! - [`config`] - Configuration management and XDG paths
//! - [`error`] - Comprehensive error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod query;
pub mod stats;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, StoreError};
pub use store::{Roster, Student};
pub use types::{Grade, GradeError};
