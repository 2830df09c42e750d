//! Configuration management for Gradebook.
//!
//! Provides XDG-compliant configuration storage, including persisted
//! application defaults and roster path resolution.

mod settings;

pub use settings::{resolve_roster_path, AppSettings, Paths};
