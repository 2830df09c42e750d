//! Student record persistence.
//!
//! Provides the in-memory roster and its JSON file mirror.

mod roster;

pub use roster::{Roster, Student};
