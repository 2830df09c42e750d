//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of student lists.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::print_csv;
pub use json_format::print_json;
pub use plain::{
    format_detail, format_list, print_error, print_info, print_roster, print_success,
    print_warning, NO_STUDENTS,
};

use crate::cli::OutputFormat;
use crate::store::Student;
use std::io;

/// Print a student list according to the specified format.
pub fn print_students(students: &[Student], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_roster(students),
        OutputFormat::Json => json_format::print_json(students),
        OutputFormat::Csv => csv_format::print_csv(students),
    }
}
