//! JSON output formatting.

use crate::store::Student;
use std::io;

/// Print a student list in JSON format.
pub fn print_json(students: &[Student]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(students)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
