//! CSV output formatting.

use crate::store::Student;
use std::io;

/// Print a student list in CSV format.
pub fn print_csv(students: &[Student]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["name", "voto"])
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    for student in students {
        wtr.write_record([&student.name, &student.grade.to_string()])
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    }

    wtr.flush()?;
    Ok(())
}
