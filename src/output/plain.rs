//! Plain text output formatting.
//!
//! Produces the line-oriented roster listing plus styled terminal output
//! and message helpers.

use crate::store::Student;
use console::{style, Style};
use std::io::{self, Write};

/// Fixed message for an empty student list.
pub const NO_STUDENTS: &str = "No students.";

/// Format a student list, one `index. name - Voto: grade` line per record.
///
/// Returns the fixed [`NO_STUDENTS`] message for an empty list.
pub fn format_list(students: &[Student]) -> String {
    if students.is_empty() {
        return NO_STUDENTS.to_string();
    }

    students
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {} - Voto: {}", i, s.name, s.grade))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single student detail line, bounds-checked by index.
pub fn format_detail(students: &[Student], index: usize) -> Option<String> {
    students
        .get(index)
        .map(|s| format!("{}. {} - Voto: {}", index, s.name, s.grade))
}

/// Print the roster in styled, human-readable form.
pub fn print_roster(students: &[Student]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(
        out,
        "  {} {} student{}",
        style("Gradebook:").cyan().bold(),
        students.len(),
        if students.len() == 1 { "" } else { "s" }
    )?;
    writeln!(
        out,
        "  {}",
        style("───────────────────────────────────────").dim()
    )?;

    if students.is_empty() {
        writeln!(out, "  {}", style(NO_STUDENTS).dim())?;
    } else {
        for (i, student) in students.iter().enumerate() {
            let grade_style = if student.grade.is_passing() {
                Style::new().green()
            } else {
                Style::new().red()
            };

            writeln!(
                out,
                "  {}. {} - Voto: {}",
                i,
                style(&student.name).bold(),
                grade_style.apply_to(student.grade)
            )?;
        }
    }

    writeln!(out)?;
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    fn sample() -> Vec<Student> {
        vec![
            Student::new("Alice", Grade::new(8.5).unwrap()),
            Student::new("Bob", Grade::new(7.0).unwrap()),
            Student::new("Carlo", Grade::new(9.0).unwrap()),
        ]
    }

    #[test]
    fn test_format_list_empty() {
        assert_eq!(format_list(&[]), "No students.");
    }

    #[test]
    fn test_format_list_single() {
        let students = vec![Student::new("Alice", Grade::new(8.5).unwrap())];
        assert_eq!(format_list(&students), "0. Alice - Voto: 8.5");
    }

    #[test]
    fn test_format_list_many() {
        let output = format_list(&sample());
        assert!(output.contains("0. Alice"));
        assert!(output.contains("1. Bob"));
        assert!(output.contains("2. Carlo"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_format_detail_valid() {
        let detail = format_detail(&sample(), 0).unwrap();
        assert!(detail.contains("Alice"));
        assert!(detail.contains("8.5"));
    }

    #[test]
    fn test_format_detail_out_of_range() {
        assert!(format_detail(&sample(), 10).is_none());
        assert!(format_detail(&[], 0).is_none());
    }
}
