//! Aggregate statistics over student lists.

use crate::store::Student;

/// Arithmetic mean of all grades. Returns 0.0 for an empty list.
pub fn average(students: &[Student]) -> f64 {
    if students.is_empty() {
        return 0.0;
    }

    let sum: f64 = students.iter().map(|s| s.grade.value()).sum();
    sum / students.len() as f64
}

/// The student with the highest grade. Ties resolve to the first occurrence.
pub fn best(students: &[Student]) -> Option<&Student> {
    students
        .iter()
        .reduce(|best, s| if s.grade > best.grade { s } else { best })
}

/// The student with the lowest grade. Ties resolve to the first occurrence.
pub fn worst(students: &[Student]) -> Option<&Student> {
    students
        .iter()
        .reduce(|worst, s| if s.grade < worst.grade { s } else { worst })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    fn students(grades: &[f64]) -> Vec<Student> {
        grades
            .iter()
            .enumerate()
            .map(|(i, &g)| Student::new(format!("Student {}", i), Grade::new(g).unwrap()))
            .collect()
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&students(&[8.0, 7.0, 9.0])), 8.0);
        assert_eq!(average(&students(&[7.5])), 7.5);
    }

    #[test]
    fn test_best() {
        let list = students(&[6.0, 9.0, 7.0]);
        assert_eq!(best(&list).unwrap().grade.value(), 9.0);
    }

    #[test]
    fn test_worst() {
        let list = students(&[6.0, 9.0, 4.0]);
        assert_eq!(worst(&list).unwrap().grade.value(), 4.0);
    }

    #[test]
    fn test_empty_has_no_best_or_worst() {
        assert!(best(&[]).is_none());
        assert!(worst(&[]).is_none());
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let list = students(&[9.0, 9.0, 4.0, 4.0]);
        assert_eq!(best(&list).unwrap().name, "Student 0");
        assert_eq!(worst(&list).unwrap().name, "Student 2");
    }
}
