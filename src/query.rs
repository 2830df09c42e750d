//! Query operations over student lists.
//!
//! Pure functions returning new lists; original order is always
//! preserved in results.

use crate::store::Student;
use crate::types::Grade;

/// Find students whose name contains the term, case-insensitively.
///
/// An empty term matches nothing rather than everything.
pub fn search_by_name(students: &[Student], term: &str) -> Vec<Student> {
    if term.is_empty() {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    students
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Find students whose grade falls in the inclusive range [min, max].
///
/// Inverted bounds (min > max) match nothing; there is no implicit swap.
pub fn filter_by_grade(students: &[Student], min: Grade, max: Grade) -> Vec<Student> {
    if min > max {
        return Vec::new();
    }

    students
        .iter()
        .filter(|s| s.grade >= min && s.grade <= max)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(value: f64) -> Grade {
        Grade::new(value).unwrap()
    }

    fn sample() -> Vec<Student> {
        vec![
            Student::new("Alice", grade(8.5)),
            Student::new("Andrea", grade(9.0)),
            Student::new("Bob", grade(7.0)),
        ]
    }

    #[test]
    fn test_search_exact_name() {
        let students = sample();
        let results = search_by_name(&students, "alice");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Alice");
    }

    #[test]
    fn test_search_substring() {
        let students = sample();
        let results = search_by_name(&students, "And");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Andrea");
    }

    #[test]
    fn test_search_case_insensitive() {
        let students = sample();
        assert_eq!(search_by_name(&students, "ALICE").len(), 1);
        assert_eq!(search_by_name(&students, "bOb").len(), 1);
    }

    #[test]
    fn test_search_no_match() {
        let students = sample();
        assert!(search_by_name(&students, "xyz").is_empty());
    }

    #[test]
    fn test_search_empty_term_matches_nothing() {
        let students = sample();
        assert!(search_by_name(&students, "").is_empty());
    }

    #[test]
    fn test_filter_single_value() {
        let students = sample();
        let results = filter_by_grade(&students, grade(7.0), grade(7.0));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Bob");
    }

    #[test]
    fn test_filter_range_preserves_order() {
        let students = vec![
            Student::new("A", grade(6.0)),
            Student::new("B", grade(7.0)),
            Student::new("C", grade(8.0)),
            Student::new("D", grade(9.0)),
        ];
        let results = filter_by_grade(&students, grade(7.0), grade(8.5));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "B");
        assert_eq!(results[1].name, "C");
    }

    #[test]
    fn test_filter_no_match() {
        let students = vec![Student::new("A", grade(6.0))];
        assert!(filter_by_grade(&students, grade(8.0), grade(10.0)).is_empty());
    }

    #[test]
    fn test_filter_inverted_bounds_match_nothing() {
        let students = sample();
        assert!(filter_by_grade(&students, grade(9.0), grade(5.0)).is_empty());
    }
}
