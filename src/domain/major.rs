//! Majors, their curricula, and the per-student completion status.

use crate::domain::grade::Grade;
use crate::domain::registry::{Keyed, Registry};
use crate::error::{RepoError, Result};
use std::collections::{BTreeSet, HashMap};

/// Whether a curriculum row names a required or an elective course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFlag {
    Required,
    Elective,
}

impl CourseFlag {
    pub fn from_code(code: &str) -> Option<CourseFlag> {
        match code {
            "R" => Some(CourseFlag::Required),
            "E" => Some(CourseFlag::Elective),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Major {
    name: String,
    required: BTreeSet<String>,
    elective: BTreeSet<String>,
}

/// Tri-partition of a major's curriculum for one student.
///
/// `None` in either remaining set means "none outstanding"; it is never
/// reported as an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStatus<'a> {
    pub major: &'a str,
    pub completed: Vec<String>,
    pub remaining_required: Option<BTreeSet<String>>,
    pub remaining_electives: Option<BTreeSet<String>>,
}

impl Major {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: BTreeSet::new(),
            elective: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn elective(&self) -> &BTreeSet<String> {
        &self.elective
    }

    pub fn add_course(&mut self, flag: CourseFlag, course: &str) {
        let set = match flag {
            CourseFlag::Required => &mut self.required,
            CourseFlag::Elective => &mut self.elective,
        };
        set.insert(course.to_string());
    }

    /// Courses listed as both required and elective.
    pub fn overlap(&self) -> BTreeSet<&str> {
        self.required
            .intersection(&self.elective)
            .map(String::as_str)
            .collect()
    }

    /// Split this curriculum into what a student with `course_grades` has
    /// completed and what is still outstanding.
    ///
    /// Taking any single elective satisfies the whole elective requirement.
    pub fn compute_status(&self, course_grades: &HashMap<String, Grade>) -> CourseStatus<'_> {
        let completed: BTreeSet<&String> = course_grades
            .iter()
            .filter(|(_, grade)| grade.is_passing())
            .map(|(course, _)| course)
            .collect();

        let remaining_required = if self.required.iter().all(|c| completed.contains(c)) {
            None
        } else {
            Some(
                self.required
                    .iter()
                    .filter(|c| !completed.contains(c))
                    .cloned()
                    .collect(),
            )
        };

        let remaining_electives = if self.elective.iter().any(|c| completed.contains(c)) {
            None
        } else {
            Some(self.elective.clone())
        };

        CourseStatus {
            major: &self.name,
            completed: completed.into_iter().cloned().collect(),
            remaining_required,
            remaining_electives,
        }
    }
}

impl Keyed for Major {
    fn key(&self) -> &str {
        &self.name
    }
}

/// All majors, keyed by name, in first-seen order.
#[derive(Debug, Default)]
pub struct MajorRegistry {
    majors: Registry<Major>,
}

impl MajorRegistry {
    /// Apply one curriculum row, creating the major on first sight.
    pub fn upsert(&mut self, name: &str, flag: &str, course: &str) -> Result<&Major> {
        let flag = CourseFlag::from_code(flag).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "unknown flag '{}' for major '{}' and course '{}'",
                flag, name, course
            ))
        })?;

        let major = self.majors.get_or_insert_with(name, || Major::new(name));
        major.add_course(flag, course);
        Ok(major)
    }

    pub fn lookup(&self, name: &str) -> Option<&Major> {
        self.majors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.majors.contains(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &Major> + '_ {
        self.majors.iter()
    }

    pub fn len(&self) -> usize {
        self.majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sfen() -> Major {
        let mut reg = MajorRegistry::default();
        for (flag, course) in [("R", "SSW 540"), ("R", "SSW 555"), ("E", "CS 501"), ("E", "CS 513")] {
            reg.upsert("SFEN", flag, course).unwrap();
        }
        reg.lookup("SFEN").unwrap().clone()
    }

    fn grades(pairs: &[(&str, &str)]) -> HashMap<String, Grade> {
        pairs
            .iter()
            .map(|(c, g)| (c.to_string(), g.parse().unwrap()))
            .collect()
    }

    fn set(courses: &[&str]) -> BTreeSet<String> {
        courses.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut reg = MajorRegistry::default();
        reg.upsert("SFEN", "R", "SSW 540").unwrap();
        let once = reg.lookup("SFEN").unwrap().clone();
        reg.upsert("SFEN", "R", "SSW 540").unwrap();
        assert_eq!(reg.lookup("SFEN").unwrap(), &once);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn unknown_flag_names_the_row() {
        let mut reg = MajorRegistry::default();
        let err = reg.upsert("SFEN", "X", "SSW 540").unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, RepoError::InvalidData(_)));
        assert!(msg.contains("'X'") && msg.contains("SFEN") && msg.contains("SSW 540"));
        assert!(reg.lookup("SFEN").is_none());
    }

    #[test]
    fn majors_listed_in_first_seen_order() {
        let mut reg = MajorRegistry::default();
        reg.upsert("SFEN", "R", "SSW 540").unwrap();
        reg.upsert("CS", "R", "CS 546").unwrap();
        reg.upsert("SFEN", "E", "CS 501").unwrap();
        let names: Vec<&str> = reg.all().map(Major::name).collect();
        assert_eq!(names, vec!["SFEN", "CS"]);
    }

    #[test]
    fn partial_progress_with_elective_taken() {
        let major = sfen();
        let status = major.compute_status(&grades(&[("SSW 540", "A"), ("CS 501", "B")]));
        assert_eq!(status.major, "SFEN");
        assert_eq!(status.completed, vec!["CS 501", "SSW 540"]);
        assert_eq!(status.remaining_required, Some(set(&["SSW 555"])));
        assert_eq!(status.remaining_electives, None);
    }

    #[test]
    fn failed_course_leaves_everything_outstanding() {
        let major = sfen();
        let status = major.compute_status(&grades(&[("SSW 540", "F")]));
        assert!(status.completed.is_empty());
        assert_eq!(status.remaining_required, Some(set(&["SSW 540", "SSW 555"])));
        assert_eq!(status.remaining_electives, Some(set(&["CS 501", "CS 513"])));
    }

    #[test]
    fn all_required_done_reports_none_not_empty() {
        let major = sfen();
        let status = major.compute_status(&grades(&[("SSW 540", "C"), ("SSW 555", "B+"), ("SSW 999", "A")]));
        assert_eq!(status.remaining_required, None);
        assert_eq!(status.completed, vec!["SSW 540", "SSW 555", "SSW 999"]);
    }

    #[test]
    fn failed_elective_does_not_satisfy_requirement() {
        let major = sfen();
        let status = major.compute_status(&grades(&[("CS 513", "C-")]));
        assert_eq!(status.remaining_electives, Some(set(&["CS 501", "CS 513"])));
    }

    #[test]
    fn major_without_requirements_has_nothing_outstanding_required() {
        let mut reg = MajorRegistry::default();
        reg.upsert("UNDECLARED", "E", "CS 501").unwrap();
        let status = reg.lookup("UNDECLARED").unwrap().compute_status(&HashMap::new());
        assert_eq!(status.remaining_required, None);
        assert_eq!(status.remaining_electives, Some(set(&["CS 501"])));
    }

    #[test]
    fn overlap_lists_courses_in_both_sets() {
        let mut reg = MajorRegistry::default();
        reg.upsert("CS", "R", "CS 546").unwrap();
        reg.upsert("CS", "E", "CS 546").unwrap();
        reg.upsert("CS", "E", "SSW 810").unwrap();
        let overlap: Vec<&str> = reg.lookup("CS").unwrap().overlap().into_iter().collect();
        assert_eq!(overlap, vec!["CS 546"]);
    }
}
