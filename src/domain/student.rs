use crate::domain::grade::Grade;
use crate::domain::major::MajorRegistry;
use crate::domain::registry::{Keyed, Registry};
use crate::error::{MissingReference, RepoError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    cwid: String,
    name: String,
    /// Key into the major registry.
    major: String,
    courses: HashMap<String, Grade>,
}

impl Student {
    pub fn cwid(&self) -> &str {
        &self.cwid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn courses(&self) -> &HashMap<String, Grade> {
        &self.courses
    }

    pub fn grade_for(&self, course: &str) -> Option<Grade> {
        self.courses.get(course).copied()
    }
}

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.cwid
    }
}

#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: Registry<Student>,
}

impl StudentRegistry {
    /// Register a student of an existing major.
    ///
    /// Nothing is inserted when the major is unknown or the CWID is taken.
    pub fn create(
        &mut self,
        majors: &MajorRegistry,
        cwid: &str,
        name: &str,
        major: &str,
    ) -> Result<&Student> {
        if !majors.contains(major) {
            return Err(MissingReference::Major {
                major: major.to_string(),
                student: cwid.to_string(),
            }
            .into());
        }

        let student = Student {
            cwid: cwid.to_string(),
            name: name.to_string(),
            major: major.to_string(),
            courses: HashMap::new(),
        };
        self.students
            .insert(student)
            .map(|s| &*s)
            .map_err(|s| RepoError::DuplicateKey {
                entity: "student",
                key: s.cwid,
            })
    }

    /// Record a grade, replacing any earlier grade for the same course.
    pub fn record_grade(&mut self, cwid: &str, course: &str, grade: Grade) -> Result<()> {
        let student = self
            .students
            .get_mut(cwid)
            .ok_or_else(|| MissingReference::Student {
                cwid: cwid.to_string(),
            })?;
        student.courses.insert(course.to_string(), grade);
        Ok(())
    }

    pub fn lookup(&self, cwid: &str) -> Option<&Student> {
        self.students.get(cwid)
    }

    pub fn all(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
