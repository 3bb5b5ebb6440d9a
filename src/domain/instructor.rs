use crate::domain::registry::{Keyed, Registry};
use crate::error::{MissingReference, RepoError, Result};

/// Number of graded students an instructor has in one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLoad {
    pub course: String,
    pub students: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    cwid: String,
    name: String,
    dept: String,
    /// First-seen course order.
    courses: Vec<CourseLoad>,
}

impl Instructor {
    pub fn cwid(&self) -> &str {
        &self.cwid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dept(&self) -> &str {
        &self.dept
    }

    pub fn courses(&self) -> &[CourseLoad] {
        &self.courses
    }

    pub fn students_in(&self, course: &str) -> usize {
        self.courses
            .iter()
            .find(|load| load.course == course)
            .map_or(0, |load| load.students)
    }

    fn add_student(&mut self, course: &str) {
        match self.courses.iter_mut().find(|load| load.course == course) {
            Some(load) => load.students += 1,
            None => self.courses.push(CourseLoad {
                course: course.to_string(),
                students: 1,
            }),
        }
    }
}

impl Keyed for Instructor {
    fn key(&self) -> &str {
        &self.cwid
    }
}

#[derive(Debug, Default)]
pub struct InstructorRegistry {
    instructors: Registry<Instructor>,
}

impl InstructorRegistry {
    pub fn create(&mut self, cwid: &str, name: &str, dept: &str) -> Result<&Instructor> {
        let instructor = Instructor {
            cwid: cwid.to_string(),
            name: name.to_string(),
            dept: dept.to_string(),
            courses: Vec::new(),
        };
        self.instructors
            .insert(instructor)
            .map(|i| &*i)
            .map_err(|i| RepoError::DuplicateKey {
                entity: "instructor",
                key: i.cwid,
            })
    }

    /// Count one more graded student in `course` for this instructor.
    pub fn record_teaching(&mut self, cwid: &str, course: &str) -> Result<()> {
        let instructor = self
            .instructors
            .get_mut(cwid)
            .ok_or_else(|| MissingReference::Instructor {
                cwid: cwid.to_string(),
            })?;
        instructor.add_student(course);
        Ok(())
    }

    pub fn lookup(&self, cwid: &str) -> Option<&Instructor> {
        self.instructors.get(cwid)
    }

    pub fn all(&self) -> impl Iterator<Item = &Instructor> + '_ {
        self.instructors.iter()
    }

    pub fn len(&self) -> usize {
        self.instructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructors.is_empty()
    }
}
