//! The built repository: the three registries plus derived views.

use crate::domain::major::{CourseStatus, MajorRegistry};
use crate::domain::student::{Student, StudentRegistry};
use crate::domain::instructor::InstructorRegistry;
use crate::domain::summary::{InstructorSummary, MajorSummary, StudentSummary};
use crate::error::{MissingReference, Result};

/// Read-only once built. Only `RepositoryBuilder` hands these out.
#[derive(Debug, Default)]
pub struct University {
    pub(crate) majors: MajorRegistry,
    pub(crate) students: StudentRegistry,
    pub(crate) instructors: InstructorRegistry,
}

impl University {
    pub fn majors(&self) -> &MajorRegistry {
        &self.majors
    }

    pub fn students(&self) -> &StudentRegistry {
        &self.students
    }

    pub fn instructors(&self) -> &InstructorRegistry {
        &self.instructors
    }

    /// Completion status of `student` against their own major.
    pub fn status_of<'a>(&'a self, student: &Student) -> Result<CourseStatus<'a>> {
        let major = self
            .majors
            .lookup(student.major())
            .ok_or_else(|| MissingReference::Major {
                major: student.major().to_string(),
                student: student.cwid().to_string(),
            })?;
        Ok(major.compute_status(student.courses()))
    }

    pub fn major_summaries(&self) -> Vec<MajorSummary> {
        self.majors
            .all()
            .map(|m| MajorSummary {
                major: m.name().to_string(),
                required: m.required().iter().cloned().collect(),
                electives: m.elective().iter().cloned().collect(),
            })
            .collect()
    }

    pub fn student_summaries(&self) -> Result<Vec<StudentSummary>> {
        self.students
            .all()
            .map(|s| {
                let status = self.status_of(s)?;
                Ok(StudentSummary {
                    cwid: s.cwid().to_string(),
                    name: s.name().to_string(),
                    major: status.major.to_string(),
                    completed: status.completed,
                    remaining_required: status.remaining_required,
                    remaining_electives: status.remaining_electives,
                })
            })
            .collect()
    }

    pub fn instructor_summaries(&self) -> Vec<InstructorSummary> {
        self.instructors
            .all()
            .flat_map(|i| {
                i.courses().iter().map(move |load| InstructorSummary {
                    cwid: i.cwid().to_string(),
                    name: i.name().to_string(),
                    dept: i.dept().to_string(),
                    course: load.course.clone(),
                    students: load.students,
                })
            })
            .collect()
    }
}
