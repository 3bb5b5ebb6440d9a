use serde::Serialize;
use crate::domain::summary::{InstructorSummary, MajorSummary, StudentSummary};
use crate::domain::University;
use crate::error::Result;

/// Everything the CLI prints, as one JSON document.
#[derive(Debug, Serialize)]
pub struct ReportDto {
    pub majors: Vec<MajorSummary>,
    pub students: Vec<StudentSummary>,
    pub instructors: Vec<InstructorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror_instructors: Option<Vec<InstructorSummary>>,
}

impl ReportDto {
    pub fn from_university(university: &University) -> Result<Self> {
        Ok(Self {
            majors: university.major_summaries(),
            students: university.student_summaries()?,
            instructors: university.instructor_summaries(),
            mirror_instructors: None,
        })
    }

    pub fn with_mirror(mut self, rows: Vec<InstructorSummary>) -> Self {
        self.mirror_instructors = Some(rows);
        self
    }
}
