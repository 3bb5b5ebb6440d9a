//! Repository construction.
//!
//! Sources are ingested in a fixed order (majors, students, instructors,
//! grades) because each later source is validated against the registries the
//! earlier ones populated. The first error aborts the whole build.

use crate::config::RepositoryConfig;
use crate::domain::{Grade, University};
use crate::error::{MissingReference, Result};
use crate::ports::RecordSource;
use tracing::{debug, info, warn};

pub struct RepositoryBuilder<'a, S: RecordSource> {
    pub source: &'a S,
    pub config: &'a RepositoryConfig,
}

impl<'a, S: RecordSource> RepositoryBuilder<'a, S> {
    pub fn new(source: &'a S, config: &'a RepositoryConfig) -> Self {
        Self { source, config }
    }

    pub fn build(&self) -> Result<University> {
        let mut university = University::default();

        self.load_majors(&mut university)?;
        self.load_students(&mut university)?;
        self.load_instructors(&mut university)?;
        self.load_grades(&mut university)?;

        Ok(university)
    }

    fn load_majors(&self, university: &mut University) -> Result<()> {
        let mut rows = 0;
        for record in self.source.records::<3>(&self.config.majors)? {
            let [name, flag, course] = record?;
            university.majors.upsert(&name, &flag, &course)?;
            rows += 1;
        }

        for major in university.majors.all() {
            let overlap = major.overlap();
            if !overlap.is_empty() {
                warn!(
                    "major {} lists {:?} as both required and elective",
                    major.name(),
                    overlap
                );
            }
        }
        info!("loaded {} majors from {} rows", university.majors.len(), rows);
        Ok(())
    }

    fn load_students(&self, university: &mut University) -> Result<()> {
        for record in self.source.records::<3>(&self.config.students)? {
            let [cwid, name, major] = record?;
            university.students.create(&university.majors, &cwid, &name, &major)?;
            debug!("student {} enrolled in {}", cwid, major);
        }
        info!("loaded {} students", university.students.len());
        Ok(())
    }

    fn load_instructors(&self, university: &mut University) -> Result<()> {
        for record in self.source.records::<3>(&self.config.instructors)? {
            let [cwid, name, dept] = record?;
            university.instructors.create(&cwid, &name, &dept)?;
        }
        info!("loaded {} instructors", university.instructors.len());
        Ok(())
    }

    fn load_grades(&self, university: &mut University) -> Result<()> {
        let mut rows = 0;
        for record in self.source.records::<4>(&self.config.grades)? {
            let [student_cwid, course, grade, instructor_cwid] = record?;
            // Checks run student, grade code, then instructor.
            if university.students.lookup(&student_cwid).is_none() {
                return Err(MissingReference::Student { cwid: student_cwid }.into());
            }
            let grade: Grade = grade.parse()?;

            university.students.record_grade(&student_cwid, &course, grade)?;
            university.instructors.record_teaching(&instructor_cwid, &course)?;
            debug!("{} earned {} in {} ({})", student_cwid, grade, course, instructor_cwid);
            rows += 1;
        }
        info!("applied {} grade rows", rows);
        Ok(())
    }
}
