//! Read-only relational mirror of the instructor/grade summary.
//!
//! The mirror holds `instructors(CWID, Name, Dept)` and
//! `grades(StudentCWID, Course, Grade, InstructorCWID)`. Each query opens the
//! database, reads, and closes it again.

use crate::domain::summary::InstructorSummary;
use crate::error::{RepoError, Result};
use rusqlite::{Connection, OpenFlags};
use std::io;
use std::path::Path;

pub const INSTRUCTOR_SUMMARY_QUERY: &str = "
    SELECT CAST(I.CWID AS TEXT), I.Name, I.Dept, G.Course, count(G.StudentCWID)
    FROM instructors I
    JOIN grades G ON I.CWID = G.InstructorCWID
    GROUP BY I.CWID, I.Name, I.Dept, G.Course
    ORDER BY I.CWID, I.Name, I.Dept, G.Course";

/// Per instructor and course student counts, grouped by the database.
pub fn instructor_summary(db_path: &Path) -> Result<Vec<InstructorSummary>> {
    if !db_path.is_file() {
        let err = io::Error::new(io::ErrorKind::NotFound, "database file not found");
        return Err(RepoError::file_access(db_path, err));
    }

    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    let mut stmt = conn.prepare(INSTRUCTOR_SUMMARY_QUERY)?;
    let rows = stmt.query_map([], |row| {
        let students: i64 = row.get(4)?;
        Ok(InstructorSummary {
            cwid: row.get(0)?,
            name: row.get(1)?,
            dept: row.get(2)?,
            course: row.get(3)?,
            students: students as usize,
        })
    })?;

    let mut summary = Vec::new();
    for row in rows {
        summary.push(row?);
    }
    tracing::debug!("mirror returned {} instructor rows", summary.len());
    Ok(summary)
}
