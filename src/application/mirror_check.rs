//! Cross-check of the in-memory instructor summary against the relational
//! mirror. Both paths must produce the same rows; only order may differ.

use crate::domain::summary::InstructorSummary;
use crate::domain::University;
use crate::error::Result;
use crate::infrastructure::mirror;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorComparison {
    /// Mirror rows in the database's grouped order.
    pub mirror_rows: Vec<InstructorSummary>,
    pub only_in_memory: Vec<InstructorSummary>,
    pub only_in_mirror: Vec<InstructorSummary>,
}

impl MirrorComparison {
    pub fn agrees(&self) -> bool {
        self.only_in_memory.is_empty() && self.only_in_mirror.is_empty()
    }
}

pub fn compare_with_mirror(university: &University, db_path: &Path) -> Result<MirrorComparison> {
    let mirror_rows = mirror::instructor_summary(db_path)?;

    let memory: BTreeSet<InstructorSummary> = university.instructor_summaries().into_iter().collect();
    let stored: BTreeSet<InstructorSummary> = mirror_rows.iter().cloned().collect();

    let comparison = MirrorComparison {
        only_in_memory: memory.difference(&stored).cloned().collect(),
        only_in_mirror: stored.difference(&memory).cloned().collect(),
        mirror_rows,
    };
    if !comparison.agrees() {
        tracing::warn!(
            "mirror at {} disagrees: {} row(s) only in memory, {} only in mirror",
            db_path.display(),
            comparison.only_in_memory.len(),
            comparison.only_in_mirror.len()
        );
    }
    Ok(comparison)
}
