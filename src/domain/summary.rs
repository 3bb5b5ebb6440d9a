//! Display rows derived from a built repository.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorSummary {
    pub major: String,
    pub required: Vec<String>,
    pub electives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub cwid: String,
    pub name: String,
    pub major: String,
    pub completed: Vec<String>,
    pub remaining_required: Option<BTreeSet<String>>,
    pub remaining_electives: Option<BTreeSet<String>>,
}

/// One instructor x course row. Also the shape of the relational mirror's
/// grouped query, so the two can be compared directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct InstructorSummary {
    pub cwid: String,
    pub name: String,
    pub dept: String,
    pub course: String,
    pub students: usize,
}

impl MajorSummary {
    pub const HEADER: [&'static str; 3] = ["Dept", "Required", "Elective(s)"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.major.clone(),
            list_cell(&self.required),
            list_cell(&self.electives),
        ]
    }
}

impl StudentSummary {
    pub const HEADER: [&'static str; 6] = [
        "CWID",
        "Name",
        "Major",
        "Completed Course(s)",
        "Remaining Required",
        "Remaining Electives",
    ];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.cwid.clone(),
            self.name.clone(),
            self.major.clone(),
            list_cell(&self.completed),
            optional_set_cell(self.remaining_required.as_ref()),
            optional_set_cell(self.remaining_electives.as_ref()),
        ]
    }
}

impl InstructorSummary {
    pub const HEADER: [&'static str; 5] = ["CWID", "Name", "Dept", "Course", "Student(s)"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.cwid.clone(),
            self.name.clone(),
            self.dept.clone(),
            self.course.clone(),
            self.students.to_string(),
        ]
    }
}

fn list_cell<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let quoted: Vec<String> = items.into_iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}

fn optional_set_cell(set: Option<&BTreeSet<String>>) -> String {
    match set {
        Some(courses) => list_cell(courses),
        None => "None".to_string(),
    }
}
