mod common;

use common::fixture;
use registrar::application::RepositoryBuilder;
use registrar::config::RepositoryConfig;
use registrar::domain::summary::{InstructorSummary, MajorSummary, StudentSummary};
use registrar::domain::University;
use registrar::infrastructure::{DelimitedFileSource, MemorySource};
use registrar::{MissingReference, RepoError};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn build_dir(dir: &Path) -> registrar::Result<University> {
    let config = RepositoryConfig::discover(dir, None)?;
    let source = DelimitedFileSource::new(dir)?;
    RepositoryBuilder::new(&source, &config).build()
}

fn build_memory(source: &MemorySource) -> registrar::Result<University> {
    let config = RepositoryConfig::default();
    RepositoryBuilder::new(source, &config).build()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn set(items: &[&str]) -> Option<BTreeSet<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// Copy the Stevens fixture into a scratch directory, replacing one file.
fn stevens_with(file: &str, content: &str) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    for name in ["majors.txt", "students.txt", "instructors.txt", "grades.txt"] {
        fs::copy(fixture("stevens").join(name), dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join(file), content).unwrap();
    dir
}

const SFEN: &str = "Major\tFlag\tCourse\nSFEN\tR\tSSW 540\nSFEN\tR\tSSW 555\nSFEN\tE\tCS 501\nSFEN\tE\tCS 513\n";
const INSTRUCTORS: &str = "CWID\tName\tDept\n98763\tRowland, J\tSFEN\n98762\tHawking, S\tCS\n";

fn sfen_source(students: &str, grades: &str) -> MemorySource {
    MemorySource::new()
        .with_file("majors.txt", SFEN)
        .with_file("students.txt", students)
        .with_file("instructors.txt", INSTRUCTORS)
        .with_file("grades.txt", grades)
}

#[test]
fn stevens_majors_table() {
    let university = build_dir(&fixture("stevens")).unwrap();
    assert_eq!(
        university.major_summaries(),
        vec![
            MajorSummary {
                major: "SFEN".to_string(),
                required: strings(&["SSW 540", "SSW 555", "SSW 810"]),
                electives: strings(&["CS 501", "CS 546"]),
            },
            MajorSummary {
                major: "CS".to_string(),
                required: strings(&["CS 546", "CS 570"]),
                electives: strings(&["SSW 565", "SSW 810"]),
            },
        ]
    );
}

#[test]
fn stevens_students_table() {
    let university = build_dir(&fixture("stevens")).unwrap();
    let row = |cwid: &str,
               name: &str,
               major: &str,
               done: &[&str],
               req: Option<BTreeSet<String>>,
               elec: Option<BTreeSet<String>>| StudentSummary {
        cwid: cwid.to_string(),
        name: name.to_string(),
        major: major.to_string(),
        completed: strings(done),
        remaining_required: req,
        remaining_electives: elec,
    };

    assert_eq!(
        university.student_summaries().unwrap(),
        vec![
            row("10103", "Jobs, S", "SFEN", &["CS 501", "SSW 810"], set(&["SSW 540", "SSW 555"]), None),
            row("10115", "Bezos, J", "SFEN", &["SSW 810"], set(&["SSW 540", "SSW 555"]), set(&["CS 501", "CS 546"])),
            row("10183", "Musk, E", "SFEN", &["SSW 555", "SSW 810"], set(&["SSW 540"]), set(&["CS 501", "CS 546"])),
            row("11714", "Gates, B", "CS", &["CS 546", "CS 570", "SSW 810"], None, None),
            row("11717", "Kernighan, B", "CS", &[], set(&["CS 546", "CS 570"]), set(&["SSW 565", "SSW 810"])),
        ]
    );
}

#[test]
fn stevens_instructors_table() {
    let university = build_dir(&fixture("stevens")).unwrap();
    let rows: Vec<(String, String, String, String, usize)> = university
        .instructor_summaries()
        .into_iter()
        .map(|r: InstructorSummary| (r.cwid, r.name, r.dept, r.course, r.students))
        .collect();
    let expected = [
        ("98764", "Cohen, R", "SFEN", "CS 546", 1),
        ("98763", "Rowland, J", "SFEN", "SSW 810", 4),
        ("98763", "Rowland, J", "SFEN", "SSW 555", 1),
        ("98762", "Hawking, S", "CS", "CS 501", 1),
        ("98762", "Hawking, S", "CS", "CS 546", 1),
        ("98762", "Hawking, S", "CS", "CS 570", 1),
    ]
    .map(|(a, b, c, d, n)| (a.to_string(), b.to_string(), c.to_string(), d.to_string(), n));
    assert_eq!(rows, expected.to_vec());
}

#[test]
fn legacy_layout_is_read_through_local_config() {
    let university = build_dir(&fixture("legacy")).unwrap();
    assert_eq!(university.students().len(), 2);

    let rows = university.student_summaries().unwrap();
    assert_eq!(rows[0].completed, strings(&["CS 501", "SSW 540"]));
    assert_eq!(rows[0].remaining_required, set(&["SSW 555"]));
    assert_eq!(rows[0].remaining_electives, None);

    let rowland = university.instructors().lookup("98763").unwrap();
    assert_eq!(rowland.students_in("SSW 540"), 2);
    assert_eq!(rowland.students_in("CS 501"), 1);
}

#[test]
fn partial_progress_scenario() {
    let university = build_memory(&sfen_source(
        "CWID\tName\tMajor\n1\tA\tSFEN\n",
        "S\tC\tG\tI\n1\tSSW 540\tA\t98763\n1\tCS 501\tB\t98762\n",
    ))
    .unwrap();
    let student = university.students().lookup("1").unwrap();
    let status = university.status_of(student).unwrap();
    assert_eq!(status.completed, strings(&["CS 501", "SSW 540"]));
    assert_eq!(status.remaining_required, set(&["SSW 555"]));
    assert_eq!(status.remaining_electives, None);
}

#[test]
fn failing_grade_scenario() {
    let university = build_memory(&sfen_source(
        "CWID\tName\tMajor\n1\tA\tSFEN\n",
        "S\tC\tG\tI\n1\tSSW 540\tF\t98763\n",
    ))
    .unwrap();
    let student = university.students().lookup("1").unwrap();
    let status = university.status_of(student).unwrap();
    assert!(status.completed.is_empty());
    assert_eq!(status.remaining_required, set(&["SSW 540", "SSW 555"]));
    assert_eq!(status.remaining_electives, set(&["CS 501", "CS 513"]));
}

#[test]
fn teaching_counts_per_course() {
    let university = build_memory(&sfen_source(
        "CWID\tName\tMajor\n1\tA\tSFEN\n2\tB\tSFEN\n",
        "S\tC\tG\tI\n1\tSSW 540\tA\t98763\n2\tSSW 540\tC-\t98763\n1\tSSW 555\tB\t98763\n",
    ))
    .unwrap();
    let rowland = university.instructors().lookup("98763").unwrap();
    assert_eq!(rowland.students_in("SSW 540"), 2);
    assert_eq!(rowland.students_in("SSW 555"), 1);
    assert!(university.instructors().lookup("98762").unwrap().courses().is_empty());
}

#[test]
fn missing_directory_fails() {
    let dir = tempdir().unwrap();
    let err = build_dir(&dir.path().join("Homework_12")).unwrap_err();
    assert!(matches!(err, RepoError::FileAccess { .. }));
}

#[test]
fn missing_grades_file_fails() {
    let dir = stevens_with("grades.txt", "");
    fs::remove_file(dir.path().join("grades.txt")).unwrap();
    match build_dir(dir.path()).unwrap_err() {
        RepoError::FileAccess { path, .. } => assert!(path.ends_with("grades.txt")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn malformed_line_aborts_with_location() {
    let dir = stevens_with(
        "instructors.txt",
        "CWID\tName\tDept\n98764\tCohen, R\tSFEN\n98763\tRowland, J\n",
    );
    match build_dir(dir.path()).unwrap_err() {
        RepoError::MalformedRecord { path, line, found, expected } => {
            assert!(path.ends_with("instructors.txt"));
            assert_eq!((line, found, expected), (3, 2, 3));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn unknown_major_flag_fails() {
    let dir = stevens_with("majors.txt", "Major\tFlag\tCourse\nSFEN\tX\tSSW 540\n");
    assert!(matches!(build_dir(dir.path()), Err(RepoError::InvalidData(_))));
}

#[test]
fn student_with_unknown_major_fails() {
    let err = build_memory(&sfen_source("CWID\tName\tMajor\n10103\tJobs, S\tEE\n", "h\th\th\th\n")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::ReferentialIntegrity(MissingReference::Major { ref major, ref student })
            if major == "EE" && student == "10103"
    ));
}

#[test]
fn grade_for_unknown_student_fails() {
    let err = build_memory(&sfen_source("CWID\tName\tMajor\n1\tA\tSFEN\n", "h\th\th\th\n2\tSSW 540\tA\t98763\n")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::ReferentialIntegrity(MissingReference::Student { ref cwid }) if cwid == "2"
    ));
}

#[test]
fn grade_for_unknown_instructor_fails() {
    let err = build_memory(&sfen_source("CWID\tName\tMajor\n1\tA\tSFEN\n", "h\th\th\th\n1\tSSW 540\tA\t11111\n")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::ReferentialIntegrity(MissingReference::Instructor { ref cwid }) if cwid == "11111"
    ));
}

#[test]
fn unknown_student_reported_before_bad_grade_code() {
    let err = build_memory(&sfen_source("CWID\tName\tMajor\n1\tA\tSFEN\n", "h\th\th\th\n2\tSSW 540\tE\t98763\n")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::ReferentialIntegrity(MissingReference::Student { ref cwid }) if cwid == "2"
    ));
}

#[test]
fn unknown_letter_grade_fails() {
    let err = build_memory(&sfen_source("CWID\tName\tMajor\n1\tA\tSFEN\n", "h\th\th\th\n1\tSSW 540\tE\t98763\n")).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn duplicate_student_cwid_fails() {
    let err = build_memory(&sfen_source("CWID\tName\tMajor\n1\tA\tSFEN\n1\tB\tSFEN\n", "h\th\th\th\n")).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey { entity: "student", .. }));
}

#[test]
fn duplicate_instructor_cwid_fails() {
    let dir = stevens_with(
        "instructors.txt",
        "CWID\tName\tDept\n98764\tCohen, R\tSFEN\n98764\tCohen, R\tSFEN\n",
    );
    assert!(matches!(
        build_dir(dir.path()),
        Err(RepoError::DuplicateKey { entity: "instructor", .. })
    ));
}
