#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn data_rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

/// Write a relational mirror of a fixture's instructors and grades files.
pub fn write_mirror(fixture_dir: &Path, db: &Path) {
    let conn = Connection::open(db).unwrap();
    conn.execute_batch(
        "
        CREATE TABLE instructors (CWID TEXT PRIMARY KEY, Name TEXT, Dept TEXT);
        CREATE TABLE grades (StudentCWID TEXT, Course TEXT, Grade TEXT, InstructorCWID TEXT);
        ",
    )
    .unwrap();
    for row in data_rows(&fixture_dir.join("instructors.txt")) {
        conn.execute("INSERT INTO instructors VALUES (?1, ?2, ?3)", params![row[0], row[1], row[2]])
            .unwrap();
    }
    for row in data_rows(&fixture_dir.join("grades.txt")) {
        conn.execute(
            "INSERT INTO grades VALUES (?1, ?2, ?3, ?4)",
            params![row[0], row[1], row[2], row[3]],
        )
        .unwrap();
    }
}
