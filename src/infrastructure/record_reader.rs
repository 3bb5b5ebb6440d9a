//! Delimited record files read lazily, line by line.

use crate::config::SourceSpec;
use crate::error::{RepoError, Result};
use crate::ports::{RecordSource, Records};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Iterator over the data lines of one delimited file.
///
/// Stops after the first error; line numbers are 1-based physical lines, so
/// the first data line of a file with a header is line 2.
pub struct DelimitedRecords<R, const N: usize> {
    path: PathBuf,
    lines: io::Lines<R>,
    delimiter: char,
    pending_header: bool,
    line_no: usize,
    done: bool,
}

impl<R: BufRead, const N: usize> DelimitedRecords<R, N> {
    pub fn new(path: impl Into<PathBuf>, reader: R, delimiter: char, header: bool) -> Self {
        Self {
            path: path.into(),
            lines: reader.lines(),
            delimiter,
            pending_header: header,
            line_no: 0,
            done: false,
        }
    }

    fn next_line(&mut self) -> Option<Result<String>> {
        let next = self.lines.next()?;
        self.line_no += 1;
        Some(next.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => RepoError::Encoding {
                path: self.path.clone(),
                line: self.line_no,
            },
            _ => RepoError::file_access(&self.path, e),
        }))
    }

    fn split(&self, line: &str) -> Result<[String; N]> {
        let fields: Vec<String> = line.split(self.delimiter).map(str::to_string).collect();
        let found = fields.len();
        <[String; N]>::try_from(fields).map_err(|_| RepoError::MalformedRecord {
            path: self.path.clone(),
            line: self.line_no,
            found,
            expected: N,
        })
    }
}

impl<R: BufRead, const N: usize> Iterator for DelimitedRecords<R, N> {
    type Item = Result<[String; N]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pending_header {
            self.pending_header = false;
            if let Err(e) = self.next_line()? {
                self.done = true;
                return Some(Err(e));
            }
        }

        let record = self.next_line()?.and_then(|line| self.split(&line));
        if record.is_err() {
            self.done = true;
        }
        Some(record)
    }
}

/// Reads record files from a fixed base directory.
#[derive(Debug, Clone)]
pub struct DelimitedFileSource {
    base: PathBuf,
}

impl DelimitedFileSource {
    pub fn new(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        if !base.is_dir() {
            let err = io::Error::new(io::ErrorKind::NotFound, "directory was not found");
            return Err(RepoError::file_access(base, err));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl RecordSource for DelimitedFileSource {
    fn records<const N: usize>(&self, spec: &SourceSpec) -> Result<Records<'_, N>> {
        let path = self.base.join(&spec.file);
        let file = File::open(&path).map_err(|e| RepoError::file_access(&path, e))?;
        tracing::debug!("reading {} ({} fields)", path.display(), N);
        Ok(Box::new(DelimitedRecords::<_, N>::new(
            path,
            BufReader::new(file),
            spec.delimiter,
            spec.header,
        )))
    }
}

/// Record files held in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }
}

impl RecordSource for MemorySource {
    fn records<const N: usize>(&self, spec: &SourceSpec) -> Result<Records<'_, N>> {
        let content = self.files.get(&spec.file).ok_or_else(|| {
            RepoError::file_access(
                &spec.file,
                io::Error::new(io::ErrorKind::NotFound, "no such in-memory file"),
            )
        })?;
        Ok(Box::new(DelimitedRecords::<_, N>::new(
            &spec.file,
            content.as_bytes(),
            spec.delimiter,
            spec.header,
        )))
    }
}
