//! Repository layout configuration.
//!
//! Each of the four record files can be renamed, use its own delimiter and
//! carry or omit a header row. Everything defaults to the tab-separated,
//! header-bearing layout.

use crate::error::{RepoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the data directory when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "registrar.toml";

/// Where and how to read one record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub file: String,
    pub delimiter: char,
    pub header: bool,
}

impl SourceSpec {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            delimiter: '\t',
            header: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub majors: SourceSpec,
    pub students: SourceSpec,
    pub instructors: SourceSpec,
    pub grades: SourceSpec,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            majors: SourceSpec::new("majors.txt"),
            students: SourceSpec::new("students.txt"),
            instructors: SourceSpec::new("instructors.txt"),
            grades: SourceSpec::new("grades.txt"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    majors: Option<RawSource>,
    students: Option<RawSource>,
    instructors: Option<RawSource>,
    grades: Option<RawSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    file: Option<String>,
    delimiter: Option<char>,
    header: Option<bool>,
}

impl RawSource {
    fn apply(self, base: &mut SourceSpec) {
        if let Some(file) = self.file {
            base.file = file;
        }
        if let Some(delimiter) = self.delimiter {
            base.delimiter = delimiter;
        }
        if let Some(header) = self.header {
            base.header = header;
        }
    }
}

impl RepositoryConfig {
    /// Parse a TOML layout; absent tables and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| RepoError::Config(e.to_string()))?;

        let mut config = Self::default();
        for (section, target) in [
            (raw.majors, &mut config.majors),
            (raw.students, &mut config.students),
            (raw.instructors, &mut config.instructors),
            (raw.grades, &mut config.grades),
        ] {
            if let Some(section) = section {
                section.apply(target);
            }
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RepoError::file_access(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Resolve the layout for a data directory: an explicit file wins, then
    /// `registrar.toml` inside the directory, then the defaults.
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!("using layout from {}", local.display());
            return Self::load(&local);
        }
        Ok(Self::default())
    }
}
