//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const RESPONSES_HEADER: &str =
    "Username,Firstname,Lastname,Ask Question,Answer Question,Grade Question,Grade Answer";

pub const HISTORICAL_HEADER: &str = "Username,Firstname,Lastname,Ask Question,Answer Question";

/// Temporary directory holding the CSV inputs and the report of one run.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir should be created"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `header` followed by `rows` (one CSV line each) and returns the path.
    pub fn write_csv(&self, name: &str, header: &str, rows: &[&str]) -> PathBuf {
        let mut body = String::from(header);
        body.push('\n');
        for row in rows {
            body.push_str(row);
            body.push('\n');
        }

        let path = self.path(name);
        std::fs::write(&path, body).expect("fixture should be written");
        path
    }
}

/// Reads a report back as rows of cells, header included.
pub fn read_report(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("report should exist");

    reader
        .records()
        .map(|record| {
            record
                .expect("report row should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
