#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use supply_map::Dataset;
use tempfile::{TempDir, tempdir};

/// Builds an in-memory dataset from literal headers and fields.
pub fn dataset(headers: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::from_records(
        "fixture.csv",
        headers.iter().map(|s| s.to_string()).collect(),
        rows.iter().map(|row| row.to_vec()),
    )
    .expect("valid fixture dataset")
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}
