//! Helpers for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Temporary file removed when dropped.
pub struct TestFile {
    tempfile: NamedTempFile,
}

impl TestFile {
    pub fn new(contents: &str) -> Self {
        let mut tempfile = NamedTempFile::new().expect("Failed to create temp file");
        tempfile
            .write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        TestFile { tempfile }
    }

    pub fn path(&self) -> &str {
        self.tempfile.path().to_str().expect("temp path is utf-8")
    }
}
