//! Debug response capture.
//!
//! Raw API response bodies go to a plain-text file so the console stays
//! readable; the file is truncated once at startup and appended to for the
//! rest of the run. Each write opens and closes the file, no handle is held
//! between rows.

use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub struct DebugLog {
    path: PathBuf,
}

impl DebugLog {
    /// Create (truncate) the debug file at `path`.
    pub fn create(path: impl Into<PathBuf>) -> Result<DebugLog> {
        let path = path.into();
        File::create(&path)?;
        Ok(DebugLog { path })
    }

    /// Append one response body and announce it on stdout.
    pub fn append(&self, body: &str) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(body.as_bytes())?;
        file.write_all(b"\n")?;
        println!("API response written to {}", self.path.display());
        Ok(())
    }
}
