use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::Result;

/// Holding area for freshly fetched template content. Emptied before
/// and after every fetch, never deleted.
pub struct Scratch {
    path: PathBuf,
}

impl Scratch {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove everything inside the scratch directory, creating the
    /// directory itself when missing.
    pub fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            fs::create_dir_all(&self.path)?;
            return Ok(());
        }
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}
