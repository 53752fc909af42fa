//! Filesystem output target.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::OutputTarget;

/// Output target for writing to files.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    /// Create a new file output target.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }

    fn open_create_new(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }
}
