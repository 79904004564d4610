//! Destinations for exported images.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Capability that stores an encoded image under a filename.
pub trait DownloadSink: Send + Sync {
    /// Stores `bytes` as `filename` and returns where they ended up.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the bytes cannot be stored.
    fn deliver(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes exports into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}
