//! Destinations for exported transcripts offered by the trigger.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::files::write_markdown;

/// Somewhere the trigger can hand a finished export to.
pub trait DownloadSink {
    /// Offers `contents` under `filename` (a bare name, no directories).
    fn offer(&self, filename: &str, contents: &str) -> io::Result<()>;
}

/// A finished export held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub contents: String,
}

/// Keeps every offered export in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    downloads: RefCell<Vec<Download>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downloads(&self) -> Vec<Download> {
        self.downloads.borrow().clone()
    }

    pub fn last(&self) -> Option<Download> {
        self.downloads.borrow().last().cloned()
    }
}

impl DownloadSink for MemorySink {
    fn offer(&self, filename: &str, contents: &str) -> io::Result<()> {
        self.downloads.borrow_mut().push(Download {
            filename: filename.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

/// Saves exports as files inside a directory.
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
    fn offer(&self, filename: &str, contents: &str) -> io::Result<()> {
        write_markdown(&self.dir.join(filename), contents)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
