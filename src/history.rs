//! Success-gated persistent history.
//!
//! The history file is truncated at startup and receives each raw input
//! line verbatim, before any expansion, whenever the previous command's
//! status was success. The caller applies that gate; this type only
//! appends.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = ".mish_history";

#[derive(Debug)]
pub struct History {
    file: File,
}

impl History {
    /// Create or truncate the history file. A failure here is fatal to
    /// interpreter startup.
    pub fn create(path: &Path) -> io::Result<History> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(History { file })
    }

    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(FILE_NAME))
    }

    /// Append one raw input line and flush it out immediately.
    pub fn record(&mut self, line: &str) {
        let _ = writeln!(self.file, "{}", line);
        let _ = self.file.flush();
    }
}
