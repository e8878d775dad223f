//! Session log files.
//!
//! Every CLI session appends its status lines to a numbered text file
//! (`logs/log1.txt`, `logs/log2.txt`, ...). Entries are buffered in memory
//! and written out when the session ends.

use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BackdropError, Result};

/// Timestamp format used for each entry.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A buffered, timestamped log for one session.
#[derive(Debug)]
pub struct SessionLog {
    path: PathBuf,
    buffer: RefCell<Vec<String>>,
}

impl SessionLog {
    /// Open a new session log in `dir`, creating the directory if needed.
    ///
    /// The file name is one past the highest existing `logN.txt`.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| BackdropError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create log directory: {}", e),
        })?;

        let log = Self {
            path: next_log_path(dir),
            buffer: RefCell::new(Vec::new()),
        };
        log.log("--- Session started ---");
        Ok(log)
    }

    /// Path of the file this session writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of buffered entries not yet written.
    pub fn pending(&self) -> usize {
        self.buffer.borrow().len()
    }

    /// Buffer a timestamped entry.
    pub fn log(&self, message: &str) {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        self.buffer
            .borrow_mut()
            .push(format!("[{}] {}", timestamp, message));
    }

    /// Append buffered entries to the log file and clear the buffer.
    pub fn flush(&self) -> Result<()> {
        let mut buffer = self.buffer.borrow_mut();
        if buffer.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BackdropError::Io {
                path: self.path.clone(),
                message: format!("Failed to open log file: {}", e),
            })?;

        for entry in buffer.iter() {
            writeln!(file, "{}", entry).map_err(|e| BackdropError::Io {
                path: self.path.clone(),
                message: format!("Failed to write log file: {}", e),
            })?;
        }

        buffer.clear();
        Ok(())
    }
}

/// Find the next free `logN.txt` path in `dir`.
pub fn next_log_path(dir: &Path) -> PathBuf {
    let max = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| log_number(&e.file_name().to_string_lossy()))
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);

    dir.join(format!("log{}.txt", max + 1))
}

fn log_number(filename: &str) -> Option<u32> {
    filename
        .strip_prefix("log")?
        .strip_suffix(".txt")?
        .parse()
        .ok()
}
