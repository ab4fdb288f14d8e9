//! File sink implementation

use crate::core::error::{LoggerError, Result};
use crate::core::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// User-space buffer in front of the log file.
pub const FILE_BUFFER_SIZE: usize = 1024 * 1024;

/// Sink appending to a single file through a large `BufWriter`.
///
/// Rotation does not rename: `reopen_truncated` drops the writer and opens
/// the same path truncated.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open the path in append mode, creating it if necessary.
    pub fn append(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(FILE_BUFFER_SIZE, file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    fn write_newline(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn reopen_truncated(&mut self) -> Result<()> {
        // Flush what we can, then replace the writer; the old file handle
        // closes when the BufWriter is dropped.
        let _ = self.writer.flush();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| LoggerError::sink_open(self.path.display().to_string(), e))?;
        self.writer = BufWriter::with_capacity(FILE_BUFFER_SIZE, file);
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Best effort flush - ignore errors during drop
        let _ = self.writer.flush();
    }
}
