//! Descriptor log: one text line per walked entry
//!
//! The log is an explicit instance owned by the caller, not a global
//! subscriber, so several walks can log to different files side by side.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::Level;

use crate::error::{Error, Result};
use crate::tree::Descriptor;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Receives descriptors in traversal order.
pub trait DescriptorSink {
    fn emit(&mut self, descriptor: &Descriptor) -> Result<()>;

    /// Called once after the last descriptor has been emitted.
    fn finish(&mut self) -> Result<()>;
}

/// Render one log line: `LEVEL    - timestamp, descriptor`.
pub fn format_log_line(level: Level, timestamp: &str, descriptor: &Descriptor) -> String {
    format!("{:<8} - {}, {}", level.as_str(), timestamp, descriptor)
}

/// Writes descriptor lines to any `Write` destination.
pub struct DescriptorLog<W: Write> {
    writer: W,
    /// Used in error messages; `None` for in-memory writers.
    path: Option<PathBuf>,
    lines: usize,
}

impl DescriptorLog<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: Some(path.to_path_buf()),
            lines: 0,
        })
    }
}

impl<W: Write> DescriptorLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            path: None,
            lines: 0,
        }
    }

    /// Number of lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::OutputWrite {
            path: self.path.clone().unwrap_or_default(),
            source,
        }
    }
}

impl<W: Write> DescriptorSink for DescriptorLog<W> {
    fn emit(&mut self, descriptor: &Descriptor) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_log_line(Level::INFO, &timestamp, descriptor);
        writeln!(self.writer, "{}", line).map_err(|e| self.write_error(e))?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.write_error(e))
    }
}
