//! Output management module
//!
//! Writes the unique entries in the requested format through a buffered
//! writer, and resolves paths for display.

use clap::ValueEnum;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SubuniqError};

/// Default buffer size for file writing (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Rendering of the result sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One entry per line
    #[default]
    Plain,
    /// A JSON array of strings
    Json,
    /// Single-column CSV
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Buffered output file writer
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create the output file, truncating anything already there
    pub fn create(path: PathBuf, buffer_size: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| SubuniqError::io("Cannot create output file", &path, e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write all entries in `format`
    pub fn write_entries(&mut self, entries: &[String], format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Plain => {
                for entry in entries {
                    self.write_line(entry)?;
                }
            }
            OutputFormat::Csv => {
                for entry in entries {
                    let record = csv_field(entry);
                    self.write_line(&record)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(entries)?;
                self.write_line(&json)?;
            }
        }
        Ok(())
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| self.write_error(e))?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.write_error(e))
    }

    /// Flush and close the file
    ///
    /// Only flushes: the output may be a pipe or character device, where
    /// syncing to disk is not supported.
    pub fn finish(mut self) -> Result<()> {
        self.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn write_error(&self, err: io::Error) -> SubuniqError {
        SubuniqError::io("Cannot write output file", &self.path, err)
    }
}

/// Quote a CSV field when it holds a delimiter, quote or carriage return
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Canonical form of an existing path, for reporting
///
/// Symlinks and `..` are resolved by the filesystem. Falls back to the path
/// as given when it cannot be canonicalized (e.g. `/dev/stdout` on a pipe).
pub fn resolve_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|e| {
        log::debug!("Cannot canonicalize {}: {}", path.display(), e);
        path.to_path_buf()
    })
}
