//! Error type for the I/O layer
//!
//! The dedup transform itself is total and never fails; everything that can go
//! wrong happens while reading input or writing output and ends up here.

use std::io;
use std::path::{Path, PathBuf};

/// Failure of a single subuniq run
#[derive(Debug, thiserror::Error)]
pub enum SubuniqError {
    /// The input path does not resolve to an existing file
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Any other failure, carrying a human-readable description
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SubuniqError>;

impl SubuniqError {
    /// Wrap an I/O error raised while working on `path`
    pub fn io(action: &str, path: &Path, err: io::Error) -> Self {
        Self::Other(format!("{} '{}': {}", action, path.display(), err))
    }

    /// Map an error from opening the input file, singling out a missing file
    pub fn input(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::io("Cannot read input file", path, err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for SubuniqError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(format!("JSON encoding failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_maps_to_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let mapped = SubuniqError::input(Path::new("subs.txt"), err);

        assert!(mapped.is_not_found());
        assert_eq!(mapped.to_string(), "File 'subs.txt' not found");
    }

    #[test]
    fn test_other_input_errors_keep_description() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let mapped = SubuniqError::input(Path::new("/root/subs.txt"), err);

        assert!(!mapped.is_not_found());
        let msg = mapped.to_string();
        assert!(msg.contains("/root/subs.txt"));
        assert!(msg.contains("access denied"));
    }
}
