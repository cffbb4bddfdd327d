//! Entry selection module
//!
//! Selects which normalized subdomains make it into the unique set, based on
//! an ignore list and an optional keep substring. Entries are never rewritten
//! here, only accepted or rejected.

/// Substring-based entry filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Entries containing any of these are dropped
    ignore: Vec<String>,
    /// When set, only entries containing this are kept
    keep: Option<String>,
}

impl EntryFilter {
    /// Create a filter from an ignore list and an optional keep substring
    ///
    /// Every substring is trimmed and lowercased so it compares against
    /// normalized entries. Empty substrings are dropped.
    pub fn new<I, S>(ignore: I, keep: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ignore = ignore
            .into_iter()
            .filter_map(|s| normalize_needle(s.as_ref()))
            .collect();
        let keep = keep.and_then(normalize_needle);

        Self { ignore, keep }
    }

    /// Build from the comma-separated form used on the command line
    pub fn from_cli(ignore: Option<&str>, keep: Option<&str>) -> Self {
        let ignore: Vec<&str> = ignore.map(|s| s.split(',').collect()).unwrap_or_default();
        Self::new(ignore, keep)
    }

    /// Check if a normalized entry passes the filter
    #[inline]
    pub fn allows(&self, entry: &str) -> bool {
        if self.ignore.iter().any(|needle| entry.contains(needle.as_str())) {
            return false;
        }

        match self.keep {
            Some(ref keep) => entry.contains(keep.as_str()),
            None => true,
        }
    }

    /// Check if any selection is active
    pub fn is_active(&self) -> bool {
        !self.ignore.is_empty() || self.keep.is_some()
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignore
    }

    pub fn keep(&self) -> Option<&str> {
        self.keep.as_deref()
    }
}

fn normalize_needle(raw: &str) -> Option<String> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        None
    } else {
        Some(needle)
    }
}
