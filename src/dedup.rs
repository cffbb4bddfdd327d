//! Subdomain normalization and deduplication
//!
//! The core of subuniq: turn a sequence of raw lines into the sorted set of
//! unique, normalized, non-empty entries. Everything in this module is pure;
//! reading and writing files lives in [`crate::processor`].

use ahash::RandomState;
use hashbrown::HashSet;

use crate::filter::EntryFilter;

/// Counters collected over one dedup pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    /// Raw lines seen
    pub total_lines: u64,
    /// Lines that were empty after trimming
    pub blank_lines: u64,
    /// Lines rejected by the entry filter
    pub filtered_lines: u64,
    /// Lines absorbed as duplicates of an earlier entry
    pub duplicate_lines: u64,
    /// Entries in the unique set
    pub unique_count: u64,
}

/// Result of [`dedup_lines`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupOutcome {
    /// Unique entries in ascending order
    pub entries: Vec<String>,
    pub stats: DedupStats,
}

/// Normalize a single raw line
///
/// Strips surrounding whitespace and lowercases. Returns `None` when nothing
/// is left, since blank entries are never emitted.
#[inline]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// In-memory set of normalized entries
pub struct Deduplicator {
    set: HashSet<String, RandomState>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Add a normalized entry
    /// Returns true if the entry was not seen before
    pub fn insert(&mut self, entry: String) -> bool {
        self.set.insert(entry)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Consume the set and return its members in ascending order
    pub fn into_sorted(self) -> Vec<String> {
        let mut entries: Vec<String> = self.set.into_iter().collect();
        // Members are distinct, so an unstable sort is still deterministic.
        entries.sort_unstable();
        entries
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize, dedupe and sort raw lines
///
/// Output has no duplicates and no blank entries, and its order depends only
/// on the set of inputs, never on their order.
pub fn transform<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dedup_lines(lines, &EntryFilter::default()).entries
}

/// Same as [`transform`], with an entry filter applied after normalization
/// and per-line counters collected along the way
pub fn dedup_lines<I, S>(lines: I, filter: &EntryFilter) -> DedupOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter();
    let mut dedup = Deduplicator::with_capacity(lines.size_hint().0);
    let mut stats = DedupStats::default();

    for raw in lines {
        stats.total_lines += 1;

        let Some(entry) = normalize(raw.as_ref()) else {
            stats.blank_lines += 1;
            continue;
        };

        if !filter.allows(&entry) {
            stats.filtered_lines += 1;
            continue;
        }

        if !dedup.insert(entry) {
            stats.duplicate_lines += 1;
        }
    }

    if dedup.is_empty() && stats.total_lines > stats.blank_lines {
        log::warn!("No subdomains left after filtering");
    }

    stats.unique_count = dedup.len() as u64;
    log::debug!(
        "dedup: {} lines in, {} unique, {} duplicates, {} blank, {} filtered",
        stats.total_lines,
        stats.unique_count,
        stats.duplicate_lines,
        stats.blank_lines,
        stats.filtered_lines
    );

    DedupOutcome {
        entries: dedup.into_sorted(),
        stats,
    }
}
