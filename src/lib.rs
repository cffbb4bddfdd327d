//! # SubUniq
//!
//! Subdomain deduplication for reconnaissance pipelines.
//!
//! ## Features
//!
//! - **Normalization**: surrounding whitespace trimmed, entries lowercased
//! - **Deduplication**: case-insensitive, blank lines dropped
//! - **Sorted output**: deterministic regardless of input order
//! - **Selection**: ignore list and keep substring
//! - **Formats**: plain, JSON or CSV output
//! - **Encodings**: explicit strict / lossy / detect policy for non-UTF-8 input
//!
//! ## Usage
//!
//! ```bash
//! subuniq all_subdomains.txt unique.txt
//! subuniq all_subdomains.txt unique.json --format json --ignore staging
//! ```
//!
//! ## Example
//!
//! ```rust
//! use subuniq::dedup::transform;
//!
//! let unique = transform(["WWW.example.com", " api.example.com", "", "www.example.com"]);
//! assert_eq!(unique, vec!["api.example.com", "www.example.com"]);
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use dedup::transform;
pub use error::SubuniqError;
pub use processor::{Processor, ProcessorConfig, Summary};
