//! Search-result records and JSONL framing.
//!
//! One reranking run consumes a JSONL file of [`SearchCandidate`] records
//! (one object per line) and produces [`ScoredRecord`] lines with the same
//! fields plus scoring output.

pub mod error;
pub mod jsonl;
pub mod types;


pub use error::RecordError;
pub use jsonl::{read_candidates, write_records};
pub use types::{ScoredRecord, SearchCandidate};

/// Number of metadata text fields on a candidate.
pub const METADATA_FIELD_COUNT: usize = 6;
