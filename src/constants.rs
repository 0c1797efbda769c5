//! Crate-wide default values.

/// Default original-rank cutoff: candidates ranked beyond this never enter
/// scoring.
pub const DEFAULT_CUTOFF_K: u32 = 500;

/// Default capacity of the query-decomposition memo cache.
pub const DEFAULT_QUERY_CACHE_CAPACITY: u64 = 100;
