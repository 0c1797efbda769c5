//! Free-text query decomposition.
//!
//! A query like `"Brookline Bancorp Inc USA 2022 10-K/A"` is split into four
//! structured components: company name, country, year, and report type.
//! Decomposition is memoized per raw query string so a run with thousands of
//! candidates for the same query parses it once.

pub mod decomposer;
pub mod error;
pub mod types;


pub use decomposer::QueryDecomposer;
pub use error::DecomposeError;
pub use types::{Component, QueryComponents};
