//! Query decomposition with a bounded memo cache.

use std::sync::{Arc, LazyLock};

use moka::sync::Cache;
use regex::Regex;
use tracing::debug;

use super::error::DecomposeError;
use super::types::QueryComponents;

/// `site:`/`filetype:` search directives plus their argument. These are
/// engine hints, not query content, and are removed before parsing.
static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:site|filetype):\S*").expect("directive regex is valid"));

/// First standalone four-digit number in the query is taken as the year.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("year regex is valid"));

/// Parses free-text queries into [`QueryComponents`], memoizing results.
///
/// The cache is keyed by the exact raw query string (directives included) so
/// repeated queries skip re-parsing. Eviction is LRU with a bounded
/// capacity; the cache is safe for concurrent use, and a race on a novel
/// query at worst recomputes the (pure) parse.
///
/// # Parsing limitation
///
/// The text before the year is split at its *last* space into
/// `(company_name, country)`. Multi-word country names ("United States")
/// therefore end up partly inside the company name. This heuristic is kept
/// as-is for compatibility with historical output.
pub struct QueryDecomposer {
    cache: Cache<String, Arc<QueryComponents>>,
}

impl QueryDecomposer {
    pub const DEFAULT_CACHE_CAPACITY: u64 = 100;

    /// Creates a decomposer with the default cache capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a decomposer with a max cached-query capacity (LRU eviction).
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Decomposes `query`, consulting the memo cache first.
    ///
    /// Only successful decompositions are cached; failures are cheap to
    /// recompute and are reported to the caller each time.
    pub fn decompose(&self, query: &str) -> Result<Arc<QueryComponents>, DecomposeError> {
        if let Some(components) = self.cache.get(query) {
            return Ok(components);
        }

        let components = Arc::new(parse_query(query)?);
        debug!(
            query = %query,
            company_name = ?components.company_name,
            country = ?components.country,
            year = ?components.year,
            report_type = ?components.report_type,
            "Decomposed query"
        );

        self.cache.insert(query.to_string(), Arc::clone(&components));
        Ok(components)
    }

    /// Returns the number of cached decompositions.
    pub fn cached_queries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Returns `true` if `query` has a cached decomposition.
    pub fn contains(&self, query: &str) -> bool {
        self.cache.contains_key(query)
    }
}

impl Default for QueryDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryDecomposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryDecomposer")
            .field("cached_queries", &self.cache.entry_count())
            .finish()
    }
}

/// Uncached parse of a raw query string.
fn parse_query(query: &str) -> Result<QueryComponents, DecomposeError> {
    let stripped = DIRECTIVE_RE.replace_all(query, " ");
    let stripped = stripped.as_ref();

    let year_match = YEAR_RE
        .find(stripped)
        .ok_or_else(|| DecomposeError::YearNotFound {
            query: query.to_string(),
        })?;
    let year = year_match.as_str().to_string();

    // Everything after the year is the report type; may legitimately be
    // absent ("Acme Corp USA 2021").
    let report_type = stripped[year_match.end()..].trim();
    let report_type = (!report_type.is_empty()).then(|| report_type.to_string());

    // Everything before the year splits at its last space into company name
    // and country.
    let before_year = stripped[..year_match.start()].trim();
    let (company_name, country) = before_year
        .rsplit_once(' ')
        .map(|(company, country)| (company.trim(), country.trim()))
        .filter(|(company, country)| !company.is_empty() && !country.is_empty())
        .ok_or_else(|| DecomposeError::AmbiguousCompanyCountrySplit {
            query: query.to_string(),
        })?;

    Ok(QueryComponents {
        company_name: Some(company_name.to_string()),
        country: Some(country.to_string()),
        year: Some(year),
        report_type,
    })
}
