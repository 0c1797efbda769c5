use thiserror::Error;

/// Errors that can occur while decomposing a query string.
///
/// The decomposer reports failures to the caller; the pipeline decides
/// whether to skip the query group (the default policy) or proceed with a
/// partially empty component set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    /// No standalone four-digit number was found in the query.
    #[error("no four-digit year found in query '{query}'")]
    YearNotFound { query: String },

    /// The text before the year did not split into a non-empty company name
    /// and country at its last space.
    #[error("could not split company name and country in query '{query}'")]
    AmbiguousCompanyCountrySplit { query: String },
}

impl DecomposeError {
    /// Short machine-readable kind, used in logs and run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            DecomposeError::YearNotFound { .. } => "year_not_found",
            DecomposeError::AmbiguousCompanyCountrySplit { .. } => {
                "ambiguous_company_country_split"
            }
        }
    }

    /// The query string that failed to decompose.
    pub fn query(&self) -> &str {
        match self {
            DecomposeError::YearNotFound { query }
            | DecomposeError::AmbiguousCompanyCountrySplit { query } => query,
        }
    }
}
