use serde::{Deserialize, Serialize};

/// Identifier for one structured query component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    CompanyName,
    Country,
    Year,
    ReportType,
}

impl Component {
    /// All components, in weight order (heaviest first).
    pub const ALL: [Component; 4] = [
        Component::CompanyName,
        Component::ReportType,
        Component::Year,
        Component::Country,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::CompanyName => "company_name",
            Component::Country => "country",
            Component::Year => "year",
            Component::ReportType => "report_type",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured components extracted from one free-text query.
///
/// Produced once per distinct query string and shared read-only across all
/// of that query's candidates. `year`, when present, is a four-digit
/// numeral; `company_name` and `country` partition the text preceding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryComponents {
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub year: Option<String>,
    pub report_type: Option<String>,
}

impl QueryComponents {
    /// Returns every component with its value, in [`Component::ALL`] order.
    pub fn fields(&self) -> [(Component, Option<&str>); 4] {
        [
            (Component::CompanyName, self.company_name.as_deref()),
            (Component::ReportType, self.report_type.as_deref()),
            (Component::Year, self.year.as_deref()),
            (Component::Country, self.country.as_deref()),
        ]
    }

    /// Returns `true` if no component carries a value.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }
}
