//! Search-box query interpretation.
//!
//! A list view filters on a single text field. Empty text shows everything,
//! text that reads as a whole number is an id lookup, and anything else is a
//! case-insensitive name search.

/// A parsed search-box query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No filter.
    All,
    /// Exact id lookup (zero or one result). Negative ids are valid input
    /// that simply match nothing.
    Id(i32),
    /// Case-insensitive substring match on the name.
    Name(String),
}

impl SearchQuery {
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return SearchQuery::All;
        }
        match text.trim().parse::<i32>() {
            Ok(id) => SearchQuery::Id(id),
            Err(_) => SearchQuery::Name(text.to_string()),
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        SearchQuery::parse(text)
    }
}
