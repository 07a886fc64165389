use std::fmt;

/// A free-text search query for a geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCandidate(String);

impl QueryCandidate {
    /// Returns `None` for blank queries.
    pub fn new(query: impl Into<String>) -> Option<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            None
        } else {
            Some(Self(query))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
