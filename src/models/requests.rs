//! Request DTOs for the lookup proxy
//!
//! Defines the query-string parameters accepted by the lookup endpoint.

/// Error message returned when no usable query was supplied
pub const MISSING_QUERY: &str = "Query parameter is required";

/// Query-string parameters of a lookup request (`?query=...`)
///
/// The query is a free-form phone or identity number. It is forwarded and
/// used as a cache key exactly as received; its shape is never checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupParams {
    /// The lookup token
    pub query: Option<String>,
}

impl LookupParams {
    /// Builds params from decoded query-string pairs.
    ///
    /// When `query` is repeated the first occurrence is used.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let query = pairs
            .into_iter()
            .find(|(name, _)| name == "query")
            .map(|(_, value)| value);
        Self { query }
    }

    /// Returns the query if present and non-empty.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<&str, String> {
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => Ok(query),
            _ => Err(MISSING_QUERY.to_string()),
        }
    }
}
