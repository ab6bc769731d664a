//! Query state and request parameter construction.

/// Base URL of the backend proxy. Compiled in; there is no runtime config.
pub const TRENDS_ENDPOINT: &str = "http://127.0.0.1:8000/google-api/";

/// Fixed user-facing message for any fetch failure.
pub const FETCH_FAILED_MSG: &str = "Failed to fetch data. Please try again later.";

/// The two user-editable inputs driving every request.
///
/// No validation is performed on either string; the date-range grammar
/// ("today 1-m", "now 7-d", ...) belongs entirely to the trends provider.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub term: String,
    pub date_range: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            term: "python".to_string(),
            date_range: "today 1-m".to_string(),
        }
    }
}

/// Build the query parameters for one fetch, in wire order.
pub fn query_pairs(term: &str, date_range: &str) -> [(&'static str, String); 2] {
    [
        ("query", term.to_string()),
        ("date", date_range.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_carry_both_inputs() {
        let pairs = query_pairs("rust", "today 12-m");
        assert_eq!(pairs[0], ("query", "rust".to_string()));
        assert_eq!(pairs[1], ("date", "today 12-m".to_string()));
    }

    #[test]
    fn test_default_query_state() {
        let state = QueryState::default();
        assert_eq!(state.term, "python");
        assert_eq!(state.date_range, "today 1-m");
    }
}
