//! Request DTOs for the directory API
//!
//! Raw query-string values are accepted as text and normalized here, so
//! malformed numbers fall back to defaults instead of rejecting the request.

use crate::query::{SearchParams, DEFAULT_LIMIT, MAX_LIMIT};

/// Query string for the list operation (GET /api/advocates)
///
/// # Fields
/// - `searchQuery`: free-text filter, trimmed
/// - `page`: 1-based page number
/// - `limit`: page size, clamped to 1..=100
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search_query: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "searchQuery" => &mut query.search_query,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Normalizes raw values into search parameters.
    ///
    /// Non-numeric or missing numbers take their defaults; out-of-range
    /// numbers are clamped.
    pub fn into_params(self) -> SearchParams {
        let query = self
            .search_query
            .map(|q| q.trim().to_string())
            .unwrap_or_default();

        let page = parse_number(self.page.as_deref())
            .map(|p| p.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);

        let limit = parse_number(self.limit.as_deref())
            .map(|l| l.clamp(1, MAX_LIMIT as i64) as u32)
            .unwrap_or(DEFAULT_LIMIT);

        SearchParams { query, page, limit }
    }
}

/// Parses a numeric query value, truncating any fractional part.
///
/// Returns `None` for missing, blank, non-numeric or non-finite input.
fn parse_number(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        // `as` saturates at the i64 bounds
        .map(|n| n.trunc() as i64)
}

/// Parses a path id into a positive integer.
///
/// Accepts integer text or integral numeric text such as `"3.0"`.
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let id = match raw.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            let n = raw.parse::<f64>().ok()?;
            if !n.is_finite() || n.fract() != 0.0 || n.abs() > i64::MAX as f64 {
                return None;
            }
            n as i64
        }
    };
    (id >= 1).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: Option<&str>, page: Option<&str>, limit: Option<&str>) -> ListQuery {
        ListQuery {
            search_query: search.map(String::from),
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let params = ListQuery::default().into_params();
        assert_eq!(params.query, "");
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_LIMIT);
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs() {
        let params = ListQuery::from_pairs(pairs(&[
            ("searchQuery", "  jane "),
            ("page", "2"),
            ("sort", "name"),
        ]))
        .into_params();
        assert_eq!(params.query, "jane");
        assert_eq!(params.page, 2);
        assert_eq!(params.limit, 20);
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let q = ListQuery::from_pairs(pairs(&[
            ("page", "1"),
            ("page", "2"),
            ("limit", "5"),
            ("limit", "7"),
            ("searchQuery", "john"),
            ("searchQuery", "jane"),
        ]));
        assert_eq!(q.page.as_deref(), Some("1"));
        assert_eq!(q.limit.as_deref(), Some("5"));
        assert_eq!(q.search_query.as_deref(), Some("john"));
    }

    #[test]
    fn test_page_clamped_and_defaulted() {
        assert_eq!(query(None, Some("0"), None).into_params().page, 1);
        assert_eq!(query(None, Some("-4"), None).into_params().page, 1);
        assert_eq!(query(None, Some("abc"), None).into_params().page, 1);
        assert_eq!(query(None, Some(""), None).into_params().page, 1);
        assert_eq!(query(None, Some("3.9"), None).into_params().page, 3);
        assert_eq!(query(None, Some("1e40"), None).into_params().page, u32::MAX);
    }

    #[test]
    fn test_limit_clamped_and_defaulted() {
        assert_eq!(query(None, None, Some("0")).into_params().limit, 1);
        assert_eq!(query(None, None, Some("500")).into_params().limit, 100);
        assert_eq!(query(None, None, Some("NaN")).into_params().limit, 20);
        assert_eq!(query(None, None, Some("inf")).into_params().limit, 20);
        assert_eq!(query(None, None, Some("25")).into_params().limit, 25);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id(" 42 "), Some(42));
        assert_eq!(parse_id("3.0"), Some(3));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("Infinity"), None);
        assert_eq!(parse_id(""), None);
    }
}
