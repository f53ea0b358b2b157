//! Query-string fragments appended after the `api_key` parameter.

use std::fmt::Display;

/// Ordered list of pre-formatted `&key=value` fragments.
///
/// Values are rendered with [`Display`] and are **not** percent-encoded; the
/// caller is responsible for passing URL-safe values (symbols, ids, numbers,
/// RFC 3339 timestamps).
///
/// Optional parameters follow one rule: a value that is absent or renders to
/// an empty string is left out of the query instead of being sent as `key=`.
///
/// ```rust
/// use simpleswap_api_client::rest::Query;
///
/// let query = Query::new()
///     .param("limit", 50)
///     .optional("gte", None::<&str>)
///     .optional("lte", Some(""));
/// assert_eq!(query.to_string(), "&limit=50");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    fragments: Vec<String>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required `&key=value` pair.
    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.fragments.push(format!("&{}={}", key, value));
        self
    }

    /// Append `&key=value` only when the value is present and non-empty.
    pub fn optional<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()).filter(|v| !v.is_empty()) {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// True if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterate over the fragments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RateType;
    use rust_decimal::Decimal;

    #[test]
    fn test_params_keep_order() {
        let query = Query::new()
            .param("fixed", RateType::Fixed)
            .param("currency_from", "ltc")
            .param("currency_to", "btc")
            .param("amount", "1.77".parse::<Decimal>().unwrap());
        assert_eq!(
            query.to_string(),
            "&fixed=true&currency_from=ltc&currency_to=btc&amount=1.77"
        );
        assert_eq!(query.iter().count(), 4);
    }

    #[test]
    fn test_optional_omits_absent_and_empty() {
        let query = Query::new()
            .param("limit", 10)
            .optional("gte", Some("2024-01-01T00:00:00Z"))
            .optional("lte", Some(String::new()))
            .optional::<&str>("offset", None);
        assert_eq!(query.to_string(), "&limit=10&gte=2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_empty_query() {
        let query = Query::new();
        assert!(query.is_empty());
        assert_eq!(query.to_string(), "");
    }
}
