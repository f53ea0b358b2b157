//! Custom serde helpers for SimpleSwap's serialization quirks.
//!
//! The API uses empty strings and `null` interchangeably for "no value", and
//! sends amounts as decimal strings (occasionally as bare numbers).

use serde::{Deserialize, Deserializer, Serializer, de};

/// Map `""` and `null` to `None`, and `None` back to `""`.
///
/// SimpleSwap expects optional ids (such as `extra_id_to`) to be present as
/// empty strings in request bodies, and returns either form in responses.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use simpleswap_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Payload {
///     #[serde(with = "empty_string_as_none", default)]
///     extra_id: Option<String>,
/// }
///
/// let payload: Payload = serde_json::from_str(r#"{"extra_id":""}"#).unwrap();
/// assert!(payload.extra_id.is_none());
///
/// let json = serde_json::to_string(&Payload { extra_id: None }).unwrap();
/// assert_eq!(json, r#"{"extra_id":""}"#);
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Serialize `None` as an empty string.
    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    /// Deserialize a string, returning None if null or empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Deserialize `null` as the type's default value.
///
/// `#[serde(default)]` only covers a missing key; SimpleSwap also sends
/// explicit `null` for fields it has no value for.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use simpleswap_api_client::types::serde_helpers::null_as_default;
///
/// #[derive(Deserialize, Debug)]
/// struct Asset {
///     #[serde(deserialize_with = "null_as_default::deserialize", default)]
///     network: String,
/// }
///
/// let asset: Asset = serde_json::from_str(r#"{"network":null}"#).unwrap();
/// assert_eq!(asset.network, "");
/// ```
pub mod null_as_default {
    use super::*;

    /// Deserialize a `T`, returning `T::default()` for `null`.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserialize an optional decimal sent as a string or a number.
///
/// `null` and `""` both mean "no value" (for example an unbounded maximum).
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use simpleswap_api_client::types::serde_helpers::optional_decimal;
///
/// #[derive(Deserialize, Debug)]
/// struct Range {
///     #[serde(deserialize_with = "optional_decimal::deserialize", default)]
///     max: Option<Decimal>,
/// }
///
/// let range: Range = serde_json::from_str(r#"{"max":null}"#).unwrap();
/// assert!(range.max.is_none());
///
/// let range: Range = serde_json::from_str(r#"{"max":"12.5"}"#).unwrap();
/// assert_eq!(range.max.unwrap().to_string(), "12.5");
///
/// let range: Range = serde_json::from_str(r#"{"max":2}"#).unwrap();
/// assert_eq!(range.max.unwrap().to_string(), "2");
/// ```
pub mod optional_decimal {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::Value;

    /// Deserialize `null`, `""`, a decimal string or a JSON number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => parse(s.trim()).map(Some),
            Some(Value::Number(n)) => parse(&n.to_string()).map(Some),
            Some(other) => Err(de::Error::custom(format!(
                "expected a decimal string or number, found {other}"
            ))),
        }
    }

    fn parse<E: de::Error>(s: &str) -> Result<Decimal, E> {
        s.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(de::Error::custom)
    }
}
