//! Types for exchange endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::error::SimpleSwapError;
use crate::rest::currencies::Currency;
use crate::rest::query::Query;
use crate::types::serde_helpers::{empty_string_as_none, null_as_default, optional_decimal};
use crate::types::{ExchangeStatus, RateType};

/// Request body for creating an exchange.
///
/// # Example
///
/// ```rust
/// use simpleswap_api_client::rest::exchanges::ExchangeConfig;
/// use simpleswap_api_client::types::RateType;
///
/// let config = ExchangeConfig::new(
///     RateType::Floating,
///     "ltc",
///     "btc",
///     "1".parse().unwrap(),
///     "1KyG8cnqU6TpZbHBMUCcsARxKLmzPEhf9",
/// )
/// .refund_address("LXMt7yYkPvsdpXa29By38p4VYnurpECnrs");
/// assert_eq!(config.currency_from, "ltc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeConfig {
    /// Fixed or floating rate.
    pub fixed: RateType,
    /// Symbol being sent.
    pub currency_from: String,
    /// Symbol being received.
    pub currency_to: String,
    /// Amount of `currency_from` to send.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Recipient address.
    pub address_to: String,
    /// Recipient extra id (memo, tag).
    #[serde(with = "empty_string_as_none")]
    pub extra_id_to: Option<String>,
    /// Address to refund to if the exchange fails.
    #[serde(with = "empty_string_as_none")]
    pub user_refund_address: Option<String>,
    /// Extra id for the refund address.
    #[serde(with = "empty_string_as_none")]
    pub user_refund_extra_id: Option<String>,
}

impl ExchangeConfig {
    /// Create a config with the required fields.
    pub fn new(
        rate: RateType,
        currency_from: impl Into<String>,
        currency_to: impl Into<String>,
        amount: Decimal,
        address_to: impl Into<String>,
    ) -> Self {
        Self {
            fixed: rate,
            currency_from: currency_from.into(),
            currency_to: currency_to.into(),
            amount,
            address_to: address_to.into(),
            extra_id_to: None,
            user_refund_address: None,
            user_refund_extra_id: None,
        }
    }

    /// Set the recipient extra id.
    pub fn extra_id_to(mut self, extra_id: impl Into<String>) -> Self {
        self.extra_id_to = Some(extra_id.into());
        self
    }

    /// Set the refund address.
    pub fn refund_address(mut self, address: impl Into<String>) -> Self {
        self.user_refund_address = Some(address.into());
        self
    }

    /// Set the refund extra id.
    pub fn refund_extra_id(mut self, extra_id: impl Into<String>) -> Self {
        self.user_refund_extra_id = Some(extra_id.into());
        self
    }
}

/// An exchange as reported by SimpleSwap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Exchange {
    /// Exchange id.
    pub id: String,
    /// Rate type as a string (`floating`/`fixed`).
    #[serde(rename = "type", default, deserialize_with = "null_as_default::deserialize")]
    pub exchange_type: String,
    /// Creation time.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub timestamp: String,
    /// Last update time.
    #[serde(default, with = "empty_string_as_none")]
    pub updated_at: Option<String>,
    /// Symbol being sent.
    pub currency_from: String,
    /// Symbol being received.
    pub currency_to: String,
    /// Amount the user sends.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub amount_from: Option<Decimal>,
    /// Amount the user is expected to receive.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub expected_amount: Option<Decimal>,
    /// Amount actually sent to the user.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub amount_to: Option<Decimal>,
    /// Deposit address.
    #[serde(default, with = "empty_string_as_none")]
    pub address_from: Option<String>,
    /// Recipient address.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub address_to: String,
    /// Deposit extra id.
    #[serde(default, with = "empty_string_as_none")]
    pub extra_id_from: Option<String>,
    /// Recipient extra id.
    #[serde(default, with = "empty_string_as_none")]
    pub extra_id_to: Option<String>,
    /// Refund address.
    #[serde(default, with = "empty_string_as_none")]
    pub user_refund_address: Option<String>,
    /// Refund extra id.
    #[serde(default, with = "empty_string_as_none")]
    pub user_refund_extra_id: Option<String>,
    /// Deposit transaction hash.
    #[serde(default, with = "empty_string_as_none")]
    pub tx_from: Option<String>,
    /// Payout transaction hash.
    #[serde(default, with = "empty_string_as_none")]
    pub tx_to: Option<String>,
    /// Current status.
    pub status: ExchangeStatus,
    /// Tracking page URL.
    #[serde(default, with = "empty_string_as_none")]
    pub redirect_url: Option<String>,
    /// Details of the currencies involved, keyed by symbol.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub currencies: HashMap<String, Currency>,
}

/// Pagination and time-range filter for listing exchanges.
///
/// `gte`/`lte` are passed through verbatim; a missing or empty bound is
/// left out of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangesRequest {
    /// Maximum number of exchanges to return.
    pub limit: u32,
    /// Number of exchanges to skip.
    pub offset: u32,
    /// Only exchanges created at or after this time.
    pub gte: Option<String>,
    /// Only exchanges created at or before this time.
    pub lte: Option<String>,
}

impl ExchangesRequest {
    /// Create a request for one page of exchanges.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            gte: None,
            lte: None,
        }
    }

    /// Set the lower time bound, passed through as-is.
    pub fn gte(mut self, gte: impl Into<String>) -> Self {
        self.gte = Some(gte.into());
        self
    }

    /// Set the upper time bound, passed through as-is.
    pub fn lte(mut self, lte: impl Into<String>) -> Self {
        self.lte = Some(lte.into());
        self
    }

    /// Set the lower time bound from a timestamp (sent as UTC RFC 3339).
    pub fn since(self, at: OffsetDateTime) -> Result<Self, SimpleSwapError> {
        Ok(self.gte(format_utc(at)?))
    }

    /// Set the upper time bound from a timestamp (sent as UTC RFC 3339).
    pub fn until(self, at: OffsetDateTime) -> Result<Self, SimpleSwapError> {
        Ok(self.lte(format_utc(at)?))
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .param("limit", self.limit)
            .param("offset", self.offset)
            .optional("gte", self.gte.as_deref())
            .optional("lte", self.lte.as_deref())
    }
}

impl Default for ExchangesRequest {
    fn default() -> Self {
        Self::new(50, 0)
    }
}

// UTC keeps the rendering free of '+', which would need escaping.
fn format_utc(at: OffsetDateTime) -> Result<String, SimpleSwapError> {
    Ok(at.to_offset(UtcOffset::UTC).format(&Rfc3339)?)
}

/// Minimum and maximum amount for a pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ranges {
    /// Smallest amount accepted.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub min: Decimal,
    /// Largest amount accepted; `None` means unbounded.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max: Option<Decimal>,
}

impl Ranges {
    /// Check whether `amount` falls inside the range.
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_exchange_config_body() {
        let config = ExchangeConfig::new(
            RateType::Floating,
            "ltc",
            "btc",
            Decimal::new(15, 1),
            "1KyG8cnqU6TpZbHBMUCcsARxKLmzPEhf9",
        );
        let body: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(body["fixed"], serde_json::json!(false));
        assert_eq!(body["currency_from"], "ltc");
        assert_eq!(body["amount"].as_f64(), Some(1.5));
        assert_eq!(body["extra_id_to"], "");
        assert_eq!(body["user_refund_address"], "");
    }

    #[test]
    fn test_exchanges_request_query_omits_empty_bounds() {
        let request = ExchangesRequest::new(50, 0);
        assert_eq!(request.to_query().to_string(), "&limit=50&offset=0");

        let request = ExchangesRequest::new(10, 20).gte("").lte("2024-02-01T00:00:00Z");
        assert_eq!(
            request.to_query().to_string(),
            "&limit=10&offset=20&lte=2024-02-01T00:00:00Z"
        );
    }

    #[test]
    fn test_exchanges_request_since_renders_utc() {
        let request = ExchangesRequest::default()
            .since(datetime!(2024-01-01 02:00 +02:00))
            .unwrap();
        assert_eq!(request.gte.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_exchange_tolerates_null_fields() {
        let exchange: Exchange = serde_json::from_str(
            r#"{
                "id": "gnt3fwnw75t8796h",
                "type": null,
                "timestamp": null,
                "currency_from": "ltc",
                "currency_to": "btc",
                "amount_from": 1,
                "address_to": null,
                "status": "waiting",
                "currencies": null
            }"#,
        )
        .unwrap();
        assert_eq!(exchange.exchange_type, "");
        assert_eq!(exchange.timestamp, "");
        assert_eq!(exchange.address_to, "");
        assert_eq!(exchange.amount_from, Some(Decimal::ONE));
        assert!(exchange.currencies.is_empty());
    }

    #[test]
    fn test_ranges_null_min_and_numeric_max() {
        let ranges: Ranges = serde_json::from_str(r#"{"min":null,"max":2}"#).unwrap();
        assert_eq!(ranges.min, Decimal::ZERO);
        assert_eq!(ranges.max, Some(Decimal::new(2, 0)));

        let ranges: Ranges = serde_json::from_str(r#"{"min":"0.5","max":2}"#).unwrap();
        assert!(ranges.contains(Decimal::new(2, 0)));
    }

    #[test]
    fn test_ranges_contains() {
        let ranges: Ranges = serde_json::from_str(r#"{"min":"0.5","max":null}"#).unwrap();
        assert!(ranges.contains(Decimal::ONE));
        assert!(!ranges.contains(Decimal::new(1, 1)));

        let ranges: Ranges = serde_json::from_str(r#"{"min":"0.5","max":"2"}"#).unwrap();
        assert!(!ranges.contains(Decimal::new(3, 0)));
    }
}
