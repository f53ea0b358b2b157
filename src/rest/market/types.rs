//! Types for the market info endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::serde_helpers::{null_as_default, optional_decimal};

/// Current rate and limits for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketInfo {
    /// Symbol being sent.
    pub currency_from: String,
    /// Symbol being received.
    pub currency_to: String,
    /// Smallest amount accepted.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub min: Decimal,
    /// Largest amount accepted; `None` means unbounded.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max: Option<Decimal>,
    /// Units of `currency_to` per unit of `currency_from`.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub rate: Decimal,
}
