//! Types for currency and pair endpoints.

use serde::Deserialize;
use std::collections::HashMap;

use crate::types::serde_helpers::{empty_string_as_none, null_as_default};

/// A currency supported by SimpleSwap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Currency {
    /// Display name, e.g. `Bitcoin`.
    pub name: String,
    /// Ticker symbol used in every other call, e.g. `btc`.
    pub symbol: String,
    /// Network the currency lives on.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub network: String,
    /// Whether deposits/withdrawals need an extra id (memo, tag).
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub has_extra_id: bool,
    /// Name of the extra id field, if any.
    #[serde(default, with = "empty_string_as_none")]
    pub extra_id: Option<String>,
    /// Logo URL.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub image: String,
    /// Warnings to show when sending this currency.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub warnings_from: Vec<String>,
    /// Warnings to show when receiving this currency.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub warnings_to: Vec<String>,
    /// Regex validating addresses.
    #[serde(default, with = "empty_string_as_none")]
    pub validation_address: Option<String>,
    /// Regex validating the extra id.
    #[serde(default, with = "empty_string_as_none")]
    pub validation_extra: Option<String>,
    /// Address explorer URL template.
    #[serde(default, with = "empty_string_as_none")]
    pub address_explorer: Option<String>,
    /// Transaction explorer URL template.
    #[serde(default, with = "empty_string_as_none")]
    pub tx_explorer: Option<String>,
    /// Confirmations required on deposit.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub confirmations_from: String,
}

/// Symbols a currency can be exchanged to.
pub type Pairs = Vec<String>;

/// Every available pair, keyed by source symbol.
pub type AllPairs = HashMap<String, Vec<String>>;
