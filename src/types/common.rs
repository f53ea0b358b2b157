//! Common domain types for the SimpleSwap API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether an exchange uses a fixed or a floating rate.
///
/// On the wire this is the boolean `fixed` flag, both in query strings and in
/// JSON request bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RateType {
    /// Market rate at the time the deposit is received
    #[default]
    Floating,
    /// Rate locked when the exchange is created
    Fixed,
}

impl RateType {
    /// True for fixed-rate exchanges.
    pub fn is_fixed(self) -> bool {
        matches!(self, RateType::Fixed)
    }
}

impl From<bool> for RateType {
    fn from(fixed: bool) -> Self {
        if fixed {
            RateType::Fixed
        } else {
            RateType::Floating
        }
    }
}

impl std::fmt::Display for RateType {
    /// Formats as the value of the `fixed` query parameter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.is_fixed())
    }
}

impl Serialize for RateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_fixed())
    }
}

impl<'de> Deserialize<'de> for RateType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(RateType::from)
    }
}

/// Lifecycle status of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeStatus {
    /// Waiting for the user's deposit
    Waiting,
    /// Deposit seen, waiting for confirmations
    Confirming,
    /// Deposit confirmed, exchange in progress
    Exchanging,
    /// Sending funds to the recipient address
    Sending,
    /// Funds delivered
    Finished,
    /// Exchange failed
    Failed,
    /// Funds returned to the refund address
    Refunded,
    /// No deposit arrived in time
    Expired,
    /// Held for AML/KYC verification
    Verifying,
    /// A status this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl ExchangeStatus {
    /// True once the exchange can no longer change state.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            ExchangeStatus::Finished
                | ExchangeStatus::Failed
                | ExchangeStatus::Refunded
                | ExchangeStatus::Expired
        )
    }
}

impl std::fmt::Display for ExchangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExchangeStatus::Waiting => "waiting",
            ExchangeStatus::Confirming => "confirming",
            ExchangeStatus::Exchanging => "exchanging",
            ExchangeStatus::Sending => "sending",
            ExchangeStatus::Finished => "finished",
            ExchangeStatus::Failed => "failed",
            ExchangeStatus::Refunded => "refunded",
            ExchangeStatus::Expired => "expired",
            ExchangeStatus::Verifying => "verifying",
            ExchangeStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
