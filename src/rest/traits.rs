//! Trait definition for the SimpleSwap REST API client.
//!
//! [`SimpleSwapClient`] abstracts every endpoint so application code can be
//! written against the trait and tested with a mock implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use simpleswap_api_client::rest::SimpleSwapClient;
//! use simpleswap_api_client::types::RateType;
//!
//! async fn quote<C: SimpleSwapClient>(client: &C) -> Result<(), simpleswap_api_client::SimpleSwapError> {
//!     let amount = "1.5".parse().unwrap();
//!     if client.check_exchanges(RateType::Floating, "ltc", "btc", amount).await? {
//!         let estimate = client.get_estimated(RateType::Floating, "ltc", "btc", amount).await?;
//!         println!("1.5 LTC ~ {estimate} BTC");
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::SimpleSwapError;
use crate::rest::client::SwapRestClient;
use crate::rest::currencies::{AllPairs, Currency, Pairs};
use crate::rest::exchanges::{Exchange, ExchangeConfig, ExchangesRequest, Ranges};
use crate::rest::market::MarketInfo;
use crate::rest::transport::Transport;
use crate::types::RateType;

/// Trait defining all SimpleSwap REST API operations.
///
/// All methods are async and return `Result<T, SimpleSwapError>`.
pub trait SimpleSwapClient: Send + Sync {
    // ========== Currencies ==========

    /// Get a single currency by symbol.
    fn get_currency(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Currency, SimpleSwapError>> + Send;

    /// List every supported currency.
    fn get_all_currencies(
        &self,
    ) -> impl Future<Output = Result<Vec<Currency>, SimpleSwapError>> + Send;

    /// List the symbols `symbol` can be exchanged to.
    fn get_pairs(
        &self,
        rate: RateType,
        symbol: &str,
    ) -> impl Future<Output = Result<Pairs, SimpleSwapError>> + Send;

    /// List every available pair.
    fn get_all_pairs(
        &self,
        rate: RateType,
    ) -> impl Future<Output = Result<AllPairs, SimpleSwapError>> + Send;

    // ========== Exchanges ==========

    /// Create an exchange.
    fn create_exchange(
        &self,
        config: &ExchangeConfig,
        forwarded_for: &str,
        user_agent: &str,
    ) -> impl Future<Output = Result<Exchange, SimpleSwapError>> + Send;

    /// Get an exchange by id.
    fn get_exchange(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Exchange, SimpleSwapError>> + Send;

    /// List exchanges created with this API key.
    fn get_exchanges(
        &self,
        request: &ExchangesRequest,
    ) -> impl Future<Output = Result<Vec<Exchange>, SimpleSwapError>> + Send;

    /// Get the minimum and maximum exchange amounts for a pair.
    fn get_ranges(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
    ) -> impl Future<Output = Result<Ranges, SimpleSwapError>> + Send;

    /// Get the estimated output amount.
    fn get_estimated(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<Decimal, SimpleSwapError>> + Send;

    /// Check whether an exchange is currently possible.
    fn check_exchanges(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<bool, SimpleSwapError>> + Send;

    // ========== Market ==========

    /// Get rates and limits for every pair.
    fn get_market_info(
        &self,
    ) -> impl Future<Output = Result<Vec<MarketInfo>, SimpleSwapError>> + Send;
}

impl<T: Transport> SimpleSwapClient for SwapRestClient<T> {
    async fn get_currency(&self, symbol: &str) -> Result<Currency, SimpleSwapError> {
        SwapRestClient::get_currency(self, symbol).await
    }

    async fn get_all_currencies(&self) -> Result<Vec<Currency>, SimpleSwapError> {
        SwapRestClient::get_all_currencies(self).await
    }

    async fn get_pairs(&self, rate: RateType, symbol: &str) -> Result<Pairs, SimpleSwapError> {
        SwapRestClient::get_pairs(self, rate, symbol).await
    }

    async fn get_all_pairs(&self, rate: RateType) -> Result<AllPairs, SimpleSwapError> {
        SwapRestClient::get_all_pairs(self, rate).await
    }

    async fn create_exchange(
        &self,
        config: &ExchangeConfig,
        forwarded_for: &str,
        user_agent: &str,
    ) -> Result<Exchange, SimpleSwapError> {
        SwapRestClient::create_exchange(self, config, forwarded_for, user_agent).await
    }

    async fn get_exchange(&self, id: &str) -> Result<Exchange, SimpleSwapError> {
        SwapRestClient::get_exchange(self, id).await
    }

    async fn get_exchanges(
        &self,
        request: &ExchangesRequest,
    ) -> Result<Vec<Exchange>, SimpleSwapError> {
        SwapRestClient::get_exchanges(self, request).await
    }

    async fn get_ranges(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
    ) -> Result<Ranges, SimpleSwapError> {
        SwapRestClient::get_ranges(self, rate, currency_from, currency_to).await
    }

    async fn get_estimated(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
        amount: Decimal,
    ) -> Result<Decimal, SimpleSwapError> {
        SwapRestClient::get_estimated(self, rate, currency_from, currency_to, amount).await
    }

    async fn check_exchanges(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
        amount: Decimal,
    ) -> Result<bool, SimpleSwapError> {
        SwapRestClient::check_exchanges(self, rate, currency_from, currency_to, amount).await
    }

    async fn get_market_info(&self) -> Result<Vec<MarketInfo>, SimpleSwapError> {
        SwapRestClient::get_market_info(self).await
    }
}
