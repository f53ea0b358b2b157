//! Exchange endpoints: creation, lookup, listing and rate estimation.

mod types;

pub use types::*;

use reqwest::header::HeaderName;
use rust_decimal::Decimal;

use crate::error::SimpleSwapError;
use crate::rest::client::{ApiRequest, SwapRestClient};
use crate::rest::endpoints;
use crate::rest::query::Query;
use crate::rest::transport::Transport;
use crate::types::RateType;

/// Header forwarding the end user's IP address.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");
/// Header forwarding the end user's browser user agent.
pub const X_USER_AGENT: HeaderName = HeaderName::from_static("x-user-agent");

fn pair_query(rate: RateType, currency_from: &str, currency_to: &str) -> Query {
    Query::new()
        .param("fixed", rate)
        .param("currency_from", currency_from)
        .param("currency_to", currency_to)
}

impl<T: Transport> SwapRestClient<T> {
    /// Create an exchange.
    ///
    /// `forwarded_for` and `user_agent` describe the end user when the call
    /// is made on their behalf; pass empty strings to leave the
    /// `X-Forwarded-For` / `X-User-Agent` headers out.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use simpleswap_api_client::rest::SwapRestClient;
    /// use simpleswap_api_client::rest::exchanges::ExchangeConfig;
    /// use simpleswap_api_client::types::RateType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SwapRestClient::new("your-api-key");
    ///     let config = ExchangeConfig::new(
    ///         RateType::Floating,
    ///         "ltc",
    ///         "btc",
    ///         "1".parse()?,
    ///         "1KyG8cnqU6TpZbHBMUCcsARxKLmzPEhf9",
    ///     );
    ///     let exchange = client.create_exchange(&config, "", "").await?;
    ///     println!("send to {:?}", exchange.address_from);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_exchange(
        &self,
        config: &ExchangeConfig,
        forwarded_for: &str,
        user_agent: &str,
    ) -> Result<Exchange, SimpleSwapError> {
        let request = ApiRequest::post_json(endpoints::CREATE_EXCHANGE, config)?
            .optional_header(X_FORWARDED_FOR, forwarded_for)?
            .optional_header(X_USER_AGENT, user_agent)?;
        self.execute(request).await
    }

    /// Get an exchange by id.
    pub async fn get_exchange(&self, id: &str) -> Result<Exchange, SimpleSwapError> {
        let query = Query::new().param("id", id);
        self.execute(ApiRequest::get(endpoints::GET_EXCHANGE).query(query))
            .await
    }

    /// List exchanges created with this API key.
    ///
    /// # Arguments
    ///
    /// * `request` - Page and optional time-range filter.
    pub async fn get_exchanges(
        &self,
        request: &ExchangesRequest,
    ) -> Result<Vec<Exchange>, SimpleSwapError> {
        self.execute(ApiRequest::get(endpoints::GET_EXCHANGES).query(request.to_query()))
            .await
    }

    /// Get the minimum and maximum exchange amounts for a pair.
    pub async fn get_ranges(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
    ) -> Result<Ranges, SimpleSwapError> {
        let query = pair_query(rate, currency_from, currency_to);
        self.execute(ApiRequest::get(endpoints::GET_RANGES).query(query))
            .await
    }

    /// Get the estimated amount of `currency_to` received for `amount`.
    pub async fn get_estimated(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
        amount: Decimal,
    ) -> Result<Decimal, SimpleSwapError> {
        let query = pair_query(rate, currency_from, currency_to).param("amount", amount);
        self.execute(ApiRequest::get(endpoints::GET_ESTIMATED).query(query))
            .await
    }

    /// Check whether an exchange of `amount` is currently possible.
    pub async fn check_exchanges(
        &self,
        rate: RateType,
        currency_from: &str,
        currency_to: &str,
        amount: Decimal,
    ) -> Result<bool, SimpleSwapError> {
        let query = pair_query(rate, currency_from, currency_to).param("amount", amount);
        self.execute(ApiRequest::get(endpoints::CHECK_EXCHANGES).query(query))
            .await
    }
}
