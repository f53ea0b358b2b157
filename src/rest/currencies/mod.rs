//! Currency and pair endpoints.

mod types;

pub use types::*;

use crate::error::SimpleSwapError;
use crate::rest::client::{ApiRequest, SwapRestClient};
use crate::rest::endpoints;
use crate::rest::query::Query;
use crate::rest::transport::Transport;
use crate::types::RateType;

impl<T: Transport> SwapRestClient<T> {
    /// Get a single currency by symbol.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use simpleswap_api_client::rest::SwapRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SwapRestClient::new("your-api-key");
    ///     let btc = client.get_currency("btc").await?;
    ///     println!("{} ({})", btc.name, btc.symbol);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_currency(&self, symbol: &str) -> Result<Currency, SimpleSwapError> {
        let query = Query::new().param("symbol", symbol);
        self.execute(ApiRequest::get(endpoints::GET_CURRENCY).query(query))
            .await
    }

    /// List every supported currency.
    pub async fn get_all_currencies(&self) -> Result<Vec<Currency>, SimpleSwapError> {
        self.execute(ApiRequest::get(endpoints::GET_ALL_CURRENCIES))
            .await
    }

    /// List the symbols `symbol` can be exchanged to.
    ///
    /// # Arguments
    ///
    /// * `rate` - Fixed or floating rate pairs.
    /// * `symbol` - Source currency symbol.
    pub async fn get_pairs(&self, rate: RateType, symbol: &str) -> Result<Pairs, SimpleSwapError> {
        let query = Query::new().param("fixed", rate).param("symbol", symbol);
        self.execute(ApiRequest::get(endpoints::GET_PAIRS).query(query))
            .await
    }

    /// List every available pair, keyed by source symbol.
    pub async fn get_all_pairs(&self, rate: RateType) -> Result<AllPairs, SimpleSwapError> {
        let query = Query::new().param("fixed", rate);
        self.execute(ApiRequest::get(endpoints::GET_ALL_PAIRS).query(query))
            .await
    }
}
