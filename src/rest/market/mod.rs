//! Market info endpoint.

mod types;

pub use types::*;

use crate::error::SimpleSwapError;
use crate::rest::client::{ApiRequest, SwapRestClient};
use crate::rest::endpoints;
use crate::rest::transport::Transport;

impl<T: Transport> SwapRestClient<T> {
    /// Get rates and limits for every pair.
    pub async fn get_market_info(&self) -> Result<Vec<MarketInfo>, SimpleSwapError> {
        self.execute(ApiRequest::get(endpoints::GET_MARKET_INFO))
            .await
    }
}
