//! SimpleSwap REST API client.
//!
//! Every endpoint runs through one pipeline:
//! 1. compose `{base}/{endpoint}?api_key={key}` plus the endpoint's [`Query`],
//! 2. send it through a [`Transport`],
//! 3. decode the body as the payload on `200`, or as an
//!    [`ApiError`](crate::error::ApiError) otherwise.
//!
//! # Trait-based API
//!
//! The [`SimpleSwapClient`] trait abstracts all REST API operations, enabling
//! mock implementations for testing. The [`Transport`] trait is the lower
//! seam: swap it to test the pipeline itself without a network.
//!
//! ```rust,ignore
//! use simpleswap_api_client::rest::{SimpleSwapClient, SwapRestClient};
//!
//! async fn use_client<C: SimpleSwapClient>(client: &C) -> Result<(), simpleswap_api_client::SimpleSwapError> {
//!     let btc = client.get_currency("btc").await?;
//!     println!("{}", btc.name);
//!     Ok(())
//! }
//! ```

mod client;
pub mod currencies;
pub mod endpoints;
pub mod exchanges;
pub mod market;
mod query;
mod response;
mod traits;
mod transport;

#[cfg(test)]
mod test_support;

pub use client::{ApiRequest, SwapRestClient, SwapRestClientBuilder};
pub use query::Query;
pub use response::decode_response;
pub use traits::SimpleSwapClient;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
