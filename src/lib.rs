//! # SimpleSwap Client
//!
//! An async Rust client library for the SimpleSwap cryptocurrency exchange REST API.
//!
//! ## Features
//!
//! - Every public endpoint: currencies, pairs, exchanges, ranges, estimates, market info
//! - Structured API errors that can be matched on status and error text
//! - Pluggable HTTP transport (reqwest with tracing by default)
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use simpleswap_api_client::rest::SwapRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapRestClient::new("your-api-key");
//!     let currencies = client.get_all_currencies().await?;
//!     println!("{} currencies supported", currencies.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, SimpleSwapError};
pub use rest::{SimpleSwapClient, SwapRestClient};
pub use types::common::{ExchangeStatus, RateType};

/// Result type alias using SimpleSwapError
pub type Result<T> = std::result::Result<T, SimpleSwapError>;
