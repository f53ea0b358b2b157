//! Example: Working with SimpleSwapError and ApiError.
//!
//! Run with: cargo run --example error_handling

use simpleswap_api_client::SimpleSwapError;
use simpleswap_api_client::rest::SwapRestClient;

#[tokio::main]
async fn main() {
    // An invalid key makes the API reject every call with a structured error.
    let client = SwapRestClient::new("invalid-key");

    match client.get_currency("btc").await {
        Ok(currency) => println!("Unexpected success: {}", currency.name),
        Err(SimpleSwapError::Api(api_error)) => {
            println!("API error: {}", api_error);
            println!("Unauthorized: {}", api_error.is_unauthorized());
            println!("Trace id: {}", api_error.trace_id);
        }
        Err(err) if err.is_transport() => println!("Network problem: {}", err),
        Err(err) if err.is_decode() => println!("Unexpected response body: {}", err),
        Err(err) => println!("Other error: {}", err),
    }
}
