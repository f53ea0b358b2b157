//! Example: Browsing currencies, pairs and market data.
//!
//! Run with: SIMPLESWAP_API_KEY=... cargo run --example currencies

use simpleswap_api_client::auth::EnvCredentials;
use simpleswap_api_client::rest::SwapRestClient;
use simpleswap_api_client::types::RateType;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::try_from_env().ok_or("SIMPLESWAP_API_KEY is not set")?;
    let client = SwapRestClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    println!("=== Currency ===");
    let btc = client.get_currency("btc").await?;
    println!("{} ({}) on {}", btc.name, btc.symbol, btc.network);

    println!("\n=== Floating-rate pairs for BTC ===");
    let pairs = client.get_pairs(RateType::Floating, "btc").await?;
    println!("{} pairs, first few: {:?}", pairs.len(), &pairs[..pairs.len().min(5)]);

    println!("\n=== Market Info ===");
    let markets = client.get_market_info().await?;
    for market in markets.iter().take(5) {
        println!(
            "{} -> {}: rate={}, min={}, max={}",
            market.currency_from,
            market.currency_to,
            market.rate,
            market.min,
            market
                .max
                .map(|max| max.to_string())
                .unwrap_or_else(|| "unbounded".to_string())
        );
    }

    Ok(())
}
