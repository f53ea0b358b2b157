//! Example: Quoting and creating an exchange.
//!
//! Run with: SIMPLESWAP_API_KEY=... cargo run --example create_exchange

use rust_decimal::Decimal;
use simpleswap_api_client::auth::EnvCredentials;
use simpleswap_api_client::rest::SwapRestClient;
use simpleswap_api_client::rest::exchanges::{ExchangeConfig, ExchangesRequest};
use simpleswap_api_client::types::RateType;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = EnvCredentials::try_from_env().ok_or("SIMPLESWAP_API_KEY is not set")?;
    let client = SwapRestClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    let amount: Decimal = "1.77".parse()?;

    let ranges = client.get_ranges(RateType::Floating, "ltc", "btc").await?;
    println!("Range: {} .. {:?}", ranges.min, ranges.max);
    if !ranges.contains(amount) {
        println!("{amount} LTC is outside the accepted range");
        return Ok(());
    }

    if !client
        .check_exchanges(RateType::Floating, "ltc", "btc", amount)
        .await?
    {
        println!("Exchange is not possible right now");
        return Ok(());
    }

    let estimate = client
        .get_estimated(RateType::Floating, "ltc", "btc", amount)
        .await?;
    println!("{amount} LTC ~ {estimate} BTC");

    let config = ExchangeConfig::new(
        RateType::Floating,
        "ltc",
        "btc",
        amount,
        "1KyG8cnqU6TpZbHBMUCcsARxKLmzPEhf9",
    )
    .refund_address("LXMt7yYkPvsdpXa29By38p4VYnurpECnrs");

    let exchange = client.create_exchange(&config, "", "").await?;
    println!("Created exchange {} ({})", exchange.id, exchange.status);
    println!("Deposit address: {:?}", exchange.address_from);

    let recent = client.get_exchanges(&ExchangesRequest::new(5, 0)).await?;
    println!("{} recent exchanges", recent.len());

    Ok(())
}
