use rust_decimal::Decimal;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use simpleswap_api_client::rest::{SimpleSwapClient, SwapRestClient};
use simpleswap_api_client::types::RateType;

/// Quote `amount` only when the pair is currently exchangeable.
async fn quote<C: SimpleSwapClient>(
    client: &C,
    amount: Decimal,
) -> simpleswap_api_client::Result<Option<Decimal>> {
    if !client
        .check_exchanges(RateType::Floating, "ltc", "btc", amount)
        .await?
    {
        return Ok(None);
    }
    let estimate = client
        .get_estimated(RateType::Floating, "ltc", "btc", amount)
        .await?;
    Ok(Some(estimate))
}

async fn server_with(possible: bool) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/check_exchanges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(possible)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get_estimated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("0.5")))
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> SwapRestClient {
    assert_ok!(
        SwapRestClient::builder()
            .base_url(server.uri())
            .api_key("K")
            .build()
    )
}

#[tokio::test]
async fn test_generic_caller_gets_estimate() {
    let server = server_with(true).await;
    let estimate = assert_ok!(quote(&client_for(&server), Decimal::TEN).await);
    assert_eq!(estimate, Some(Decimal::new(5, 1)));
}

#[tokio::test]
async fn test_generic_caller_skips_unavailable_pair() {
    let server = server_with(false).await;
    let estimate = assert_ok!(quote(&client_for(&server), Decimal::TEN).await);
    assert!(estimate.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_generic_caller_propagates_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/check_exchanges"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": 401,
            "error": "unauthorized",
            "description": "invalid api key",
            "traceId": "t-401"
        })))
        .mount(&server)
        .await;

    let err = assert_err!(quote(&client_for(&server), Decimal::TEN).await);
    assert!(err.api_error().unwrap().is_unauthorized());
}
