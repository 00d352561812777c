//! The HTTP API served on a real socket, called with reqwest.

use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

use aura::api::{self, ApiState};
use aura::estimation::currency::{DisplayCurrency, ExchangeRates};
use aura::estimation::EstimationTable;

use crate::mock_sender::MockSender;

/// Start the API on an ephemeral port; dropping the sender stops it.
async fn start(sender: MockSender) -> (String, oneshot::Sender<()>) {
    let probe = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = probe.local_addr().unwrap();
    drop(probe);

    let state = Arc::new(ApiState::new(
        EstimationTable::new(),
        ExchangeRates::new(dec!(16260)).unwrap(),
        DisplayCurrency::Usd,
        Arc::new(sender),
    ));
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    tokio::spawn(api::serve(state, addr, async move {
        let _ = stop_rx.await;
    }));

    let base = format!("http://{addr}");
    let http = reqwest::Client::new();
    for _ in 0..50 {
        if http.get(format!("{base}/health")).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    (base, stop_tx)
}

#[tokio::test]
async fn test_estimate_over_http() {
    let (base, _stop) = start(MockSender::new()).await;
    let json: Value = reqwest::get(format!(
        "{base}/api/estimate?location=Seminyak&villaCategory=Luxury&bedrooms=2&tier=essential"
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();

    assert_eq!(json["formatted"]["currency"], "USD");
    assert!(json["formatted"]["annualGrossRevenue"].as_str().unwrap().starts_with('$'));
    assert_eq!(json["ownerIncome"]["tier"], "essential");
    let gross = json["estimate"]["annualGrossRevenue"].as_f64().unwrap();
    let expenses = json["estimate"]["annualOperationalExpenses"].as_f64().unwrap();
    assert!((expenses - gross * 0.15).abs() <= 0.5 + 1e-9);
    assert_eq!(expenses.fract(), 0.0);
}

#[tokio::test]
async fn test_inquiry_relay_over_http() {
    let sender = MockSender::new();
    let (base, _stop) = start(sender.clone()).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/inquiries"))
        .json(&json!({
            "type": "contact-form",
            "data": { "name": "Made", "email": "made@example.com", "message": "Hello" }
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["reference"], "AURA-000123");
    assert_eq!(body["id"], "mock_1");
    assert_eq!(sender.sent()[0].reply_to(), "made@example.com");

    sender.set_rejection(Some(503));
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/inquiries"))
        .json(&json!({
            "type": "contact-form",
            "data": { "name": "Made", "email": "made@example.com", "message": "Again" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 502);
}
