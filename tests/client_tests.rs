//! End-to-end facade tests over an injected recording transport: route
//! composition, parameter formation, auth state transitions.

use async_trait::async_trait;
use nobitex::core::kernel::{HttpRequest, HttpResponse, HttpTransport};
use nobitex::endpoints::{NewOrder, OrderListQuery, WithdrawRequest};
use nobitex::{
    Currency, NobitexClient, NobitexConfig, NobitexError, OrderSide, OrderStatusFilter, OtpKind,
    OtpUsage, QuoteCurrency, TradeType, WalletKind,
};
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses (falling back to `200 {}`) and records every
/// request it sees.
struct RecordingTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn enqueue(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn last(&self) -> HttpRequest {
        self.seen.lock().unwrap().last().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NobitexError> {
        self.seen.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(HttpResponse {
                status: 200,
                body: "{}".to_string(),
            }))
    }
}

fn password_client(transport: Arc<RecordingTransport>) -> NobitexClient {
    NobitexClient::with_transport(NobitexConfig::new("user", "pass").unwrap(), transport)
}

fn token_client(transport: Arc<RecordingTransport>) -> NobitexClient {
    NobitexClient::with_transport(NobitexConfig::with_token("tok123").unwrap(), transport)
}

#[tokio::test]
async fn depth_composes_versioned_market_route() {
    let transport = RecordingTransport::new();
    let client = password_client(transport.clone());

    client
        .depth()
        .get(Currency::BTC, QuoteCurrency::Irt)
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.url, "https://api.nobitex.ir/v2/depth/BTCIRT");
}

#[tokio::test]
async fn orderbook_uses_v3_and_usdt_code() {
    let transport = RecordingTransport::new();
    let client = password_client(transport.clone());

    client
        .orderbook()
        .get(Currency::ETH, QuoteCurrency::Usdt)
        .await
        .unwrap();

    assert_eq!(
        transport.last().url,
        "https://api.nobitex.ir/v3/orderbook/ETHUSDT"
    );
}

#[tokio::test]
async fn options_route_keeps_trailing_slash() {
    let transport = RecordingTransport::new();
    let client = password_client(transport.clone());

    client.options().get().await.unwrap();
    assert_eq!(transport.last().url, "https://api.nobitex.ir/v2/options/");
}

#[tokio::test]
async fn testnet_flag_switches_origin() {
    let transport = RecordingTransport::new();
    let config = NobitexConfig::new("user", "pass").unwrap().testnet(true);
    let client = NobitexClient::with_transport(config, transport.clone());

    client
        .trades()
        .get(Currency::BTC, QuoteCurrency::Irt)
        .await
        .unwrap();

    assert_eq!(
        transport.last().url,
        "https://testnetapi.nobitex.ir/v2/trades/BTCIRT"
    );
}

#[tokio::test]
async fn login_posts_credentials_and_stores_token() {
    let transport = RecordingTransport::new();
    transport.enqueue(200, r#"{"key":"issued-token","device":"dev-1"}"#);
    let client = password_client(transport.clone());

    assert!(!client.session().has_token().await);
    let token = client.auth().login().await.unwrap();
    assert_eq!(token, "issued-token");

    let request = transport.last();
    assert_eq!(request.method, reqwest::Method::POST);
    assert_eq!(request.url, "https://api.nobitex.ir/auth/login/");
    assert_eq!(
        request.body.unwrap(),
        json!({
            "username": "user",
            "password": "pass",
            "remember": "no",
            "captcha": "api",
        })
    );

    assert!(client.session().has_token().await);
    assert_eq!(client.session().device().await.as_deref(), Some("dev-1"));

    // The stored token now rides along on authenticated calls.
    client.users().profile().await.unwrap();
    assert!(transport.last().headers.contains(&(
        "Authorization".to_string(),
        "Token issued-token".to_string()
    )));
}

#[tokio::test]
async fn login_remembered_asks_for_long_lived_token() {
    let transport = RecordingTransport::new();
    transport.enqueue(200, r#"{"key":"k","device":null}"#);
    let client = password_client(transport.clone());

    client.auth().login_remembered().await.unwrap();
    assert_eq!(transport.last().body.unwrap()["remember"], json!("yes"));
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    let transport = RecordingTransport::new();
    transport.enqueue(400, r#"{"detail":"invalid credentials"}"#);
    let client = password_client(transport.clone());

    let err = client.auth().login().await.unwrap_err();
    assert!(matches!(err, NobitexError::Api { status: 400, .. }));
    assert!(!client.session().has_token().await);
}

#[tokio::test]
async fn login_requires_password_credentials() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    let err = client.auth().login().await.unwrap_err();
    assert!(matches!(err, NobitexError::InvalidParameters(_)));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn logout_drops_token_before_the_request() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    client.auth().logout().await.unwrap();

    let request = transport.last();
    assert_eq!(request.url, "https://api.nobitex.ir/auth/logout/");
    assert!(!request
        .headers
        .iter()
        .any(|(name, _)| name == "Authorization"));
    assert!(!client.session().has_token().await);
}

#[tokio::test]
async fn add_order_sends_camel_case_body() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    let order = NewOrder::limit(
        OrderSide::Buy,
        Currency::BTC,
        Currency::RIAL,
        Decimal::new(5, 3),
        Decimal::new(1_000_000_000, 0),
    )
    .client_order_id("order-7");
    client.market().add_order(order).await.unwrap();

    let request = transport.last();
    assert_eq!(request.url, "https://api.nobitex.ir/market/orders/add");
    assert_eq!(
        request.body.unwrap(),
        json!({
            "type": "buy",
            "srcCurrency": "btc",
            "dstCurrency": "rls",
            "amount": "0.005",
            "price": "1000000000",
            "execution": "limit",
            "clientOrderId": "order-7",
        })
    );
}

#[tokio::test]
async fn list_orders_is_a_get_with_a_body() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    let query = OrderListQuery::new(
        OrderSide::Sell,
        TradeType::Spot,
        Currency::BTC,
        Currency::USDT,
    )
    .status(OrderStatusFilter::All);
    client.market().list_orders(query).await.unwrap();

    let request = transport.last();
    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.url, "https://api.nobitex.ir/market/orders/list");
    let body = request.body.unwrap();
    assert_eq!(body["type"], json!("sell"));
    assert_eq!(body["tradeType"], json!("spot"));
    assert_eq!(body["details"], json!(1));
    assert_eq!(body["fromId"], json!(1));
    assert_eq!(body["status"], json!("all"));
}

#[tokio::test]
async fn otp_request_is_a_get_with_a_body() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    client
        .otp()
        .request(OtpKind::Email, OtpUsage::AntiPhishingCode)
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.method, reqwest::Method::GET);
    assert_eq!(request.url, "https://api.nobitex.ir/otp/request");
    assert_eq!(
        request.body.unwrap(),
        json!({"type": "email", "usage": "anti_phishing_code"})
    );
}

#[tokio::test]
async fn wallet_listing_joins_currency_symbols() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    client
        .wallets()
        .list(WalletKind::Spot, Some(&[Currency::BTC, Currency::ETH]))
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.url, "https://api.nobitex.ir/v2/wallets/");
    assert!(request
        .query
        .contains(&("type".to_string(), "spot".to_string())));
    assert!(request
        .query
        .contains(&("currencies".to_string(), "btc,eth".to_string())));
}

#[tokio::test]
async fn withdraw_sends_optional_fields_only_when_set() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    let request = WithdrawRequest::new(42)
        .amount(Decimal::new(15, 1))
        .address("bc1qexample")
        .no_tag(true);
    client.users().withdraw(request).await.unwrap();

    let body = transport.last().body.unwrap();
    assert_eq!(
        body,
        json!({
            "wallet": 42,
            "amount": "1.5",
            "address": "bc1qexample",
            "noTag": true,
        })
    );
}

#[tokio::test]
async fn favorite_markets_resolve_against_the_quote() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    client
        .users()
        .set_favorite_markets(&[Currency::BTC, Currency::ETH], QuoteCurrency::Usdt)
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(
        request.url,
        "https://api.nobitex.ir/users/markets/favorite"
    );
    assert_eq!(
        request.body.unwrap(),
        json!({"market": "BTCUSDT,ETHUSDT"})
    );
}

#[tokio::test]
async fn unresolvable_market_codes_fail_before_the_network() {
    let transport = RecordingTransport::new();
    let client = token_client(transport.clone());

    // An entry with no USDT-quoted market.
    let irt_only = Currency::new("irtonly", "IRTONLYIRT", "", "irtonly");
    let err = client
        .users()
        .set_favorite_markets(&[irt_only], QuoteCurrency::Usdt)
        .await
        .unwrap_err();

    assert!(matches!(err, NobitexError::InvalidCurrency { .. }));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn server_faults_surface_without_body_parsing() {
    let transport = RecordingTransport::new();
    transport.enqueue(503, "upstream unavailable");
    let client = token_client(transport.clone());

    let err = client.users().profile().await.unwrap_err();
    assert!(matches!(err, NobitexError::Server { status: 503 }));
}
