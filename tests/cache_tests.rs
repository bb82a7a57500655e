//! Response caching exercised through the public client surface.

use async_trait::async_trait;
use nobitex::core::kernel::{HttpRequest, HttpResponse, HttpTransport};
use nobitex::{
    CacheBackend, CacheConfig, Currency, NobitexClient, NobitexConfig, NobitexError, QuoteCurrency,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Counts exchanges and always answers `200` with a fixed body.
struct CountingTransport {
    body: String,
    calls: AtomicUsize,
}

impl CountingTransport {
    fn new(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, NobitexError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse {
            status: 200,
            body: self.body.clone(),
        })
    }
}

fn client(transport: Arc<CountingTransport>) -> NobitexClient {
    NobitexClient::with_transport(NobitexConfig::with_token("tok").unwrap(), transport)
}

#[tokio::test]
async fn repeated_market_reads_hit_the_cache() {
    let transport = CountingTransport::new(r#"{"asks":[],"bids":[]}"#);
    let c = client(transport.clone());
    c.enable_cache(CacheConfig::new(CacheBackend::Memory))
        .await
        .unwrap();

    let first = c
        .depth()
        .get(Currency::BTC, QuoteCurrency::Irt)
        .await
        .unwrap();
    let second = c
        .depth()
        .get(Currency::BTC, QuoteCurrency::Irt)
        .await
        .unwrap();

    assert_eq!(transport.calls(), 1);
    assert_eq!(first, second);
    assert_eq!(first, json!({"asks": [], "bids": []}));
}

#[tokio::test]
async fn different_markets_never_share_entries() {
    let transport = CountingTransport::new("{}");
    let c = client(transport.clone());
    c.enable_cache(CacheConfig::new(CacheBackend::Memory))
        .await
        .unwrap();

    c.depth().get(Currency::BTC, QuoteCurrency::Irt).await.unwrap();
    c.depth().get(Currency::ETH, QuoteCurrency::Irt).await.unwrap();
    c.depth().get(Currency::BTC, QuoteCurrency::Usdt).await.unwrap();

    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn account_calls_always_bypass_the_cache() {
    let transport = CountingTransport::new("{}");
    let c = client(transport.clone());
    c.enable_cache(CacheConfig::new(CacheBackend::Memory))
        .await
        .unwrap();

    c.users().profile().await.unwrap();
    c.users().profile().await.unwrap();

    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn clearing_recent_entries_forces_a_refetch() {
    let transport = CountingTransport::new("{}");
    let c = client(transport.clone());
    c.enable_cache(
        CacheConfig::new(CacheBackend::Memory).expire_after(Duration::from_secs(3600)),
    )
    .await
    .unwrap();

    c.options().get().await.unwrap();
    c.options().get().await.unwrap();
    assert_eq!(transport.calls(), 1);

    c.clear_cache(Some(Duration::from_secs(0))).await.unwrap();
    c.options().get().await.unwrap();
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn disabling_the_cache_restores_passthrough() {
    let transport = CountingTransport::new("{}");
    let c = client(transport.clone());
    c.enable_cache(CacheConfig::new(CacheBackend::Memory))
        .await
        .unwrap();

    c.options().get().await.unwrap();
    c.disable_cache(false).await.unwrap();

    c.options().get().await.unwrap();
    c.options().get().await.unwrap();
    assert_eq!(transport.calls(), 3);
}

#[tokio::test]
async fn purge_disable_empties_the_backend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    let transport = CountingTransport::new("{}");
    let c = client(transport.clone());
    c.enable_cache(CacheConfig::new(CacheBackend::File { path: path.clone() }))
        .await
        .unwrap();
    c.options().get().await.unwrap();
    assert_eq!(transport.calls(), 1);

    c.disable_cache(true).await.unwrap();

    // Re-enabling over the same file finds nothing to replay.
    c.enable_cache(CacheConfig::new(CacheBackend::File { path }))
        .await
        .unwrap();
    c.options().get().await.unwrap();
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn file_backend_survives_a_new_client() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("responses.json");

    let transport = CountingTransport::new(r#"{"last":123}"#);
    let c = client(transport.clone());
    c.enable_cache(CacheConfig::new(CacheBackend::File { path: path.clone() }))
        .await
        .unwrap();
    c.trades().get(Currency::BTC, QuoteCurrency::Irt).await.unwrap();
    assert_eq!(transport.calls(), 1);

    // A fresh client over the same file replays without a network exchange.
    let transport2 = CountingTransport::new("{}");
    let c2 = client(transport2.clone());
    c2.enable_cache(CacheConfig::new(CacheBackend::File { path }))
        .await
        .unwrap();
    let replayed = c2
        .trades()
        .get(Currency::BTC, QuoteCurrency::Irt)
        .await
        .unwrap();

    assert_eq!(transport2.calls(), 0);
    assert_eq!(replayed, json!({"last": 123}));
}
