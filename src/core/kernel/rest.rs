//! Request dispatch: the layer that turns (method, route, params) into an
//! HTTP exchange, manages auth state, and classifies the outcome.

use crate::core::config::ConfigError;
use crate::core::errors::NobitexError;
use crate::core::kernel::cache::{CacheConfig, CacheLayer, CacheMode};
use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// A fully-formed request, ready for a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Raw outcome of one exchange. Classification happens in the dispatcher,
/// not the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Pluggable HTTP transport. The live implementation is [`ReqwestTransport`];
/// tests inject recording stubs.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NobitexError>;
}

/// Live transport over a pooled reqwest client. TLS verification is always
/// on; reqwest never disables it unless asked, and we never ask.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout_seconds: u64) -> Result<Self, NobitexError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("nobitex-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ConfigError::InvalidConfiguration(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NobitexError> {
        let mut req = self.client.request(request.method, &request.url);
        for (key, value) in &request.headers {
            req = req.header(key, value);
        }
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Explicit, caller-visible authentication state.
///
/// The token is written by `auth().login()` (on success only) and cleared by
/// `auth().logout()`; nothing else mutates it. A client holds exactly one
/// session; share the client if you need the token across tasks.
#[derive(Default)]
pub struct Session {
    token: RwLock<Option<Secret<String>>>,
    device: RwLock<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(Secret::new(token.into()))),
            device: RwLock::new(None),
        }
    }

    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(Secret::new(token.into()));
    }

    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Exposes the token value (needed to build the auth header).
    pub async fn token(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.expose_secret().clone())
    }

    /// Device identifier captured from the login response. Not used by the
    /// dispatcher; kept for future device-bound auth.
    pub async fn device(&self) -> Option<String> {
        self.device.read().await.clone()
    }

    pub async fn set_device(&self, device: impl Into<String>) {
        *self.device.write().await = Some(device.into());
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

/// The request dispatcher.
///
/// One instance per client. Cache state is interior-mutable so enabling or
/// disabling caching does not require `&mut` access through the client.
pub struct Dispatcher {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    session: Arc<Session>,
    cache: RwLock<Option<CacheLayer>>,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        session: Arc<Session>,
        verbose: bool,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
            cache: RwLock::new(None),
            verbose,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Resolve the backend and start caching cache-eligible calls.
    pub async fn enable_cache(&self, config: CacheConfig) -> Result<(), NobitexError> {
        let layer = CacheLayer::resolve(config).await?;
        *self.cache.write().await = Some(layer);
        Ok(())
    }

    /// Stop caching. With `clear`, purge stored entries first; otherwise they
    /// are abandoned in the backend store.
    pub async fn disable_cache(&self, clear: bool) -> Result<(), NobitexError> {
        let mut guard = self.cache.write().await;
        if let Some(layer) = guard.take() {
            if clear {
                layer.clear(None).await?;
            }
        }
        Ok(())
    }

    /// Purge all entries, or only those older than `older_than`. A no-op when
    /// caching is disabled.
    pub async fn clear_cache(&self, older_than: Option<Duration>) -> Result<(), NobitexError> {
        match self.cache.read().await.as_ref() {
            Some(layer) => layer.clear(older_than).await,
            None => Ok(()),
        }
    }

    /// Perform one exchange and classify the outcome.
    ///
    /// Caller headers are sent as given, except that `Content-Type` and
    /// `Authorization` are always overwritten by the dispatcher's own values.
    ///
    /// Status bands: `[200, 300)` success, `[300, 500)` typed API error with
    /// the parsed body, `>= 500` server fault with no body parse. A parse
    /// failure inside `[200, 500)` is surfaced as is, since the API contract
    /// says those bands carry JSON.
    pub async fn send(
        &self,
        method: Method,
        route: &str,
        headers: Vec<(String, String)>,
        query: Vec<(String, String)>,
        body: Option<Value>,
        cache: CacheMode,
    ) -> Result<Value, NobitexError> {
        let route = if route.starts_with('/') {
            route.to_string()
        } else {
            format!("/{route}")
        };
        let url = format!("{}{}", self.base_url, route);

        let mut headers: Vec<(String, String)> = headers
            .into_iter()
            .filter(|(name, _)| {
                !name.eq_ignore_ascii_case("content-type")
                    && !name.eq_ignore_ascii_case("authorization")
            })
            .collect();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        if let Some(token) = self.session.token().await {
            headers.push(("Authorization".to_string(), format!("Token {token}")));
        }

        // Caching applies only when enabled on the client AND requested for
        // this call.
        let cache_guard = self.cache.read().await;
        let eligible = match (cache, cache_guard.as_ref()) {
            (CacheMode::Use { expire_after }, Some(layer)) => {
                let key = CacheLayer::fingerprint(method.as_str(), &url, &query, body.as_ref());
                Some((key, expire_after, layer))
            }
            _ => None,
        };

        if let Some((key, expire_override, layer)) = &eligible {
            if let Some(hit) = layer.lookup(key, *expire_override).await? {
                self.echo(&method, &url, hit.status, true);
                return classify(hit.status, &hit.body);
            }
        }

        let response = self
            .transport
            .execute(HttpRequest {
                method: method.clone(),
                url: url.clone(),
                headers,
                query,
                body,
            })
            .await?;

        if let Some((key, _, layer)) = &eligible {
            layer.store(key, response.status, &response.body).await?;
        }

        self.echo(&method, &url, response.status, false);
        classify(response.status, &response.body)
    }

    fn echo(&self, method: &Method, url: &str, status: u16, cache_hit: bool) {
        if self.verbose {
            info!(%method, url, status, cache_hit, "request");
        } else {
            debug!(%method, url, status, cache_hit, "request");
        }
    }
}

fn classify(status: u16, body: &str) -> Result<Value, NobitexError> {
    if status >= 500 {
        return Err(NobitexError::Server { status });
    }
    let parsed: Value = serde_json::from_str(body)?;
    if (200..300).contains(&status) {
        Ok(parsed)
    } else {
        Err(NobitexError::Api {
            status,
            body: parsed,
        })
    }
}
