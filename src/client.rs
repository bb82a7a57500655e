use crate::core::config::NobitexConfig;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheConfig, Dispatcher, HttpTransport, ReqwestTransport, Session};
use crate::endpoints::{
    AuthApi, DepthApi, MarketApi, OptionsApi, OrderbookApi, OtpApi, SecurityApi, TradesApi,
    UsersApi, WalletsApi,
};
use std::sync::Arc;
use std::time::Duration;

/// Client for the Nobitex REST API.
///
/// One instance holds one logical session. The instance is cheap to share
/// behind an `Arc`; authentication calls (`auth().login()` / `logout()`)
/// mutate the session, so concurrent logins from several tasks race and
/// should be serialized by the caller.
///
/// ```no_run
/// use nobitex::{NobitexClient, NobitexConfig};
///
/// # async fn example() -> Result<(), nobitex::NobitexError> {
/// let client = NobitexClient::new(NobitexConfig::new("user", "pass")?)?;
/// let token = client.auth().login().await?;
/// let book = client.orderbook().get(nobitex::Currency::BTC, nobitex::QuoteCurrency::Irt).await?;
/// # Ok(())
/// # }
/// ```
pub struct NobitexClient {
    pub(crate) config: NobitexConfig,
    pub(crate) dispatcher: Dispatcher,
}

impl NobitexClient {
    /// Build a client with the live HTTP transport.
    pub fn new(config: NobitexConfig) -> Result<Self, NobitexError> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout_seconds)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client over an injected transport (tests, instrumentation).
    pub fn with_transport(config: NobitexConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let session = Arc::new(match config.credentials.token_value() {
            Some(token) => Session::with_token(token),
            None => Session::new(),
        });
        let dispatcher = Dispatcher::new(config.origin(), transport, session, config.verbose);
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &NobitexConfig {
        &self.config
    }

    /// The session holding the current token/device.
    pub fn session(&self) -> &Arc<Session> {
        self.dispatcher.session()
    }

    /// Direct access to the dispatcher, for endpoints this crate does not
    /// wrap yet or for cached calls outside the built-in facades.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    // ── Caching ──────────────────────────────────────────────────────────

    /// Turn on response caching for cache-eligible calls.
    pub async fn enable_cache(&self, config: CacheConfig) -> Result<(), NobitexError> {
        self.dispatcher.enable_cache(config).await
    }

    /// Turn caching off; with `clear`, purge stored entries first.
    pub async fn disable_cache(&self, clear: bool) -> Result<(), NobitexError> {
        self.dispatcher.disable_cache(clear).await
    }

    /// Purge the whole cache, or only entries older than `older_than`.
    pub async fn clear_cache(&self, older_than: Option<Duration>) -> Result<(), NobitexError> {
        self.dispatcher.clear_cache(older_than).await
    }

    // ── Resource families ────────────────────────────────────────────────

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn depth(&self) -> DepthApi<'_> {
        DepthApi::new(self)
    }

    pub fn market(&self) -> MarketApi<'_> {
        MarketApi::new(self)
    }

    pub fn options(&self) -> OptionsApi<'_> {
        OptionsApi::new(self)
    }

    pub fn orderbook(&self) -> OrderbookApi<'_> {
        OrderbookApi::new(self)
    }

    pub fn otp(&self) -> OtpApi<'_> {
        OtpApi::new(self)
    }

    pub fn security(&self) -> SecurityApi<'_> {
        SecurityApi::new(self)
    }

    pub fn trades(&self) -> TradesApi<'_> {
        TradesApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn wallets(&self) -> WalletsApi<'_> {
        WalletsApi::new(self)
    }
}

impl std::fmt::Debug for NobitexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NobitexClient")
            .field("username", &self.config.credentials.username())
            .field("testnet", &self.config.testnet)
            .finish_non_exhaustive()
    }
}
