//! Authentication: login, logout, websocket token.
//!
//! These endpoints require a trailing slash.

use crate::client::NobitexClient;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Params, Route};
use crate::core::types::api_bool;
use reqwest::Method;
use serde::Deserialize;

const RESOURCE: &str = "auth";

#[derive(Deserialize)]
struct LoginResponse {
    key: String,
    device: Option<String>,
}

#[derive(Deserialize)]
struct WebsocketTokenResponse {
    token: String,
}

pub struct AuthApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    /// Log in with the configured username/password and store the issued
    /// token (and device identifier) in the session. Returns the token.
    ///
    /// The session is mutated only when the server accepts the login; on
    /// failure any previously held token stays in place.
    pub async fn login(&self) -> Result<String, NobitexError> {
        self.login_inner(false).await
    }

    /// Like [`login`](Self::login), asking the server for a long-lived token.
    pub async fn login_remembered(&self) -> Result<String, NobitexError> {
        self.login_inner(true).await
    }

    async fn login_inner(&self, remember: bool) -> Result<String, NobitexError> {
        let credentials = &self.client.config.credentials;
        let (Some(username), Some(password)) =
            (credentials.username(), credentials.password_value())
        else {
            return Err(NobitexError::InvalidParameters(
                "username and password are required".to_string(),
            ));
        };

        let body = Params::new()
            .insert("username", username)
            .insert("password", password)
            .insert("remember", api_bool(remember))
            .insert("captcha", "api")
            .into_body();

        let route = Route::new(RESOURCE).segment("login").trailing_slash();
        let data = self
            .client
            .dispatcher
            .send(Method::POST, &route.to_path(), vec![], vec![], Some(body), CacheMode::Bypass)
            .await?;

        let parsed: LoginResponse = serde_json::from_value(data)?;
        let session = self.client.session();
        session.set_token(&parsed.key).await;
        if let Some(device) = parsed.device {
            session.set_device(device).await;
        }
        Ok(parsed.key)
    }

    /// Invalidate the session: the token is dropped locally, then the server
    /// side is told to revoke it.
    pub async fn logout(&self) -> Result<(), NobitexError> {
        self.client.session().clear_token().await;

        let route = Route::new(RESOURCE).segment("logout").trailing_slash();
        self.client
            .dispatcher
            .send(Method::POST, &route.to_path(), vec![], vec![], None, CacheMode::Bypass)
            .await?;
        Ok(())
    }

    /// Token for the websocket gateway.
    pub async fn websocket_token(&self) -> Result<String, NobitexError> {
        let route = Route::new(RESOURCE)
            .segment("ws")
            .segment("token")
            .trailing_slash();
        let data = self
            .client
            .dispatcher
            .send(Method::GET, &route.to_path(), vec![], vec![], None, CacheMode::Bypass)
            .await?;
        let parsed: WebsocketTokenResponse = serde_json::from_value(data)?;
        Ok(parsed.token)
    }
}
