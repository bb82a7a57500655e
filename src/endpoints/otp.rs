//! One-time password delivery.

use crate::client::NobitexClient;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Params, Route};
use crate::core::types::{OtpKind, OtpUsage};
use reqwest::Method;
use serde_json::Value;

const RESOURCE: &str = "otp";

pub struct OtpApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> OtpApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    /// Ask the server to deliver a one-time password.
    pub async fn request(&self, kind: OtpKind, usage: OtpUsage) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("type", kind.as_str())
            .insert("usage", usage.as_str())
            .into_body();

        let route = Route::new(RESOURCE).segment("request");
        self.client
            .dispatcher
            .send(Method::GET, &route.to_path(), vec![], vec![], Some(body), CacheMode::Bypass)
            .await
    }
}
