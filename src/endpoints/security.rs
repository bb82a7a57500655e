//! Account security: anti-phishing code, emergency cancel.

use crate::client::NobitexClient;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Params, Route};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

const RESOURCE: &str = "security";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AntiPhishingResponse {
    anti_phishing_code: String,
}

pub struct SecurityApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> SecurityApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    /// The currently configured anti-phishing code.
    pub async fn anti_phishing_code(&self) -> Result<String, NobitexError> {
        let route = Route::new(RESOURCE).segment("anti-phishing");
        let data = self
            .client
            .dispatcher
            .send(Method::POST, &route.to_path(), vec![], vec![], None, CacheMode::Bypass)
            .await?;
        let parsed: AntiPhishingResponse = serde_json::from_value(data)?;
        Ok(parsed.anti_phishing_code)
    }

    /// Set a new anti-phishing code; `otp_code` is the 2FA code.
    pub async fn set_anti_phishing(
        &self,
        code: &str,
        otp_code: &str,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("code", code)
            .insert("otpCode", otp_code)
            .into_body();

        let route = Route::new(RESOURCE).segment("anti-phishing");
        self.client
            .dispatcher
            .send(Method::POST, &route.to_path(), vec![], vec![], Some(body), CacheMode::Bypass)
            .await
    }

    /// Arm the emergency cancel switch.
    pub async fn activate_emergency_cancel(&self) -> Result<Value, NobitexError> {
        let route = Route::new(RESOURCE)
            .segment("emergency-cancel")
            .segment("activate");
        self.client
            .dispatcher
            .send(Method::GET, &route.to_path(), vec![], vec![], None, CacheMode::Bypass)
            .await
    }
}
