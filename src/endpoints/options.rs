//! Exchange-wide options and settings.

use crate::client::NobitexClient;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Route};
use reqwest::Method;
use serde_json::Value;

const RESOURCE: &str = "options";
const VERSION: &str = "v2";

pub struct OptionsApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> OptionsApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Value, NobitexError> {
        let route = Route::new(RESOURCE).version(VERSION);
        self.client
            .dispatcher
            .send(Method::GET, &route.to_path(), vec![], vec![], None, CacheMode::cached())
            .await
    }
}
