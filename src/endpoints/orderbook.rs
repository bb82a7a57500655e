//! Order book snapshots.

use crate::client::NobitexClient;
use crate::core::currency::Currency;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Route};
use crate::core::types::QuoteCurrency;
use reqwest::Method;
use serde_json::Value;

const RESOURCE: &str = "orderbook";
const VERSION: &str = "v3";

pub struct OrderbookApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> OrderbookApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    /// Order book for `currency` against `quote`.
    pub async fn get(
        &self,
        currency: Currency,
        quote: QuoteCurrency,
    ) -> Result<Value, NobitexError> {
        let route = Route::new(RESOURCE)
            .version(VERSION)
            .segment(currency.resolve(quote)?);
        self.client
            .dispatcher
            .send(Method::GET, &route.to_path(), vec![], vec![], None, CacheMode::cached())
            .await
    }
}
