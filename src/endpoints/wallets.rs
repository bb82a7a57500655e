//! Wallet listing and transfers between wallet kinds.

use crate::client::NobitexClient;
use crate::core::currency::Currency;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Params, Route};
use crate::core::types::WalletKind;
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

const RESOURCE: &str = "wallets";

pub struct WalletsApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> WalletsApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    /// Wallets of the given kind, optionally restricted to some currencies.
    pub async fn list(
        &self,
        kind: WalletKind,
        currencies: Option<&[Currency]>,
    ) -> Result<Value, NobitexError> {
        let currencies = currencies.map(|list| {
            list.iter()
                .map(|c| c.symbol)
                .collect::<Vec<_>>()
                .join(",")
        });

        let query = Params::new()
            .insert("type", kind.as_str())
            .insert_opt("currencies", currencies)
            .into_query();

        // This listing lives under /v2 while transfer stays unversioned.
        let route = Route::new(RESOURCE).version("v2");
        self.client
            .dispatcher
            .send(Method::GET, &route.to_path(), vec![], query, None, CacheMode::Bypass)
            .await
    }

    /// Move funds between the spot and margin wallets.
    pub async fn transfer(
        &self,
        currency: Currency,
        amount: Decimal,
        src: WalletKind,
        dst: WalletKind,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("currency", currency.symbol)
            .insert("amount", amount.to_string())
            .insert("src", src.as_str())
            .insert("dst", dst.as_str())
            .into_body();

        let route = Route::new(RESOURCE).segment("transfer");
        self.client
            .dispatcher
            .send(Method::POST, &route.to_path(), vec![], vec![], Some(body), CacheMode::Bypass)
            .await
    }
}
