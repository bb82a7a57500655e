//! User account: profile, cards/accounts, wallets, favorites, withdrawals.

use crate::client::NobitexClient;
use crate::core::currency::Currency;
use crate::core::errors::NobitexError;
use crate::core::kernel::{CacheMode, Params, Route};
use crate::core::types::{QuoteCurrency, WalletKind};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

const RESOURCE: &str = "users";

/// A withdrawal request. Start from [`WithdrawRequest::new`] and set the
/// fields the chosen network requires.
#[derive(Debug, Clone)]
pub struct WithdrawRequest {
    pub wallet_id: i64,
    pub network: Option<String>,
    pub invoice: Option<String>,
    pub amount: Option<Decimal>,
    pub address: Option<String>,
    pub explanations: Option<String>,
    pub no_tag: Option<bool>,
    pub tag: Option<String>,
}

impl WithdrawRequest {
    pub const fn new(wallet_id: i64) -> Self {
        Self {
            wallet_id,
            network: None,
            invoice: None,
            amount: None,
            address: None,
            explanations: None,
            no_tag: None,
            tag: None,
        }
    }

    #[must_use]
    pub fn network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    #[must_use]
    pub fn invoice(mut self, invoice: impl Into<String>) -> Self {
        self.invoice = Some(invoice.into());
        self
    }

    #[must_use]
    pub const fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn explanations(mut self, explanations: impl Into<String>) -> Self {
        self.explanations = Some(explanations.into());
        self
    }

    #[must_use]
    pub const fn no_tag(mut self, no_tag: bool) -> Self {
        self.no_tag = Some(no_tag);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

pub struct UsersApi<'a> {
    client: &'a NobitexClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a NobitexClient) -> Self {
        Self { client }
    }

    fn route(segments: &[&str]) -> Route {
        let mut route = Route::new(RESOURCE);
        for segment in segments {
            route = route.segment(*segment);
        }
        route
    }

    async fn get(&self, segments: &[&str], query: Params) -> Result<Value, NobitexError> {
        self.client
            .dispatcher
            .send(
                Method::GET,
                &Self::route(segments).to_path(),
                vec![],
                query.into_query(),
                None,
                CacheMode::Bypass,
            )
            .await
    }

    async fn post(&self, segments: &[&str], body: Params) -> Result<Value, NobitexError> {
        let body = if body.is_empty() {
            None
        } else {
            Some(body.into_body())
        };
        self.client
            .dispatcher
            .send(
                Method::POST,
                &Self::route(segments).to_path(),
                vec![],
                vec![],
                body,
                CacheMode::Bypass,
            )
            .await
    }

    pub async fn profile(&self) -> Result<Value, NobitexError> {
        self.get(&["profile"], Params::new()).await
    }

    pub async fn limitations(&self) -> Result<Value, NobitexError> {
        self.get(&["limitations"], Params::new()).await
    }

    /// Generate a deposit address, optionally for a specific wallet.
    pub async fn generate_wallet_address(
        &self,
        currency: Currency,
        wallet: Option<&str>,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("currency", currency.symbol)
            .insert_opt("wallet", wallet);
        self.post(&["wallets", "generate-address"], body).await
    }

    /// Register a bank card. `bank` is the bank name in Persian.
    pub async fn add_card(&self, number: &str, bank: &str) -> Result<Value, NobitexError> {
        let body = Params::new().insert("number", number).insert("bank", bank);
        self.post(&["cards-add"], body).await
    }

    /// Register a bank account. `bank` is the bank name in Persian.
    pub async fn add_account(
        &self,
        number: &str,
        shaba: &str,
        bank: &str,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("number", number)
            .insert("shaba", shaba)
            .insert("bank", bank);
        self.post(&["accounts-add"], body).await
    }

    pub async fn list_wallets(&self, kind: WalletKind) -> Result<Value, NobitexError> {
        let query = Params::new().insert("type", kind.as_str());
        self.get(&["wallets", "list"], query).await
    }

    pub async fn wallet_balance(&self, currency: Currency) -> Result<Value, NobitexError> {
        let body = Params::new().insert("currency", currency.symbol);
        self.post(&["wallets", "balance"], body).await
    }

    pub async fn wallet_transactions(&self, wallet_id: i64) -> Result<Value, NobitexError> {
        let query = Params::new().insert("wallet", wallet_id);
        self.get(&["wallets", "transactions", "list"], query).await
    }

    pub async fn wallet_deposits(&self, wallet_id: i64) -> Result<Value, NobitexError> {
        let query = Params::new().insert("wallet", wallet_id);
        self.get(&["wallets", "deposits", "list"], query).await
    }

    pub async fn favorite_markets(&self) -> Result<Value, NobitexError> {
        self.get(&["markets", "favorite"], Params::new()).await
    }

    pub async fn set_favorite_markets(
        &self,
        markets: &[Currency],
        quote: QuoteCurrency,
    ) -> Result<Value, NobitexError> {
        let body = Params::new().insert("market", join_markets(markets, quote)?);
        self.post(&["markets", "favorite"], body).await
    }

    pub async fn delete_favorite_markets(
        &self,
        markets: &[Currency],
        quote: QuoteCurrency,
    ) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("market", join_markets(markets, quote)?)
            .into_body();
        self.client
            .dispatcher
            .send(
                Method::DELETE,
                &Self::route(&["markets", "favorite"]).to_path(),
                vec![],
                vec![],
                Some(body),
                CacheMode::Bypass,
            )
            .await
    }

    /// Request a withdrawal from a wallet.
    pub async fn withdraw(&self, request: WithdrawRequest) -> Result<Value, NobitexError> {
        let body = Params::new()
            .insert("wallet", request.wallet_id)
            .insert_opt("network", request.network)
            .insert_opt("invoice", request.invoice)
            .insert_opt("amount", request.amount.map(|a| a.to_string()))
            .insert_opt("address", request.address)
            .insert_opt("explanations", request.explanations)
            .insert_opt("noTag", request.no_tag)
            .insert_opt("tag", request.tag);
        self.post(&["wallets", "withdraw"], body).await
    }
}

fn join_markets(markets: &[Currency], quote: QuoteCurrency) -> Result<String, NobitexError> {
    let codes = markets
        .iter()
        .map(|c| c.resolve(quote))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(codes.join(","))
}
