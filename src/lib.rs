//! Async client for the Nobitex cryptocurrency exchange REST API.
//!
//! The crate is layered: a transport kernel (route composition, request
//! dispatch, outcome classification, optional response caching) under
//! [`crate::core::kernel`], and thin per-resource facades under
//! [`endpoints`] reached through [`NobitexClient`].
//!
//! ```no_run
//! use nobitex::{Currency, NobitexClient, NobitexConfig, QuoteCurrency};
//!
//! # async fn example() -> Result<(), nobitex::NobitexError> {
//! let client = NobitexClient::new(NobitexConfig::new("user", "pass")?)?;
//! client.auth().login().await?;
//!
//! let depth = client.depth().get(Currency::BTC, QuoteCurrency::Irt).await?;
//! println!("{depth}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod core;
pub mod endpoints;

pub use crate::client::NobitexClient;
pub use crate::core::config::{
    ConfigError, Credentials, NobitexConfig, NOBITEX_API, TESTNET_NOBITEX_API,
};
pub use crate::core::currency::Currency;
pub use crate::core::errors::NobitexError;
pub use crate::core::kernel::{CacheBackend, CacheConfig, CacheMode, CacheStore, Session};
pub use crate::core::types::*;
