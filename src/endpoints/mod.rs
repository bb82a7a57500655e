//! One facade per API resource family.
//!
//! Facades only format parameters and routes; dispatching, auth headers,
//! caching, and error classification all live in the kernel.

pub mod auth;
pub mod depth;
pub mod market;
pub mod options;
pub mod orderbook;
pub mod otp;
pub mod security;
pub mod trades;
pub mod users;
pub mod wallets;

pub use auth::AuthApi;
pub use depth::DepthApi;
pub use market::{MarketApi, NewOrder, OrderListQuery};
pub use options::OptionsApi;
pub use orderbook::OrderbookApi;
pub use otp::OtpApi;
pub use security::SecurityApi;
pub use trades::TradesApi;
pub use users::{UsersApi, WithdrawRequest};
pub use wallets::WalletsApi;
