use serde::{Deserialize, Serialize};
use std::fmt;

/// Quote currency a market is priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCurrency {
    Irt,
    Usdt,
}

impl QuoteCurrency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Irt => "irt",
            Self::Usdt => "usdt",
        }
    }
}

impl fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderExecution {
    Market,
    Limit,
    StopMarket,
    StopLimit,
}

impl OrderExecution {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::StopMarket => "stop_market",
            Self::StopLimit => "stop_limit",
        }
    }
}

/// Special order modes; currently only one-cancels-other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderMode {
    Oco,
}

impl OrderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oco => "oco",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Spot,
    Margin,
}

impl TradeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Margin => "margin",
        }
    }
}

/// Status filter when listing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusFilter {
    All,
    Open,
    Done,
    Close,
}

impl OrderStatusFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Done => "done",
            Self::Close => "close",
        }
    }
}

/// Target status when updating an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusUpdate {
    Active,
    Canceled,
}

impl OrderStatusUpdate {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Canceled => "canceled",
        }
    }
}

/// Sort key when listing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderListSort {
    Id,
    CreatedAt,
    Price,
}

impl OrderListSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CreatedAt => "created_at",
            Self::Price => "price",
        }
    }
}

/// Detail level of order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailLevel {
    Basic,
    Full,
}

impl DetailLevel {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Full => 2,
        }
    }
}

/// Candle resolution for UDF chart history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartResolution {
    Minutes1,
    Minutes5,
    Minutes15,
    Minutes30,
    Hours1,
    Hours3,
    Hours4,
    Hours6,
    Hours12,
    Days1,
    Days2,
    Days3,
}

impl ChartResolution {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minutes1 => "1",
            Self::Minutes5 => "5",
            Self::Minutes15 => "15",
            Self::Minutes30 => "30",
            Self::Hours1 => "60",
            Self::Hours3 => "180",
            Self::Hours4 => "240",
            Self::Hours6 => "360",
            Self::Hours12 => "720",
            Self::Days1 => "D",
            Self::Days2 => "2D",
            Self::Days3 => "3D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Spot,
    Margin,
}

impl WalletKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Margin => "margin",
        }
    }
}

/// Delivery channel for one-time passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpKind {
    Email,
}

impl OtpKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpUsage {
    AddressBook,
    AntiPhishingCode,
}

impl OtpUsage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddressBook => "address_book",
            Self::AntiPhishingCode => "anti_phishing_code",
        }
    }
}

/// The API encodes booleans as `"yes"` / `"no"` in several endpoints.
pub(crate) const fn api_bool(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
