use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NobitexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected the request with a status in `[300, 500)`.
    /// The parsed response body is carried for caller diagnostics.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: Value },

    /// Server-side fault (status `>= 500`). The body is not parsed.
    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    #[error("configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("currency {name} has no code against {quote}")]
    InvalidCurrency { name: String, quote: String },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl NobitexError {
    /// Status code of the failed exchange, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Server { status } => Some(*status),
            _ => None,
        }
    }
}
