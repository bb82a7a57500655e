use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};
use std::env;

/// Production API origin.
pub const NOBITEX_API: &str = "https://api.nobitex.ir";
/// Testnet API origin.
pub const TESTNET_NOBITEX_API: &str = "https://testnetapi.nobitex.ir";

/// How the client authenticates against the API.
///
/// Exactly one of the two forms must be complete; this is checked once,
/// eagerly, when the credentials are built.
#[derive(Clone)]
pub enum Credentials {
    /// Username/password pair, exchanged for a token via `auth().login()`.
    Password {
        username: String,
        password: Secret<String>,
    },
    /// A pre-issued API token, sent as `Authorization: Token <value>`.
    Token(Secret<String>),
}

impl Credentials {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(Self::Password {
            username,
            password: Secret::new(password),
        })
    }

    pub fn token(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(Self::Token(Secret::new(token)))
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Password { username, .. } => Some(username),
            Self::Token(_) => None,
        }
    }

    /// Exposes the password (use carefully).
    pub fn password_value(&self) -> Option<&str> {
        match self {
            Self::Password { password, .. } => Some(password.expose_secret()),
            Self::Token(_) => None,
        }
    }

    /// Exposes the pre-issued token (use carefully).
    pub fn token_value(&self) -> Option<&str> {
        match self {
            Self::Password { .. } => None,
            Self::Token(token) => Some(token.expose_secret()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
        }
    }
}

/// Client configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct NobitexConfig {
    pub credentials: Credentials,
    pub testnet: bool,
    pub base_url: Option<String>,
    /// Echo each request/response at `info!` level. Diagnostic only.
    pub verbose: bool,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

// Never expose secrets in serialization
impl Serialize for NobitexConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("NobitexConfig", 5)?;
        state.serialize_field("username", &self.credentials.username())?;
        state.serialize_field("credentials", "[REDACTED]")?;
        state.serialize_field("testnet", &self.testnet)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("verbose", &self.verbose)?;
        state.end()
    }
}

impl NobitexConfig {
    /// Create a configuration from a username/password pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::with_credentials(Credentials::password(username, password)?))
    }

    /// Create a configuration from a pre-issued API token.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::with_credentials(Credentials::token(token)?))
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            testnet: false,
            base_url: None,
            verbose: false,
            timeout_seconds: 30,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Expected environment variables:
    /// - `NOBITEX_TOKEN`, or `NOBITEX_USERNAME` + `NOBITEX_PASSWORD`
    /// - `NOBITEX_TESTNET` (optional, defaults to false)
    /// - `NOBITEX_BASE_URL` (optional)
    /// - `NOBITEX_VERBOSE` (optional, defaults to false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = if let Ok(token) = env::var("NOBITEX_TOKEN") {
            Credentials::token(token)?
        } else {
            let username = env::var("NOBITEX_USERNAME")
                .map_err(|_| ConfigError::MissingEnvironmentVariable("NOBITEX_USERNAME".into()))?;
            let password = env::var("NOBITEX_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvironmentVariable("NOBITEX_PASSWORD".into()))?;
            Credentials::password(username, password)?
        };

        let testnet = env::var("NOBITEX_TESTNET")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);
        let verbose = env::var("NOBITEX_VERBOSE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);
        let base_url = env::var("NOBITEX_BASE_URL").ok();

        Ok(Self {
            credentials,
            testnet,
            base_url,
            verbose,
            timeout_seconds: 30,
        })
    }

    /// Create configuration from a .env file and environment variables.
    ///
    /// Loads the file if it exists, then reads the standard variable names.
    /// **Security warning**: never commit .env files to version control.
    #[cfg(feature = "env-file")]
    pub fn from_env_file(env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // fall back to system environment variables
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }
        Self::from_env()
    }

    /// Target the testnet origin instead of production.
    #[must_use]
    pub const fn testnet(mut self, testnet: bool) -> Self {
        self.testnet = testnet;
        self
    }

    /// Override the API origin (self-hosted or test deployments).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// The API origin this configuration resolves to.
    pub fn origin(&self) -> String {
        if self.testnet {
            TESTNET_NOBITEX_API.to_string()
        } else {
            self.base_url
                .clone()
                .unwrap_or_else(|| NOBITEX_API.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("you must provide either a username and password or a token")]
    MissingCredentials,

    #[error("missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
