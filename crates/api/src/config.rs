use std::time::Duration;

use ikilen_core::voting::{validate_approval_percent, DEFAULT_APPROVAL_PERCENT};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Investment activation quorum and retry policy.
    pub voting: VotingConfig,
}

/// Settings for the voting engine and its activation retrier.
#[derive(Debug, Clone)]
pub struct VotingConfig {
    /// Percentage of eligible members whose approval activates an investment.
    pub approval_percent: u8,
    /// How many times a failed activation check is retried in the background.
    pub retry_max_attempts: u32,
    /// Delay before each background retry.
    pub retry_delay: Duration,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            approval_percent: DEFAULT_APPROVAL_PERCENT,
            retry_max_attempts: 3,
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl VotingConfig {
    /// | Env Var                          | Default |
    /// |----------------------------------|---------|
    /// | `APPROVAL_THRESHOLD_PERCENT`     | `80`    |
    /// | `ACTIVATION_RETRY_MAX_ATTEMPTS`  | `3`     |
    /// | `ACTIVATION_RETRY_DELAY_SECS`    | `5`     |
    ///
    /// # Panics
    ///
    /// Panics if a value does not parse or the percentage is outside 1–100.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let approval_percent: u8 = std::env::var("APPROVAL_THRESHOLD_PERCENT")
            .map(|v| {
                v.parse()
                    .expect("APPROVAL_THRESHOLD_PERCENT must be an integer between 1 and 100")
            })
            .unwrap_or(defaults.approval_percent);
        if let Err(msg) = validate_approval_percent(approval_percent) {
            panic!("APPROVAL_THRESHOLD_PERCENT: {msg}");
        }

        let retry_max_attempts: u32 = std::env::var("ACTIVATION_RETRY_MAX_ATTEMPTS")
            .map(|v| {
                v.parse()
                    .expect("ACTIVATION_RETRY_MAX_ATTEMPTS must be a valid u32")
            })
            .unwrap_or(defaults.retry_max_attempts);

        let retry_delay = std::env::var("ACTIVATION_RETRY_DELAY_SECS")
            .map(|v| {
                Duration::from_secs(
                    v.parse()
                        .expect("ACTIVATION_RETRY_DELAY_SECS must be a valid u64"),
                )
            })
            .unwrap_or(defaults.retry_delay);

        Self {
            approval_percent,
            retry_max_attempts,
            retry_delay,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`VotingConfig::from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            voting: VotingConfig::from_env(),
        }
    }
}
