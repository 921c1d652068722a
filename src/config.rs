//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ClientSure API, without a trailing slash
    pub api_url: String,
    /// File holding the admin bearer token between runs
    pub admin_token_file: PathBuf,
    /// Maximum number of leads selectable for one bulk unlock
    pub bulk_select_limit: usize,
    /// Silent community refresh interval
    pub community_poll: Duration,
    /// Admin moderation refresh interval
    pub admin_poll: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Page size for the user leads views
    pub leads_page_size: u32,
    /// Page size for the admin leads table
    pub admin_leads_page_size: u32,
}

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("CLIENTSURE_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url,
            admin_token_file: env::var("CLIENTSURE_ADMIN_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".clientsure/admin_token")),
            bulk_select_limit: parse_var("CLIENTSURE_BULK_SELECT_LIMIT", 10)?,
            community_poll: parse_secs("CLIENTSURE_COMMUNITY_POLL_SECS", 60)?,
            admin_poll: parse_secs("CLIENTSURE_ADMIN_POLL_SECS", 30)?,
            request_timeout: parse_secs("CLIENTSURE_TIMEOUT_SECS", 30)?,
            leads_page_size: parse_var("CLIENTSURE_LEADS_PAGE_SIZE", 20)?,
            admin_leads_page_size: parse_var("CLIENTSURE_ADMIN_LEADS_PAGE_SIZE", 100)?,
        })
    }

    /// Default config for testing only, pointed at `api_url`.
    pub fn test_default(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            admin_token_file: env::temp_dir().join("clientsure-test-admin-token"),
            bulk_select_limit: 10,
            community_poll: Duration::from_secs(60),
            admin_poll: Duration::from_secs(30),
            request_timeout: Duration::from_secs(5),
            leads_page_size: 20,
            admin_leads_page_size: 100,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// A positive number of seconds. Zero would make timers panic and
/// requests time out at once.
fn parse_secs(name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match parse_var(name, default)? {
        0 => Err(ConfigError::Invalid {
            name,
            value: "0".to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
