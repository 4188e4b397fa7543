use std::{env, num::ParseIntError};

use dotenv::dotenv;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value \"{value}\": {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API with credentials from a browser.
    pub cors_origin: Option<String>,
    pub log_config: String,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("ACEEST_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            cors_origin: lookup("ACEEST_CORS_ORIGIN").filter(|origin| !origin.is_empty()),
            log_config: lookup("ACEEST_LOG_CONFIG")
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned()),
        })
    }
}
