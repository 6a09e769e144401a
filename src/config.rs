use std::env;
use std::num::ParseIntError;

use chrono::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TOKEN_EXPIRATION_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} is invalid: {source}")]
    Invalid {
        key: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("TOKEN_EXPIRATION_DAYS must not be negative")]
    NegativeExpiration,
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    /// Lifetime of tokens issued to web clients. Mobile tokens never expire.
    pub token_expiration_days: i64,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr<Err = ParseIntError>,
    {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::Invalid { key, source }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let config = EnvConfig {
            port: Self::parse_env("PORT", DEFAULT_PORT)?,
            db_url: Self::get_env("DATABASE_URL")?,
            token_expiration_days: Self::parse_env(
                "TOKEN_EXPIRATION_DAYS",
                DEFAULT_TOKEN_EXPIRATION_DAYS,
            )?,
        };

        if config.token_expiration_days < 0 {
            return Err(ConfigError::NegativeExpiration);
        }

        Ok(config)
    }

    pub fn token_lifetime(&self) -> Duration {
        Duration::days(self.token_expiration_days)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_url: String::new(),
            token_expiration_days: DEFAULT_TOKEN_EXPIRATION_DAYS,
        }
    }
}
