//! # Environment Configuration
//!
//! Settings are read once at startup from the process environment (after
//! `dotenvy` has loaded an optional `.env` file) and handed to the parts of
//! the application that need them.
//!
//! ## Recognized Variables
//!
//! - `MONGO_URL` - Store connection URL (default `mongodb://localhost:27017`)
//! - `DB_NAME` - Database name (default `app`)
//! - `CORS_ALLOW_ORIGINS` - `*` or a comma-separated list of origins (default `*`)
//! - `CORS_ALLOW_CREDENTIALS` - `true` to allow credentials with an explicit list (default `false`)
//! - `BIND_ADDRESS` - Socket address to listen on (default `0.0.0.0:8090`)
//! - `APP_ENV` - `production` switches logging to JSON output

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::utils::constant::*;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for `{name}`: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Cross-origin policy derived from `CORS_ALLOW_ORIGINS` and `CORS_ALLOW_CREDENTIALS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsSettings {
    /// Any origin may call the API. Credentials are always disabled.
    AnyOrigin,
    /// Only the listed origins may call the API.
    Origins {
        origins: Vec<String>,
        allow_credentials: bool,
    },
}

impl CorsSettings {
    /// Builds the policy from raw environment values.
    ///
    /// A wildcard forces credentials off no matter what `allow_credentials` says,
    /// since browsers reject that combination.
    pub fn from_values(allow_origins: &str, allow_credentials: Option<&str>) -> Self {
        if allow_origins.trim() == CORS_WILDCARD {
            return Self::AnyOrigin;
        }

        let origins = allow_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let allow_credentials =
            allow_credentials.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"));

        Self::Origins {
            origins,
            allow_credentials,
        }
    }
}

/// Runtime settings for the service
#[derive(Debug, Clone)]
pub struct Settings {
    pub mongo_url: String,
    pub db_name: String,
    pub cors: CorsSettings,
    pub bind_address: SocketAddr,
    pub production: bool,
}

impl Settings {
    /// Reads settings from the process environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `BIND_ADDRESS` is not a valid socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongo_url = lookup("MONGO_URL").unwrap_or_else(|| DEFAULT_MONGO_URL.to_string());
        let db_name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        let cors_origins =
            lookup("CORS_ALLOW_ORIGINS").unwrap_or_else(|| CORS_WILDCARD.to_string());
        let cors_credentials = lookup("CORS_ALLOW_CREDENTIALS");
        let cors = CorsSettings::from_values(&cors_origins, cors_credentials.as_deref());

        let raw_bind =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw_bind.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDRESS",
            value: raw_bind.clone(),
        })?;

        let production = lookup("APP_ENV")
            .is_some_and(|app_env| app_env.eq_ignore_ascii_case("production"));

        Ok(Self {
            mongo_url,
            db_name,
            cors,
            bind_address,
            production,
        })
    }
}
