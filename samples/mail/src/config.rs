//! Sample configuration read from environment variables.
//!
//! - `MAIL_FALLBACK`: text printed when a record has no mail (default `no mail`)
//! - `MAIL_LOG_FILTER`: tracing filter, falling back to `RUST_LOG` and then
//!   to [`DEFAULT_LOG_FILTER`]

use std::env;
use thiserror::Error;

/// Filter used when neither `MAIL_LOG_FILTER` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "mail_parser=info,mail_parsing_sample=info";

/// Fallback used when `MAIL_FALLBACK` is not set.
pub const DEFAULT_FALLBACK: &str = "no mail";

/// Errors raised while loading [`SampleConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but has an unusable value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: &'static str,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Settings of the sample binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleConfig {
    /// Text returned for records without a mail.
    pub fallback: String,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl SampleConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `MAIL_FALLBACK` is set to an
    /// empty string.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which returns the value of
    /// a variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `MAIL_FALLBACK` is empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback = match lookup("MAIL_FALLBACK") {
            Some(value) if value.is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: "MAIL_FALLBACK",
                    message: "must not be empty".to_string(),
                });
            }
            Some(value) => value,
            None => DEFAULT_FALLBACK.to_string(),
        };

        let log_filter = lookup("MAIL_LOG_FILTER")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            fallback,
            log_filter,
        })
    }
}
