//! Configuration for the back-office tools.

use std::env;

use domain::MIN_PASSWORD_LENGTH;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Default log filter when neither `RUST_LOG` nor `BAKERY_LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Admin CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Log filter directive
    pub log_level: String,
    /// Minimum accepted plain-text password length
    pub min_password_length: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl AdminConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns a config error when `BAKERY_MIN_PASSWORD_LENGTH` is not a
    /// positive integer.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("BAKERY_LOG_LEVEL").unwrap_or(defaults.log_level);

        let min_password_length = match lookup("BAKERY_MIN_PASSWORD_LENGTH") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "BAKERY_MIN_PASSWORD_LENGTH must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => defaults.min_password_length,
        };

        Ok(Self {
            log_level,
            min_password_length,
        })
    }
}
