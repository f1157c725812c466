use std::{str::FromStr, time::Duration};

use crate::server::{
    data::restaurant::DEFAULT_PAGE_SIZE,
    error::{config::ConfigError, AppError},
};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub mongo_address: String,
    pub database_name: String,
    /// Database used by the live MongoDB tests.
    pub test_database_name: String,
    pub port: u16,

    pub page_size: u64,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            mongo_address: required("MONGO_ADDRESS")?,
            database_name: required("MONGO_DB_NAME")?,
            test_database_name: required("MONGO_DB_NAME_TEST")?,
            port: parse("PORT", &required("PORT")?)?,
            page_size: non_zero("PAGE_SIZE", optional("PAGE_SIZE", DEFAULT_PAGE_SIZE)?)?,
            request_timeout: Duration::from_secs(optional(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

fn required(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn optional<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse(key, &value),
        Err(_) => Ok(default),
    }
}

/// A page size of 0 would turn every page into an unlimited query.
fn non_zero(key: &str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(value)
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        key: key.to_string(),
        value: value.to_string(),
    })
}
