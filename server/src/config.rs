use std::{env, path::PathBuf};

use thiserror::Error;

pub const DEFAULT_CSV: &str = "rock_info1.csv";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROCKS_PORT must be a port number, got: {0}")]
    Port(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub csv: PathBuf,
    pub address: String,
    pub port: u16,
}

impl Config {
    /// Read `ROCKS_CSV`, `ROCKS_ADDRESS` and `ROCKS_PORT` from the process
    /// environment (call `dotenvy::dotenv` first to pick up a `.env` file).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("ROCKS_PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| ConfigError::Port(p))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            csv: lookup("ROCKS_CSV").map_or(DEFAULT_CSV.into(), PathBuf::from),
            address: lookup("ROCKS_ADDRESS").unwrap_or(DEFAULT_ADDRESS.into()),
            port,
        })
    }
}
