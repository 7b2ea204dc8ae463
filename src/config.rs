mod server;
mod settings;

use crate::error::AppResult;

pub use server::ServerConfig;
pub use settings::{parse_cors_origins, DatabaseMode, Settings, DEFAULT_CORS_ORIGINS};

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        Ok(Config {
            settings: Settings::from_env(),
            server: ServerConfig::from_lookup(|key| std::env::var(key).ok())?,
        })
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            settings: Settings::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }
}
