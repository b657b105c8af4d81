use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub secret_key: String,
    pub host: IpAddr,
    pub port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

/// Where submissions are persisted. `uri: None` means the store is not
/// configured, which is a permanent state for the life of the process.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: Option<String>,
    pub database: String,
    pub collection: String,
}

pub const DEFAULT_DATABASE: &str = "testdb";
pub const DEFAULT_COLLECTION: &str = "submissions";
pub const DEFAULT_SECRET_KEY: &str = "dev";

impl StoreConfig {
    pub fn from_env() -> Self {
        StoreConfig {
            uri: configured_uri(std::env::var("MONGODB_URI").ok()),
            database: env_or("MONGODB_DB", DEFAULT_DATABASE),
            collection: env_or("MONGODB_COLLECTION", DEFAULT_COLLECTION),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.uri.is_some()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let store = StoreConfig::from_env();
        let secret_key = env_or("SECRET_KEY", DEFAULT_SECRET_KEY);

        let host: IpAddr = env_or("FORMDROP_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMDROP_HOST: {e}"))?;

        let port: u16 = env_or("FORMDROP_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid FORMDROP_PORT: {e}"))?;

        let data_file = PathBuf::from(env_or("FORMDROP_DATA_FILE", "data.json"));
        let static_dir = PathBuf::from(env_or("FORMDROP_STATIC_DIR", "static"));

        let max_body_size: usize = env_or("FORMDROP_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMDROP_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMDROP_LOG_LEVEL", "info");

        Ok(Config {
            store,
            secret_key,
            host,
            port,
            data_file,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}

/// Only an unset or empty URI leaves the store unconfigured.
pub fn configured_uri(raw: Option<String>) -> Option<String> {
    raw.filter(|uri| !uri.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
