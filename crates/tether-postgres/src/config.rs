use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PostgresConfig {
    /// Database host
    #[serde(default = "default_host")]
    pub host: String,

    /// Database port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database name
    #[serde(default = "default_database")]
    pub database: String,

    /// Database username
    #[serde(default = "default_username")]
    pub username: String,

    /// Database password
    #[serde(default = "default_password")]
    pub password: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_database() -> String {
    "tether".to_string()
}

fn default_username() -> String {
    "postgres".to_string()
}

fn default_password() -> String {
    "postgres".to_string()
}

fn default_pool_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PostgresConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("TETHER"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure tests run serially and don't interfere with each other
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _lock = TEST_LOCK.lock().unwrap();

        std::env::remove_var("TETHER_HOST");
        std::env::remove_var("TETHER_PORT");
        std::env::remove_var("TETHER_DATABASE");
        std::env::remove_var("TETHER_POOL_SIZE");

        let config = PostgresConfig::from_env().unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "tether");
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_from_environment() {
        let _lock = TEST_LOCK.lock().unwrap();

        std::env::set_var("TETHER_HOST", "db.internal");
        std::env::set_var("TETHER_PORT", "5433");
        std::env::set_var("TETHER_DATABASE", "associations");

        let config = PostgresConfig::from_env().unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5433);
        assert_eq!(config.database, "associations");

        std::env::remove_var("TETHER_HOST");
        std::env::remove_var("TETHER_PORT");
        std::env::remove_var("TETHER_DATABASE");
    }
}
