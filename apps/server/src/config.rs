use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// JWT signing key, base64 of 32 bytes or a 32-byte ASCII string.
    pub secret_key: String,
    pub access_token_ttl: Duration,
    pub price_feed_url: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = var("CF_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid CF_LISTEN_ADDR")?;
        let db_path = var("CF_DB_PATH", "./db/app.db");
        let cors_allow = var("CF_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("CF_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid CF_REQUEST_TIMEOUT_MS")?;
        let secret_key = lookup("CF_SECRET_KEY").context("CF_SECRET_KEY must be set")?;
        let ttl_secs: u64 = var("CF_ACCESS_TOKEN_TTL_SECS", "3600")
            .parse()
            .context("Invalid CF_ACCESS_TOKEN_TTL_SECS")?;
        let price_feed_url = var(
            "CF_PRICE_FEED_URL",
            coinfolio_market_data::provider::coingecko::DEFAULT_BASE_URL,
        );
        let log_format = match var("CF_LOG_FORMAT", "json").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "text" => LogFormat::Text,
            other => anyhow::bail!("Invalid CF_LOG_FORMAT '{other}', expected json or text"),
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            secret_key,
            access_token_ttl: Duration::from_secs(ttl_secs),
            price_feed_url,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("CF_SECRET_KEY", "k")])).unwrap();

        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.db_path, "./db/app.db");
        assert_eq!(config.cors_allow, vec!["*"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.access_token_ttl, Duration::from_secs(3600));
        assert_eq!(config.price_feed_url, "https://api.coingecko.com");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CF_SECRET_KEY", "k"),
            ("CF_LISTEN_ADDR", "127.0.0.1:9000"),
            ("CF_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,"),
            ("CF_REQUEST_TIMEOUT_MS", "500"),
            ("CF_PRICE_FEED_URL", "http://127.0.0.1:4000"),
            ("CF_LOG_FORMAT", "TEXT"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.price_feed_url, "http://127.0.0.1:4000");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
        assert!(Config::from_lookup(lookup(&[
            ("CF_SECRET_KEY", "k"),
            ("CF_LISTEN_ADDR", "not an address"),
        ]))
        .is_err());
        assert!(Config::from_lookup(lookup(&[
            ("CF_SECRET_KEY", "k"),
            ("CF_REQUEST_TIMEOUT_MS", "soon"),
        ]))
        .is_err());
        assert!(Config::from_lookup(lookup(&[
            ("CF_SECRET_KEY", "k"),
            ("CF_LOG_FORMAT", "xml"),
        ]))
        .is_err());
    }
}
