use crate::fetcher::DEFAULT_ENDPOINT;
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatSource {
    /// Deterministic pick from the built-in catalog.
    Daily,
    /// Random pick from the remote image API.
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Durable,
    Session,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub session_dir: PathBuf,
    pub storage: Vec<BackendKind>,
    pub cat_source: CatSource,
    pub cat_api_url: String,
    pub cat_api_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            session_dir: env::temp_dir().join("daily-cat"),
            storage: vec![BackendKind::Durable, BackendKind::Session, BackendKind::Memory],
            cat_source: CatSource::Daily,
            cat_api_url: DEFAULT_ENDPOINT.to_string(),
            cat_api_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
                reason: "expected a port number",
            })?;
        }
        if let Some(value) = lookup("APP_DATA_DIR") {
            config.data_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("APP_SESSION_DIR") {
            config.session_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("APP_STORAGE") {
            config.storage = parse_storage(&value)?;
        }
        if let Some(value) = lookup("CAT_SOURCE") {
            config.cat_source = match value.trim().to_ascii_lowercase().as_str() {
                "daily" => CatSource::Daily,
                "remote" => CatSource::Remote,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "CAT_SOURCE",
                        value,
                        reason: "expected 'daily' or 'remote'",
                    });
                }
            };
        }
        if let Some(value) = lookup("CAT_API_URL") {
            config.cat_api_url = value;
        }
        if let Some(value) = lookup("CAT_API_TIMEOUT_SECS") {
            let secs: u64 = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "CAT_API_TIMEOUT_SECS",
                value: value.clone(),
                reason: "expected whole seconds",
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "CAT_API_TIMEOUT_SECS",
                    value,
                    reason: "timeout must be at least one second",
                });
            }
            config.cat_api_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_storage(value: &str) -> Result<Vec<BackendKind>, ConfigError> {
    let invalid = |reason| ConfigError::Invalid {
        var: "APP_STORAGE",
        value: value.to_string(),
        reason,
    };

    let mut kinds = Vec::new();
    for part in value.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let kind = match part.to_ascii_lowercase().as_str() {
            "durable" => BackendKind::Durable,
            "session" => BackendKind::Session,
            "memory" => BackendKind::Memory,
            _ => return Err(invalid("expected a list of durable, session, memory")),
        };
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if kinds.is_empty() {
        return Err(invalid("at least one storage backend is required"));
    }
    Ok(kinds)
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.cat_source, CatSource::Daily);
        assert_eq!(
            config.storage,
            vec![BackendKind::Durable, BackendKind::Session, BackendKind::Memory]
        );
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("APP_DATA_DIR", "/tmp/cats"),
            ("APP_STORAGE", "memory, durable, memory"),
            ("CAT_SOURCE", "Remote"),
            ("CAT_API_URL", "http://localhost:1234/search"),
            ("CAT_API_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/cats"));
        assert_eq!(config.storage, vec![BackendKind::Memory, BackendKind::Durable]);
        assert_eq!(config.cat_source, CatSource::Remote);
        assert_eq!(config.cat_api_url, "http://localhost:1234/search");
        assert_eq!(config.cat_api_timeout, Duration::from_secs(2));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CAT_SOURCE", "random")])).is_err());
        assert!(Config::from_lookup(lookup(&[("APP_STORAGE", "cloud")])).is_err());
        assert!(Config::from_lookup(lookup(&[("APP_STORAGE", " , ")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CAT_API_TIMEOUT_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CAT_API_TIMEOUT_SECS", "-3")])).is_err());
    }
}
