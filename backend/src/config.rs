//! Server settings, read once at startup from `DASHBOARD_*` environment variables.
//!
//! | variable                 | default            |
//! |--------------------------|--------------------|
//! | `DASHBOARD_HOST`         | `127.0.0.1`        |
//! | `DASHBOARD_PORT`         | `8080`             |
//! | `DASHBOARD_DB_PATH`      | `dashboard.sqlite` |
//! | `DASHBOARD_OPEN_BROWSER` | `true`             |
//! | `DASHBOARD_JSON_LIMIT`   | `1048576` (bytes)  |
//!
//! A value that does not parse is logged and replaced by the default.

use log::warn;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_HOST: &str = "DASHBOARD_HOST";
pub const ENV_PORT: &str = "DASHBOARD_PORT";
pub const ENV_DB_PATH: &str = "DASHBOARD_DB_PATH";
pub const ENV_OPEN_BROWSER: &str = "DASHBOARD_OPEN_BROWSER";
pub const ENV_JSON_LIMIT: &str = "DASHBOARD_JSON_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Open the dashboard in the default browser once the server is up.
    pub open_browser: bool,
    /// Largest accepted JSON request body, in bytes.
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("dashboard.sqlite"),
            open_browser: true,
            json_limit: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            host: value(ENV_HOST).unwrap_or(defaults.host),
            port: parse_or(ENV_PORT, value(ENV_PORT), defaults.port),
            database_path: value(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            open_browser: value(ENV_OPEN_BROWSER)
                .map(|raw| parse_flag(ENV_OPEN_BROWSER, &raw, defaults.open_browser))
                .unwrap_or(defaults.open_browser),
            json_limit: parse_or(ENV_JSON_LIMIT, value(ENV_JSON_LIMIT), defaults.json_limit),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        warn!("ignoring invalid {}={:?}, using default", key, raw);
        default
    })
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("ignoring invalid {}={:?}, using default", key, raw);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "9000"),
            (ENV_DB_PATH, "/tmp/sources.sqlite"),
            (ENV_OPEN_BROWSER, "off"),
            (ENV_JSON_LIMIT, "2048"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/sources.sqlite"));
        assert!(!config.open_browser);
        assert_eq!(config.json_limit, 2048);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            (ENV_PORT, "eighty"),
            (ENV_OPEN_BROWSER, "maybe"),
            (ENV_HOST, "   "),
        ]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.host, "127.0.0.1");
    }
}
