use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory with the static front-end, served for non-API paths.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Catalog data sources and presentation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Primary catalog document: an http(s) URL or a file path.
    pub primary: String,
    /// Tried once when the primary fails.
    #[serde(default)]
    pub fallback: Option<String>,
    /// Entries per page; 0 shows everything on one page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Serve the built-in sample movies when every source fails.
    #[serde(default = "default_use_sample")]
    pub use_sample_on_failure: bool,
}

fn default_page_size() -> usize {
    12
}

fn default_use_sample() -> bool {
    true
}

/// Local state (favorites, theme)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from("cinedex-state.json")
}

/// Sanitized config for API responses (source credentials redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    pub storage: StorageConfig,
    pub static_dir: Option<PathBuf>,
}

/// Catalog config with user info and query strings stripped from URLs
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub primary: String,
    pub fallback: Option<String>,
    pub page_size: usize,
    pub use_sample_on_failure: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                primary: redact_location(&config.catalog.primary),
                fallback: config.catalog.fallback.as_deref().map(redact_location),
                page_size: config.catalog.page_size,
                use_sample_on_failure: config.catalog.use_sample_on_failure,
            },
            storage: config.storage.clone(),
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Drop `user:pass@` and `?query` from a URL location. File paths pass
/// through unchanged.
pub fn redact_location(location: &str) -> String {
    let Some((scheme, rest)) = location.split_once("://") else {
        return location.to_string();
    };

    let (rest, query) = match rest.split_once('?') {
        Some((before, _)) => (before, true),
        None => (rest, false),
    };
    let (authority, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    let mut redacted = match authority.rsplit_once('@') {
        Some((_, host)) => format!("{}://[REDACTED]@{}{}", scheme, host, path),
        None => format!("{}://{}{}", scheme, authority, path),
    };
    if query {
        redacted.push_str("?[REDACTED]");
    }
    redacted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
[catalog]
primary = "https://data.example/movies.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.catalog.page_size, 12);
        assert!(config.catalog.use_sample_on_failure);
        assert!(config.catalog.fallback.is_none());
        assert_eq!(config.storage.path, PathBuf::from("cinedex-state.json"));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_deserialize_missing_catalog_fails() {
        let toml = r#"
[server]
port = 8080
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
static_dir = "web"

[server]
host = "127.0.0.1"
port = 9000

[catalog]
primary = "https://data.example/movies.json"
fallback = "data/movies.json"
page_size = 0
use_sample_on_failure = false

[storage]
path = "/var/lib/cinedex/state.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.catalog.fallback.as_deref(), Some("data/movies.json"));
        assert_eq!(config.catalog.page_size, 0);
        assert!(!config.catalog.use_sample_on_failure);
        assert_eq!(config.static_dir, Some(PathBuf::from("web")));
    }

    #[test]
    fn test_redact_location() {
        assert_eq!(
            redact_location("https://data.example/movies.json"),
            "https://data.example/movies.json"
        );
        assert_eq!(
            redact_location("https://data.example/movies.json?token=secret"),
            "https://data.example/movies.json?[REDACTED]"
        );
        assert_eq!(
            redact_location("https://user:pw@data.example/movies.json"),
            "https://[REDACTED]@data.example/movies.json"
        );
        assert_eq!(redact_location("data/movies.json"), "data/movies.json");
    }

    #[test]
    fn test_sanitized_config() {
        let toml = r#"
[catalog]
primary = "https://data.example/movies.json?key=abc"
fallback = "movies.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sanitized = SanitizedConfig::from(&config);
        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("abc"));
        assert_eq!(sanitized.catalog.fallback.as_deref(), Some("movies.json"));
    }
}
