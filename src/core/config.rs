use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable that overrides `upstream.base_url`.
pub const BASE_URL_ENV: &str = "MOCKAPI_BASE_URL";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Simulated latency of `/api/users`, in milliseconds. Zero disables it.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpstreamConfig {
    /// Base URL the server-rendered page uses to reach its own retrieval
    /// endpoint. When unset, the local listener address is used.
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            num_threads: default_num_threads(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_delay_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_console() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file and apply environment overrides
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::from_toml(&content)?;
        config.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Override `upstream.base_url` from the environment, if set
    pub fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value {
            if !url.is_empty() {
                self.upstream.base_url = Some(url);
            }
        }
    }

    /// The address the server-rendered page addresses its outbound request to
    pub fn upstream_base_url(&self) -> String {
        self.upstream
            .base_url
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", self.server.port))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        // A delay beyond a minute makes every page view hang pointlessly
        if self.api.delay_ms > 60_000 {
            bail!(
                "api.delay_ms ({}) must not exceed 60000",
                self.api.delay_ms
            );
        }

        if let Some(url) = &self.upstream.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("upstream.base_url must start with http:// or https://");
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").expect("empty config should parse");

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.api.delay_ms, 500);
        assert!(config.upstream.base_url.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config_parses() {
        let toml = r#"
            [server]
            port = 8080
            num_threads = 2

            [api]
            delay_ms = 0

            [upstream]
            base_url = "http://10.0.0.5:8080"

            [logging]
            level = "debug"
            format = "json"
            console = false
        "#;

        let config = Config::from_toml(toml).expect("config should parse");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.num_threads, 2);
        assert_eq!(config.api.delay_ms, 0);
        assert_eq!(
            config.upstream.base_url.as_deref(),
            Some("http://10.0.0.5:8080")
        );
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = Config::from_toml("[server]\nport = 0");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Config::from_toml("[logging]\nlevel = \"loud\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let result = Config::from_toml("[api]\ndelay_ms = 120000");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let result = Config::from_toml("[upstream]\nbase_url = \"ftp://example.com\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_override() {
        let mut config = Config::from_toml("").unwrap();

        config.apply_base_url_override(Some("http://override:9000".to_string()));
        assert_eq!(config.upstream_base_url(), "http://override:9000");

        // Empty values are ignored rather than clearing the setting
        config.apply_base_url_override(Some(String::new()));
        assert_eq!(config.upstream_base_url(), "http://override:9000");
    }

    #[test]
    fn test_upstream_defaults_to_local_listener() {
        let config = Config::from_toml("[server]\nport = 4000").unwrap();
        assert_eq!(config.upstream_base_url(), "http://127.0.0.1:4000");
    }
}
