use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the server.
/// Constructed once at startup and handed to the upstream client and both
/// transport surfaces; nothing reads it from a global.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Listening host for the HTTP and streaming surfaces.
    #[serde(default = "default_host")]
    pub host: String,
    /// Listening port for the HTTP and streaming surfaces.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the upstream statistics API, including the version segment.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for upstream requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Seconds a streaming session may go without an outbound message before it is closed.
    #[serde(default = "default_session_idle_timeout")]
    pub session_idle_timeout_seconds: u64,
}

fn default_host() -> String {
    constants::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    constants::DEFAULT_PORT
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_session_idle_timeout() -> u64 {
    constants::DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: default_host(),
            port: default_port(),
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            session_idle_timeout_seconds: default_session_idle_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MLB_MCP_HOST` - Override listening host
    /// - `MLB_MCP_PORT` - Override listening port
    /// - `MLB_STATS_API_DOMAIN` - Override upstream API base URL
    /// - `MLB_MCP_LOG_FILE` - Override log file path
    /// - `MLB_MCP_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `MLB_MCP_SESSION_IDLE_TIMEOUT` - Override session idle timeout in seconds (default: 300)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var(env_vars::HOST) {
            self.host = host;
        }

        if let Some(port) = std::env::var(env_vars::PORT)
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.port = port;
        }

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(timeout) = std::env::var(env_vars::SESSION_IDLE_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.session_idle_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.host,
            self.port,
            &self.api_domain,
            &self.log_file_path,
            self.http_timeout_seconds,
            self.session_idle_timeout_seconds,
        )
    }

    /// Upstream base URL with a scheme and without a trailing slash.
    pub fn api_base_url(&self) -> String {
        let domain = self.api_domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{domain}")
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Listening On:");
        println!("{}", self.bind_address());
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", self.api_base_url());
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Session Idle Timeout:");
        println!("{} seconds", self.session_idle_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
