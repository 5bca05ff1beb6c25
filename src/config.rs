//! Configuration management for surfcast.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SurfcastError};

/// Command-line arguments for surfcast
#[derive(Parser, Debug)]
#[command(name = "surfcast")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON file listing the beaches to forecast
    pub beaches_file: PathBuf,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "SURFCAST_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SURFCAST_PORT")]
    pub port: Option<u16>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "SURFCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SURFCAST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// StormGlass API token
    #[arg(long, env = "STORMGLASS_API_TOKEN", hide_env_values = true)]
    pub stormglass_token: Option<String>,

    /// Fetch beaches one after another or all at once (sequential, concurrent)
    #[arg(long, env = "SURFCAST_FETCH_MODE")]
    pub fetch_mode: Option<FetchMode>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Forecast provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormGlassConfig {
    /// Base URL of the StormGlass API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Token sent in the Authorization header
    #[serde(default)]
    pub api_token: String,

    /// Which model's values to read from each response field
    #[serde(default = "default_source")]
    pub source: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long fetched points are reused, 0 disables caching
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

/// How the aggregator schedules per-beach fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// One beach at a time, in input order
    #[default]
    Sequential,
    /// All beaches at once, results reassembled in input order
    Concurrent,
}

/// Forecast processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default)]
    pub fetch_mode: FetchMode,

    /// How many days ahead to request points for
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast provider configuration
    #[serde(default)]
    pub stormglass: StormGlassConfig,

    /// Forecast processing configuration
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if let Some(token) = args.stormglass_token {
            config.stormglass.api_token = token;
        }
        if let Some(fetch_mode) = args.fetch_mode {
            config.forecast.fetch_mode = fetch_mode;
        }

        Ok((config, args.beaches_file))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.forecast = other.forecast;
        self.log_level = other.log_level;

        // Keep a token that came from elsewhere when the file leaves it blank
        let token = std::mem::take(&mut self.stormglass.api_token);
        self.stormglass = other.stormglass;
        if self.stormglass.api_token.is_empty() {
            self.stormglass.api_token = token;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(SurfcastError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(SurfcastError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(SurfcastError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.stormglass.api_url.trim().is_empty() {
            return Err(SurfcastError::Config {
                message: "StormGlass API URL cannot be empty".to_string(),
            });
        }

        if self.stormglass.source.trim().is_empty() {
            return Err(SurfcastError::Config {
                message: "StormGlass source cannot be empty".to_string(),
            });
        }

        if self.stormglass.timeout_secs == 0 {
            return Err(SurfcastError::Config {
                message: "StormGlass timeout must be at least 1 second".to_string(),
            });
        }

        if self.forecast.forecast_days == 0 {
            return Err(SurfcastError::Config {
                message: "Forecast must cover at least 1 day".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            stormglass: StormGlassConfig::default(),
            forecast: ForecastConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StormGlassConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            source: default_source(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            fetch_mode: FetchMode::default(),
            forecast_days: default_forecast_days(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_url() -> String {
    "https://api.stormglass.io/v2".to_string()
}

fn default_source() -> String {
    "noaa".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_forecast_days() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.stormglass.api_url, "https://api.stormglass.io/v2");
        assert_eq!(config.stormglass.source, "noaa");
        assert_eq!(config.forecast.fetch_mode, FetchMode::Sequential);
        assert_eq!(config.forecast.forecast_days, 1);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_merge() {
        let mut config1 = Config::default();
        config1.stormglass.api_token = "from-env".to_string();

        let mut config2 = Config::default();
        config2.server.port = 9000;
        config2.forecast.fetch_mode = FetchMode::Concurrent;

        config1.merge(config2);

        assert_eq!(config1.server.port, 9000);
        assert_eq!(config1.forecast.fetch_mode, FetchMode::Concurrent);
        assert_eq!(config1.stormglass.api_token, "from-env");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"stormglass": {"source": "sg"}, "forecast": {"fetch_mode": "concurrent"}}"#)
                .unwrap();
        assert_eq!(config.stormglass.source, "sg");
        assert_eq!(config.stormglass.timeout_secs, 10);
        assert_eq!(config.forecast.fetch_mode, FetchMode::Concurrent);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_args_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"server": {{"host": "0.0.0.0", "port": 8080}}, "log_level": "debug"}}"#).unwrap();

        let args = Args::parse_from([
            "surfcast",
            "beaches.json",
            "--config",
            file.path().to_str().unwrap(),
            "--port",
            "9090",
            "--stormglass-token",
            "secret",
        ]);
        let (config, beaches_file) = Config::from_args(args).unwrap();

        assert_eq!(beaches_file, PathBuf::from("beaches.json"));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.stormglass.api_token, "secret");
    }

    #[test]
    fn test_config_validation() {
        // Valid config should pass
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.server.host = "".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.stormglass.api_url = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.stormglass.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.forecast.forecast_days = 0;
        assert!(config.validate().is_err());
    }
}
