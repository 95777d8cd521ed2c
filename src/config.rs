use std::net::{AddrParseError, SocketAddr};

use clap::Parser;
use serde::Deserialize;

use crate::storage::MAX_PAGE_SIZE;

#[derive(Parser, Debug)]
#[command(name = "txledger", about = "txledger - concurrent in-memory transaction ledger")]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "txledger.toml")]
    pub config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level or filter directive (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,

    #[serde(default = "default_api")]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Page size used when a list request omits `size`. Must be within 1..=50.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        json: false,
    }
}

fn default_api() -> ApiConfig {
    ApiConfig {
        default_page_size: default_page_size(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: default_server(),
            logging: default_logging(),
            api: default_api(),
        }
    }
}

impl Config {
    pub fn load(cli: &CliArgs) -> Self {
        let mut config = match std::fs::read_to_string(&cli.config) {
            Ok(contents) => Self::from_toml_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse config file: {}", e);
                Config::default()
            }),
            Err(_) => Config::default(),
        };

        // CLI overrides
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(ref level) = cli.log_level {
            config.logging.level = level.clone();
        }

        config
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(contents)?;
        if !(1..=MAX_PAGE_SIZE).contains(&config.api.default_page_size) {
            eprintln!(
                "Warning: api.default_page_size must be within 1..={}, using {}",
                MAX_PAGE_SIZE,
                default_page_size()
            );
            config.api.default_page_size = default_page_size();
        }
        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(config: &str) -> CliArgs {
        CliArgs {
            config: config.to_string(),
            port: None,
            log_level: None,
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(&cli("/nonexistent/txledger.toml"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.api.default_page_size, 10);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml_str(
            "
            [server]
            port = 9000

            [logging]
            json = true
            ",
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.json);
    }

    #[test]
    fn test_page_size_out_of_range_falls_back() {
        let config = Config::from_toml_str("[api]\ndefault_page_size = 500\n").unwrap();
        assert_eq!(config.api.default_page_size, 10);

        let config = Config::from_toml_str("[api]\ndefault_page_size = 25\n").unwrap();
        assert_eq!(config.api.default_page_size, 25);
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs {
            config: "/nonexistent/txledger.toml".to_string(),
            port: Some(3001),
            log_level: Some("txledger=debug".to_string()),
        };
        let config = Config::load(&args);
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.logging.level, "txledger=debug");
        assert_eq!(config.listen_addr().unwrap().port(), 3001);
    }

    #[test]
    fn test_invalid_host() {
        let mut config = Config::default();
        config.server.host = "not a host".to_string();
        assert!(config.listen_addr().is_err());
    }
}
