// Configuration management for the route table server
// Supports CLI arguments, config file (TOML), and environment variables

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use tracing::Level;

use crate::routes::parser::DEFAULT_ROUTE_TABLE_PATH;
use crate::web::PageTemplate;

const DEFAULT_CONFIG_PATH: &str = "route-table-server.toml";

/// Route Table Server - serve the kernel IPv4 routing table as an HTML page
#[derive(Parser, Debug, Clone)]
#[command(name = "route-table-server")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "RTS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Page appearance
    #[serde(default)]
    pub page: PageConfig,

    /// Output quirks for byte-compatible legacy clients
    #[serde(default)]
    pub compat: CompatConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Document title and heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Inline CSS placed in the document head
    #[serde(default = "default_style")]
    pub style: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompatConfig {
    /// Follow every flag name with ", ", including the last one
    #[serde(default)]
    pub trailing_flag_separator: bool,

    /// Emit the header as "Conent-Type" for clients that match on it
    #[serde(default)]
    pub misspelled_content_type: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_title() -> String {
    "Routing Table".to_string()
}
fn default_style() -> String {
    "table { border-collapse: collapse; } \
     th, td { border: 1px solid #999; padding: 2px 8px; text-align: left; } \
     tr.gateway { font-weight: bold; }"
        .to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            title: default_title(),
            style: default_style(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

/// Merged configuration handed to the server at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: IpAddr,
    pub port: u16,
    pub backlog: u32,
    pub route_table_path: PathBuf,
    /// Request bytes read (and discarded) before responding
    pub request_limit: usize,
    pub log_level: Level,
    pub page: PageTemplate,
    pub compat: CompatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            backlog: 5,
            route_table_path: PathBuf::from(DEFAULT_ROUTE_TABLE_PATH),
            request_limit: 1024,
            log_level: Level::INFO,
            page: PageTemplate::default(),
            compat: CompatConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources (CLI args, config file, defaults)
    /// Priority: CLI args > Config file > Defaults
    pub fn load() -> anyhow::Result<Self> {
        let cli_args = CliArgs::parse();

        let config_file = if let Some(config_path) = &cli_args.config {
            let config_content = std::fs::read_to_string(config_path)?;
            toml::from_str::<ConfigFile>(&config_content)?
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                let config_content = std::fs::read_to_string(&default_path)?;
                toml::from_str::<ConfigFile>(&config_content)?
            } else {
                ConfigFile::default()
            }
        };

        Self::merge(&cli_args, config_file)
    }

    fn merge(cli_args: &CliArgs, config_file: ConfigFile) -> anyhow::Result<Self> {
        let level = cli_args
            .log_level
            .as_deref()
            .unwrap_or(&config_file.logging.level);

        Ok(Config {
            log_level: parse_log_level(level)?,
            page: PageTemplate {
                title: config_file.page.title,
                style: config_file.page.style,
            },
            compat: config_file.compat,
            ..Config::default()
        })
    }
}

fn parse_log_level(level_str: &str) -> anyhow::Result<Level> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(anyhow::anyhow!("Invalid log level: {}", level_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.backlog, 5);
        assert_eq!(config.request_limit, 1024);
        assert_eq!(config.route_table_path, PathBuf::from("/proc/net/route"));
        assert!(config.bind_address.is_unspecified());
        assert!(!config.compat.trailing_flag_separator);
        assert!(!config.compat.misspelled_content_type);
    }

    #[test]
    fn test_config_file_sections() {
        let file: ConfigFile = toml::from_str(
            r#"
            [page]
            title = "core-router-1"

            [compat]
            misspelled_content_type = true

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(file.page.title, "core-router-1");
        assert!(file.page.style.contains("tr.gateway"));
        assert!(file.compat.misspelled_content_type);
        assert!(!file.compat.trailing_flag_separator);

        let cli_args = CliArgs {
            log_level: None,
            config: None,
        };
        let config = Config::merge(&cli_args, file).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.page.title, "core-router-1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_cli_log_level_wins() {
        let cli_args = CliArgs {
            log_level: Some("warn".to_string()),
            config: None,
        };
        let config = Config::merge(&cli_args, ConfigFile::default()).unwrap();
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("DEBUG"), Ok(Level::DEBUG)));
        assert!(parse_log_level("invalid").is_err());
    }
}
