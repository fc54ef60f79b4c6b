// Configuration management for Network Topology Mapper
// Supports CLI arguments, config file (TOML), and environment variables

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;

/// Network Topology Mapper - Derive a network topology graph from a static routing table
#[derive(Parser, Debug, Clone)]
#[command(name = "network-topology-mapper")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the routing table CSV file
    #[arg(env = "NTM_INPUT")]
    pub input: PathBuf,

    /// Write the topology document to this file instead of stdout
    #[arg(short, long, env = "NTM_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, env = "NTM_PRETTY")]
    pub pretty: bool,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, env = "NTM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Don't attach synthetic PC hosts to switch nodes
    #[arg(long, env = "NTM_NO_HOSTS")]
    pub no_hosts: bool,
}

/// Configuration file structure (TOML format)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Host synthesis settings
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Write the topology document to this file instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Attach synthetic PC hosts to switch nodes
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log to file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            enabled: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Merged configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub log_level: Level,
    pub synthesis_enabled: bool,
}

impl Config {
    /// Load configuration from all sources (CLI args, config file, defaults)
    /// Priority: CLI args > Config file > Environment variables > Defaults
    pub fn load() -> anyhow::Result<Self> {
        let cli_args = CliArgs::parse();

        // Load config file if specified
        let config_file = if let Some(config_path) = &cli_args.config {
            tracing::info!("Loading configuration from: {}", config_path.display());
            let config_content = std::fs::read_to_string(config_path)?;
            toml::from_str::<ConfigFile>(&config_content)?
        } else {
            // Try loading from default locations
            let default_paths = vec![
                PathBuf::from("config.toml"),
                PathBuf::from("network-topology-mapper.toml"),
            ];

            let mut loaded_config = None;
            for path in default_paths {
                if path.exists() {
                    tracing::info!("Loading configuration from: {}", path.display());
                    let config_content = std::fs::read_to_string(&path)?;
                    loaded_config = Some(toml::from_str::<ConfigFile>(&config_content)?);
                    break;
                }
            }

            loaded_config.unwrap_or_default()
        };

        // Merge configuration (CLI args override config file)
        let input = cli_args.input;
        let output = cli_args.output.or(config_file.output.path);
        let pretty = cli_args.pretty || config_file.output.pretty;

        let log_level = parse_log_level(&cli_args.log_level)?;

        let synthesis_enabled = !cli_args.no_hosts && config_file.synthesis.enabled;

        Ok(Config {
            input,
            output,
            pretty,
            log_level,
            synthesis_enabled,
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
