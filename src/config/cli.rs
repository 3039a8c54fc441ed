//! Command-line surface and final settings resolution.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::config::loader::load_config;
use crate::config::networks::{Network, NetworkPreset};
use crate::config::schema::{ForwarderConfig, LoggingConfig};
use crate::config::{ConfigError, DEFAULT_HOP_COUNT};

#[derive(Debug, Parser)]
#[command(name = "chain-forwarder")]
#[command(
    about = "Create a chain of fresh accounts and forward native currency through it",
    long_about = None
)]
pub struct Cli {
    /// Target network (base-sepolia | ethereum)
    pub network: String,

    /// Number of accounts to create after the seed
    #[arg(default_value_t = DEFAULT_HOP_COUNT)]
    pub count: u32,

    /// Optional TOML file with RPC, gas, timing and logging settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the session log (overrides the config file)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// JSON-RPC endpoint (overrides the network preset and config file)
    #[arg(long)]
    pub rpc_url: Option<String>,
}

/// Everything a run needs, resolved from CLI and config file.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub network: Network,
    pub preset: NetworkPreset,
    /// Primary endpoint actually used.
    pub rpc_url: Url,
    pub count: u32,
    pub config: ForwarderConfig,
}

impl Cli {
    /// Session log settings, available before anything else is validated.
    ///
    /// Falls back to the defaults when the config file cannot be loaded, so
    /// that the failure itself can be written to a session log.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut logging = match &self.config {
            Some(path) => load_config(path).map(|c| c.logging).unwrap_or_default(),
            None => LoggingConfig::default(),
        };
        if let Some(dir) = &self.log_dir {
            logging.directory = dir.clone();
        }
        logging
    }

    /// Merge command line, config file and network preset.
    pub fn resolve(self) -> Result<RunSettings, ConfigError> {
        let network: Network = self.network.parse()?;

        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ForwarderConfig::default(),
        };

        if let Some(dir) = self.log_dir {
            config.logging.directory = dir;
        }

        let preset = network.preset();
        let url_str = self
            .rpc_url
            .or_else(|| config.rpc.url.clone())
            .unwrap_or_else(|| preset.rpc_url.to_string());
        let rpc_url: Url = url_str.parse().map_err(|e: url::ParseError| ConfigError::InvalidRpcUrl {
            url: url_str.clone(),
            reason: e.to_string(),
        })?;

        Ok(RunSettings {
            network,
            preset,
            rpc_url,
            count: self.count,
            config,
        })
    }
}
