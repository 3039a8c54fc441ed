//! Configuration schema definitions.
//!
//! This module defines the tuning surface for a forwarding run. Every field
//! has a default, so an empty (or absent) config file yields the stock
//! behaviour: 21000 gas, a 110% gas price buffer, a 0.000001 ETH safety
//! margin, a 5 second deposit poll and a 2 second pause between hops.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for a forwarding run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ForwarderConfig {
    /// RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Gas pricing and transfer safety settings.
    pub gas: GasConfig,

    /// Fixed delays of the seed and forwarding loops.
    pub timing: TimingConfig,

    /// Session log settings.
    pub logging: LoggingConfig,
}

/// RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Overrides the network preset's endpoint when set.
    pub url: Option<String>,

    /// Failover JSON-RPC endpoint URLs, tried in order for read queries.
    pub failover_urls: Vec<String>,

    /// RPC request timeout in seconds.
    pub timeout_secs: u64,

    /// Number of block confirmations to wait for after a transfer.
    pub confirmation_blocks: u64,

    /// Maximum time to wait for a transfer receipt, in seconds.
    pub confirmation_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: None,
            failover_urls: Vec::new(),
            timeout_secs: 10,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 180,
        }
    }
}

impl RpcConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }
}

/// Gas and transfer-amount configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Gas limit of a plain native transfer.
    pub gas_limit: u64,

    /// Multiplier applied to the quoted gas price, in percent (110 = +10%).
    pub price_multiplier_percent: u64,

    /// Extra amount held back below the gas-adjusted maximum, in wei.
    pub safety_margin_wei: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gas_limit: 21_000,
            price_multiplier_percent: 110,
            // 0.000001 ETH
            safety_margin_wei: 1_000_000_000_000,
        }
    }
}

/// Delays and bounds of the controller loops.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause before each seed balance check / operator prompt, in seconds.
    pub deposit_poll_secs: u64,

    /// Pause after each hop, in seconds.
    pub hop_delay_secs: u64,

    /// Give up on seed funding after this many prompts. Unbounded when unset.
    pub max_confirmation_attempts: Option<u32>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            deposit_poll_secs: 5,
            hop_delay_secs: 2,
            max_confirmation_attempts: None,
        }
    }
}

impl TimingConfig {
    pub fn deposit_poll(&self) -> Duration {
        Duration::from_secs(self.deposit_poll_secs)
    }

    pub fn hop_delay(&self) -> Duration {
        Duration::from_secs(self.hop_delay_secs)
    }
}

/// Session log configuration.
///
/// The session log holds every generated private key in cleartext. The
/// directory should live on storage only the operator can read; the file
/// itself is created with mode `0600` on Unix.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory the session log is written to.
    pub directory: PathBuf,

    /// File name prefix; the run-start timestamp is appended.
    pub file_prefix: String,

    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_prefix: "address-creator".to_string(),
            level: "info".to_string(),
        }
    }
}
