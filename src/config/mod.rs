//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (network, count, flags)      optional TOML file
//!     → cli.rs (clap parse)                   → loader.rs (parse & deserialize)
//!                                             → validation.rs (semantic checks)
//!     → RunSettings (resolved network endpoint + tuning, immutable)
//! ```
//!
//! # Design Decisions
//! - Networks are a closed enum with compiled-in presets
//! - All tuning fields have defaults so the file is optional
//! - An unknown network is rejected before anything touches the chain

pub mod cli;
pub mod loader;
pub mod networks;
pub mod schema;
pub mod validation;

use thiserror::Error;

pub use cli::{Cli, RunSettings};
pub use networks::{Network, NetworkPreset};
pub use schema::{ForwarderConfig, GasConfig, LoggingConfig, RpcConfig, TimingConfig};
pub use validation::ValidationError;

/// Hop count used when none is given on the command line.
pub const DEFAULT_HOP_COUNT: u32 = 5;

/// Errors raised while assembling the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[source] toml::de::Error),

    #[error(
        "Validation failed: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    Validation(Vec<ValidationError>),

    #[error("Network {0} not supported (expected one of: base-sepolia, ethereum)")]
    UnknownNetwork(String),

    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },
}
