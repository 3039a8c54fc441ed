//! Chain forwarder library.
//!
//! Creates a seed account, waits for the operator to fund it, then forwards
//! the funds through a chain of freshly generated accounts, logging every
//! key to the session log.

pub mod app;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod forwarder;
pub mod lifecycle;
pub mod observability;
pub mod reporting;

pub use blockchain::{Account, BlockchainClient, Ledger};
pub use config::{Cli, ForwarderConfig, RunSettings};
pub use error::RunError;
pub use forwarder::{Forwarder, ForwardingChain};
