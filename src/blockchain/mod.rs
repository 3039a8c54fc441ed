//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Network preset (RPC URL, chain id)
//!     → wallet.rs (fresh key generation)
//!     → client.rs (RPC queries with timeouts and failover)
//!     → transaction.rs (build, sign, broadcast, confirm)
//!     → ledger.rs (Ledger trait consumed by the forwarder)
//! ```
//!
//! # Security Constraints
//! - Keys exist only in process memory and in the session log
//! - All RPC calls have configurable timeouts
//! - Transfers are signed for the preset's chain id (EIP-155)

pub mod client;
pub mod ledger;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use ledger::Ledger;
pub use types::{ChainId, GasEstimate, LedgerError, LedgerResult, TransferReceipt};
pub use wallet::Account;
