//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (app.rs):
//!     Parse CLI → Load config → Open session log → Connect ledger → Run
//!
//! Signals (signals.rs):
//!     SIGINT → log and exit; no partial-state recovery
//! ```

pub mod signals;

pub use signals::{interrupted, INTERRUPTED_EXIT_CODE};
