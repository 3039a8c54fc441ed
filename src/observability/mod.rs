//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, blockchain, forwarder, reporting
//!     → tracing events with structured fields
//!     → logging.rs: console layer + session log file layer
//! ```

pub mod logging;

pub use logging::{init_logging, open_session_log, session_log_path, session_subscriber, SessionLog};
