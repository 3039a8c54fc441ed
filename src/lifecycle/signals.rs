//! OS signal handling.
//!
//! An interrupt ends the run between suspension points. Nothing is rolled
//! back: funds stay in whichever account last received them and can only be
//! recovered with the key from the session log.

/// Exit status reported after Ctrl-C (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Resolve when the operator interrupts the process.
pub async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for interrupt signal");
        std::future::pending::<()>().await;
    }
}
