//! Chain forwarder.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ observability (console + session log file)
//!                │
//!                ▼
//!   config (network preset, count, TOML tuning)
//!                │
//!                ▼
//!   forwarder ── seed ──▶ operator prompt / clock
//!       │
//!       ├── controller ──▶ blockchain::Ledger (alloy RPC, signing)
//!       ▼
//!   reporting (final balances and keys)
//! ```

use std::process::ExitCode;

use chain_forwarder::app;
use chain_forwarder::config::Cli;
use chain_forwarder::forwarder::{LinePrompt, TokioClock};
use chain_forwarder::lifecycle::{interrupted, INTERRUPTED_EXIT_CODE};
use chain_forwarder::observability::init_logging;
use chain_forwarder::RunError;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The session log opens first so configuration errors land in it.
    let session_log = match init_logging(&cli.logging_config(), chrono::Utc::now()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("{}", RunError::Log(e));
            return ExitCode::FAILURE;
        }
    };

    let settings = match app::resolve_settings(cli) {
        Ok(settings) => settings,
        Err(_) => return ExitCode::FAILURE,
    };

    app::log_banner(&settings, session_log.path());

    let mut prompt = LinePrompt::stdio();

    tokio::select! {
        result = app::run(&settings, TokioClock, &mut prompt) => match result {
            Ok(()) => {
                tracing::info!("=== EXECUTION COMPLETED SUCCESSFULLY ===");
                ExitCode::SUCCESS
            }
            Err(e) => {
                app::report_failure(&e);
                ExitCode::FAILURE
            }
        },
        _ = interrupted() => {
            tracing::warn!(
                log_file = %session_log.path().display(),
                "Interrupted; funds remain in the last funded account, keys are in the session log"
            );
            ExitCode::from(INTERRUPTED_EXIT_CODE)
        }
    }
}
