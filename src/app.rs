//! One forwarding session: seed, chain, report.

use std::path::Path;
use std::sync::Arc;

use alloy::primitives::utils::format_ether;

use crate::blockchain::{BlockchainClient, Ledger};
use crate::config::{Cli, RunSettings};
use crate::error::RunError;
use crate::forwarder::{Clock, Forwarder, ForwardingChain, OperatorPrompt};
use crate::reporting::{report_chain, SessionReport};

/// Resolve the command line once the session log is up; failures are logged.
pub fn resolve_settings(cli: Cli) -> Result<RunSettings, RunError> {
    cli.resolve().map_err(|e| {
        let err = RunError::from(e);
        report_failure(&err);
        err
    })
}

/// Log a fatal error and each of its causes.
pub fn report_failure(err: &RunError) {
    tracing::error!(error = %err, "Script execution failed");
    for (depth, cause) in err.chain().iter().enumerate().skip(1) {
        tracing::error!(depth, cause = %cause, "Caused by");
    }
}

/// Log the run parameters.
pub fn log_banner(settings: &RunSettings, log_path: &Path) {
    tracing::info!("Address Creator Script");
    tracing::info!(
        network = %settings.network,
        network_name = settings.preset.name,
        address_count = settings.count,
        log_file = %log_path.display(),
        "Starting forwarding session"
    );
}

/// Run a session against any ledger, prompt and clock.
pub async fn run_session<L, C, P>(
    ledger: Arc<L>,
    clock: C,
    prompt: &mut P,
    settings: &RunSettings,
) -> Result<(ForwardingChain, SessionReport), RunError>
where
    L: Ledger + ?Sized,
    C: Clock,
    P: OperatorPrompt + ?Sized,
{
    let forwarder = Forwarder::new(ledger.clone(), clock, settings);

    let seed = forwarder.prepare_seed(prompt).await?;
    let chain = forwarder.forward(&seed, settings.count).await?;
    let report = report_chain(ledger.as_ref(), settings.preset.name, chain.accounts()).await?;

    Ok((chain, report))
}

/// Connect to the configured network and run a session.
pub async fn run<C, P>(settings: &RunSettings, clock: C, prompt: &mut P) -> Result<(), RunError>
where
    C: Clock,
    P: OperatorPrompt + ?Sized,
{
    let client = BlockchainClient::new(settings).await?;
    let (chain, report) = run_session(Arc::new(client), clock, prompt, settings).await?;

    let transferred = chain.outcomes().iter().filter(|o| o.is_transferred()).count();
    tracing::info!(
        hops = chain.len(),
        transferred,
        total_balance_eth = %format_ether(report.total_balance()),
        "Forwarding chain finished"
    );
    Ok(())
}
