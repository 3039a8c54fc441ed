//! Seed account preparation.
//!
//! ```text
//! AWAITING_DEPOSIT --(delay, balance, operator says yes)--> CONFIRMING
//! CONFIRMING --(balance > 0)--> FUNDED
//! CONFIRMING --(balance == 0)--> AWAITING_DEPOSIT
//! AWAITING_DEPOSIT --(operator says anything else)--> AWAITING_DEPOSIT
//! ```
//!
//! The operator's "yes" is never trusted on its own: the balance is queried
//! again before leaving CONFIRMING.

use alloy::primitives::utils::format_ether;

use crate::blockchain::{Account, Ledger};
use crate::error::RunError;
use crate::forwarder::clock::Clock;
use crate::forwarder::controller::Forwarder;
use crate::forwarder::prompt::{is_affirmative, OperatorPrompt};

/// Question shown once per confirmation cycle.
pub const DEPOSIT_QUESTION: &str = "Has ETH been deposited? (yes/no): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    AwaitingDeposit,
    Confirming,
    Funded,
}

impl<L, C> Forwarder<L, C>
where
    L: Ledger + ?Sized,
    C: Clock,
{
    /// Generate the seed account and wait until the operator has funded it.
    ///
    /// Loops until a "yes" is backed by a non-zero balance. Unbounded unless
    /// `timing.max_confirmation_attempts` is set.
    pub async fn prepare_seed<P>(&self, prompt: &mut P) -> Result<Account, RunError>
    where
        P: OperatorPrompt + ?Sized,
    {
        tracing::info!("=== Seed Address Preparation ({}) ===", self.preset.name);
        tracing::info!("Creating new seed address...");

        let seed = self.ledger.generate_account()?;
        tracing::info!(
            address = %seed.address(),
            public_key = %seed.public_key_hex(),
            private_key = %seed.private_key_hex(),
            "Seed address created"
        );
        tracing::warn!(
            network = self.preset.name,
            rpc_url = %self.rpc_url,
            "IMPORTANT: Please manually transfer ETH to this address for funding"
        );

        let mut state = SeedState::AwaitingDeposit;
        let mut attempts = 0u32;
        tracing::debug!(?state, "Seed state");

        loop {
            self.clock.sleep(self.timing.deposit_poll()).await;

            let balance = self.ledger.balance(seed.address()).await?;
            tracing::info!(balance_eth = %format_ether(balance), "Current balance");

            attempts += 1;
            let answer = prompt.ask(DEPOSIT_QUESTION).await?;
            tracing::debug!(answer = %answer.trim(), attempt = attempts, "Operator answered");

            if is_affirmative(&answer) {
                state = SeedState::Confirming;
                tracing::debug!(?state, "Seed state");

                let confirmed = self.ledger.balance(seed.address()).await?;
                if !confirmed.is_zero() {
                    state = SeedState::Funded;
                    tracing::debug!(?state, "Seed state");
                    tracing::info!(balance_eth = %format_ether(confirmed), "Confirmed! Seed funded");
                    return Ok(seed);
                }

                tracing::warn!("No ETH detected. Please try again.");
                state = SeedState::AwaitingDeposit;
                tracing::debug!(?state, "Seed state");
            }

            if let Some(max) = self.timing.max_confirmation_attempts {
                if attempts >= max {
                    tracing::error!(
                        address = %seed.address(),
                        private_key = %seed.private_key_hex(),
                        attempts,
                        "Giving up on seed funding"
                    );
                    return Err(RunError::SeedNotFunded(attempts));
                }
            }
        }
    }
}
