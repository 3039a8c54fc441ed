//! The forwarding loop.
//!
//! Each hop creates the next account, forwards everything the current
//! account can spare into it, and then moves on to the new account whether
//! or not the transfer happened. A failed or skipped hop strands its funds
//! in the current account; the chain still advances.

use std::sync::Arc;

use alloy::primitives::utils::format_ether;
use alloy::primitives::U256;

use crate::blockchain::{Account, GasEstimate, Ledger, TransferReceipt};
use crate::config::{NetworkPreset, RunSettings, TimingConfig};
use crate::error::RunError;
use crate::forwarder::clock::Clock;
use crate::forwarder::policy::{plan_transfer, TransferPlan};

/// Result of one hop's transfer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HopOutcome {
    /// The current account held nothing.
    NoBalance,
    /// The balance did not cover the gas cost.
    InsufficientForGas { balance: U256, gas: GasEstimate },
    /// The balance covered gas but not gas plus the safety margin.
    InsufficientAfterMargin { balance: U256, gas: GasEstimate },
    /// Transfer confirmed.
    Transferred { amount: U256, receipt: TransferReceipt },
    /// The ledger rejected or lost the transfer.
    Failed { amount: U256, reason: String },
}

impl HopOutcome {
    pub fn is_transferred(&self) -> bool {
        matches!(self, HopOutcome::Transferred { .. })
    }
}

/// Accounts created by the forwarding loop, in creation order.
///
/// The seed is not part of the chain. `outcomes()[i]` describes the attempt
/// to fund `accounts()[i]`.
#[derive(Debug, Clone, Default)]
pub struct ForwardingChain {
    accounts: Vec<Account>,
    outcomes: Vec<HopOutcome>,
}

impl ForwardingChain {
    fn push(&mut self, account: Account, outcome: HopOutcome) {
        self.accounts.push(account);
        self.outcomes.push(outcome);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn outcomes(&self) -> &[HopOutcome] {
        &self.outcomes
    }

    pub fn last(&self) -> Option<&Account> {
        self.accounts.last()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Drives seed confirmation and the forwarding loop.
pub struct Forwarder<L: ?Sized, C> {
    pub(crate) ledger: Arc<L>,
    pub(crate) clock: C,
    pub(crate) preset: NetworkPreset,
    pub(crate) rpc_url: String,
    pub(crate) timing: TimingConfig,
    safety_margin: U256,
}

impl<L, C> Forwarder<L, C>
where
    L: Ledger + ?Sized,
    C: Clock,
{
    pub fn new(ledger: Arc<L>, clock: C, settings: &RunSettings) -> Self {
        Self {
            ledger,
            clock,
            preset: settings.preset,
            rpc_url: settings.rpc_url.to_string(),
            timing: settings.config.timing.clone(),
            safety_margin: U256::from(settings.config.gas.safety_margin_wei),
        }
    }

    /// Create `count` accounts, forwarding funds from `seed` down the chain.
    ///
    /// Transfer failures are logged and absorbed. Account generation, balance
    /// and fee query failures end the run.
    pub async fn forward(&self, seed: &Account, count: u32) -> Result<ForwardingChain, RunError> {
        tracing::info!(count, "=== Creating {} Addresses with ETH Transfers ===", count);

        let mut chain = ForwardingChain::default();
        let mut current = seed.clone();

        for hop in 1..=count {
            tracing::info!("--- Step {}/{} ---", hop, count);

            let next = self.ledger.generate_account()?;
            tracing::info!(
                address = %next.address(),
                private_key = %next.private_key_hex(),
                "Created new address"
            );

            let balance = self.ledger.balance(current.address()).await?;
            tracing::info!(
                from = %current.address(),
                balance_eth = %format_ether(balance),
                "Current balance"
            );

            let outcome = self.fund_next(&current, &next, balance).await?;

            chain.push(next.clone(), outcome);
            current = next;

            self.clock.sleep(self.timing.hop_delay()).await;
        }

        Ok(chain)
    }

    async fn fund_next(
        &self,
        current: &Account,
        next: &Account,
        balance: U256,
    ) -> Result<HopOutcome, RunError> {
        if balance.is_zero() {
            tracing::warn!("No balance available for transfer");
            return Ok(HopOutcome::NoBalance);
        }

        let gas = self.ledger.estimate_fee().await?;
        tracing::info!(gas_cost_eth = %gas.gas_cost_eth(), "Gas cost");

        match plan_transfer(balance, gas.gas_cost, self.safety_margin) {
            TransferPlan::NoBalance => Ok(HopOutcome::NoBalance),
            TransferPlan::InsufficientForGas => {
                tracing::warn!(
                    balance_eth = %format_ether(balance),
                    gas_needed_eth = %gas.gas_cost_eth(),
                    "Insufficient balance for transfer (balance too low to cover gas fees)"
                );
                Ok(HopOutcome::InsufficientForGas { balance, gas })
            }
            TransferPlan::InsufficientAfterMargin => {
                tracing::warn!(
                    balance_eth = %format_ether(balance),
                    gas_needed_eth = %gas.gas_cost_eth(),
                    "Insufficient balance for transfer (after safety buffer)"
                );
                Ok(HopOutcome::InsufficientAfterMargin { balance, gas })
            }
            TransferPlan::Send(amount) => {
                tracing::info!(
                    amount_eth = %format_ether(amount),
                    to = %next.address(),
                    "Transferring"
                );

                match self.ledger.submit_transfer(current, next.address(), amount, &gas).await {
                    Ok(receipt) => {
                        tracing::info!(tx_hash = %receipt.tx_hash, "Transfer completed");
                        tracing::info!(gas_used_eth = %format_ether(receipt.gas_paid()), "Gas used");
                        Ok(HopOutcome::Transferred { amount, receipt })
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Transfer failed");
                        tracing::info!(
                            amount_eth = %format_ether(amount),
                            gas_cost_eth = %gas.gas_cost_eth(),
                            balance_eth = %format_ether(balance),
                            "Transfer attempt details"
                        );
                        Ok(HopOutcome::Failed {
                            amount,
                            reason: e.to_string(),
                        })
                    }
                }
            }
        }
    }
}
