//! End-of-run report over the forwarding chain.
//!
//! Balances are queried fresh for every account; nothing from the forwarding
//! loop is reused. The chain is only read.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, U256};

use crate::blockchain::{Account, Ledger, LedgerResult};

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    /// 1-based position in the chain.
    pub position: usize,
    pub address: Address,
    pub private_key: String,
    pub balance: U256,
}

/// Balances of every chain account at report time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub accounts: Vec<AccountSummary>,
}

impl SessionReport {
    /// The final account of the chain, if any were created.
    pub fn last(&self) -> Option<&AccountSummary> {
        self.accounts.last()
    }

    /// Sum of all reported balances.
    pub fn total_balance(&self) -> U256 {
        self.accounts.iter().map(|a| a.balance).fold(U256::ZERO, |acc, b| acc + b)
    }
}

/// Query and log the state of every account in `accounts`.
pub async fn report_chain<L>(
    ledger: &L,
    network_name: &str,
    accounts: &[Account],
) -> LedgerResult<SessionReport>
where
    L: Ledger + ?Sized,
{
    tracing::info!("=== FINAL RESULT ===");

    match accounts.last() {
        Some(last) => {
            let balance = ledger.balance(last.address()).await?;
            tracing::info!(
                address = %last.address(),
                private_key = %last.private_key_hex(),
                balance_eth = %format_ether(balance),
                network = network_name,
                "Last address"
            );
        }
        None => {
            tracing::info!(network = network_name, "No addresses were created");
        }
    }

    tracing::info!("=== ALL ADDRESSES INFO ===");

    let mut report = SessionReport {
        accounts: Vec::with_capacity(accounts.len()),
    };
    for (i, account) in accounts.iter().enumerate() {
        let balance = ledger.balance(account.address()).await?;
        tracing::info!(
            position = i + 1,
            address = %account.address(),
            private_key = %account.private_key_hex(),
            balance_eth = %format_ether(balance),
            "Address {}",
            i + 1
        );
        report.accounts.push(AccountSummary {
            position: i + 1,
            address: account.address(),
            private_key: account.private_key_hex(),
            balance,
        });
    }

    Ok(report)
}
