//! The ledger capability the forwarding controller is written against.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::transaction::send_transfer;
use crate::blockchain::types::{GasEstimate, LedgerResult, TransferReceipt};
use crate::blockchain::wallet::Account;

/// Account generation, balance and fee queries, and signed transfers.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Create a brand-new account.
    fn generate_account(&self) -> LedgerResult<Account>;

    /// Native balance of `address`, in wei.
    async fn balance(&self, address: Address) -> LedgerResult<U256>;

    /// Fresh gas quote for a plain transfer, buffered by at least 10%.
    async fn estimate_fee(&self) -> LedgerResult<GasEstimate>;

    /// Sign, broadcast and wait for confirmation of a transfer.
    async fn submit_transfer(
        &self,
        from: &Account,
        to: Address,
        amount: U256,
        gas: &GasEstimate,
    ) -> LedgerResult<TransferReceipt>;
}

#[async_trait]
impl Ledger for BlockchainClient {
    fn generate_account(&self) -> LedgerResult<Account> {
        Ok(Account::generate())
    }

    async fn balance(&self, address: Address) -> LedgerResult<U256> {
        self.get_balance(address).await
    }

    async fn estimate_fee(&self) -> LedgerResult<GasEstimate> {
        self.quote_transfer_gas().await
    }

    async fn submit_transfer(
        &self,
        from: &Account,
        to: Address,
        amount: U256,
        gas: &GasEstimate,
    ) -> LedgerResult<TransferReceipt> {
        send_transfer(self, from, to, amount, gas).await
    }
}
