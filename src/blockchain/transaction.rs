//! Native transfer building, signing, and confirmation.
//!
//! # Responsibilities
//! - Build a plain value transfer carrying the quoted gas limit and price
//! - Sign with the sending account and broadcast to the primary endpoint
//! - Wait for the receipt within the configured confirmation timeout

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use tokio::time::timeout;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{GasEstimate, LedgerError, LedgerResult, TransferReceipt};
use crate::blockchain::wallet::Account;

/// Build the transfer request for `amount` wei from `from` to `to`.
pub fn build_transfer(
    from: Address,
    to: Address,
    amount: U256,
    gas: &GasEstimate,
    chain_id: u64,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_to(to)
        .with_value(amount)
        .with_gas_limit(gas.gas_limit)
        .with_gas_price(gas.gas_price)
        .with_chain_id(chain_id)
}

/// Sign, broadcast and confirm a transfer.
///
/// Returns once the receipt is available with the configured number of
/// confirmations. A reverted receipt is reported as [`LedgerError::Reverted`].
pub async fn send_transfer(
    client: &BlockchainClient,
    from: &Account,
    to: Address,
    amount: U256,
    gas: &GasEstimate,
) -> LedgerResult<TransferReceipt> {
    let wallet = EthereumWallet::from(from.signer().clone());
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(client.rpc_url().clone());

    let tx = build_transfer(from.address(), to, amount, gas, client.chain_id());

    let pending = provider
        .send_transaction(tx)
        .await
        .map_err(|e| LedgerError::Transfer(format!("Broadcast failed: {}", e)))?;
    let tx_hash = *pending.tx_hash();
    tracing::debug!(tx_hash = %tx_hash, "Transfer broadcast, awaiting receipt");

    let rpc = client.rpc_config();
    let receipt = timeout(
        rpc.confirmation_timeout(),
        pending
            .with_required_confirmations(rpc.confirmation_blocks)
            .get_receipt(),
    )
    .await
    .map_err(|_| LedgerError::ConfirmationTimeout(rpc.confirmation_timeout_secs))?
    .map_err(|e| LedgerError::Transfer(format!("Confirmation failed: {}", e)))?;

    if !receipt.status() {
        return Err(LedgerError::Reverted(tx_hash));
    }

    Ok(TransferReceipt {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
        effective_gas_price: receipt.effective_gas_price,
    })
}
