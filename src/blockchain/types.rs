//! Chain-specific types and error definitions.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{TxHash, U256};
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Key generation failed.
    #[error("Account generation failed: {0}")]
    Generation(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Query(String),

    /// Every endpoint timed out.
    #[error("RPC request timed out after {0} seconds")]
    Timeout(u64),

    /// Transfer could not be signed or broadcast.
    #[error("Transfer error: {0}")]
    Transfer(String),

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(TxHash),

    /// Transaction receipt did not arrive in time.
    #[error("Transaction not confirmed within {0} seconds")]
    ConfirmationTimeout(u64),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Gas parameters for one plain transfer.
///
/// Built fresh before every transfer decision and never reused across hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    /// Gas units for a plain transfer.
    pub gas_limit: u64,
    /// Raw quote from the node, in wei.
    pub base_price: u128,
    /// Buffered price actually offered, in wei.
    pub gas_price: u128,
    /// `gas_limit * gas_price`, in wei.
    pub gas_cost: U256,
}

impl GasEstimate {
    /// Apply the percentage buffer to a quoted gas price.
    ///
    /// Integer arithmetic: `quoted * multiplier_percent / 100`, rounded down.
    pub fn from_quote(gas_limit: u64, quoted_price: u128, multiplier_percent: u64) -> Self {
        let gas_price = quoted_price.saturating_mul(multiplier_percent as u128) / 100;
        let gas_cost = U256::from(gas_price) * U256::from(gas_limit);
        Self {
            gas_limit,
            base_price: quoted_price,
            gas_price,
            gas_cost,
        }
    }

    /// Gas cost in ether, for display.
    pub fn gas_cost_eth(&self) -> String {
        format_ether(self.gas_cost)
    }
}

/// Confirmed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub effective_gas_price: u128,
}

impl TransferReceipt {
    /// Gas actually paid, in wei.
    pub fn gas_paid(&self) -> U256 {
        U256::from(self.gas_used) * U256::from(self.effective_gas_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_price_is_buffered_quote() {
        let estimate = GasEstimate::from_quote(21_000, 1_000_000_000, 110);
        assert_eq!(estimate.base_price, 1_000_000_000);
        assert_eq!(estimate.gas_price, 1_100_000_000);
        assert_eq!(estimate.gas_cost, U256::from(23_100_000_000_000u64));
        assert!(estimate.gas_cost_eth().starts_with("0.0000231"));
    }

    #[test]
    fn test_gas_price_rounds_down() {
        let estimate = GasEstimate::from_quote(21_000, 7, 110);
        assert_eq!(estimate.gas_price, 7);
        let estimate = GasEstimate::from_quote(21_000, 19, 110);
        assert_eq!(estimate.gas_price, 20);
    }

    #[test]
    fn test_gas_paid() {
        let receipt = TransferReceipt {
            tx_hash: TxHash::ZERO,
            block_number: Some(10),
            gas_used: 21_000,
            effective_gas_price: 2,
        };
        assert_eq!(receipt.gas_paid(), U256::from(42_000u64));
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::ConfirmationTimeout(180);
        assert_eq!(err.to_string(), "Transaction not confirmed within 180 seconds");

        let err = LedgerError::ChainMismatch {
            expected: 1,
            actual: 5,
        };
        assert!(err.to_string().contains("expected 1"));
    }
}
