//! Transfer amount planning.
//!
//! Pure arithmetic on wei: the whole balance minus the quoted gas cost minus
//! a fixed safety margin.

use alloy::primitives::U256;

/// What to do with the balance of the current account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPlan {
    /// Nothing to forward.
    NoBalance,
    /// The balance does not cover the gas cost.
    InsufficientForGas,
    /// Something would be left after gas, but not more than the margin.
    InsufficientAfterMargin,
    /// Forward this many wei.
    Send(U256),
}

/// Largest amount that can move once gas is paid, if any.
pub fn max_transferable(balance: U256, gas_cost: U256) -> Option<U256> {
    balance.checked_sub(gas_cost).filter(|v| !v.is_zero())
}

/// `max - margin` when `max > margin`, zero otherwise.
pub fn apply_margin(max: U256, margin: U256) -> U256 {
    if max > margin {
        max - margin
    } else {
        U256::ZERO
    }
}

/// Decide how much of `balance` to forward.
pub fn plan_transfer(balance: U256, gas_cost: U256, margin: U256) -> TransferPlan {
    if balance.is_zero() {
        return TransferPlan::NoBalance;
    }
    let Some(max) = max_transferable(balance, gas_cost) else {
        return TransferPlan::InsufficientForGas;
    };
    let safe = apply_margin(max, margin);
    if safe.is_zero() {
        TransferPlan::InsufficientAfterMargin
    } else {
        TransferPlan::Send(safe)
    }
}
