//! Shared test doubles: an in-memory ledger, a scripted operator and a clock
//! that records instead of sleeping.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use chain_forwarder::blockchain::{
    Account, GasEstimate, Ledger, LedgerError, LedgerResult, TransferReceipt,
};
use chain_forwarder::config::{ForwarderConfig, Network, RunSettings};
use chain_forwarder::forwarder::{Clock, OperatorPrompt, PromptError};

pub fn eth(amount: &str) -> U256 {
    parse_ether(amount).unwrap()
}

/// Gas quote whose buffered cost is exactly 0.0001 ETH:
/// 3_636_363_637 * 110 / 100 = 4 gwei, times 25_000 gas.
pub fn gas_costing_point_0001_eth() -> GasEstimate {
    GasEstimate::from_quote(25_000, 3_636_363_637, 110)
}

pub fn test_settings(count: u32) -> RunSettings {
    RunSettings {
        network: Network::BaseSepolia,
        preset: Network::BaseSepolia.preset(),
        rpc_url: "http://localhost:8545".parse().unwrap(),
        count,
        config: ForwarderConfig::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    pub from: Address,
    pub to: Address,
    pub amount: U256,
    pub gas: GasEstimate,
}

#[derive(Default)]
struct MockState {
    balances: HashMap<Address, U256>,
    generated: Vec<Account>,
    transfers: Vec<TransferCall>,
    balance_queries: usize,
    fee_queries: usize,
    /// Credit the first generated account once this many balance queries
    /// have been made.
    seed_funding: Option<(usize, U256)>,
    /// 1-based submit calls that fail.
    failing_transfers: HashSet<usize>,
    /// Generation fails once this many accounts exist.
    generation_limit: Option<usize>,
    fail_balance_queries: bool,
}

/// Ledger that keeps balances in memory and moves them on transfer.
pub struct MockLedger {
    gas: GasEstimate,
    state: Mutex<MockState>,
}

impl MockLedger {
    pub fn new(gas: GasEstimate) -> Arc<Self> {
        Arc::new(Self {
            gas,
            state: Mutex::new(MockState::default()),
        })
    }

    /// Seed receives `amount` before the first balance check.
    pub fn with_funded_seed(gas: GasEstimate, amount: U256) -> Arc<Self> {
        let ledger = Self::new(gas);
        ledger.fund_seed_after(0, amount);
        ledger
    }

    pub fn fund_seed_after(&self, balance_queries: usize, amount: U256) {
        self.state.lock().unwrap().seed_funding = Some((balance_queries, amount));
    }

    pub fn fail_transfer(&self, call: usize) {
        self.state.lock().unwrap().failing_transfers.insert(call);
    }

    pub fn limit_generation(&self, accounts: usize) {
        self.state.lock().unwrap().generation_limit = Some(accounts);
    }

    pub fn fail_balance_queries(&self) {
        self.state.lock().unwrap().fail_balance_queries = true;
    }

    pub fn set_balance(&self, address: Address, amount: U256) {
        self.state.lock().unwrap().balances.insert(address, amount);
    }

    pub fn balance_of(&self, address: Address) -> U256 {
        self.state
            .lock()
            .unwrap()
            .balances
            .get(&address)
            .copied()
            .unwrap_or_default()
    }

    pub fn generated(&self) -> Vec<Account> {
        self.state.lock().unwrap().generated.clone()
    }

    pub fn transfers(&self) -> Vec<TransferCall> {
        self.state.lock().unwrap().transfers.clone()
    }

    pub fn balance_queries(&self) -> usize {
        self.state.lock().unwrap().balance_queries
    }

    pub fn fee_queries(&self) -> usize {
        self.state.lock().unwrap().fee_queries
    }

    fn apply_seed_funding(state: &mut MockState) {
        if let Some((after, amount)) = state.seed_funding {
            if state.balance_queries >= after {
                if let Some(seed) = state.generated.first().map(|a| a.address()) {
                    *state.balances.entry(seed).or_default() += amount;
                    state.seed_funding = None;
                }
            }
        }
    }
}

#[async_trait]
impl Ledger for MockLedger {
    fn generate_account(&self) -> LedgerResult<Account> {
        let mut state = self.state.lock().unwrap();
        if let Some(limit) = state.generation_limit {
            if state.generated.len() >= limit {
                return Err(LedgerError::Generation("entropy source unavailable".to_string()));
            }
        }
        let account = Account::generate();
        state.generated.push(account.clone());
        Ok(account)
    }

    async fn balance(&self, address: Address) -> LedgerResult<U256> {
        let mut state = self.state.lock().unwrap();
        if state.fail_balance_queries {
            return Err(LedgerError::Query("node unreachable".to_string()));
        }
        Self::apply_seed_funding(&mut state);
        state.balance_queries += 1;
        Ok(state.balances.get(&address).copied().unwrap_or_default())
    }

    async fn estimate_fee(&self) -> LedgerResult<GasEstimate> {
        self.state.lock().unwrap().fee_queries += 1;
        Ok(self.gas)
    }

    async fn submit_transfer(
        &self,
        from: &Account,
        to: Address,
        amount: U256,
        gas: &GasEstimate,
    ) -> LedgerResult<TransferReceipt> {
        let mut state = self.state.lock().unwrap();
        state.transfers.push(TransferCall {
            from: from.address(),
            to,
            amount,
            gas: *gas,
        });
        let call = state.transfers.len();
        if state.failing_transfers.contains(&call) {
            return Err(LedgerError::Transfer("replacement transaction underpriced".to_string()));
        }

        let available = state.balances.get(&from.address()).copied().unwrap_or_default();
        let needed = amount + gas.gas_cost;
        if available < needed {
            return Err(LedgerError::Transfer("insufficient funds for gas * price + value".to_string()));
        }
        state.balances.insert(from.address(), available - needed);
        *state.balances.entry(to).or_default() += amount;

        Ok(TransferReceipt {
            tx_hash: TxHash::repeat_byte(call as u8),
            block_number: Some(call as u64),
            gas_used: gas.gas_limit,
            effective_gas_price: gas.gas_price,
        })
    }
}

/// Operator that replays canned answers and then closes its input.
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
        }
    }
}

#[async_trait]
impl OperatorPrompt for ScriptedPrompt {
    async fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }
}

/// Clock that returns immediately and remembers every requested delay.
#[derive(Clone, Default)]
pub struct RecordingClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingClock {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
