//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint of the selected network
//! - Query chain state (chain id, balances, gas price)
//! - Handle timeouts and network errors, falling over to secondary endpoints

use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{ChainId, GasEstimate, LedgerError, LedgerResult};
use crate::config::{GasConfig, RpcConfig, RunSettings};

/// Blockchain RPC client wrapper with failover support.
#[derive(Clone)]
pub struct BlockchainClient {
    /// List of providers (primary + failovers).
    providers: Vec<Arc<dyn Provider + Send + Sync>>,
    /// Primary endpoint; transfers are always broadcast here.
    rpc_url: Url,
    /// Expected chain id of the selected network.
    chain_id: u64,
    rpc: RpcConfig,
    gas: GasConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client for the resolved run settings.
    ///
    /// The endpoint's chain id is checked against the network preset; a
    /// mismatch or an unreachable node is logged, not fatal.
    pub async fn new(settings: &RunSettings) -> LedgerResult<Self> {
        let rpc = settings.config.rpc.clone();
        let timeout_duration = rpc.timeout();
        let mut providers = Vec::new();

        providers.push(Arc::new(ProviderBuilder::new().connect_http(settings.rpc_url.clone()))
            as Arc<dyn Provider + Send + Sync>);

        for url_str in &rpc.failover_urls {
            if let Ok(url) = url_str.parse() {
                providers.push(Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>);
            } else {
                tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        let client = Self {
            providers,
            rpc_url: settings.rpc_url.clone(),
            chain_id: settings.preset.chain_id,
            rpc,
            gas: settings.config.gas.clone(),
            timeout_duration,
        };

        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %client.rpc_url,
                    chain_id = client.chain_id,
                    "Blockchain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Blockchain client initialized but chain verification failed"
                );
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches the network preset.
    pub async fn verify_chain_id(&self) -> LedgerResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.chain_id {
            return Err(LedgerError::ChainMismatch {
                expected: self.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> LedgerResult<ChainId> {
        let mut timed_out = 0;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_chain_id();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(ChainId(result)),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "RPC error, trying next provider");
                }
                Err(_) => {
                    timed_out += 1;
                    tracing::warn!(provider_idx = i, "RPC timeout, trying next provider");
                }
            }
        }
        Err(self.exhausted(timed_out, "All RPC providers failed"))
    }

    /// Get the balance of an address, in wei.
    pub async fn get_balance(&self, address: Address) -> LedgerResult<U256> {
        let mut timed_out = 0;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_balance(address);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(provider_idx = i, error = %e, "RPC error"),
                Err(_) => {
                    timed_out += 1;
                    tracing::warn!(provider_idx = i, "RPC timeout");
                }
            }
        }
        Err(self.exhausted(timed_out, "All providers failed to get balance"))
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> LedgerResult<u128> {
        let mut timed_out = 0;
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_gas_price();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(provider_idx = i, error = %e, "RPC error"),
                Err(_) => {
                    timed_out += 1;
                    tracing::warn!(provider_idx = i, "RPC timeout");
                }
            }
        }
        Err(self.exhausted(timed_out, "All providers failed to get gas price"))
    }

    /// Error after every provider failed; `Timeout` only if none answered at all.
    fn exhausted(&self, timed_out: usize, message: &str) -> LedgerError {
        if timed_out == self.providers.len() {
            LedgerError::Timeout(self.rpc.timeout_secs)
        } else {
            LedgerError::Query(message.to_string())
        }
    }

    /// Quote a plain transfer: fresh gas price with the configured buffer.
    pub async fn quote_transfer_gas(&self) -> LedgerResult<GasEstimate> {
        let quoted = self.get_gas_price().await?;
        let estimate =
            GasEstimate::from_quote(self.gas.gas_limit, quoted, self.gas.price_multiplier_percent);
        tracing::debug!(
            quoted_wei = quoted,
            buffered_wei = estimate.gas_price,
            gas_limit = estimate.gas_limit,
            "Gas price quoted"
        );
        Ok(estimate)
    }

    /// Primary endpoint URL.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Chain id transfers are signed for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// RPC configuration.
    pub fn rpc_config(&self) -> &RpcConfig {
        &self.rpc
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("chain_id", &self.chain_id)
            .field("providers", &self.providers.len())
            .field("timeout_secs", &self.rpc.timeout_secs)
            .finish()
    }
}
