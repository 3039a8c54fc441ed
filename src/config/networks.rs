//! Named network presets.
//!
//! The set of supported networks is closed: each variant maps to exactly one
//! display name, RPC endpoint and chain id.

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Networks the forwarder can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Base Sepolia testnet.
    BaseSepolia,
    /// Ethereum mainnet.
    Ethereum,
}

/// Connection details for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkPreset {
    /// Human-readable name shown to the operator.
    pub name: &'static str,
    /// Default JSON-RPC endpoint.
    pub rpc_url: &'static str,
    /// EIP-155 chain id.
    pub chain_id: u64,
}

const BASE_SEPOLIA: NetworkPreset = NetworkPreset {
    name: "Base Sepolia Testnet",
    rpc_url: "https://sepolia.base.org",
    chain_id: 84532,
};

const ETHEREUM: NetworkPreset = NetworkPreset {
    name: "Ethereum Mainnet",
    rpc_url: "https://ethereum-rpc.publicnode.com",
    chain_id: 1,
};

impl Network {
    /// All supported networks.
    pub const ALL: [Network; 2] = [Network::BaseSepolia, Network::Ethereum];

    /// Preset for this network.
    pub fn preset(self) -> NetworkPreset {
        match self {
            Network::BaseSepolia => BASE_SEPOLIA,
            Network::Ethereum => ETHEREUM,
        }
    }

    /// Canonical selector used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Network::BaseSepolia => "base-sepolia",
            Network::Ethereum => "ethereum",
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "base-sepolia" | "baseSepolia" | "base_sepolia" => Ok(Network::BaseSepolia),
            "ethereum" | "mainnet" => Ok(Network::Ethereum),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
