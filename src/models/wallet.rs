use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported transaction networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Primary network (Ethereum mainnet).
    Ethereum,
    /// Secondary rollup (Base).
    Base,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Ethereum, Chain::Base];
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Ethereum => write!(f, "ethereum"),
            Chain::Base => write!(f, "base"),
        }
    }
}

/// Gas spend estimate for one wallet on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasEstimate {
    #[serde(rename = "gasUsed")]
    pub gas_used: u64,
    #[serde(rename = "gasCostETH")]
    pub gas_cost_eth: f64,
    #[serde(rename = "gasCostUSD")]
    pub gas_cost_usd: f64,
}

impl GasEstimate {
    pub const ZERO: GasEstimate = GasEstimate {
        gas_used: 0,
        gas_cost_eth: 0.0,
        gas_cost_usd: 0.0,
    };
}

/// Wallet as returned by the resolver, before any estimate is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWallet {
    pub address: String,
    #[serde(default)]
    pub eth_tx_count: u64,
    #[serde(default)]
    pub base_tx_count: u64,
    #[serde(default)]
    pub eth_balance: f64,
    #[serde(default)]
    pub is_primary: bool,
}

impl RawWallet {
    pub fn tx_count(&self, chain: Chain) -> u64 {
        match chain {
            Chain::Ethereum => self.eth_tx_count,
            Chain::Base => self.base_tx_count,
        }
    }
}

/// Wallet with an estimate for every supported chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedWallet {
    #[serde(flatten)]
    pub wallet: RawWallet,
    pub gas_eth: GasEstimate,
    pub gas_base: GasEstimate,
}

impl EnrichedWallet {
    pub fn estimate(&self, chain: Chain) -> &GasEstimate {
        match chain {
            Chain::Ethereum => &self.gas_eth,
            Chain::Base => &self.gas_base,
        }
    }
}
