use rand::Rng;

use crate::{
    constants::{
        BASE_GAS_PER_TX_MAX, BASE_GAS_PER_TX_MIN, BASE_GAS_PRICE_GWEI_MAX,
        BASE_GAS_PRICE_GWEI_MIN, ETH_GAS_PER_TX_MAX, ETH_GAS_PER_TX_MIN,
        ETH_GAS_PRICE_GWEI_MAX, ETH_GAS_PRICE_GWEI_MIN, ETH_PRICE_USD, GWEI_PER_ETH,
    },
    models::{Chain, GasEstimate},
    utils::{round_fiat, round_native},
};

/// Per-chain sampling bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainGasProfile {
    pub gas_per_tx_min: u64,
    pub gas_per_tx_max: u64,
    pub price_gwei_min: f64,
    pub price_gwei_max: f64,
}

impl ChainGasProfile {
    pub fn for_chain(chain: Chain) -> Self {
        match chain {
            Chain::Ethereum => Self {
                gas_per_tx_min: ETH_GAS_PER_TX_MIN,
                gas_per_tx_max: ETH_GAS_PER_TX_MAX,
                price_gwei_min: ETH_GAS_PRICE_GWEI_MIN,
                price_gwei_max: ETH_GAS_PRICE_GWEI_MAX,
            },
            Chain::Base => Self {
                gas_per_tx_min: BASE_GAS_PER_TX_MIN,
                gas_per_tx_max: BASE_GAS_PER_TX_MAX,
                price_gwei_min: BASE_GAS_PRICE_GWEI_MIN,
                price_gwei_max: BASE_GAS_PRICE_GWEI_MAX,
            },
        }
    }
}

/// Estimates gas spend for `tx_count` transactions on `chain`.
///
/// This is a synthesized estimate: the per-transaction gas units and the gas
/// price are drawn from `rng`, so repeated calls may differ. Zero
/// transactions always yield a zero estimate without touching `rng`.
pub fn estimate<R: Rng + ?Sized>(tx_count: u64, chain: Chain, rng: &mut R) -> GasEstimate {
    if tx_count == 0 {
        return GasEstimate::ZERO;
    }

    let profile = ChainGasProfile::for_chain(chain);
    let gas_per_tx = rng.random_range(profile.gas_per_tx_min..=profile.gas_per_tx_max);
    let price_gwei = rng.random_range(profile.price_gwei_min..=profile.price_gwei_max);

    estimate_with(tx_count, gas_per_tx, price_gwei)
}

/// Deterministic core of [`estimate`] once the draws are fixed.
pub fn estimate_with(tx_count: u64, gas_per_tx: u64, price_gwei: f64) -> GasEstimate {
    if tx_count == 0 {
        return GasEstimate::ZERO;
    }

    let gas_used = gas_per_tx.saturating_mul(tx_count);
    let cost_eth = gas_used as f64 * price_gwei / GWEI_PER_ETH;
    let cost_usd = cost_eth * ETH_PRICE_USD;

    GasEstimate {
        gas_used,
        gas_cost_eth: round_native(cost_eth),
        gas_cost_usd: round_fiat(cost_usd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn zero_transactions_is_exact_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for chain in Chain::ALL {
            assert_eq!(estimate(0, chain, &mut rng), GasEstimate::ZERO);
        }
    }

    #[test]
    fn positive_counts_stay_in_chain_bands() {
        let mut rng = StdRng::seed_from_u64(42);
        for chain in Chain::ALL {
            let profile = ChainGasProfile::for_chain(chain);
            for tx_count in [1_u64, 5, 100, 10_000] {
                let est = estimate(tx_count, chain, &mut rng);
                assert!(est.gas_used >= profile.gas_per_tx_min * tx_count);
                assert!(est.gas_used <= profile.gas_per_tx_max * tx_count);
                assert_eq!(est.gas_used % tx_count, 0);
                assert!(est.gas_cost_eth.is_finite() && est.gas_cost_eth >= 0.0);
                assert!(est.gas_cost_usd.is_finite() && est.gas_cost_usd >= 0.0);
            }
        }
    }

    #[test]
    fn gas_used_grows_with_tx_count_for_fixed_draw() {
        let mut previous = 0;
        for tx_count in 1..=50 {
            let est = estimate_with(tx_count, 21_000, 20.0);
            assert!(est.gas_used > previous);
            previous = est.gas_used;
        }
    }

    #[test]
    fn fixed_draw_converts_through_gwei_and_fiat() {
        // 2 tx * 21000 gas * 20 gwei = 0.00084 ETH -> 2.94 USD
        let est = estimate_with(2, 21_000, 20.0);
        assert_eq!(est.gas_used, 42_000);
        assert!((est.gas_cost_eth - 0.00084).abs() < 1e-12);
        assert!((est.gas_cost_usd - 2.94).abs() < 1e-9);
    }

    #[test]
    fn base_is_cheaper_than_ethereum_for_same_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let eth = estimate(1_000, Chain::Ethereum, &mut rng);
        let base = estimate(1_000, Chain::Base, &mut rng);
        assert!(base.gas_cost_eth < eth.gas_cost_eth);
    }

    #[test]
    fn same_seed_reproduces_estimate() {
        let a = estimate(12, Chain::Ethereum, &mut StdRng::seed_from_u64(99));
        let b = estimate(12, Chain::Ethereum, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
