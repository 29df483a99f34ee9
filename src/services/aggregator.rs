use crate::{
    models::{Chain, EnrichedWallet, GasTotals},
    utils::{round_fiat, round_native},
};

/// Sums per-chain native cost and overall fiat cost across `wallets`.
/// Rounding is applied once, after summation.
pub fn aggregate(wallets: &[EnrichedWallet]) -> GasTotals {
    let mut total_eth = 0.0;
    let mut total_base = 0.0;
    let mut total_usd = 0.0;

    for wallet in wallets {
        total_eth += wallet.estimate(Chain::Ethereum).gas_cost_eth;
        total_base += wallet.estimate(Chain::Base).gas_cost_eth;
        total_usd += Chain::ALL
            .iter()
            .map(|chain| wallet.estimate(*chain).gas_cost_usd)
            .sum::<f64>();
    }

    GasTotals {
        total_gas_used_eth: round_native(total_eth),
        total_gas_used_base: round_native(total_base),
        total_gas_usd: round_fiat(total_usd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GasEstimate, RawWallet};

    fn enriched(address: &str, eth: (f64, f64), base: (f64, f64)) -> EnrichedWallet {
        EnrichedWallet {
            wallet: RawWallet {
                address: address.to_string(),
                eth_tx_count: 1,
                base_tx_count: 1,
                eth_balance: 0.0,
                is_primary: false,
            },
            gas_eth: GasEstimate {
                gas_used: 21_000,
                gas_cost_eth: eth.0,
                gas_cost_usd: eth.1,
            },
            gas_base: GasEstimate {
                gas_used: 21_000,
                gas_cost_eth: base.0,
                gas_cost_usd: base.1,
            },
        }
    }

    #[test]
    fn empty_wallets_give_zero_totals() {
        assert_eq!(aggregate(&[]), GasTotals::default());
    }

    #[test]
    fn sums_per_chain_and_fiat() {
        let wallets = vec![
            enriched("0x1", (0.0021, 7.35), (0.000002, 0.01)),
            enriched("0x2", (0.001, 3.5), (0.000004, 0.01)),
        ];
        let totals = aggregate(&wallets);
        assert!((totals.total_gas_used_eth - 0.0031).abs() < 1e-12);
        assert!((totals.total_gas_used_base - 0.000006).abs() < 1e-12);
        assert!((totals.total_gas_usd - 10.87).abs() < 1e-9);
    }

    #[test]
    fn order_does_not_change_totals() {
        let mut wallets = vec![
            enriched("0x1", (0.123456, 432.1), (0.000011, 0.04)),
            enriched("0x2", (0.000789, 2.76), (0.000123, 0.43)),
            enriched("0x3", (0.5, 1750.0), (0.0, 0.0)),
        ];
        let forward = aggregate(&wallets);
        wallets.reverse();
        let reversed = aggregate(&wallets);
        assert!((forward.total_gas_used_eth - reversed.total_gas_used_eth).abs() < 1e-6);
        assert!((forward.total_gas_used_base - reversed.total_gas_used_base).abs() < 1e-6);
        assert!((forward.total_gas_usd - reversed.total_gas_usd).abs() < 1e-2);
    }

    #[test]
    fn repeated_aggregation_is_identical() {
        let wallets = vec![
            enriched("0x1", (0.01, 35.0), (0.00001, 0.04)),
            enriched("0x2", (0.02, 70.0), (0.00002, 0.07)),
        ];
        assert_eq!(aggregate(&wallets), aggregate(&wallets));
    }

    #[test]
    fn rounds_after_summation() {
        // Each fiat cost alone rounds down; the sum must not.
        let wallets = vec![
            enriched("0x1", (0.0, 0.004), (0.0, 0.0)),
            enriched("0x2", (0.0, 0.004), (0.0, 0.0)),
        ];
        assert!((aggregate(&wallets).total_gas_usd - 0.01).abs() < 1e-12);
    }
}
