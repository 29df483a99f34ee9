use rand::Rng;

use crate::models::{Chain, EnrichedWallet, RawWallet};

use super::gas_estimator::estimate;

/// Attaches an estimate for each supported chain. The raw wallet data is
/// carried through untouched.
pub fn enrich<R: Rng + ?Sized>(wallet: RawWallet, rng: &mut R) -> EnrichedWallet {
    let gas_eth = estimate(wallet.tx_count(Chain::Ethereum), Chain::Ethereum, rng);
    let gas_base = estimate(wallet.tx_count(Chain::Base), Chain::Base, rng);

    EnrichedWallet {
        wallet,
        gas_eth,
        gas_base,
    }
}

pub fn enrich_all<R: Rng + ?Sized>(wallets: Vec<RawWallet>, rng: &mut R) -> Vec<EnrichedWallet> {
    wallets.into_iter().map(|wallet| enrich(wallet, &mut *rng)).collect()
}

/// Keeps at most one primary flag. The first flagged wallet wins; when
/// nothing is flagged, `hint` (matched case-insensitively) selects one.
pub fn normalize_primary(wallets: &mut [RawWallet], hint: Option<&str>) -> Option<String> {
    let mut primary: Option<String> = None;

    for wallet in wallets.iter_mut() {
        if !wallet.is_primary {
            continue;
        }
        if primary.is_some() {
            tracing::warn!("Dropping extra primary flag on {}", wallet.address);
            wallet.is_primary = false;
        } else {
            primary = Some(wallet.address.clone());
        }
    }

    if primary.is_none() {
        if let Some(hint) = hint.map(str::trim).filter(|h| !h.is_empty()) {
            if let Some(wallet) = wallets
                .iter_mut()
                .find(|w| w.address.eq_ignore_ascii_case(hint))
            {
                wallet.is_primary = true;
                primary = Some(wallet.address.clone());
            }
        }
    }

    primary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GasEstimate;
    use rand::{rngs::StdRng, SeedableRng};

    fn wallet(address: &str, eth: u64, base: u64, is_primary: bool) -> RawWallet {
        RawWallet {
            address: address.to_string(),
            eth_tx_count: eth,
            base_tx_count: base,
            eth_balance: 1.25,
            is_primary,
        }
    }

    #[test]
    fn enrich_preserves_raw_fields() {
        let raw = wallet("0xAbC", 10, 4, true);
        let enriched = enrich(raw.clone(), &mut StdRng::seed_from_u64(3));
        assert_eq!(enriched.wallet, raw);
        assert!(enriched.gas_eth.gas_used > 0);
        assert!(enriched.gas_base.gas_used > 0);
    }

    #[test]
    fn enrich_zero_counts_gives_zero_estimates() {
        let enriched = enrich(wallet("0x1", 0, 0, false), &mut StdRng::seed_from_u64(3));
        assert_eq!(enriched.gas_eth, GasEstimate::ZERO);
        assert_eq!(enriched.gas_base, GasEstimate::ZERO);
    }

    #[test]
    fn enrich_all_keeps_order() {
        let wallets = vec![wallet("0x1", 1, 0, false), wallet("0x2", 0, 1, false)];
        let enriched = enrich_all(wallets, &mut StdRng::seed_from_u64(5));
        let addresses: Vec<_> = enriched.iter().map(|w| w.wallet.address.as_str()).collect();
        assert_eq!(addresses, vec!["0x1", "0x2"]);
    }

    #[test]
    fn normalize_primary_keeps_first_flag_only() {
        let mut wallets = vec![
            wallet("0x1", 0, 0, false),
            wallet("0x2", 0, 0, true),
            wallet("0x3", 0, 0, true),
        ];
        let primary = normalize_primary(&mut wallets, None);
        assert_eq!(primary.as_deref(), Some("0x2"));
        assert!(!wallets[2].is_primary);
    }

    #[test]
    fn normalize_primary_uses_hint_when_unflagged() {
        let mut wallets = vec![wallet("0xAbC", 0, 0, false), wallet("0xdef", 0, 0, false)];
        let primary = normalize_primary(&mut wallets, Some("0xabc"));
        assert_eq!(primary.as_deref(), Some("0xAbC"));
        assert!(wallets[0].is_primary);
    }

    #[test]
    fn normalize_primary_allows_none() {
        let mut wallets = vec![wallet("0x1", 0, 0, false)];
        assert_eq!(normalize_primary(&mut wallets, Some("0x9")), None);
        assert_eq!(normalize_primary(&mut [], None), None);
    }
}
