use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;

use crate::{
    constants::USERNAME_REQUIRED_MESSAGE,
    error::{AppError, Result},
    integrations::{ResolvedUser, ResolverReply, WalletResolver},
    models::{QuickCheckReport, UserGasReport},
    utils::normalize_username,
};

use super::{aggregator::aggregate, wallet_enrichment};

/// Gas Check Service - username in, gas report out.
///
/// Holds no per-request state: the resolver handle is shared, everything else
/// is built fresh on each call.
#[derive(Clone)]
pub struct GasCheckService {
    resolver: Arc<dyn WalletResolver>,
}

impl GasCheckService {
    pub fn new(resolver: Arc<dyn WalletResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<dyn WalletResolver> {
        &self.resolver
    }

    /// Runs a lookup with a freshly seeded random source.
    pub async fn check(&self, raw_username: &str) -> Result<UserGasReport> {
        let mut rng = StdRng::from_os_rng();
        self.check_with_rng(raw_username, &mut rng).await
    }

    /// Runs a lookup drawing estimates from `rng`.
    pub async fn check_with_rng<R: Rng + Send>(
        &self,
        raw_username: &str,
        rng: &mut R,
    ) -> Result<UserGasReport> {
        let user = self.lookup(raw_username).await?;
        let report = build_report(user, rng);
        tracing::info!(
            "Gas report for {}: {} wallets, ${:.2}",
            report.username,
            report.wallets.len(),
            report.totals.total_gas_usd
        );
        Ok(report)
    }

    /// Profile, primary wallet and wallet count, without gas estimation.
    pub async fn quick_check(&self, raw_username: &str) -> Result<QuickCheckReport> {
        let user = self.lookup(raw_username).await?;
        let report = build_quick_report(user);
        tracing::info!(
            "Quick check for {}: {} wallets",
            report.username,
            report.wallet_count
        );
        Ok(report)
    }

    /// Validates the username and asks the resolver once.
    ///
    /// Validation failures return before the resolver is contacted. Neither a
    /// rejection nor a transport failure is retried.
    async fn lookup(&self, raw_username: &str) -> Result<ResolvedUser> {
        let username = normalize_username(raw_username).ok_or_else(|| AppError::Validation {
            username: raw_username.trim().to_string(),
            message: USERNAME_REQUIRED_MESSAGE.to_string(),
        })?;

        let reply = match self.resolver.resolve(&username).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Resolver unavailable for {}: {}", username, e);
                return Err(AppError::UpstreamUnavailable {
                    username,
                    reason: e.to_string(),
                });
            }
        };

        match reply {
            ResolverReply::Found(user) => Ok(user),
            ResolverReply::Rejected { message } => {
                tracing::warn!("Resolver rejected {}: {}", username, message);
                Err(AppError::NotFound { username, message })
            }
        }
    }
}

pub fn build_quick_report(user: ResolvedUser) -> QuickCheckReport {
    let ResolvedUser {
        username,
        fid,
        display_name,
        pfp_url,
        mut wallets,
        primary_wallet,
    } = user;

    let primary_wallet =
        wallet_enrichment::normalize_primary(&mut wallets, primary_wallet.as_deref());

    QuickCheckReport {
        username,
        fid,
        display_name,
        pfp_url,
        primary_wallet,
        wallet_count: wallets.len(),
    }
}

/// Enriches and aggregates a resolved user. Pure apart from `rng`.
pub fn build_report<R: Rng + ?Sized>(user: ResolvedUser, rng: &mut R) -> UserGasReport {
    let ResolvedUser {
        username,
        fid,
        display_name,
        pfp_url,
        mut wallets,
        primary_wallet,
    } = user;

    let primary_wallet =
        wallet_enrichment::normalize_primary(&mut wallets, primary_wallet.as_deref());
    let wallets = wallet_enrichment::enrich_all(wallets, rng);
    let totals = aggregate(&wallets);

    UserGasReport {
        username,
        fid,
        display_name,
        pfp_url,
        wallets,
        primary_wallet,
        totals,
    }
}
