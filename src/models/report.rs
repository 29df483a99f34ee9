use serde::Serialize;

use super::wallet::EnrichedWallet;

/// Per-user totals across every wallet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GasTotals {
    pub total_gas_used_eth: f64,
    pub total_gas_used_base: f64,
    pub total_gas_usd: f64,
}

/// Successful lookup result, built fresh for each request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserGasReport {
    pub username: String,
    pub fid: Option<u64>,
    pub display_name: Option<String>,
    pub pfp_url: Option<String>,
    pub wallets: Vec<EnrichedWallet>,
    pub primary_wallet: Option<String>,
    #[serde(flatten)]
    pub totals: GasTotals,
}

/// Body returned to the presentation layer on success.
#[derive(Debug, Serialize)]
pub struct GasCheckResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: UserGasReport,
}

impl From<UserGasReport> for GasCheckResponse {
    fn from(report: UserGasReport) -> Self {
        Self {
            success: true,
            report,
        }
    }
}

/// Profile and primary wallet only, without any gas estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickCheckReport {
    pub username: String,
    pub fid: Option<u64>,
    pub display_name: Option<String>,
    pub pfp_url: Option<String>,
    pub primary_wallet: Option<String>,
    pub wallet_count: usize,
}

#[derive(Debug, Serialize)]
pub struct QuickCheckResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: QuickCheckReport,
}

impl From<QuickCheckReport> for QuickCheckResponse {
    fn from(report: QuickCheckReport) -> Self {
        Self {
            success: true,
            report,
        }
    }
}
