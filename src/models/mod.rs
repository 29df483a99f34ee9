// src/models/mod.rs
pub mod report;
pub mod wallet;

pub use report::{
    GasCheckResponse, GasTotals, QuickCheckReport, QuickCheckResponse, UserGasReport,
};
pub use wallet::{Chain, EnrichedWallet, GasEstimate, RawWallet};
