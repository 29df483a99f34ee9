// All service modules
pub mod aggregator;
pub mod gas_check;
pub mod gas_estimator;
pub mod wallet_enrichment;

// Re-export for convenience
pub use gas_check::GasCheckService;
