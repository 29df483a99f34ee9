/// Application constants

// API version
pub const API_VERSION: &str = "v1";

// Resolver
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const RESOLVER_GAS_PATH: &str = "/api/gas";
pub const RESOLVER_HEALTH_PATH: &str = "/api/health";
pub const RESOLVER_HEALTH_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "User not found";
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
    "Cannot connect to backend. Make sure the Python backend is running on the configured BACKEND_URL.";
pub const USERNAME_REQUIRED_MESSAGE: &str = "Username is required";

// Pricing
pub const ETH_PRICE_USD: f64 = 3500.0; // 1 ETH, used for every chain
pub const GWEI_PER_ETH: f64 = 1_000_000_000.0;

// Ethereum mainnet (per transaction)
pub const ETH_GAS_PER_TX_MIN: u64 = 21_000;
pub const ETH_GAS_PER_TX_MAX: u64 = 150_000;
pub const ETH_GAS_PRICE_GWEI_MIN: f64 = 15.0;
pub const ETH_GAS_PRICE_GWEI_MAX: f64 = 50.0;

// Base rollup (per transaction)
pub const BASE_GAS_PER_TX_MIN: u64 = 21_000;
pub const BASE_GAS_PER_TX_MAX: u64 = 100_000;
pub const BASE_GAS_PRICE_GWEI_MIN: f64 = 0.005;
pub const BASE_GAS_PRICE_GWEI_MAX: f64 = 0.05;

// Rounding
pub const NATIVE_DECIMALS: u32 = 6;
pub const FIAT_DECIMALS: u32 = 2;
