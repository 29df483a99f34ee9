// Utility helpers

use crate::constants::{FIAT_DECIMALS, NATIVE_DECIMALS};

/// Rounds `value` to `decimals` fractional digits.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

pub fn round_native(value: f64) -> f64 {
    round_to(value, NATIVE_DECIMALS)
}

pub fn round_fiat(value: f64) -> f64 {
    round_to(value, FIAT_DECIMALS)
}

/// Trims the raw lookup key, drops a single leading `@` and lowercases it,
/// matching how the resolver keys its users.
/// Returns `None` when nothing usable is left.
pub fn normalize_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_lowercase())
    }
}
