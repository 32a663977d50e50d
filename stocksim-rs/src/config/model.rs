//! Price model configuration

use serde::{Deserialize, Serialize};

/// Parameters of the base GBM step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Price used when there is no prior history
    pub seed_price: f64,
    /// Per-step drift (μ), e.g. 0.0002 = 0.02% per day
    pub drift: f64,
    /// Per-step volatility (σ), e.g. 0.03 = 3% per day
    pub volatility: f64,
    /// Time step in days
    pub dt: f64,
    /// Price floor applied after every step
    pub min_price: f64,
    /// Decimal places kept after rounding (0 = whole units)
    pub price_decimals: u32,
    /// Level the price is pulled towards
    pub anchor: f64,
    /// Strength of the pull towards `anchor` (0 disables mean reversion)
    pub revert_k: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seed_price: 10_000.0,
            drift: 0.0002,
            volatility: 0.03,
            dt: 1.0,
            min_price: 1.0,
            price_decimals: 0,
            anchor: 1_000.0,
            revert_k: 0.12,
        }
    }
}

impl ModelConfig {
    /// Plain GBM with no mean reversion, whole-unit rounding turned off
    pub fn plain(seed_price: f64, drift: f64, volatility: f64) -> Self {
        Self {
            seed_price,
            drift,
            volatility,
            revert_k: 0.0,
            price_decimals: 6,
            min_price: 1e-6,
            ..Self::default()
        }
    }
}
