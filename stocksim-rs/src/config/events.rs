//! Daily event configuration (bear regimes, shocks, weekly rebase)

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Bear regime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearConfig {
    /// Chance of a new regime starting on a normal day
    pub probability: f64,
    /// Inclusive range of regime lengths in days
    pub min_days: u32,
    pub max_days: u32,
    /// Drift used while the regime is active
    pub drift: f64,
    /// Volatility used while the regime is active
    pub volatility: f64,
}

impl Default for BearConfig {
    fn default() -> Self {
        Self {
            probability: 0.15,
            min_days: 2,
            max_days: 5,
            drift: -0.002,
            volatility: 0.05,
        }
    }
}

/// Random shock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockConfig {
    /// Inclusive day ranges between shocks; one range is picked at random,
    /// then a day count inside it
    pub interval_ranges: Vec<(u32, u32)>,
    /// Shock magnitude range, e.g. 0.10 = 10%
    pub pct_min: f64,
    pub pct_max: f64,
    /// Chance that a shock moves the price up
    pub up_probability: f64,
}

impl Default for ShockConfig {
    fn default() -> Self {
        Self {
            interval_ranges: vec![(2, 3), (4, 5)],
            pct_min: 0.10,
            pct_max: 0.25,
            up_probability: 0.35,
        }
    }
}

/// Weekly rebase (decay) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebaseConfig {
    /// Day of week the rebase runs on
    pub weekday: Weekday,
    /// Fraction removed from the price, e.g. 0.01 = 1%
    pub pct: f64,
}

impl Default for RebaseConfig {
    fn default() -> Self {
        Self {
            weekday: Weekday::Sun,
            pct: 0.01,
        }
    }
}
