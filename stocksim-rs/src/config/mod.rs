//! Configuration module

pub mod events;
pub mod model;

pub use events::*;
pub use model::*;

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Upper bound for `backfill_days` (ten years)
pub const MAX_BACKFILL_DAYS: u32 = 3650;

/// History retention and backfill configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of retained points; oldest are evicted first
    pub max_len: usize,
    /// Days generated when the history is empty (0 disables backfill)
    pub backfill_days: u32,
    /// RNG seed for the backfill series
    pub backfill_seed: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_len: 365,
            backfill_days: 30,
            backfill_seed: 42,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    pub model: ModelConfig,
    pub bear: BearConfig,
    pub shock: ShockConfig,
    pub rebase: RebaseConfig,
    pub history: HistoryConfig,
}

fn check(ok: bool, msg: impl Into<String>) -> Result<(), SimError> {
    if ok {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(msg.into()))
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

impl SimConfig {
    /// Validate every parameter range
    pub fn validate(&self) -> Result<(), SimError> {
        let m = &self.model;
        check(
            m.seed_price.is_finite() && m.seed_price > 0.0,
            format!("seed_price must be > 0, got {}", m.seed_price),
        )?;
        check(
            m.min_price.is_finite() && m.min_price > 0.0,
            format!("min_price must be > 0, got {}", m.min_price),
        )?;
        check(m.drift.is_finite(), "drift must be finite")?;
        check(
            m.volatility.is_finite() && m.volatility >= 0.0,
            format!("volatility must be >= 0, got {}", m.volatility),
        )?;
        check(m.dt.is_finite() && m.dt > 0.0, format!("dt must be > 0, got {}", m.dt))?;
        check(
            m.revert_k == 0.0 || (m.anchor.is_finite() && m.anchor > 0.0),
            format!("anchor must be > 0 when mean reversion is on, got {}", m.anchor),
        )?;
        check(m.price_decimals <= 12, "price_decimals must be <= 12")?;

        let b = &self.bear;
        check(is_probability(b.probability), "bear probability must be within [0, 1]")?;
        check(
            b.min_days >= 1 && b.min_days <= b.max_days,
            format!("bear days range {}..={} is invalid", b.min_days, b.max_days),
        )?;
        check(
            b.volatility.is_finite() && b.volatility >= 0.0,
            "bear volatility must be >= 0",
        )?;

        let s = &self.shock;
        check(!s.interval_ranges.is_empty(), "shock interval ranges must not be empty")?;
        for (lo, hi) in &s.interval_ranges {
            check(lo <= hi, format!("shock interval range {}..={} is invalid", lo, hi))?;
        }
        check(
            s.pct_min >= 0.0 && s.pct_min <= s.pct_max && s.pct_max < 1.0,
            format!("shock pct range {}..{} is invalid", s.pct_min, s.pct_max),
        )?;
        check(is_probability(s.up_probability), "shock up probability must be within [0, 1]")?;

        check(
            (0.0..1.0).contains(&self.rebase.pct),
            format!("rebase pct must be within [0, 1), got {}", self.rebase.pct),
        )?;

        check(self.history.max_len >= 1, "history max_len must be >= 1")?;
        check(
            self.history.backfill_days <= MAX_BACKFILL_DAYS,
            format!(
                "backfill_days must be <= {}, got {}",
                MAX_BACKFILL_DAYS, self.history.backfill_days
            ),
        )?;
        Ok(())
    }
}
