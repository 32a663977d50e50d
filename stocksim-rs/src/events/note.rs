//! Human-readable notes about what happened during a daily step

use std::fmt;

/// Something notable that affected today's price
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyNote {
    /// Continuing bear regime
    BearRegime,
    /// Bear regime starting today
    NewBearRegime,
    /// Shock applied; signed fraction, e.g. -0.15
    Shock { pct: f64 },
    /// Weekly rebase applied; fraction removed, e.g. 0.01
    WeeklyRebase { pct: f64 },
}

impl fmt::Display for DailyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyNote::BearRegime => write!(f, "🐻 bear regime"),
            DailyNote::NewBearRegime => write!(f, "🐻 bear regime (new)"),
            DailyNote::Shock { pct } => write!(f, "⚡ shock {:+.1}%", pct * 100.0),
            DailyNote::WeeklyRebase { pct } => write!(f, "⤵️ weekly rebase {:.1}%", -(pct * 100.0)),
        }
    }
}
