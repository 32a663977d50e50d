//! Weekly rebase

use crate::config::RebaseConfig;
use chrono::{Datelike, NaiveDate};

/// Multiplier for `date`, or `None` when no rebase is due
pub fn rebase_factor(config: &RebaseConfig, date: NaiveDate) -> Option<f64> {
    if config.pct > 0.0 && date.weekday() == config.weekday {
        Some(1.0 - config.pct)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebase_only_on_configured_weekday() {
        let config = RebaseConfig::default();
        // 2025-03-09 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        assert_eq!(rebase_factor(&config, sunday), Some(0.99));
        assert_eq!(rebase_factor(&config, monday), None);
    }

    #[test]
    fn test_zero_pct_disables_rebase() {
        let config = RebaseConfig { pct: 0.0, ..RebaseConfig::default() };
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(rebase_factor(&config, sunday), None);
    }
}
