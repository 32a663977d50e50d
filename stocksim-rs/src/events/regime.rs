//! Bear regime selection

use crate::config::BearConfig;
use crate::data::SimState;
use crate::events::DailyNote;
use crate::model::StepParams;
use rand::Rng;

/// Market regime chosen for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Normal,
    Bear { new: bool },
}

impl Regime {
    /// Pick today's regime, updating the remaining bear days in `state`.
    ///
    /// A new regime covers today plus `n` following days.
    pub fn choose<R: Rng + ?Sized>(config: &BearConfig, state: &mut SimState, rng: &mut R) -> Self {
        if state.bear_left > 0 {
            state.bear_left -= 1;
            return Regime::Bear { new: false };
        }

        if rng.gen::<f64>() < config.probability {
            let days = rng.gen_range(config.min_days..=config.max_days.max(config.min_days));
            state.bear_left = days;
            Regime::Bear { new: true }
        } else {
            Regime::Normal
        }
    }

    /// Step parameters for this regime
    pub fn params(&self, base: StepParams, config: &BearConfig) -> StepParams {
        match self {
            Regime::Normal => base,
            Regime::Bear { .. } => StepParams::new(config.drift, config.volatility),
        }
    }

    pub fn note(&self) -> Option<DailyNote> {
        match self {
            Regime::Normal => None,
            Regime::Bear { new: false } => Some(DailyNote::BearRegime),
            Regime::Bear { new: true } => Some(DailyNote::NewBearRegime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_active_regime_counts_down() {
        let config = BearConfig::default();
        let mut state = SimState { next_shock_in: Some(3), bear_left: 2 };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(Regime::choose(&config, &mut state, &mut rng), Regime::Bear { new: false });
        assert_eq!(state.bear_left, 1);
        assert_eq!(Regime::choose(&config, &mut state, &mut rng), Regime::Bear { new: false });
        assert_eq!(state.bear_left, 0);
    }

    #[test]
    fn test_new_regime_runs_n_days_after_today() {
        let config = BearConfig { probability: 1.0, min_days: 2, max_days: 2, ..BearConfig::default() };
        let mut state = SimState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        assert_eq!(Regime::choose(&config, &mut state, &mut rng), Regime::Bear { new: true });
        assert_eq!(state.bear_left, 2);

        assert_eq!(Regime::choose(&config, &mut state, &mut rng), Regime::Bear { new: false });
        assert_eq!(Regime::choose(&config, &mut state, &mut rng), Regime::Bear { new: false });
        assert_eq!(state.bear_left, 0);
    }

    #[test]
    fn test_zero_probability_stays_normal() {
        let config = BearConfig { probability: 0.0, ..BearConfig::default() };
        let mut state = SimState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(Regime::choose(&config, &mut state, &mut rng), Regime::Normal);
        }
    }

    #[test]
    fn test_bear_params_and_notes() {
        let config = BearConfig::default();
        let base = StepParams::new(0.0002, 0.03);
        assert_eq!(Regime::Normal.params(base, &config), base);
        assert_eq!(
            Regime::Bear { new: true }.params(base, &config),
            StepParams::new(-0.002, 0.05)
        );
        assert_eq!(Regime::Normal.note(), None);
        assert_eq!(Regime::Bear { new: true }.note(), Some(DailyNote::NewBearRegime));
    }
}
