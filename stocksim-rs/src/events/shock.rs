//! Random price shocks

use crate::config::ShockConfig;
use crate::data::SimState;
use crate::events::DailyNote;
use rand::seq::SliceRandom;
use rand::Rng;

/// A one-off price jump, as a signed fraction (e.g. -0.15 = down 15%)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shock {
    pub pct: f64,
}

impl Shock {
    /// Multiplier applied to the price
    pub fn factor(&self) -> f64 {
        1.0 + self.pct
    }

    pub fn note(&self) -> DailyNote {
        DailyNote::Shock { pct: self.pct }
    }

    /// Draw a shock magnitude and direction
    pub fn draw<R: Rng + ?Sized>(config: &ShockConfig, rng: &mut R) -> Self {
        let magnitude = if config.pct_max > config.pct_min {
            rng.gen_range(config.pct_min..config.pct_max)
        } else {
            config.pct_min
        };
        let up = rng.gen::<f64>() < config.up_probability;
        Self {
            pct: if up { magnitude } else { -magnitude },
        }
    }
}

/// Days until the next shock: one configured range at random, then a day inside it
pub fn draw_shock_interval<R: Rng + ?Sized>(config: &ShockConfig, rng: &mut R) -> u32 {
    let (lo, hi) = config.interval_ranges.choose(rng).copied().unwrap_or((1, 1));
    rng.gen_range(lo..=hi.max(lo))
}

/// Advance the shock countdown by one day.
///
/// Returns the shock due today, if any. An unset countdown is initialized
/// without shocking.
pub fn tick_shock<R: Rng + ?Sized>(config: &ShockConfig, state: &mut SimState, rng: &mut R) -> Option<Shock> {
    match state.next_shock_in {
        None => {
            state.next_shock_in = Some(draw_shock_interval(config, rng));
            None
        }
        Some(0) => {
            let shock = Shock::draw(config, rng);
            state.next_shock_in = Some(draw_shock_interval(config, rng));
            Some(shock)
        }
        Some(n) => {
            state.next_shock_in = Some(n - 1);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_interval_within_configured_ranges() {
        let config = ShockConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let n = draw_shock_interval(&config, &mut rng);
            assert!((2..=5).contains(&n), "interval {}", n);
        }
    }

    #[test]
    fn test_shock_magnitude_and_direction() {
        let config = ShockConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let shocks: Vec<Shock> = (0..1_000).map(|_| Shock::draw(&config, &mut rng)).collect();

        assert!(shocks.iter().all(|s| s.pct.abs() >= 0.10 && s.pct.abs() < 0.25));
        let ups = shocks.iter().filter(|s| s.pct > 0.0).count();
        // 35% up; generous bounds for a seeded sample
        assert!(ups > 250 && ups < 450, "ups {}", ups);
    }

    #[test]
    fn test_countdown() {
        let config = ShockConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);

        let mut state = SimState::default();
        assert_eq!(tick_shock(&config, &mut state, &mut rng), None);
        assert!(state.next_shock_in.is_some());

        let mut state = SimState { next_shock_in: Some(2), bear_left: 0 };
        assert_eq!(tick_shock(&config, &mut state, &mut rng), None);
        assert_eq!(state.next_shock_in, Some(1));
        assert_eq!(tick_shock(&config, &mut state, &mut rng), None);
        assert_eq!(state.next_shock_in, Some(0));

        let shock = tick_shock(&config, &mut state, &mut rng);
        assert!(shock.is_some());
        assert!((2..=5).contains(&state.next_shock_in.unwrap()));
    }

    #[test]
    fn test_fixed_magnitude() {
        let config = ShockConfig { pct_min: 0.2, pct_max: 0.2, up_probability: 1.0, ..ShockConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let shock = Shock::draw(&config, &mut rng);
        assert_eq!(shock.pct, 0.2);
        assert!((shock.factor() - 1.2).abs() < 1e-12);
    }
}
