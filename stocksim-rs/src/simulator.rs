//! Daily simulator
//!
//! Combines the price model with the daily events and the price history.
//! One call to [`DailySimulator::run_day`] is one scheduled run.

use crate::config::SimConfig;
use crate::data::{PriceHistory, PricePoint, PushOutcome, SimState};
use crate::error::SimError;
use crate::events::{rebase_factor, tick_shock, DailyNote, Regime};
use crate::model::PriceModel;
use chrono::{Days, Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Price produced by one simulated day
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub price: f64,
    pub notes: Vec<DailyNote>,
}

/// How today's price was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// New price simulated and appended; `evicted` old points were dropped
    Simulated { evicted: usize },
    /// Today was already recorded; the stored price is reused
    Republished,
}

/// Result of one scheduled run against the history
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub price: f64,
    pub notes: Vec<DailyNote>,
    pub kind: DayKind,
    /// Points generated because the history was empty
    pub backfilled: usize,
}

/// Daily price simulator
#[derive(Debug, Clone)]
pub struct DailySimulator {
    config: SimConfig,
    model: PriceModel,
}

impl DailySimulator {
    pub fn new(config: SimConfig) -> Self {
        let model = PriceModel::new(config.model.clone());
        Self { config, model }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn model(&self) -> &PriceModel {
        &self.model
    }

    /// Seed price, quantized
    pub fn seed_price(&self) -> f64 {
        self.model.quantize(self.config.model.seed_price)
    }

    /// Compute the next price from `prev`: regime, base step, shock, rebase.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        prev: f64,
        state: &mut SimState,
        date: NaiveDate,
        rng: &mut R,
    ) -> StepOutcome {
        let mut notes = Vec::new();

        let regime = Regime::choose(&self.config.bear, state, rng);
        notes.extend(regime.note());
        let params = regime.params(self.model.base_params(), &self.config.bear);

        let mut price = self.model.sample_next(prev, params, rng);

        if let Some(shock) = tick_shock(&self.config.shock, state, rng) {
            price = self.model.scale(price, shock.factor());
            notes.push(shock.note());
        }

        if let Some(factor) = rebase_factor(&self.config.rebase, date) {
            let before = price;
            price = self.model.scale(price, factor);
            if price != before {
                notes.push(DailyNote::WeeklyRebase {
                    pct: self.config.rebase.pct,
                });
            }
        }

        debug!("Advanced {} -> {} on {} ({:?})", prev, price, date, regime);
        StepOutcome { price, notes }
    }

    /// Deterministic seed series of `backfill_days` points ending the day
    /// before `today`. Starts at the seed price and follows plain GBM.
    pub fn backfill(&self, today: NaiveDate) -> Vec<PricePoint> {
        let days = self.config.history.backfill_days;
        if days == 0 {
            return Vec::new();
        }

        let model = self.model.without_reversion();
        let params = model.base_params();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.history.backfill_seed);

        let Some(start) = today.checked_sub_days(Days::new(u64::from(days))) else {
            warn!("Cannot backfill {} days before {}, skipping", days, today);
            return Vec::new();
        };
        let mut price = self.seed_price();
        let mut points = Vec::with_capacity(days as usize);
        for i in 0..days {
            if i > 0 {
                price = model.sample_next(price, params, &mut rng);
            }
            points.push(PricePoint::new(start + Duration::days(i as i64), price));
        }
        points
    }

    /// Run one scheduled day against `history` and `state`.
    ///
    /// A date that is already recorded is republished untouched. An empty
    /// history is backfilled first; with backfill disabled the step starts
    /// from the seed price.
    pub fn run_day<R: Rng + ?Sized>(
        &self,
        history: &mut PriceHistory,
        state: &mut SimState,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<DayOutcome, SimError> {
        if let Some(last) = history.last().filter(|p| p.date == today) {
            info!("Price for {} already recorded ({}), republishing", today, last.price);
            return Ok(DayOutcome {
                date: today,
                price: last.price,
                notes: Vec::new(),
                kind: DayKind::Republished,
                backfilled: 0,
            });
        }

        let mut backfilled = 0;
        if history.is_empty() {
            let points = self.backfill(today);
            backfilled = points.len();
            if backfilled > 0 {
                info!("History empty, backfilling {} days from seed {}", backfilled, self.seed_price());
            }
            for point in points {
                history.push(point)?;
            }
        }

        let prev = history.last_price().unwrap_or_else(|| self.seed_price());
        let step = self.advance(prev, state, today, rng);

        let evicted = match history.push(PricePoint::new(today, step.price))? {
            PushOutcome::Appended { evicted } => evicted,
            PushOutcome::AlreadyRecorded => 0,
        };

        Ok(DayOutcome {
            date: today,
            price: step.price,
            notes: step.notes,
            kind: DayKind::Simulated { evicted },
            backfilled,
        })
    }
}
