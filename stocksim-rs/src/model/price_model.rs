//! Quantized daily price model

use crate::config::ModelConfig;
use crate::model::{gbm_log_return, standard_normal};
use rand::Rng;
use tracing::warn;

const LOG_FLOOR: f64 = 1e-9;

/// Drift and volatility used for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub drift: f64,
    pub volatility: f64,
}

impl StepParams {
    pub fn new(drift: f64, volatility: f64) -> Self {
        Self { drift, volatility }
    }
}

/// GBM step with mean reversion, rounding and a price floor
#[derive(Debug, Clone)]
pub struct PriceModel {
    config: ModelConfig,
}

impl PriceModel {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Parameters for a normal (non-bear) day
    pub fn base_params(&self) -> StepParams {
        StepParams::new(self.config.drift, self.config.volatility)
    }

    /// Copy of this model with mean reversion switched off
    pub fn without_reversion(&self) -> Self {
        Self::new(ModelConfig {
            revert_k: 0.0,
            ..self.config.clone()
        })
    }

    /// Log return for one step, including the pull towards the anchor
    pub fn log_return(&self, prev: f64, params: StepParams, z: f64) -> f64 {
        let mut log_ret = gbm_log_return(params.drift, params.volatility, self.config.dt, z);
        if self.config.revert_k != 0.0 {
            let gap = self.config.anchor.max(LOG_FLOOR).ln() - prev.max(LOG_FLOOR).ln();
            log_ret += self.config.revert_k * gap;
        }
        log_ret
    }

    /// Next quantized price for a given normal draw `z`
    pub fn next_price(&self, prev: f64, params: StepParams, z: f64) -> f64 {
        let raw = prev * self.log_return(prev, params, z).exp();
        if !raw.is_finite() || raw <= 0.0 {
            warn!("Non-physical price {} from {} (z = {}), keeping previous", raw, prev, z);
            return self.quantize(prev);
        }
        self.quantize(raw)
    }

    /// Draw `z` from `rng` and step
    pub fn sample_next<R: Rng + ?Sized>(&self, prev: f64, params: StepParams, rng: &mut R) -> f64 {
        let z = standard_normal(rng);
        self.next_price(prev, params, z)
    }

    /// Round to the configured decimals and apply the price floor
    pub fn quantize(&self, price: f64) -> f64 {
        if !price.is_finite() {
            return self.config.min_price;
        }
        let factor = 10f64.powi(self.config.price_decimals as i32);
        let rounded = (price * factor).round() / factor;
        rounded.max(self.config.min_price)
    }

    /// Multiply by `factor` and quantize (used by shocks and rebases)
    pub fn scale(&self, price: f64, factor: f64) -> f64 {
        self.quantize(price * factor)
    }
}
