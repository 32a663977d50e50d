//! Geometric Brownian motion step

use rand::Rng;
use std::f64::consts::PI;

/// Next price of a GBM path after one step of length `dt`.
///
/// `P' = P * exp((μ - σ²/2)·dt + σ·√dt·z)` with `z` a standard normal draw.
/// Strictly positive for any finite positive `prev` as long as the
/// exponent does not underflow.
pub fn gbm_step(prev: f64, drift: f64, volatility: f64, dt: f64, z: f64) -> f64 {
    prev * gbm_log_return(drift, volatility, dt, z).exp()
}

/// Log return of one GBM step
pub fn gbm_log_return(drift: f64, volatility: f64, dt: f64, z: f64) -> f64 {
    (drift - 0.5 * volatility * volatility) * dt + volatility * dt.sqrt() * z
}

/// Standard normal draw using the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
