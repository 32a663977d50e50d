//! Price model module
//!
//! The raw GBM increment plus the quantized daily model built on top of it.

pub mod gbm;
pub mod price_model;

pub use gbm::*;
pub use price_model::*;
