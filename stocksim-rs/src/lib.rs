//! StockSim-RS: synthetic daily price simulation for a single store item
//!
//! The crate holds everything that decides *what* the next price is:
//!
//! - **Price Model**: one geometric-Brownian-motion step with optional mean
//!   reversion, quantized to whole units and floored at a minimum price
//! - **Daily Events**: bear regimes, random shocks and the weekly rebase
//! - **Price History**: date-ordered, duplicate-free, capped at a maximum length
//! - **Backfill**: deterministic seed series for a brand new history
//!
//! File I/O and the store API live in the `shared` crate.
//!
//! # Example
//!
//! ```no_run
//! use stocksim_rs::prelude::*;
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<()> {
//!     let config = SimConfig::default();
//!     config.validate()?;
//!
//!     let simulator = DailySimulator::new(config);
//!     let mut state = SimState::default();
//!     let mut rng = rand::thread_rng();
//!     let today = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//!
//!     let outcome = simulator.advance(10_000.0, &mut state, today, &mut rng);
//!     println!("next price: {}", outcome.price);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod model;
pub mod simulator;

// Re-export commonly used types
pub mod prelude {
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::error::SimError;
    pub use crate::events::*;
    pub use crate::model::*;
    pub use crate::simulator::*;

    pub use anyhow::{Context, Result};
}

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
