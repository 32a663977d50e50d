//! Daily events layered on top of the base price step
//!
//! - Bear regimes: multi-day windows of negative drift and higher volatility
//! - Shocks: one-off jumps at random intervals
//! - Weekly rebase: a small fixed decay on one weekday

pub mod note;
pub mod rebase;
pub mod regime;
pub mod shock;

pub use note::*;
pub use rebase::*;
pub use regime::*;
pub use shock::*;
