//! Data module
//!
//! Price points, the bounded price history and the persisted simulation state.

pub mod history;
pub mod point;
pub mod state;

pub use history::*;
pub use point::*;
pub use state::*;
