//! Private simulation state carried between daily runs

use serde::{Deserialize, Serialize};

/// Counters for the shock schedule and the active bear regime.
///
/// Kept out of the public history file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimState {
    /// Days until the next shock; `None` until the first interval is drawn
    #[serde(default)]
    pub next_shock_in: Option<u32>,
    /// Remaining bear regime days after today
    #[serde(default)]
    pub bear_left: u32,
}

impl SimState {
    pub fn in_bear_regime(&self) -> bool {
        self.bear_left > 0
    }
}
