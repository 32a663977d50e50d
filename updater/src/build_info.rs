//! Build metadata embedded by `build.rs`

use chrono::{TimeZone, Utc};

/// Build time as `YYYY-MM-DD HH:MM:SS UTC` when it parses, raw otherwise
fn build_time_human() -> String {
    let raw = option_env!("BUILD_TIME").unwrap_or("unknown");
    raw.parse::<i64>()
        .ok()
        .and_then(|epoch| Utc.timestamp_opt(epoch, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// One-line summary for the startup log
pub fn summary() -> String {
    format!(
        "v{} ({}@{}, built {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_BRANCH").unwrap_or("unknown"),
        option_env!("GIT_HASH").unwrap_or("unknown"),
        build_time_human()
    )
}
