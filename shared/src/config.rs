use anyhow::{anyhow, Context};
use dotenv::dotenv;
use std::path::PathBuf;
use std::str::FromStr;
use stocksim_rs::config::SimConfig;

pub const DEFAULT_API_BASE_URL: &str = "https://unbelievaboat.com/api/v1";

pub struct Config {
    pub unb_token: String,
    pub guild_id: String,
    pub item_name: String,
    pub item_id: Option<String>,
    pub api_base_url: String,
    pub pages_url: String,
    pub symbol: String,
    pub unit: String,
    pub history_path: PathBuf,
    pub index_path: PathBuf,
    pub meta_path: PathBuf,
    pub http_timeout_secs: u64,
    pub dry_run: bool,
    pub rewrite_index: bool,
    pub sim: SimConfig,
}

/// Reads configuration values through a lookup function
struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Non-blank value of `key`, if set
    fn opt(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.opt(key).unwrap_or_else(|| default.to_string())
    }

    fn parse<T>(&self, key: &str, default: T) -> Result<T, anyhow::Error>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.opt(key) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
            None => Ok(default),
        }
    }
}

impl Config {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let unb_token = vars.opt("UNB_TOKEN").ok_or_else(|| anyhow!("UNB_TOKEN not set."))?;

        let mut sim = SimConfig::default();
        sim.model.seed_price = vars.parse("SIM_SEED_PRICE", sim.model.seed_price)?;
        sim.model.drift = vars.parse("SIM_DRIFT", sim.model.drift)?;
        sim.model.volatility = vars.parse("SIM_VOLATILITY", sim.model.volatility)?;
        sim.history.max_len = vars.parse("HISTORY_MAX_LEN", sim.history.max_len)?;
        sim.history.backfill_days = vars.parse("BACKFILL_DAYS", sim.history.backfill_days)?;
        sim.validate()?;

        Ok(Config {
            unb_token,
            guild_id: vars.or("UNB_GUILD_ID", "1219525577950888036"),
            item_name: vars.or("UNB_ITEM_NAME", "Tesla Stock"),
            item_id: vars.opt("UNB_ITEM_ID"),
            api_base_url: vars.or("UNB_API_BASE_URL", DEFAULT_API_BASE_URL),
            pages_url: vars.or("PAGES_URL", "https://vesstra.github.io/discord-tesla-stock-sim/"),
            symbol: vars.or("STOCK_SYMBOL", "TSLA"),
            unit: vars.or("STOCK_UNIT", "chips"),
            history_path: PathBuf::from(vars.or("HISTORY_PATH", "docs/tesla_history.json")),
            index_path: PathBuf::from(vars.or("INDEX_PATH", "docs/index.html")),
            meta_path: PathBuf::from(vars.or("META_PATH", ".data/tesla_meta.json")),
            http_timeout_secs: vars.parse("HTTP_TIMEOUT_SECS", 30)?,
            dry_run: vars.parse("DRY_RUN", false)?,
            rewrite_index: vars.parse("REWRITE_INDEX", false)?,
            sim,
        })
    }
}
