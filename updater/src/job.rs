//! The daily job: simulate, persist, publish.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use shared::{
    format_description, ChartPageTemplate, Config, HistoryStore, ItemPatch, LoadStatus, MetaStore,
    UnbClient,
};
use stocksim_rs::prelude::{DailySimulator, DayKind};
use tracing::{info, warn};

/// Summary of one run, printed as the final status line
#[derive(Debug, Clone)]
pub struct JobReport {
    pub item_name: String,
    pub date: NaiveDate,
    pub price: i64,
    pub kind: DayKind,
    pub next_shock_in: Option<u32>,
    pub notes: Vec<String>,
    pub patched: bool,
}

impl JobReport {
    pub fn status_line(&self) -> String {
        let notes = if self.notes.is_empty() {
            "—".to_string()
        } else {
            self.notes.join(", ")
        };
        let next_shock = self
            .next_shock_in
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        format!(
            "OK • {} → {} • next shock in {} • notes: {}",
            self.item_name, self.price, next_shock, notes
        )
    }
}

/// Whole-unit price sent to the store (never below 1)
fn store_price(price: f64) -> i64 {
    price.round().max(1.0) as i64
}

pub struct DailyJob {
    config: Config,
    simulator: DailySimulator,
    history_store: HistoryStore,
    meta_store: MetaStore,
    client: Option<UnbClient>,
}

impl DailyJob {
    pub fn new(config: Config) -> Result<Self> {
        let client = if config.dry_run {
            None
        } else {
            Some(UnbClient::new(
                &config.api_base_url,
                &config.guild_id,
                &config.unb_token,
                config.http_timeout_secs,
            )?)
        };

        Ok(Self {
            simulator: DailySimulator::new(config.sim.clone()),
            history_store: HistoryStore::new(&config.history_path, config.sim.history.max_len),
            meta_store: MetaStore::new(&config.meta_path),
            client,
            config,
        })
    }

    pub async fn run<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> Result<JobReport> {
        let loaded = self.history_store.load();
        // Pages written for the wrapped document cannot read the array format
        let rewrite_page = self.config.rewrite_index || loaded.status == LoadStatus::Legacy;
        let mut history = loaded.history;
        let mut state = self.meta_store.load_or(loaded.legacy_meta);

        let outcome = self
            .simulator
            .run_day(&mut history, &mut state, today, rng)
            .context("Failed to simulate today's price")?;

        if let DayKind::Simulated { evicted } = outcome.kind {
            info!(
                "{} price for {}: {} ({} points kept, {} evicted)",
                self.config.symbol,
                today,
                outcome.price,
                history.len(),
                evicted
            );
        }

        self.history_store
            .save(&history)
            .with_context(|| format!("Failed to write {}", self.history_store.path().display()))?;
        self.meta_store
            .save(&state)
            .with_context(|| format!("Failed to write {}", self.meta_store.path().display()))?;

        let history_file =
            ChartPageTemplate::relative_history_file(&self.config.index_path, &self.config.history_path);
        ChartPageTemplate::new(&self.config.item_name, &self.config.unit, &history_file)
            .write_if_needed(&self.config.index_path, rewrite_page)
            .with_context(|| format!("Failed to write {}", self.config.index_path.display()))?;

        let price = store_price(outcome.price);
        let notes: Vec<String> = outcome.notes.iter().map(|n| n.to_string()).collect();
        let date = today.format("%Y-%m-%d").to_string();

        let patched = match &self.client {
            Some(client) => {
                let item_id = match &self.config.item_id {
                    Some(id) => id.clone(),
                    None => client.find_item_id_by_name(&self.config.item_name).await?,
                };
                let patch = ItemPatch {
                    price,
                    description: format_description(
                        &self.config.item_name,
                        price,
                        &self.config.unit,
                        &date,
                        &self.config.pages_url,
                        &notes,
                    ),
                };
                client.patch_item(&item_id, &patch).await?;
                true
            }
            None => {
                warn!("Dry run, store item not updated (price {})", price);
                false
            }
        };

        Ok(JobReport {
            item_name: self.config.item_name.clone(),
            date: today,
            price,
            kind: outcome.kind,
            next_shock_in: state.next_shock_in,
            notes,
            patched,
        })
    }
}
