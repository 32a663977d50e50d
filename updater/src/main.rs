use anyhow::Result;
use chrono::Utc;
use shared::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod build_info;
mod job;

use job::{DailyJob, JobReport};

// Daily stock price updater
// Simulates one new price, writes the public history and chart page,
// then pushes the price to the store item.

async fn run() -> Result<JobReport> {
    let config = Config::from_env()?;
    info!(
        "Updating {} ({}) in guild {}",
        config.item_name, config.symbol, config.guild_id
    );

    let today = Utc::now().date_naive();
    let job = DailyJob::new(config)?;
    let mut rng = rand::thread_rng();
    job.run(today, &mut rng).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting stock price updater {}", build_info::summary());

    match run().await {
        Ok(report) => {
            info!(
                "Done for {}: {:?}, store updated: {}",
                report.date, report.kind, report.patched
            );
            println!("{}", report.status_line());
        }
        Err(e) => {
            error!("{:#}", e);
            println!("[ERROR] {:#}", e);
            std::process::exit(1);
        }
    }
}
