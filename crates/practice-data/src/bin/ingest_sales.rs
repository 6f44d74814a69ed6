//! Loads the `sales_data` table: 5000 seeded store transactions from the last 60 days.
//!
//! Run with:
//! ```
//! cargo run -p practice-data --bin ingest_sales
//! ```

use std::process::ExitCode;

use practice_data::config::{DatabaseConfig, SalesDataConfig};
use practice_data::db::Loader;
use practice_data::generators::TransactionGenerator;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Critical error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let db_config = DatabaseConfig::from_env();
    let sales_config = SalesDataConfig::default();

    let now = OffsetDateTime::now_utc();
    let anchor = PrimitiveDateTime::new(now.date(), now.time());

    tracing::info!("Generating {} rows of sales data...", sales_config.rows);
    let rows = TransactionGenerator::new().generate_seeded(
        sales_config.rows,
        sales_config.seed,
        anchor,
    )?;

    tracing::info!("Connecting to database...");
    let pool = db_config.connect().await?;

    let loader = Loader::new(pool).with_batch_size(db_config.batch_size);
    let written = loader.load(&sales_config.table, &rows).await?;

    tracing::info!("Success! {written} rows loaded into '{}'", sales_config.table);
    Ok(())
}
