//! Loads the window-function practice tables: employees, sales, projects,
//! project assignments, and performance reviews, then indexes them.
//!
//! Run with:
//! ```
//! cargo run -p practice-data --bin load_advanced
//! ```

use std::process::ExitCode;

use practice_data::builders::DatasetBuilder;
use practice_data::config::DatabaseConfig;
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

    tracing::info!("Connecting to PostgreSQL...");
    let pool = db_config.connect().await?;

    let report = DatasetBuilder::new()
        .with_employees(50)
        .with_sales(500)
        .with_reviews(100)
        .with_batch_size(db_config.batch_size)
        .build(&pool)
        .await?;

    tracing::info!("Data loaded successfully!");
    report.log_summary();

    Ok(())
}
