//! Integration tests for loading generated tables into PostgreSQL.
//!
//! These tests verify:
//! - Loaded row counts match the generated tables
//! - Reloading replaces a table instead of appending to it
//! - Index creation can be repeated safely
//!
//! To run these tests, you need a PostgreSQL database and the DATABASE_URL
//! environment variable set. Tests are skipped otherwise.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p practice-data load`
//!
//! Most tests write to their own `it_*` tables. The full-dataset test
//! rewrites the practice tables, exactly as `load_advanced` does.

use practice_data::builders::DatasetBuilder;
use practice_data::db::{IndexSpec, LoadError, Loader, create_indexes};
use practice_data::generators::{EmployeeGenerator, TransactionGenerator, seeded_rng};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use time::macros::datetime;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn drop_table(pool: &PgPool, table: &str) {
    sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
        .execute(pool)
        .await
        .expect("Failed to drop test table");
}

#[tokio::test]
async fn test_load_reports_row_count() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = "it_sales_data_count";

    let rows = TransactionGenerator::new()
        .generate_seeded(5000, 42, datetime!(2026-10-16 12:00:00))
        .unwrap();

    // Small batches force several INSERT statements
    let loader = Loader::new(pool.clone()).with_batch_size(700);
    let written = loader.load(table, &rows).await.unwrap();

    assert_eq!(written, 5000);
    assert_eq!(loader.row_count(table).await.unwrap(), 5000);

    drop_table(&pool, table).await;
}

#[tokio::test]
async fn test_reload_replaces_table() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = "it_employees_replace";
    let loader = Loader::new(pool.clone());
    let emp_gen = EmployeeGenerator::new();

    let first = emp_gen.generate_batch(50, &mut seeded_rng(42)).unwrap();
    loader.load(table, &first).await.unwrap();

    let second = emp_gen.generate_batch(20, &mut seeded_rng(42)).unwrap();
    let written = loader.load(table, &second).await.unwrap();

    assert_eq!(written, 20);
    assert_eq!(loader.row_count(table).await.unwrap(), 20);

    let max_id: i64 = sqlx::query_scalar(&format!("SELECT MAX(employee_id) FROM {table}"))
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(max_id, 1020);

    drop_table(&pool, table).await;
}

#[tokio::test]
async fn test_loaded_values_round_trip() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = "it_sales_data_values";

    let rows = TransactionGenerator::new()
        .generate_seeded(10, 42, datetime!(2026-10-16 12:00:00))
        .unwrap();
    Loader::new(pool.clone()).load(table, &rows).await.unwrap();

    let (category, status): (String, String) = sqlx::query_as(&format!(
        "SELECT category, status FROM {table} WHERE transaction_id = 1"
    ))
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(category, rows[0].category.as_str());
    assert_eq!(status, rows[0].status.as_str());

    drop_table(&pool, table).await;
}

#[tokio::test]
async fn test_invalid_table_name_rejected() {
    let Some(pool) = get_test_pool().await else {
        return;
    };

    let rows = EmployeeGenerator::new()
        .generate_batch(1, &mut seeded_rng(42))
        .unwrap();
    let result = Loader::new(pool)
        .load("employees; DROP TABLE sales", &rows)
        .await;

    assert!(matches!(result, Err(LoadError::InvalidIdentifier(_))));
}

#[tokio::test]
async fn test_create_indexes_twice() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = "it_employees_indexed";

    let rows = EmployeeGenerator::new()
        .generate_batch(10, &mut seeded_rng(42))
        .unwrap();
    Loader::new(pool.clone()).load(table, &rows).await.unwrap();

    let indexes = [IndexSpec::new(
        "idx_it_employees_indexed_location",
        "it_employees_indexed",
        "location",
    )];

    assert_eq!(create_indexes(&pool, &indexes).await.unwrap(), 1);
    assert_eq!(create_indexes(&pool, &indexes).await.unwrap(), 1);

    drop_table(&pool, table).await;
}

#[tokio::test]
async fn test_full_dataset_build_twice() {
    let Some(pool) = get_test_pool().await else {
        return;
    };

    let dataset = DatasetBuilder::new().build_data().unwrap();

    // Second run exercises drop-and-recreate plus repeated index creation
    for _ in 0..2 {
        let report = DatasetBuilder::new().build(&pool).await.unwrap();

        assert_eq!(report.rows_for("employees"), Some(dataset.employees.len() as u64));
        assert_eq!(report.rows_for("sales"), Some(dataset.sales.len() as u64));
        assert_eq!(report.rows_for("projects"), Some(dataset.projects.len() as u64));
        assert_eq!(
            report.rows_for("project_assignments"),
            Some(dataset.assignments.len() as u64)
        );
        assert_eq!(
            report.rows_for("performance_reviews"),
            Some(dataset.reviews.len() as u64)
        );
        assert_eq!(report.indexes_created, 6);
    }

    let loader = Loader::new(pool);
    assert_eq!(loader.row_count("sales").await.unwrap(), 500);
}
