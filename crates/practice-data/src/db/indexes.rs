//! Secondary indexes for query practice.

use sqlx::PgPool;
use tracing::info;

use super::loader::{LoadError, ensure_identifier};

/// A single-column index on a loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub table: &'static str,
    pub column: &'static str,
}

impl IndexSpec {
    pub const fn new(name: &'static str, table: &'static str, column: &'static str) -> Self {
        Self {
            name,
            table,
            column,
        }
    }

    /// Renders the idempotent `CREATE INDEX` statement.
    pub fn create_sql(&self) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            self.name, self.table, self.column
        )
    }
}

/// Indexes on the foreign-key-like columns of the practice tables.
pub const PRACTICE_INDEXES: &[IndexSpec] = &[
    IndexSpec::new("idx_sales_employee", "sales", "employee_id"),
    IndexSpec::new("idx_sales_date", "sales", "sale_date"),
    IndexSpec::new("idx_assignments_employee", "project_assignments", "employee_id"),
    IndexSpec::new("idx_assignments_project", "project_assignments", "project_id"),
    IndexSpec::new("idx_reviews_employee", "performance_reviews", "employee_id"),
    IndexSpec::new("idx_reviews_reviewer", "performance_reviews", "reviewer_id"),
];

/// Creates the given indexes in one transaction. Safe to re-run.
///
/// Returns the number of statements issued.
pub async fn create_indexes(pool: &PgPool, indexes: &[IndexSpec]) -> Result<usize, LoadError> {
    info!("Creating {} indexes...", indexes.len());

    for index in indexes {
        ensure_identifier(index.name)?;
        ensure_identifier(index.table)?;
        ensure_identifier(index.column)?;
    }

    let mut tx = pool.begin().await?;
    for index in indexes {
        sqlx::query(&index.create_sql()).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!("Indexes created");
    Ok(indexes.len())
}
