//! Bulk loading of generated tables.

use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use tracing::{debug, info};

use super::table::{Record, column_list, create_table_sql, is_valid_identifier};

/// Postgres rejects statements with more bind parameters than this.
const MAX_BIND_PARAMS: usize = u16::MAX as usize;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid table or index name: {0:?}")]
    InvalidIdentifier(String),
}

/// Writes generated tables into Postgres with drop-and-recreate semantics.
pub struct Loader {
    pool: PgPool,
    batch_size: usize,
}

impl Loader {
    /// Creates a new loader with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 1000,
        }
    }

    /// Sets the maximum number of rows per INSERT statement.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Replaces `table` with `rows` and returns the number of rows written.
    ///
    /// The drop, create and inserts run in a single transaction, so a failed
    /// load leaves any previous table in place.
    pub async fn load<R: Record>(&self, table: &str, rows: &[R]) -> Result<u64, LoadError> {
        ensure_identifier(table)?;
        info!("Loading {} rows into {table}...", rows.len());

        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;
        sqlx::query(&create_table_sql::<R>(table))
            .execute(&mut *tx)
            .await?;

        let columns = column_list::<R>();
        let rows_per_statement = self.rows_per_statement(R::columns().len());
        let mut written = 0u64;

        for chunk in rows.chunks(rows_per_statement) {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new(format!("INSERT INTO {table} ({columns}) "));
            qb.push_values(chunk, |mut b, row| row.bind_row(&mut b));

            written += qb.build().execute(&mut *tx).await?.rows_affected();
            debug!("  Wrote {written}/{} rows to {table}", rows.len());
        }

        tx.commit().await?;

        info!("Loaded {written} rows into {table}");
        Ok(written)
    }

    /// Returns the number of rows currently stored in `table`.
    pub async fn row_count(&self, table: &str) -> Result<i64, LoadError> {
        ensure_identifier(table)?;

        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn rows_per_statement(&self, column_count: usize) -> usize {
        (MAX_BIND_PARAMS / column_count.max(1)).min(self.batch_size).max(1)
    }
}

pub(crate) fn ensure_identifier(name: &str) -> Result<(), LoadError> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(LoadError::InvalidIdentifier(name.to_string()))
    }
}
