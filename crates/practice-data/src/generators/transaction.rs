//! `sales_data` transaction generation.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use time::{Duration, PrimitiveDateTime};

use super::{GenerateError, ensure_rows, seeded_rng};

/// Product category of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Books,
    Home,
    Fashion,
    Sports,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Books,
        Category::Home,
        Category::Fashion,
        Category::Sports,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Fashion => "Fashion",
            Category::Sports => "Sports",
        }
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Completed,
    Refunded,
    Pending,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Refunded,
        TransactionStatus::Pending,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Refunded => "Refunded",
            TransactionStatus::Pending => "Pending",
        }
    }
}

/// Generated `sales_data` row.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: i64,
    pub date: PrimitiveDateTime,
    pub category: Category,
    pub amount: f64,
    pub customer_id: i64,
    pub status: TransactionStatus,
}

/// Configuration for transaction generation.
#[derive(Debug, Clone)]
pub struct TransactionGenConfig {
    /// Transactions fall within this many days before the anchor, anchor included.
    ///
    /// # Panics
    /// Generation panics if `window_days` is not positive.
    pub window_days: i64,
    /// Half-open amount range, rounded to cents.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub amount_range: (f64, f64),
    /// Half-open customer id range.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub customer_ids: (i64, i64),
    /// Weights for [Completed, Refunded, Pending].
    pub status_weights: [f64; 3],
}

impl Default for TransactionGenConfig {
    fn default() -> Self {
        Self {
            window_days: 60,
            amount_range: (10.0, 500.0),
            customer_ids: (100, 150), // 50 recurring customers
            status_weights: [0.9, 0.05, 0.05],
        }
    }
}

/// Generates store transactions.
pub struct TransactionGenerator {
    config: TransactionGenConfig,
}

impl TransactionGenerator {
    /// Creates a new transaction generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: TransactionGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: TransactionGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` transactions with ids `1..=count`, dated back from `anchor`.
    pub fn generate_batch(
        &self,
        count: usize,
        anchor: PrimitiveDateTime,
        rng: &mut impl Rng,
    ) -> Result<Vec<Transaction>, GenerateError> {
        ensure_rows(count)?;
        let status_dist = WeightedIndex::new(&self.config.status_weights)?;

        let rows = (1..=count as i64)
            .map(|transaction_id| {
                let days_back = rng.gen_range(0..self.config.window_days);
                let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
                let (lo, hi) = self.config.amount_range;
                let amount = round_cents(rng.gen_range(lo..hi));
                let (first, last) = self.config.customer_ids;

                Transaction {
                    transaction_id,
                    date: anchor - Duration::days(days_back),
                    category,
                    amount,
                    customer_id: rng.gen_range(first..last),
                    status: TransactionStatus::ALL[status_dist.sample(rng)],
                }
            })
            .collect();

        Ok(rows)
    }

    /// Generates `count` transactions from a fresh RNG seeded with `seed`.
    pub fn generate_seeded(
        &self,
        count: usize,
        seed: u64,
        anchor: PrimitiveDateTime,
    ) -> Result<Vec<Transaction>, GenerateError> {
        self.generate_batch(count, anchor, &mut seeded_rng(seed))
    }
}

impl Default for TransactionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
