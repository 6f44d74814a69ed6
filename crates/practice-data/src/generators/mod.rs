//! Table generators for practice data.
//!
//! This module provides generators for each practice table:
//! - [`TransactionGenerator`]: `sales_data` transactions counted back from a run date
//! - [`EmployeeGenerator`]: employees with departments, salaries, and hire dates
//! - [`SaleGenerator`]: monthly sales attributed to sales staff
//! - [`ProjectGenerator`]: the fixed project catalog
//! - [`AssignmentGenerator`]: many-to-many employee/project assignments
//! - [`ReviewGenerator`]: performance reviews between employees and managers
//!
//! Every generator takes an `&mut impl Rng`; seed it with [`seeded_rng`] for
//! reproducible output.

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

pub mod assignment;
pub mod employee;
pub mod project;
pub mod review;
pub mod sale;
pub mod transaction;

pub use assignment::{Assignment, AssignmentGenConfig, AssignmentGenerator, Role};
pub use employee::{Department, Employee, EmployeeGenConfig, EmployeeGenerator, LOCATIONS};
pub use project::{Project, ProjectGenConfig, ProjectGenerator, ProjectStatus};
pub use review::{Review, ReviewGenConfig, ReviewGenerator};
pub use sale::{Product, Sale, SaleGenConfig, SaleGenerator, SalesRegion};
pub use transaction::{
    Category, Transaction, TransactionGenConfig, TransactionGenerator, TransactionStatus,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Row count must be positive, got {0}")]
    InvalidRowCount(usize),
    #[error("Cannot reference empty {0} table")]
    EmptyReference(&'static str),
    #[error("Invalid weights: {0}")]
    InvalidWeights(#[from] rand_distr::WeightedError),
    #[error("Date out of range: {0}")]
    DateOutOfRange(#[from] time::error::ComponentRange),
    #[error("Date for row {0} is past the end of the calendar")]
    DateOverflow(i64),
}

/// Creates the deterministic RNG used for table generation.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fails fast on a zero row count.
pub(crate) fn ensure_rows(count: usize) -> Result<(), GenerateError> {
    if count == 0 {
        Err(GenerateError::InvalidRowCount(count))
    } else {
        Ok(())
    }
}
