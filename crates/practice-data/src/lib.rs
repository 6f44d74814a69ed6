//! Synthetic business data for SQL practice.
//!
//! This crate generates reproducible fake tables (store transactions,
//! employees, sales, projects, project assignments, and performance reviews)
//! and bulk-loads them into PostgreSQL, replacing any previous copy.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use practice_data::prelude::*;
//!
//! let pool = DatabaseConfig::from_env().connect().await?;
//!
//! let report = DatasetBuilder::new()
//!     .with_employees(50)
//!     .with_sales(500)
//!     .with_seed(42)
//!     .build(&pool)
//!     .await?;
//! report.log_summary();
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{BuildError, Dataset, DatasetBuilder, LoadReport};
    pub use crate::config::{DatabaseConfig, SalesDataConfig};
    pub use crate::db::{LoadError, Loader, PRACTICE_INDEXES, create_indexes};
    pub use crate::generators::{
        AssignmentGenerator, EmployeeGenerator, GenerateError, ProjectGenerator,
        ReviewGenerator, SaleGenerator, TransactionGenerator, seeded_rng,
    };
}
