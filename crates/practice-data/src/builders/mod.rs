//! Builders for generating and loading complete datasets.

mod dataset;

pub use dataset::{
    ASSIGNMENTS_TABLE, BuildError, Dataset, DatasetBuilder, DatasetMetrics, EMPLOYEES_TABLE,
    LoadReport, PROJECTS_TABLE, REVIEWS_TABLE, SALES_TABLE, TableLoad,
};
