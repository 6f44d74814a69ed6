//! Fluent builder for the query-practice dataset.

use std::time::Instant;

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::DEFAULT_SEED;
use crate::db::{LoadError, Loader, PRACTICE_INDEXES, Record, create_indexes};
use crate::generators::{
    Assignment, AssignmentGenConfig, AssignmentGenerator, Employee, EmployeeGenConfig,
    EmployeeGenerator, GenerateError, Project, ProjectGenConfig, ProjectGenerator, Review,
    ReviewGenConfig, ReviewGenerator, Sale, SaleGenConfig, SaleGenerator, seeded_rng,
};

pub const EMPLOYEES_TABLE: &str = "employees";
pub const SALES_TABLE: &str = "sales";
pub const PROJECTS_TABLE: &str = "projects";
pub const ASSIGNMENTS_TABLE: &str = "project_assignments";
pub const REVIEWS_TABLE: &str = "performance_reviews";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),
    #[error("Load failed: {0}")]
    Load(#[from] LoadError),
}

/// The five generated practice tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub sales: Vec<Sale>,
    pub projects: Vec<Project>,
    pub assignments: Vec<Assignment>,
    pub reviews: Vec<Review>,
}

impl Dataset {
    /// Total rows across all tables.
    pub fn total_rows(&self) -> usize {
        self.employees.len()
            + self.sales.len()
            + self.projects.len()
            + self.assignments.len()
            + self.reviews.len()
    }
}

/// Rows written to one destination table.
#[derive(Debug, Clone)]
pub struct TableLoad {
    pub table: &'static str,
    pub rows: u64,
    pub columns: Vec<&'static str>,
}

/// Timing metrics from a build.
#[derive(Debug, Clone, Default)]
pub struct DatasetMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent loading and indexing (milliseconds).
    pub loading_time_ms: u64,
}

/// Outcome of [`DatasetBuilder::build`].
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
    pub indexes_created: usize,
    pub metrics: DatasetMetrics,
}

impl LoadReport {
    /// Rows written to `table`, if it was loaded.
    pub fn rows_for(&self, table: &str) -> Option<u64> {
        self.tables.iter().find(|t| t.table == table).map(|t| t.rows)
    }

    /// Logs the loaded tables and their columns.
    pub fn log_summary(&self) {
        info!("Tables available for practice:");
        for (i, table) in self.tables.iter().enumerate() {
            info!("  {}. {} ({} rows)", i + 1, table.table, table.rows);
            info!("     Columns: {}", table.columns.join(", "));
        }
        if self.indexes_created > 0 {
            info!("  {} indexes on foreign-key columns", self.indexes_created);
        }
        info!(
            "  Generated in {} ms, loaded in {} ms",
            self.metrics.generation_time_ms, self.metrics.loading_time_ms
        );
    }
}

/// Builder for generating and loading the practice dataset.
///
/// Each table is generated from its own RNG seeded with the same seed, so a
/// table's contents depend only on the seed and its own settings.
///
/// # Example
///
/// ```rust,ignore
/// let report = DatasetBuilder::new()
///     .with_employees(50)
///     .with_sales(500)
///     .with_seed(42)
///     .build(&pool)
///     .await?;
/// report.log_summary();
/// ```
pub struct DatasetBuilder {
    employee_count: usize,
    employee_config: EmployeeGenConfig,

    sale_count: usize,
    sale_config: SaleGenConfig,

    project_config: ProjectGenConfig,
    assignment_config: AssignmentGenConfig,

    review_count: usize,
    review_config: ReviewGenConfig,

    seed: u64,
    create_indexes: bool,
    batch_size: usize,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder with 50 employees, 500 sales and 100 reviews.
    pub fn new() -> Self {
        Self {
            employee_count: 50,
            employee_config: EmployeeGenConfig::default(),
            sale_count: 500,
            sale_config: SaleGenConfig::default(),
            project_config: ProjectGenConfig::default(),
            assignment_config: AssignmentGenConfig::default(),
            review_count: 100,
            review_config: ReviewGenConfig::default(),
            seed: DEFAULT_SEED,
            create_indexes: true,
            batch_size: 1000,
        }
    }

    /// Sets the number of employees to generate.
    pub fn with_employees(mut self, count: usize) -> Self {
        self.employee_count = count;
        self
    }

    /// Sets the employee generation configuration.
    pub fn with_employee_config(mut self, config: EmployeeGenConfig) -> Self {
        self.employee_config = config;
        self
    }

    /// Sets the number of sales to generate.
    pub fn with_sales(mut self, count: usize) -> Self {
        self.sale_count = count;
        self
    }

    /// Sets the sale generation configuration.
    pub fn with_sale_config(mut self, config: SaleGenConfig) -> Self {
        self.sale_config = config;
        self
    }

    /// Sets the project generation configuration.
    pub fn with_project_config(mut self, config: ProjectGenConfig) -> Self {
        self.project_config = config;
        self
    }

    /// Sets the assignment generation configuration.
    pub fn with_assignment_config(mut self, config: AssignmentGenConfig) -> Self {
        self.assignment_config = config;
        self
    }

    /// Sets the number of performance reviews to generate.
    pub fn with_reviews(mut self, count: usize) -> Self {
        self.review_count = count;
        self
    }

    /// Sets the review generation configuration.
    pub fn with_review_config(mut self, config: ReviewGenConfig) -> Self {
        self.review_config = config;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables index creation after loading.
    pub fn with_indexes(mut self, enabled: bool) -> Self {
        self.create_indexes = enabled;
        self
    }

    /// Sets the maximum rows per INSERT statement.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Generates the dataset without touching the database.
    pub fn build_data(&self) -> Result<Dataset, GenerateError> {
        info!("Generating {} employees...", self.employee_count);
        let employees = EmployeeGenerator::with_config(self.employee_config.clone())
            .generate_batch(self.employee_count, &mut seeded_rng(self.seed))?;
        let employee_ids: Vec<i64> = employees.iter().map(|e| e.employee_id).collect();

        info!("Generating {} sales...", self.sale_count);
        let sales = SaleGenerator::with_config(self.sale_config.clone()).generate_batch(
            self.sale_count,
            &employee_ids,
            &mut seeded_rng(self.seed),
        )?;

        info!("Generating projects...");
        let projects = ProjectGenerator::with_config(self.project_config.clone())
            .generate(&mut seeded_rng(self.seed))?;
        let project_ids: Vec<i64> = projects.iter().map(|p| p.project_id).collect();

        info!("Generating project assignments...");
        let assignments = AssignmentGenerator::with_config(self.assignment_config.clone())
            .generate(&employee_ids, &project_ids, &mut seeded_rng(self.seed))?;

        info!("Generating {} performance reviews...", self.review_count);
        let reviews = ReviewGenerator::with_config(self.review_config.clone()).generate_batch(
            self.review_count,
            &employee_ids,
            &mut seeded_rng(self.seed),
        )?;

        Ok(Dataset {
            employees,
            sales,
            projects,
            assignments,
            reviews,
        })
    }

    /// Generates the dataset, loads every table, and optionally creates indexes.
    pub async fn build(self, pool: &PgPool) -> Result<LoadReport, BuildError> {
        let gen_start = Instant::now();
        let dataset = self.build_data()?;
        let generation_time_ms = gen_start.elapsed().as_millis() as u64;

        let load_start = Instant::now();
        let loader = Loader::new(pool.clone()).with_batch_size(self.batch_size);

        let tables = vec![
            load_table(&loader, EMPLOYEES_TABLE, &dataset.employees).await?,
            load_table(&loader, SALES_TABLE, &dataset.sales).await?,
            load_table(&loader, PROJECTS_TABLE, &dataset.projects).await?,
            load_table(&loader, ASSIGNMENTS_TABLE, &dataset.assignments).await?,
            load_table(&loader, REVIEWS_TABLE, &dataset.reviews).await?,
        ];

        let indexes_created = if self.create_indexes {
            create_indexes(pool, PRACTICE_INDEXES).await?
        } else {
            0
        };

        Ok(LoadReport {
            tables,
            indexes_created,
            metrics: DatasetMetrics {
                generation_time_ms,
                loading_time_ms: load_start.elapsed().as_millis() as u64,
            },
        })
    }
}

async fn load_table<R: Record>(
    loader: &Loader,
    table: &'static str,
    rows: &[R],
) -> Result<TableLoad, LoadError> {
    let written = loader.load(table, rows).await?;

    Ok(TableLoad {
        table,
        rows: written,
        columns: R::columns().iter().map(|c| c.name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_build_data_defaults() {
        let dataset = DatasetBuilder::new().build_data().unwrap();

        assert_eq!(dataset.employees.len(), 50);
        assert_eq!(dataset.sales.len(), 500);
        assert_eq!(dataset.projects.len(), 10);
        assert_eq!(dataset.reviews.len(), 100);
        assert!(!dataset.assignments.is_empty());
        assert_eq!(dataset.total_rows(), 660 + dataset.assignments.len());
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = DatasetBuilder::new().with_seed(42).build_data().unwrap();
        let b = DatasetBuilder::new().with_seed(42).build_data().unwrap();

        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn test_foreign_keys_reference_generated_ids() {
        let dataset = DatasetBuilder::new().build_data().unwrap();

        let employee_ids: HashSet<i64> = dataset.employees.iter().map(|e| e.employee_id).collect();
        let project_ids: HashSet<i64> = dataset.projects.iter().map(|p| p.project_id).collect();

        assert!(
            dataset
                .sales
                .iter()
                .all(|s| employee_ids.contains(&s.employee_id))
        );
        assert!(dataset.assignments.iter().all(|a| {
            employee_ids.contains(&a.employee_id) && project_ids.contains(&a.project_id)
        }));
        assert!(dataset.reviews.iter().all(|r| {
            employee_ids.contains(&r.employee_id) && employee_ids.contains(&r.reviewer_id)
        }));
    }

    #[test]
    fn test_small_company_keeps_references_valid() {
        let dataset = DatasetBuilder::new()
            .with_employees(5)
            .with_sales(50)
            .with_reviews(20)
            .build_data()
            .unwrap();

        let employee_ids: HashSet<i64> = dataset.employees.iter().map(|e| e.employee_id).collect();
        assert_eq!(employee_ids.len(), 5);
        assert!(
            dataset
                .sales
                .iter()
                .all(|s| employee_ids.contains(&s.employee_id))
        );
        assert!(
            dataset
                .assignments
                .iter()
                .all(|a| employee_ids.contains(&a.employee_id))
        );
        assert!(
            dataset
                .reviews
                .iter()
                .all(|r| employee_ids.contains(&r.reviewer_id))
        );
    }

    #[test]
    fn test_review_dates_past_calendar_end_fail() {
        let result = DatasetBuilder::new().with_reviews(600_000).build_data();
        assert!(matches!(result, Err(GenerateError::DateOverflow(_))));
    }

    #[test]
    fn test_zero_employees_rejected() {
        let result = DatasetBuilder::new().with_employees(0).build_data();
        assert!(matches!(result, Err(GenerateError::InvalidRowCount(0))));
    }

    #[test]
    fn test_report_rows_for() {
        let report = LoadReport {
            tables: vec![TableLoad {
                table: SALES_TABLE,
                rows: 500,
                columns: vec!["sale_id"],
            }],
            indexes_created: 0,
            metrics: DatasetMetrics::default(),
        };

        assert_eq!(report.rows_for(SALES_TABLE), Some(500));
        assert_eq!(report.rows_for(EMPLOYEES_TABLE), None);
    }
}
