//! Project catalog generation.

use rand::Rng;
use time::macros::date;
use time::{Date, Duration, Month};

use super::GenerateError;

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

/// Project names and budgets, in id order.
const PROJECT_CATALOG: &[(&str, i64)] = &[
    ("Project Alpha", 50_000),
    ("Project Beta", 75_000),
    ("Project Gamma", 100_000),
    ("Project Delta", 60_000),
    ("Project Epsilon", 80_000),
    ("Project Zeta", 120_000),
    ("Project Eta", 90_000),
    ("Project Theta", 70_000),
    ("Project Iota", 110_000),
    ("Project Kappa", 65_000),
];

/// Generated `projects` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub project_id: i64,
    pub project_name: &'static str,
    pub budget: i64,
    pub start_date: Date,
    pub status: ProjectStatus,
}

/// Configuration for project generation.
#[derive(Debug, Clone)]
pub struct ProjectGenConfig {
    /// Id of the first project; the rest follow sequentially.
    pub first_id: i64,
    /// The first project starts on the last day of this date's month,
    /// each following project one month later.
    pub first_month: Date,
}

impl Default for ProjectGenConfig {
    fn default() -> Self {
        Self {
            first_id: 3001,
            first_month: date!(2023 - 01 - 01),
        }
    }
}

/// Generates the project catalog.
pub struct ProjectGenerator {
    config: ProjectGenConfig,
}

impl ProjectGenerator {
    /// Creates a new project generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ProjectGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProjectGenConfig) -> Self {
        Self { config }
    }

    /// Number of projects in the catalog.
    pub fn count(&self) -> usize {
        PROJECT_CATALOG.len()
    }

    /// Generates every catalog project with a random status.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Vec<Project>, GenerateError> {
        let mut year = self.config.first_month.year();
        let mut month = self.config.first_month.month();
        let mut projects = Vec::with_capacity(PROJECT_CATALOG.len());

        for (offset, &(project_name, budget)) in PROJECT_CATALOG.iter().enumerate() {
            if month == Month::December {
                year += 1;
            }
            month = month.next();

            // Last day of the previous month
            let start_date = Date::from_calendar_date(year, month, 1)? - Duration::days(1);

            projects.push(Project {
                project_id: self.config.first_id + offset as i64,
                project_name,
                budget,
                start_date,
                status: ProjectStatus::ALL[rng.gen_range(0..ProjectStatus::ALL.len())],
            });
        }

        Ok(projects)
    }
}

impl Default for ProjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}
