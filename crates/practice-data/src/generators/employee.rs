//! Employee generation.

use rand::Rng;
use time::macros::date;
use time::{Date, Duration};

use super::{GenerateError, ensure_rows};

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Sales,
    It,
    Hr,
    Finance,
    Marketing,
    Operations,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Sales,
        Department::It,
        Department::Hr,
        Department::Finance,
        Department::Marketing,
        Department::Operations,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
        }
    }
}

/// Office locations.
pub const LOCATIONS: &[&str] = &[
    "Madrid",
    "Barcelona",
    "Valencia",
    "Bilbao",
    "Sevilla",
    "Málaga",
];

/// Generated `employees` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub department: Department,
    pub salary: i64,
    pub hire_date: Date,
    pub location: &'static str,
}

/// Configuration for employee generation.
#[derive(Debug, Clone)]
pub struct EmployeeGenConfig {
    /// Id of the first employee; the rest follow sequentially.
    pub first_id: i64,
    /// Half-open annual salary range.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub salary_range: (i64, i64),
    /// Earliest hire date.
    pub hire_window_start: Date,
    /// Hire dates fall within this many days of `hire_window_start`.
    ///
    /// # Panics
    /// Generation panics if `hire_window_days` is not positive.
    pub hire_window_days: i64,
}

impl Default for EmployeeGenConfig {
    fn default() -> Self {
        Self {
            first_id: 1001,
            salary_range: (20_000, 80_000),
            hire_window_start: date!(2015 - 01 - 01),
            hire_window_days: 3650,
        }
    }
}

/// Generates employees.
pub struct EmployeeGenerator {
    config: EmployeeGenConfig,
}

impl EmployeeGenerator {
    /// Creates a new employee generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EmployeeGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EmployeeGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` employees.
    pub fn generate_batch(
        &self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Employee>, GenerateError> {
        ensure_rows(count)?;

        let employees = (0..count as i64)
            .map(|offset| self.generate_single(offset, rng))
            .collect();

        Ok(employees)
    }

    /// Generates the employee at `offset` from the first id.
    fn generate_single(&self, offset: i64, rng: &mut impl Rng) -> Employee {
        let (min_salary, max_salary) = self.config.salary_range;
        let hire_offset = rng.gen_range(0..self.config.hire_window_days);

        Employee {
            employee_id: self.config.first_id + offset,
            name: format!("Employee_{}", offset + 1),
            department: Department::ALL[rng.gen_range(0..Department::ALL.len())],
            salary: rng.gen_range(min_salary..max_salary),
            hire_date: self.config.hire_window_start + Duration::days(hire_offset),
            location: LOCATIONS[rng.gen_range(0..LOCATIONS.len())],
        }
    }
}

impl Default for EmployeeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
