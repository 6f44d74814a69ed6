//! Sales generation, attributed to the sales staff among generated employees.

use rand::Rng;
use time::macros::date;
use time::{Date, Duration};

use super::{GenerateError, ensure_rows};

/// Product sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    A,
    B,
    C,
    D,
}

impl Product {
    pub const ALL: [Product; 4] = [Product::A, Product::B, Product::C, Product::D];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::A => "Product A",
            Product::B => "Product B",
            Product::C => "Product C",
            Product::D => "Product D",
        }
    }
}

/// Sales territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesRegion {
    North,
    South,
    East,
    West,
}

impl SalesRegion {
    pub const ALL: [SalesRegion; 4] = [
        SalesRegion::North,
        SalesRegion::South,
        SalesRegion::East,
        SalesRegion::West,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesRegion::North => "North",
            SalesRegion::South => "South",
            SalesRegion::East => "East",
            SalesRegion::West => "West",
        }
    }
}

/// Generated `sales` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub sale_id: i64,
    pub employee_id: i64,
    pub sale_date: Date,
    pub amount: i64,
    pub product: Product,
    pub region: SalesRegion,
    pub year: i32,
    pub month: i32,
}

/// Configuration for sale generation.
#[derive(Debug, Clone)]
pub struct SaleGenConfig {
    /// Id of the first sale; the rest follow sequentially.
    pub first_id: i64,
    /// Sales are attributed to this many leading employees.
    pub sales_staff: usize,
    /// Earliest sale date.
    pub window_start: Date,
    /// Sale dates fall within this many days of `window_start`.
    ///
    /// # Panics
    /// Generation panics if `window_days` is not positive.
    pub window_days: i64,
    /// Half-open amount range.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub amount_range: (i64, i64),
}

impl Default for SaleGenConfig {
    fn default() -> Self {
        Self {
            first_id: 5001,
            sales_staff: 20,
            window_start: date!(2023 - 01 - 01),
            window_days: 730,
            amount_range: (100, 50_000),
        }
    }
}

/// Generates sales records.
pub struct SaleGenerator {
    config: SaleGenConfig,
}

impl SaleGenerator {
    /// Creates a new sale generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: SaleGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: SaleGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` sales, each attributed to one of the leading
    /// `sales_staff` ids of `employee_ids`.
    pub fn generate_batch(
        &self,
        count: usize,
        employee_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Result<Vec<Sale>, GenerateError> {
        ensure_rows(count)?;
        if employee_ids.is_empty() {
            return Err(GenerateError::EmptyReference("employees"));
        }

        let staff = &employee_ids[..self.config.sales_staff.clamp(1, employee_ids.len())];
        let (min_amount, max_amount) = self.config.amount_range;

        let sales = (0..count as i64)
            .map(|offset| {
                let employee_id = staff[rng.gen_range(0..staff.len())];
                let sale_date = self.config.window_start
                    + Duration::days(rng.gen_range(0..self.config.window_days));

                Sale {
                    sale_id: self.config.first_id + offset,
                    employee_id,
                    sale_date,
                    amount: rng.gen_range(min_amount..max_amount),
                    product: Product::ALL[rng.gen_range(0..Product::ALL.len())],
                    region: SalesRegion::ALL[rng.gen_range(0..SalesRegion::ALL.len())],
                    year: sale_date.year(),
                    month: u8::from(sale_date.month()) as i32,
                }
            })
            .collect();

        Ok(sales)
    }
}

impl Default for SaleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
