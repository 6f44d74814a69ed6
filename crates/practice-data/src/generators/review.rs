//! Performance review generation.

use rand::Rng;
use rand::seq::SliceRandom;
use time::macros::date;
use time::{Date, Duration};

use super::{GenerateError, ensure_rows};

/// Day offsets beyond this are outside any representable `Date`.
const MAX_DAY_SPAN: u64 = 8_000_000;

/// Generated `performance_reviews` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub review_id: i64,
    pub employee_id: i64,
    pub review_date: Date,
    pub rating: i64,
    pub reviewer_id: i64,
    pub comments: &'static str,
}

/// Configuration for review generation.
#[derive(Debug, Clone)]
pub struct ReviewGenConfig {
    /// Id of the first review; the rest follow sequentially.
    pub first_id: i64,
    /// Reviewers are drawn from this many leading employees.
    pub managers: usize,
    /// Date of the first review.
    pub first_date: Date,
    /// Days between consecutive reviews.
    pub interval_days: i64,
    /// Inclusive rating range.
    ///
    /// # Panics
    /// Generation panics if the range is empty.
    pub rating_range: (i64, i64),
    /// Comment attached to every review.
    pub comment: &'static str,
}

impl Default for ReviewGenConfig {
    fn default() -> Self {
        Self {
            first_id: 7001,
            managers: 10,
            first_date: date!(2023 - 01 - 01), // a Sunday; reviews land weekly on Sundays
            interval_days: 7,
            rating_range: (1, 5),
            comment: "Excellent performance",
        }
    }
}

/// Generates performance reviews.
pub struct ReviewGenerator {
    config: ReviewGenConfig,
}

impl ReviewGenerator {
    /// Creates a new review generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReviewGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ReviewGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` reviews of employees by managers.
    ///
    /// A reviewer never reviews themselves unless no other employee exists.
    /// Fails with [`GenerateError::DateOverflow`] once review dates run past
    /// the representable calendar.
    pub fn generate_batch(
        &self,
        count: usize,
        employee_ids: &[i64],
        rng: &mut impl Rng,
    ) -> Result<Vec<Review>, GenerateError> {
        ensure_rows(count)?;
        if employee_ids.is_empty() {
            return Err(GenerateError::EmptyReference("employees"));
        }

        let managers = &employee_ids[..self.config.managers.clamp(1, employee_ids.len())];
        let (min_rating, max_rating) = self.config.rating_range;

        (0..count as i64)
            .map(|offset| -> Result<Review, GenerateError> {
                let review_date = self.review_date(offset)?;
                let reviewer_id = managers[rng.gen_range(0..managers.len())];
                let employee_id = pick_reviewee(employee_ids, reviewer_id, rng);

                Ok(Review {
                    review_id: self.config.first_id + offset,
                    employee_id,
                    review_date,
                    rating: rng.gen_range(min_rating..=max_rating),
                    reviewer_id,
                    comments: self.config.comment,
                })
            })
            .collect()
    }

    /// Date of the review at `offset` intervals after the first one.
    fn review_date(&self, offset: i64) -> Result<Date, GenerateError> {
        offset
            .checked_mul(self.config.interval_days)
            .filter(|days| days.unsigned_abs() <= MAX_DAY_SPAN)
            .and_then(|days| self.config.first_date.checked_add(Duration::days(days)))
            .ok_or(GenerateError::DateOverflow(offset))
    }
}

impl Default for ReviewGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks an employee other than `reviewer_id` when one exists.
fn pick_reviewee(employee_ids: &[i64], reviewer_id: i64, rng: &mut impl Rng) -> i64 {
    let candidates: Vec<i64> = employee_ids
        .iter()
        .copied()
        .filter(|&id| id != reviewer_id)
        .collect();

    candidates.choose(rng).copied().unwrap_or(reviewer_id)
}
