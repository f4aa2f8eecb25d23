use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age;
use crate::breakdown::{CategoryBreakdown, calc_category_breakdown};
use crate::config::{LifeConfig, RelationshipConfig, TimeAllocation};
use crate::constants::{BOOKS_PER_YEAR, FULL_MOONS_PER_YEAR, WEEKS_PER_YEAR};

const WEEKS_PER_YEAR_F: f64 = WEEKS_PER_YEAR as f64;

/// Everything derived from one person's configuration at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeStats {
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub weeks_remaining: i64,
    pub percent_lived: f64,
    pub current_week_index: i64,
    pub current_age: f64,
    pub weeks_until_retirement: f64,
    pub category_breakdown: CategoryBreakdown,
    pub summers_left: i64,
    pub weekends_left: i64,
    // Relationships
    pub mother_years_left: f64,
    pub father_years_left: f64,
    /// Mother's plus father's years left: parent-years, not a span of time.
    pub parent_years_left: f64,
    pub mother_visits_left: i64,
    pub father_visits_left: i64,
    pub parent_visits_left: i64,
    pub phone_weeks_total: i64,
    pub phone_years_total: f64,
    // Insights
    pub books_left: i64,
    pub christmases_left: i64,
    pub full_moons_left: i64,
}

impl LifeStats {
    /// Weeks spent on `category`, rounded to whole years.
    pub fn category_years(&self, category: &str) -> Option<i64> {
        self.category_breakdown
            .get(category)
            .map(|weeks| (weeks as f64 / WEEKS_PER_YEAR_F).round() as i64)
    }

    pub fn years_remaining(&self) -> f64 {
        self.weeks_remaining as f64 / WEEKS_PER_YEAR_F
    }
}

pub fn calc_total_weeks(life_expectancy: u32) -> i64 {
    life_expectancy as i64 * WEEKS_PER_YEAR as i64
}

/// Computes the statistics as of the current wall-clock time.
pub fn calc_life_stats(
    config: &LifeConfig,
    allocation: &TimeAllocation,
    relationships: &RelationshipConfig,
) -> Option<LifeStats> {
    calc_life_stats_at(config, allocation, relationships, Utc::now())
}

/// Computes the statistics as of `now`. Returns `None` only when the birth
/// date is missing; every other odd input is clamped.
pub fn calc_life_stats_at(
    config: &LifeConfig,
    allocation: &TimeAllocation,
    relationships: &RelationshipConfig,
    now: DateTime<Utc>,
) -> Option<LifeStats> {
    let birth_date = config.birth_date?;

    let total_weeks = calc_total_weeks(config.life_expectancy);
    let weeks_lived = age::weeks_lived(birth_date, now);
    let weeks_remaining = (total_weeks - weeks_lived).max(0);
    let percent_lived = if total_weeks > 0 {
        (weeks_lived as f64 / total_weeks as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    };

    let current_age = weeks_lived as f64 / WEEKS_PER_YEAR_F;
    let weeks_until_retirement =
        ((config.retirement_age as f64 - current_age) * WEEKS_PER_YEAR_F).max(0.0);

    let category_breakdown =
        calc_category_breakdown(allocation, weeks_remaining, weeks_until_retirement);

    let years_remaining = weeks_remaining as f64 / WEEKS_PER_YEAR_F;
    let summers_left = weeks_remaining / WEEKS_PER_YEAR as i64;
    let weekends_left = weeks_remaining * 2;

    let mother_years_left = relationships.mother.years_left();
    let father_years_left = relationships.father.years_left();
    let mother_visits_left = relationships.mother.visits_left();
    let father_visits_left = relationships.father.visits_left();

    let phone_weeks_total =
        (relationships.phone_hours_per_day / 24.0 * weeks_remaining as f64).round() as i64;
    let phone_years_total = round_tenths(phone_weeks_total as f64 / WEEKS_PER_YEAR_F);

    debug!(weeks_lived, weeks_remaining, percent_lived, "computed life stats");

    Some(LifeStats {
        total_weeks,
        weeks_lived,
        weeks_remaining,
        percent_lived,
        current_week_index: weeks_lived,
        current_age,
        weeks_until_retirement,
        category_breakdown,
        summers_left,
        weekends_left,
        mother_years_left,
        father_years_left,
        parent_years_left: mother_years_left + father_years_left,
        mother_visits_left,
        father_visits_left,
        parent_visits_left: mother_visits_left + father_visits_left,
        phone_weeks_total,
        phone_years_total,
        books_left: (years_remaining * BOOKS_PER_YEAR).round() as i64,
        christmases_left: years_remaining.floor() as i64,
        full_moons_left: (years_remaining * FULL_MOONS_PER_YEAR).round() as i64,
    })
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
