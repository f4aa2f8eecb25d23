//! Differences between a person's current statistics and an alternative
//! computed from adjusted inputs (a different retirement age, fewer phone
//! hours, more time with family, ...).

use serde::{Deserialize, Serialize};

use crate::stats::LifeStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    pub baseline_weeks: i64,
    pub alternative_weeks: i64,
}

impl CategoryDelta {
    pub fn delta(&self) -> i64 {
        self.alternative_weeks - self.baseline_weeks
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDelta {
    /// Baseline categories first, then categories only the alternative has.
    pub categories: Vec<CategoryDelta>,
    pub free_weeks: i64,
    pub phone_weeks: i64,
    pub parent_visits: i64,
}

impl StatsDelta {
    pub fn category(&self, key: &str) -> Option<&CategoryDelta> {
        self.categories.iter().find(|c| c.category == key)
    }
}

/// Whether a week delta is worth showing; sub-week changes are noise.
pub fn significant(delta: i64) -> bool {
    delta.abs() >= 1
}

pub fn compare(baseline: &LifeStats, alternative: &LifeStats) -> StatsDelta {
    let base = &baseline.category_breakdown;
    let alt = &alternative.category_breakdown;

    let mut categories: Vec<CategoryDelta> = base
        .iter()
        .map(|(category, weeks)| CategoryDelta {
            category: category.to_string(),
            baseline_weeks: weeks,
            alternative_weeks: alt.get(category).unwrap_or(0),
        })
        .collect();

    categories.extend(
        alt.iter()
            .filter(|(category, _)| base.get(category).is_none())
            .map(|(category, weeks)| CategoryDelta {
                category: category.to_string(),
                baseline_weeks: 0,
                alternative_weeks: weeks,
            }),
    );

    StatsDelta {
        categories,
        free_weeks: alt.free() - base.free(),
        phone_weeks: alternative.phone_weeks_total - baseline.phone_weeks_total,
        parent_visits: alternative.parent_visits_left - baseline.parent_visits_left,
    }
}
