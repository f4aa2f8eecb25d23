//! Splits the remaining weeks of a life across the daily time categories.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TimeAllocation;

pub const WORK: &str = "work";
pub const FREE: &str = "free";

const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeeks {
    pub category: String,
    pub weeks: i64,
}

/// Weeks per category, in allocation order, with `free` last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryBreakdown {
    entries: Vec<CategoryWeeks>,
}

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.weeks)
    }

    pub fn free(&self) -> i64 {
        self.get(FREE).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|e| (e.category.as_str(), e.weeks))
    }

    /// Sum of every category including `free`. May drift from the remaining
    /// weeks by a few units because each category rounds on its own.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|e| e.weeks).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Allocates `weeks_remaining` across the categories.
///
/// Work only accrues until retirement; every other category runs to the end
/// of the remaining life. Whatever is left over is `free`, floored at zero
/// when the day is over-allocated.
pub fn calc_category_breakdown(
    allocation: &TimeAllocation,
    weeks_remaining: i64,
    weeks_until_retirement: f64,
) -> CategoryBreakdown {
    let remaining = weeks_remaining.max(0);
    let until_retirement = weeks_until_retirement.clamp(0.0, remaining as f64);

    let mut entries: Vec<CategoryWeeks> = allocation
        .iter()
        .filter(|(category, _)| *category != FREE)
        .map(|(category, hours)| {
            let span = if category == WORK {
                until_retirement
            } else {
                remaining as f64
            };
            CategoryWeeks {
                category: category.to_string(),
                weeks: (hours / HOURS_PER_DAY * span).round() as i64,
            }
        })
        .collect();

    let allocated: i64 = entries.iter().map(|e| e.weeks).sum();
    let free = (remaining - allocated).max(0);
    debug!(remaining, allocated, free, "category breakdown");

    entries.push(CategoryWeeks {
        category: FREE.to_string(),
        weeks: free,
    });

    CategoryBreakdown { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocation() {
        let breakdown = calc_category_breakdown(&TimeAllocation::default(), 2236, 1820.0);
        assert_eq!(breakdown.get("sleep"), Some(745));
        assert_eq!(breakdown.get("work"), Some(607));
        assert_eq!(breakdown.get("family"), Some(93));
        assert_eq!(breakdown.get("partner"), Some(186));
        assert!(breakdown.free() >= 0);
        assert_eq!(breakdown.iter().last().map(|(k, _)| k), Some(FREE));
    }

    #[test]
    fn test_work_stops_at_retirement() {
        let alloc: TimeAllocation = [("work", 12.0), ("sleep", 12.0)].into_iter().collect();
        let breakdown = calc_category_breakdown(&alloc, 1000, 0.0);
        assert_eq!(breakdown.get("work"), Some(0));
        assert_eq!(breakdown.get("sleep"), Some(500));
        assert_eq!(breakdown.free(), 500);
    }

    #[test]
    fn test_work_capped_by_remaining_life() {
        let alloc: TimeAllocation = [("work", 24.0)].into_iter().collect();
        let breakdown = calc_category_breakdown(&alloc, 100, 5000.0);
        assert_eq!(breakdown.get("work"), Some(100));
    }

    #[test]
    fn test_over_allocation_never_negative() {
        let alloc: TimeAllocation = [("sleep", 20.0), ("hobbies", 20.0), ("work", 20.0)]
            .into_iter()
            .collect();
        let breakdown = calc_category_breakdown(&alloc, 1000, 1000.0);
        assert_eq!(breakdown.free(), 0);
        assert!(breakdown.total() > 1000);
    }

    #[test]
    fn test_negative_inputs_clamp() {
        let breakdown = calc_category_breakdown(&TimeAllocation::default(), -40, -3.0);
        assert!(breakdown.iter().all(|(_, weeks)| weeks == 0));
    }

    #[test]
    fn test_rounding_drift_is_kept() {
        // Three thirds each round up; together they exceed the total by one.
        let alloc: TimeAllocation = [("a", 8.0), ("b", 8.0), ("c", 8.0)].into_iter().collect();
        let breakdown = calc_category_breakdown(&alloc, 5, 5.0);
        assert_eq!(breakdown.get("a"), Some(2));
        assert_eq!(breakdown.free(), 0);
        assert_eq!(breakdown.total(), 6);
    }
}
