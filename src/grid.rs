//! Cell descriptors for the week, month and year views of a lifetime.
//!
//! Each generator returns exactly `life_expectancy × units per year` cells,
//! indexed contiguously from zero. Cells before the lived count are `Lived`,
//! the cell at the lived count is `Current`, the rest are `Future`. When the
//! person has outlived the grid no cell is `Current`.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::{self, LifePhase, age_from_unit_index, phase_for_age};
use crate::config::LifeConfig;
use crate::constants::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    Lived,
    Current,
    Future,
}

impl CellStatus {
    pub fn classify(index: u32, lived_count: i64) -> Self {
        let index = index as i64;
        if index < lived_count {
            CellStatus::Lived
        } else if index == lived_count {
            CellStatus::Current
        } else {
            CellStatus::Future
        }
    }
}

/// Granularity of a grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Weeks,
    Months,
    Years,
}

impl ViewMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "weeks" => Some(ViewMode::Weeks),
            "months" => Some(ViewMode::Months),
            "years" => Some(ViewMode::Years),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Weeks => "weeks",
            ViewMode::Months => "months",
            ViewMode::Years => "years",
        }
    }

    pub fn units_per_year(self) -> u32 {
        match self {
            ViewMode::Weeks => WEEKS_PER_YEAR,
            ViewMode::Months => MONTHS_PER_YEAR,
            ViewMode::Years => 1,
        }
    }

    /// Number of cells a grid of this granularity has for `life_expectancy` years.
    pub fn grid_len(self, life_expectancy: u32) -> u32 {
        life_expectancy.saturating_mul(self.units_per_year())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekData {
    pub index: u32,
    pub year: u32,
    pub week_of_year: u32,
    pub status: CellStatus,
    pub start_date: NaiveDate,
    pub phase: LifePhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthData {
    pub index: u32,
    pub year: u32,
    pub month_of_year: u32,
    pub status: CellStatus,
    pub phase: LifePhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearData {
    pub index: u32,
    pub status: CellStatus,
    pub phase: LifePhase,
    /// 100 for lived years, 0 for future ones, the elapsed share of the current year otherwise.
    pub percent_lived: f64,
}

pub fn generate_week_data(config: &LifeConfig) -> Vec<WeekData> {
    generate_week_data_at(config, Utc::now())
}

pub fn generate_week_data_at(config: &LifeConfig, now: DateTime<Utc>) -> Vec<WeekData> {
    let Some(birth_date) = config.birth_date else {
        return Vec::new();
    };

    let total_weeks = ViewMode::Weeks.grid_len(config.life_expectancy);
    let weeks_lived = age::weeks_lived(birth_date, now);
    debug!(total_weeks, weeks_lived, "generating week grid");

    (0..total_weeks)
        .map(|index| WeekData {
            index,
            year: index / WEEKS_PER_YEAR,
            week_of_year: index % WEEKS_PER_YEAR,
            status: CellStatus::classify(index, weeks_lived),
            start_date: birth_date
                .checked_add_days(Days::new(index as u64 * 7))
                .unwrap_or(NaiveDate::MAX),
            phase: phase_for_age(
                age_from_unit_index(index, WEEKS_PER_YEAR),
                config.retirement_age,
            ),
        })
        .collect()
}

pub fn generate_month_data(config: &LifeConfig) -> Vec<MonthData> {
    generate_month_data_at(config, Utc::now())
}

pub fn generate_month_data_at(config: &LifeConfig, now: DateTime<Utc>) -> Vec<MonthData> {
    let Some(birth_date) = config.birth_date else {
        return Vec::new();
    };

    let total_months = ViewMode::Months.grid_len(config.life_expectancy);
    let months_lived = age::months_lived(birth_date, now);
    debug!(total_months, months_lived, "generating month grid");

    (0..total_months)
        .map(|index| {
            let year = index / MONTHS_PER_YEAR;
            MonthData {
                index,
                year,
                month_of_year: index % MONTHS_PER_YEAR,
                status: CellStatus::classify(index, months_lived),
                phase: phase_for_age(year, config.retirement_age),
            }
        })
        .collect()
}

pub fn generate_year_data(config: &LifeConfig) -> Vec<YearData> {
    generate_year_data_at(config, Utc::now())
}

pub fn generate_year_data_at(config: &LifeConfig, now: DateTime<Utc>) -> Vec<YearData> {
    let Some(birth_date) = config.birth_date else {
        return Vec::new();
    };

    let current_age = age::fractional_age(birth_date, now);
    let years_lived = current_age.floor() as i64;
    let current_share = (current_age - current_age.floor()) * 100.0;
    debug!(current_age, "generating year grid");

    (0..config.life_expectancy)
        .map(|index| {
            let status = CellStatus::classify(index, years_lived);
            let percent_lived = match status {
                CellStatus::Lived => 100.0,
                CellStatus::Current => current_share,
                CellStatus::Future => 0.0,
            };
            YearData {
                index,
                status,
                phase: phase_for_age(index, config.retirement_age),
                percent_lived,
            }
        })
        .collect()
}

/// Row (year) and column (week of year) of a week index in the week grid.
pub fn milestone_position(week_index: u32) -> (u32, u32) {
    (week_index / WEEKS_PER_YEAR, week_index % WEEKS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn config(birth: Option<NaiveDate>, life_expectancy: u32) -> LifeConfig {
        LifeConfig {
            birth_date: birth,
            life_expectancy,
            ..LifeConfig::default()
        }
    }

    fn count_current<T>(cells: &[T], status: impl Fn(&T) -> CellStatus) -> usize {
        cells
            .iter()
            .filter(|c| status(c) == CellStatus::Current)
            .count()
    }

    #[test]
    fn test_classify() {
        assert_eq!(CellStatus::classify(0, 2), CellStatus::Lived);
        assert_eq!(CellStatus::classify(2, 2), CellStatus::Current);
        assert_eq!(CellStatus::classify(3, 2), CellStatus::Future);
        assert_eq!(CellStatus::classify(0, -1), CellStatus::Future);
    }

    #[test]
    fn test_missing_birth_date_is_empty() {
        let cfg = config(None, 80);
        assert!(generate_week_data_at(&cfg, now()).is_empty());
        assert!(generate_month_data_at(&cfg, now()).is_empty());
        assert!(generate_year_data_at(&cfg, now()).is_empty());
    }

    #[test]
    fn test_week_grid() {
        let birth = (now() - Duration::weeks(100)).date_naive();
        let weeks = generate_week_data_at(&config(Some(birth), 73), now());
        assert_eq!(weeks.len(), 73 * 52);
        assert_eq!(count_current(&weeks, |w| w.status), 1);
        assert_eq!(weeks[100].status, CellStatus::Current);
        assert_eq!(weeks[99].status, CellStatus::Lived);
        assert_eq!(weeks[101].status, CellStatus::Future);

        let w = &weeks[53];
        assert_eq!((w.year, w.week_of_year), (1, 1));
        assert_eq!(w.start_date, birth + Duration::days(53 * 7));
        assert!(weeks.iter().enumerate().all(|(i, w)| w.index as usize == i));
    }

    #[test]
    fn test_week_grid_phases() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1);
        let weeks = generate_week_data_at(&config(birth, 73), now());
        assert_eq!(weeks[22 * 52 + 51].phase, LifePhase::Education);
        assert_eq!(weeks[23 * 52].phase, LifePhase::Career);
        assert_eq!(weeks[66 * 52].phase, LifePhase::Retirement);
    }

    #[test]
    fn test_outlived_grid_has_no_current() {
        let birth = NaiveDate::from_ymd_opt(1900, 1, 1);
        let cfg = config(birth, 50);
        let weeks = generate_week_data_at(&cfg, now());
        let months = generate_month_data_at(&cfg, now());
        let years = generate_year_data_at(&cfg, now());
        assert_eq!(count_current(&weeks, |w| w.status), 0);
        assert_eq!(count_current(&months, |m| m.status), 0);
        assert_eq!(count_current(&years, |y| y.status), 0);
        assert!(years.iter().all(|y| y.percent_lived == 100.0));
    }

    #[test]
    fn test_month_grid() {
        let birth = NaiveDate::from_ymd_opt(2000, 3, 28);
        let months = generate_month_data_at(&config(birth, 80), now());
        assert_eq!(months.len(), 960);
        // March 2000 to June 2025
        assert_eq!(months[303].status, CellStatus::Current);
        assert_eq!(count_current(&months, |m| m.status), 1);
        assert_eq!((months[303].year, months[303].month_of_year), (25, 3));
        assert_eq!(months[303].phase, LifePhase::Career);
    }

    #[test]
    fn test_year_grid() {
        let birth = NaiveDate::from_ymd_opt(1995, 6, 1);
        let years = generate_year_data_at(&config(birth, 73), now());
        assert_eq!(years.len(), 73);
        assert_eq!(years[29].status, CellStatus::Lived);
        assert_eq!(years[29].percent_lived, 100.0);
        let current = &years[30];
        assert_eq!(current.status, CellStatus::Current);
        assert!(current.percent_lived >= 0.0 && current.percent_lived < 100.0);
        assert_eq!(years[31].percent_lived, 0.0);
    }

    #[test]
    fn test_grid_len_matches_generators() {
        let cfg = config(NaiveDate::from_ymd_opt(1990, 1, 1), 81);
        assert_eq!(
            generate_week_data_at(&cfg, now()).len() as u32,
            ViewMode::Weeks.grid_len(81)
        );
        assert_eq!(
            generate_month_data_at(&cfg, now()).len() as u32,
            ViewMode::Months.grid_len(81)
        );
        assert_eq!(
            generate_year_data_at(&cfg, now()).len() as u32,
            ViewMode::Years.grid_len(81)
        );
    }

    #[test]
    fn test_milestone_position() {
        assert_eq!(milestone_position(0), (0, 0));
        assert_eq!(milestone_position(1560), (30, 0));
        assert_eq!(milestone_position(1561), (30, 1));
    }
}
