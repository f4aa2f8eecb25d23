//! Life-in-weeks statistics.
//!
//! Turns a birth date, life-expectancy assumptions and daily time habits into
//! lived/remaining counts, a per-category split of the remaining weeks, a few
//! "fun fact" projections, and week/month/year grids of a whole lifetime.
//!
//! All calculations are pure; the only implicit input is the current time,
//! and every time-dependent function has an `_at` form taking it explicitly.

pub mod age;
pub mod benchmarks;
pub mod breakdown;
pub mod categories;
pub mod config;
pub mod constants;
pub mod grid;
pub mod report;
pub mod settings;
pub mod stats;
pub mod what_if;

pub use age::LifePhase;
pub use breakdown::{CategoryBreakdown, calc_category_breakdown};
pub use config::{LifeConfig, ParentConfig, RelationshipConfig, TimeAllocation};
pub use grid::{
    CellStatus, MonthData, ViewMode, WeekData, YearData, generate_month_data,
    generate_month_data_at, generate_week_data, generate_week_data_at, generate_year_data,
    generate_year_data_at,
};
pub use settings::{Settings, SettingsError, SettingsStore, migrate_relationships};
pub use stats::{LifeStats, calc_life_stats, calc_life_stats_at};
