//! Unit sizes and the defaults every parsed field falls back to.

pub const WEEKS_PER_YEAR: u32 = 52;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Length of the continuous year used for fractional ages.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const DEFAULT_LIFE_EXPECTANCY: u32 = 73;
pub const DEFAULT_RETIREMENT_AGE: u32 = 65;

/// Upper bound accepted for life expectancy and retirement age from settings.
pub const MAX_LIFE_EXPECTANCY: u32 = 150;

pub const DEFAULT_PARENT_AGE: f64 = 55.0;
pub const DEFAULT_PARENT_LIFE_EXPECTANCY: f64 = 80.0;
pub const DEFAULT_PARENT_VISITS_PER_YEAR: f64 = 10.0;
pub const DEFAULT_PARENT_ALIVE: bool = true;
pub const DEFAULT_PHONE_HOURS_PER_DAY: f64 = 4.0;

/// Built-in categories with their default hours per day, in display order.
pub const DEFAULT_TIME_ALLOCATION: [(&str, f64); 7] = [
    ("sleep", 8.0),
    ("work", 8.0),
    ("family", 1.0),
    ("partner", 2.0),
    ("hobbies", 2.0),
    ("health", 1.0),
    ("chores", 2.0),
];

pub const MAX_CUSTOM_CATEGORIES: usize = 3;

// Insight multipliers
pub const BOOKS_PER_YEAR: f64 = 12.0;
pub const FULL_MOONS_PER_YEAR: f64 = 12.37;
