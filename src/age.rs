//! age.rs
//!
//! Time elapsed since birth, expressed the ways the grids and statistics need it:
//!   • whole weeks lived (7-day blocks from UTC midnight of the birth date)
//!   • whole calendar months lived (day-of-month ignored)
//!   • a continuous age in 365.25-day years
//!   • a human-readable "X years, Y months, Z days" string
//!
//! plus the mapping from an age in whole years to a life phase.
//!
//! None of these fail for a birth date in the future; they return zero or
//! negative values and leave clamping to the caller.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_YEAR;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

const CHILDHOOD_END: u32 = 5;
const EDUCATION_END: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifePhase {
    Childhood,
    Education,
    Career,
    Retirement,
}

impl LifePhase {
    pub const ALL: [LifePhase; 4] = [
        LifePhase::Childhood,
        LifePhase::Education,
        LifePhase::Career,
        LifePhase::Retirement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LifePhase::Childhood => "childhood",
            LifePhase::Education => "education",
            LifePhase::Career => "career",
            LifePhase::Retirement => "retirement",
        }
    }
}

/// Classifies an age in whole years. Each boundary belongs to the earlier phase,
/// so 22 is still education. A retirement age below 22 leaves no career years.
pub fn phase_for_age(age: u32, retirement_age: u32) -> LifePhase {
    if age <= CHILDHOOD_END {
        LifePhase::Childhood
    } else if age <= EDUCATION_END {
        LifePhase::Education
    } else if age <= retirement_age {
        LifePhase::Career
    } else {
        LifePhase::Retirement
    }
}

/// Whole years of age at a grid cell index.
pub fn age_from_unit_index(index: u32, units_per_year: u32) -> u32 {
    index / units_per_year.max(1)
}

/// Instant a birth date starts at: midnight UTC.
pub fn birth_instant(birth_date: NaiveDate) -> DateTime<Utc> {
    birth_date.and_time(NaiveTime::MIN).and_utc()
}

fn millis_since_birth(birth_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now - birth_instant(birth_date)).num_milliseconds()
}

/// Complete 7-day blocks between the birth date and `now`, floored.
pub fn weeks_lived(birth_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    millis_since_birth(birth_date, now).div_euclid(MS_PER_WEEK)
}

/// Calendar-month difference between the birth month and the month of `now`.
///
/// Day of month is ignored: born on the 28th, the 1st of the next month
/// already counts as one month.
pub fn months_lived(birth_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let today = now.date_naive();
    let years = (today.year() - birth_date.year()) as i64;
    let months = today.month() as i64 - birth_date.month() as i64;
    years * 12 + months
}

/// Age as a continuous number of 365.25-day years.
pub fn fractional_age(birth_date: NaiveDate, now: DateTime<Utc>) -> f64 {
    millis_since_birth(birth_date, now) as f64 / (DAYS_PER_YEAR * MS_PER_DAY as f64)
}

/// Returns a human age as a string
pub fn age_string(birthdate: NaiveDate, today: NaiveDate) -> String {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    format!(
        "{} year{}, {} month{}, {} day{}",
        years,
        plural(years),
        months,
        plural(months),
        days,
        plural(days)
    )
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
