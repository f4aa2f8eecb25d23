use chrono::{DateTime, NaiveDate, Utc};

use crate::age::age_string;
use crate::benchmarks::{Metric, comparison};
use crate::categories::CategorySet;
use crate::config::LifeConfig;
use crate::grid::{
    CellStatus, ViewMode, generate_month_data_at, generate_week_data_at, generate_year_data_at,
};
use crate::stats::LifeStats;

const MIN_ALIGN_WIDTH: usize = 50;
const YEARS_PER_ROW: usize = 10;

/// Plain-text summary in `key: ....... value` rows, grouped under headers.
pub fn render(
    config: &LifeConfig,
    stats: &LifeStats,
    categories: &CategorySet,
    today: NaiveDate,
) -> String {
    let age_value = match config.birth_date {
        Some(birth) => age_string(birth, today),
        None => "unknown".to_string(),
    };
    let owner = if config.name.is_empty() {
        "you"
    } else {
        config.name.as_str()
    };

    let overview: Vec<(String, String)> = vec![
        ("Age".into(), age_value),
        (
            "Weeks lived".into(),
            format!(
                "{} of {} ({:.1}%)",
                stats.weeks_lived, stats.total_weeks, stats.percent_lived
            ),
        ),
        ("Weeks remaining".into(), stats.weeks_remaining.to_string()),
        ("Years remaining".into(), format!("{:.1}", stats.years_remaining())),
        ("Life expectancy".into(), with_remark(config.life_expectancy, Metric::LifeExpectancy)),
        ("Retirement age".into(), with_remark(config.retirement_age, Metric::RetirementAge)),
    ];

    let remaining: Vec<(String, String)> = stats
        .category_breakdown
        .iter()
        .map(|(key, weeks)| {
            let label = format!("{} {}", categories.emoji(key), categories.label(key));
            let years = stats.category_years(key).unwrap_or(0);
            (label.trim().to_string(), format!("{weeks} wks (~{years} yrs)"))
        })
        .collect();

    let insights: Vec<(String, String)> = vec![
        ("Summers left".into(), stats.summers_left.to_string()),
        ("Weekends left".into(), stats.weekends_left.to_string()),
        ("Christmases left".into(), stats.christmases_left.to_string()),
        ("Full moons left".into(), stats.full_moons_left.to_string()),
        ("Books left".into(), stats.books_left.to_string()),
        ("Parent visits left".into(), stats.parent_visits_left.to_string()),
        (
            "Phone time".into(),
            format!(
                "{} wks ({} yrs)",
                stats.phone_weeks_total, stats.phone_years_total
            ),
        ),
    ];

    let align_width = overview
        .iter()
        .chain(&remaining)
        .chain(&insights)
        .map(|(k, v)| k.chars().count() + 2 + v.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_ALIGN_WIDTH);

    let mut out = String::new();
    let sections = [
        (format!("{owner}@lifegrid"), &overview),
        ("- Remaining time".to_string(), &remaining),
        ("- Insights".to_string(), &insights),
    ];
    for (header, rows) in sections {
        out.push_str(&build_header_line(&header, align_width));
        out.push('\n');
        for (key, value) in rows.iter() {
            let (k, dots, v) = build_stat_row(key, value, align_width);
            out.push_str(&format!("{k}{dots}{v}\n"));
        }
    }
    out
}

/// The lifetime grid as characters, one row per year (per decade in the year view).
pub fn render_grid(config: &LifeConfig, view_mode: ViewMode, now: DateTime<Utc>) -> String {
    let statuses: Vec<CellStatus> = match view_mode {
        ViewMode::Weeks => generate_week_data_at(config, now)
            .into_iter()
            .map(|w| w.status)
            .collect(),
        ViewMode::Months => generate_month_data_at(config, now)
            .into_iter()
            .map(|m| m.status)
            .collect(),
        ViewMode::Years => generate_year_data_at(config, now)
            .into_iter()
            .map(|y| y.status)
            .collect(),
    };

    let row_len = match view_mode {
        ViewMode::Years => YEARS_PER_ROW,
        other => other.units_per_year() as usize,
    };

    let mut out = String::new();
    for row in statuses.chunks(row_len) {
        out.extend(row.iter().map(|status| match status {
            CellStatus::Lived => '#',
            CellStatus::Current => '@',
            CellStatus::Future => '.',
        }));
        out.push('\n');
    }
    out
}

fn with_remark(value: u32, metric: Metric) -> String {
    match comparison(metric, value as f64) {
        Some(remark) => format!("{value} ({remark})"),
        None => value.to_string(),
    }
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}
