use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use lifegrid::age::{phase_for_age, weeks_lived};
use lifegrid::{
    CellStatus, LifeConfig, LifePhase, RelationshipConfig, TimeAllocation, ViewMode,
    calc_category_breakdown, calc_life_stats_at, generate_month_data_at, generate_week_data_at,
    generate_year_data_at,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 15, 9, 30, 0).unwrap()
}

fn thirty_year_old() -> LifeConfig {
    LifeConfig {
        birth_date: Some((now() - Duration::weeks(1560)).date_naive()),
        name: "Test".to_string(),
        life_expectancy: 73,
        retirement_age: 65,
    }
}

#[test]
fn test_default_scenario() {
    let stats = calc_life_stats_at(
        &thirty_year_old(),
        &TimeAllocation::default(),
        &RelationshipConfig::default(),
        now(),
    )
    .unwrap();

    assert_eq!(stats.total_weeks, 3796);
    assert_eq!(stats.weeks_lived, 1560);
    assert_eq!(stats.weeks_remaining, 2236);
    assert_eq!(stats.weeks_until_retirement, 1820.0);
    assert_eq!(stats.category_breakdown.get("sleep"), Some(745));
    assert_eq!(stats.category_breakdown.get("work"), Some(607));
    assert_eq!(stats.category_breakdown.free(), 140);
    assert_eq!(stats.summers_left, 43);
    assert_eq!(stats.parent_visits_left, 500);
}

#[test]
fn test_missing_birth_date() {
    let config = LifeConfig::default();
    let stats = calc_life_stats_at(
        &config,
        &TimeAllocation::default(),
        &RelationshipConfig::default(),
        now(),
    );
    assert!(stats.is_none());
    assert!(generate_week_data_at(&config, now()).is_empty());
    assert!(generate_month_data_at(&config, now()).is_empty());
    assert!(generate_year_data_at(&config, now()).is_empty());
}

#[test]
fn test_birth_exactly_one_week_ago() {
    let birth = (now() - Duration::days(7)).date_naive();
    // Birth is at midnight, so a little more than seven days have passed
    assert_eq!(weeks_lived(birth, now()), 1);
}

#[test]
fn test_phase_around_education_end() {
    assert_eq!(phase_for_age(22, 65), LifePhase::Education);
    assert_eq!(phase_for_age(23, 65), LifePhase::Career);
}

#[test]
fn test_lived_and_remaining_add_up() {
    for weeks in [0, 1, 500, 3795, 3796, 3797, 6000] {
        let config = LifeConfig {
            birth_date: Some((now() - Duration::weeks(weeks)).date_naive()),
            ..LifeConfig::default()
        };
        let stats = calc_life_stats_at(
            &config,
            &TimeAllocation::default(),
            &RelationshipConfig::default(),
            now(),
        )
        .unwrap();

        if stats.weeks_lived <= stats.total_weeks {
            assert_eq!(stats.weeks_lived + stats.weeks_remaining, stats.total_weeks);
        } else {
            assert_eq!(stats.weeks_remaining, 0);
        }
        assert!((0.0..=100.0).contains(&stats.percent_lived));
    }
}

#[test]
fn test_free_never_negative() {
    for hours in [0.0, 3.0, 8.0, 24.0, 100.0] {
        let alloc: TimeAllocation = [
            ("sleep", hours),
            ("work", hours),
            ("hobbies", hours),
            ("custom-1", hours),
        ]
        .into_iter()
        .collect();
        for (remaining, retirement) in [(0, 0.0), (10, 50.0), (2236, 1820.0)] {
            let breakdown = calc_category_breakdown(&alloc, remaining, retirement);
            assert!(breakdown.free() >= 0);
        }
    }
}

#[test]
fn test_grid_lengths_and_single_current() {
    for life_expectancy in [1, 30, 73, 100] {
        let config = LifeConfig {
            life_expectancy,
            ..thirty_year_old()
        };
        let weeks = generate_week_data_at(&config, now());
        let months = generate_month_data_at(&config, now());
        let years = generate_year_data_at(&config, now());

        assert_eq!(weeks.len() as u32, ViewMode::Weeks.grid_len(life_expectancy));
        assert_eq!(months.len() as u32, ViewMode::Months.grid_len(life_expectancy));
        assert_eq!(years.len() as u32, life_expectancy);

        let current_weeks = weeks.iter().filter(|w| w.status == CellStatus::Current).count();
        let expected = if life_expectancy > 30 { 1 } else { 0 };
        assert_eq!(current_weeks, expected, "life expectancy {life_expectancy}");
    }
}

#[test]
fn test_idempotent_with_fixed_now() {
    let config = thirty_year_old();
    let alloc = TimeAllocation::default();
    let rel = RelationshipConfig::default();
    assert_eq!(
        calc_life_stats_at(&config, &alloc, &rel, now()),
        calc_life_stats_at(&config, &alloc, &rel, now())
    );
    assert_eq!(
        generate_week_data_at(&config, now()),
        generate_week_data_at(&config, now())
    );
}

#[test]
fn test_week_start_dates_step_by_seven_days() {
    let config = LifeConfig {
        birth_date: NaiveDate::from_ymd_opt(2000, 2, 28),
        ..LifeConfig::default()
    };
    let weeks = generate_week_data_at(&config, now());
    for pair in weeks.windows(2) {
        assert_eq!(pair[1].start_date - pair[0].start_date, Duration::days(7));
    }
}
