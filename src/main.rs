use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use lifegrid::{Settings, SettingsStore, calc_life_stats_at, migrate_relationships, report};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const SETTINGS_ENV: &str = "LIFEGRID_SETTINGS";
const DEFAULT_SETTINGS_FILE: &str = "lifegrid.json";

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut as_json = false;
    let mut show_grid = false;
    let mut path_arg = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "--grid" => show_grid = true,
            _ => path_arg = Some(PathBuf::from(arg)),
        }
    }
    let path = path_arg
        .or_else(|| env::var_os(SETTINGS_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

    let mut store = SettingsStore::load_or_default(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;

    if migrate_relationships(&mut store) {
        store
            .save(&path)
            .with_context(|| format!("Failed to save migrated settings to {}", path.display()))?;
        info!("Saved migrated settings to {}", path.display());
    }

    let settings = Settings::from_store(&store);

    // One instant for the stats and the grid
    let now = Utc::now();
    let Some(stats) = calc_life_stats_at(
        &settings.life,
        &settings.allocation,
        &settings.relationships,
        now,
    ) else {
        println!(
            "No birth date set. Add \"life-config:birthDate\": \"YYYY-MM-DD\" to {}.",
            path.display()
        );
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!(
            "{}",
            report::render(&settings.life, &stats, &settings.categories, now.date_naive())
        );
    }

    if show_grid {
        println!();
        print!("{}", report::render_grid(&settings.life, settings.view_mode, now));
    }

    info!(
        weeks_lived = stats.weeks_lived,
        weeks_remaining = stats.weeks_remaining,
        "Done"
    );

    Ok(())
}
