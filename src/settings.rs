//! settings.rs
//!
//! Persisted settings are a flat map of string values under fixed storage
//! keys (`life-config:birthDate`, `time-alloc:sleep`, ...). This module is the
//! only place that text is turned into typed configuration:
//!   • `SettingsStore` loads and saves the map as a JSON object
//!   • `migrate_relationships` rewrites the merged "parents" keys into the
//!     split mother/father keys, once
//!   • `Settings::from_store` parses every field, falling back to its default
//!     when a value is absent or unparseable
//!
//! Parsing never fails; only file access and malformed JSON do.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::breakdown::FREE;
use crate::categories::{CategorySet, CustomCategory, Theme};
use crate::config::{
    LegacyRelationships, LifeConfig, ParentConfig, ParentsAlive, RelationshipConfig,
    TimeAllocation,
};
use crate::constants::*;
use crate::grid::ViewMode;

pub mod keys {
    pub const BIRTH_DATE: &str = "life-config:birthDate";
    pub const NAME: &str = "life-config:name";
    pub const LIFE_EXPECTANCY: &str = "life-config:lifeExpectancy";
    pub const RETIREMENT_AGE: &str = "life-config:retirementAge";

    pub const TIME_ALLOC_PREFIX: &str = "time-alloc:";

    pub const MOTHER_AGE: &str = "relationships:motherAge";
    pub const FATHER_AGE: &str = "relationships:fatherAge";
    pub const MOTHER_LIFE_EXPECTANCY: &str = "relationships:motherLifeExpectancy";
    pub const FATHER_LIFE_EXPECTANCY: &str = "relationships:fatherLifeExpectancy";
    pub const MOTHER_VISITS_PER_YEAR: &str = "relationships:motherVisitsPerYear";
    pub const FATHER_VISITS_PER_YEAR: &str = "relationships:fatherVisitsPerYear";
    pub const MOTHER_ALIVE: &str = "relationships:motherAlive";
    pub const FATHER_ALIVE: &str = "relationships:fatherAlive";
    pub const PHONE_HOURS_PER_DAY: &str = "relationships:phoneHoursPerDay";

    // Merged shape, read only by the migration
    pub const PARENTS_AGE: &str = "relationships:parentsAge";
    pub const PARENTS_LIFE_EXPECTANCY: &str = "relationships:parentsLifeExpectancy";
    pub const PARENT_VISITS_PER_YEAR: &str = "relationships:parentVisitsPerYear";
    pub const PARENTS_ALIVE: &str = "relationships:parentsAlive";

    pub const CUSTOM_CATEGORIES: &str = "custom-categories";
    pub const ONBOARDED: &str = "onboarded";
    pub const THEME: &str = "theme";
    pub const VIEW_MODE: &str = "view-mode";
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings must be a JSON object")]
    NotAnObject,
}

/// Raw persisted settings: storage key to string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object. Numbers and booleans are kept as their text form,
    /// nested arrays or objects as compact JSON, nulls are dropped.
    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        let Value::Object(object) = serde_json::from_str::<Value>(raw)? else {
            return Err(SettingsError::NotAnObject);
        };

        let values = object
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s,
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    nested => nested.to_string(),
                };
                Some((key, text))
            })
            .collect();

        Ok(Self { values })
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(&self.values)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Like [`SettingsStore::load`], but a missing file is an empty store.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match Self::load(path) {
            Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!("No settings at {}, using defaults", path.display());
                Ok(Self::new())
            }
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Converts the merged "parents" keys into mother/father keys.
///
/// Does nothing when split keys already exist or when there is nothing to
/// migrate. Returns whether the store changed so the caller can persist it.
/// The legacy keys stay in place; the split keys take precedence from then on.
pub fn migrate_relationships(store: &mut SettingsStore) -> bool {
    if store.contains(keys::MOTHER_AGE) || !store.contains(keys::PARENTS_AGE) {
        return false;
    }

    let legacy = LegacyRelationships {
        parents_age: parse_f64(store, keys::PARENTS_AGE, DEFAULT_PARENT_AGE),
        parents_life_expectancy: parse_f64(
            store,
            keys::PARENTS_LIFE_EXPECTANCY,
            DEFAULT_PARENT_LIFE_EXPECTANCY,
        ),
        parent_visits_per_year: parse_f64(
            store,
            keys::PARENT_VISITS_PER_YEAR,
            DEFAULT_PARENT_VISITS_PER_YEAR,
        ),
        parents_alive: store
            .get(keys::PARENTS_ALIVE)
            .and_then(ParentsAlive::parse)
            .unwrap_or(ParentsAlive::Both),
        phone_hours_per_day: parse_f64(
            store,
            keys::PHONE_HOURS_PER_DAY,
            DEFAULT_PHONE_HOURS_PER_DAY,
        ),
    };

    info!(
        parents_alive = ?legacy.parents_alive,
        "Migrating merged parent settings to mother/father"
    );
    write_relationships(store, &RelationshipConfig::from(legacy));
    true
}

fn write_relationships(store: &mut SettingsStore, rel: &RelationshipConfig) {
    let parents = [
        (
            &rel.mother,
            keys::MOTHER_AGE,
            keys::MOTHER_LIFE_EXPECTANCY,
            keys::MOTHER_VISITS_PER_YEAR,
            keys::MOTHER_ALIVE,
        ),
        (
            &rel.father,
            keys::FATHER_AGE,
            keys::FATHER_LIFE_EXPECTANCY,
            keys::FATHER_VISITS_PER_YEAR,
            keys::FATHER_ALIVE,
        ),
    ];
    for (parent, age, life_expectancy, visits, alive) in parents {
        store.set(age, parent.age.to_string());
        store.set(life_expectancy, parent.life_expectancy.to_string());
        store.set(visits, parent.visits_per_year.to_string());
        store.set(alive, parent.alive.to_string());
    }
    store.set(keys::PHONE_HOURS_PER_DAY, rel.phone_hours_per_day.to_string());
}

/// Fully typed settings, the only form the calculations accept.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub life: LifeConfig,
    pub allocation: TimeAllocation,
    pub relationships: RelationshipConfig,
    pub categories: CategorySet,
    pub view_mode: ViewMode,
    pub theme: Theme,
    pub onboarded: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_store(&SettingsStore::new())
    }
}

impl Settings {
    pub fn from_store(store: &SettingsStore) -> Self {
        let life = LifeConfig {
            birth_date: parse_birth_date(store),
            name: store.get(keys::NAME).unwrap_or_default().to_string(),
            life_expectancy: parse_years(
                store,
                keys::LIFE_EXPECTANCY,
                DEFAULT_LIFE_EXPECTANCY,
                1..=MAX_LIFE_EXPECTANCY,
            ),
            retirement_age: parse_years(
                store,
                keys::RETIREMENT_AGE,
                DEFAULT_RETIREMENT_AGE,
                0..=MAX_LIFE_EXPECTANCY,
            ),
        };

        let categories = CategorySet::new(parse_custom_categories(store));

        let mut allocation: TimeAllocation = DEFAULT_TIME_ALLOCATION
            .iter()
            .map(|&(category, default)| {
                let key = format!("{}{category}", keys::TIME_ALLOC_PREFIX);
                (category, parse_f64(store, &key, default))
            })
            .collect();
        for custom in categories.custom() {
            allocation.set(custom.id.clone(), custom.hours);
        }

        let relationships = RelationshipConfig {
            mother: ParentConfig {
                age: parse_f64(store, keys::MOTHER_AGE, DEFAULT_PARENT_AGE),
                life_expectancy: parse_f64(
                    store,
                    keys::MOTHER_LIFE_EXPECTANCY,
                    DEFAULT_PARENT_LIFE_EXPECTANCY,
                ),
                visits_per_year: parse_f64(
                    store,
                    keys::MOTHER_VISITS_PER_YEAR,
                    DEFAULT_PARENT_VISITS_PER_YEAR,
                ),
                alive: parse_bool(store, keys::MOTHER_ALIVE, DEFAULT_PARENT_ALIVE),
            },
            father: ParentConfig {
                age: parse_f64(store, keys::FATHER_AGE, DEFAULT_PARENT_AGE),
                life_expectancy: parse_f64(
                    store,
                    keys::FATHER_LIFE_EXPECTANCY,
                    DEFAULT_PARENT_LIFE_EXPECTANCY,
                ),
                visits_per_year: parse_f64(
                    store,
                    keys::FATHER_VISITS_PER_YEAR,
                    DEFAULT_PARENT_VISITS_PER_YEAR,
                ),
                alive: parse_bool(store, keys::FATHER_ALIVE, DEFAULT_PARENT_ALIVE),
            },
            phone_hours_per_day: parse_f64(
                store,
                keys::PHONE_HOURS_PER_DAY,
                DEFAULT_PHONE_HOURS_PER_DAY,
            ),
        };

        Self {
            life,
            allocation,
            relationships,
            categories,
            view_mode: store
                .get(keys::VIEW_MODE)
                .and_then(ViewMode::parse)
                .unwrap_or_default(),
            theme: store
                .get(keys::THEME)
                .and_then(Theme::parse)
                .unwrap_or_default(),
            onboarded: parse_bool(store, keys::ONBOARDED, false),
        }
    }

    /// Writes every field back under its storage key.
    pub fn write_to(&self, store: &mut SettingsStore) -> Result<(), SettingsError> {
        store.set(
            keys::BIRTH_DATE,
            self.life
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        store.set(keys::NAME, self.life.name.clone());
        store.set(keys::LIFE_EXPECTANCY, self.life.life_expectancy.to_string());
        store.set(keys::RETIREMENT_AGE, self.life.retirement_age.to_string());

        for &(category, _) in DEFAULT_TIME_ALLOCATION.iter() {
            if let Some(hours) = self.allocation.get(category) {
                store.set(format!("{}{category}", keys::TIME_ALLOC_PREFIX), hours.to_string());
            }
        }

        write_relationships(store, &self.relationships);
        store.set(
            keys::CUSTOM_CATEGORIES,
            serde_json::to_string(&self.categories)?,
        );
        store.set(keys::VIEW_MODE, self.view_mode.as_str());
        store.set(keys::THEME, self.theme.as_str());
        store.set(keys::ONBOARDED, self.onboarded.to_string());
        Ok(())
    }
}

fn parse_birth_date(store: &SettingsStore) -> Option<NaiveDate> {
    let raw = store.get(keys::BIRTH_DATE)?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(value = raw, "Ignoring unparseable birth date: {e}");
            None
        }
    }
}

fn parse_f64(store: &SettingsStore, key: &str, default: f64) -> f64 {
    let Some(raw) = store.get(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(key, value = raw, default, "Falling back to default");
            default
        }
    }
}

/// Whole years, rounded; values below `min` fall back to the default.
fn parse_years(
    store: &SettingsStore,
    key: &str,
    default: u32,
    range: RangeInclusive<u32>,
) -> u32 {
    let value = parse_f64(store, key, default as f64).round();
    if value < *range.start() as f64 || value > *range.end() as f64 {
        warn!(key, value, default, "Out of range, using default");
        return default;
    }
    value as u32
}

fn parse_bool(store: &SettingsStore, key: &str, default: bool) -> bool {
    match store.get(key) {
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            debug!(key, value = other, default, "Falling back to default");
            default
        }
        None => default,
    }
}

fn parse_custom_categories(store: &SettingsStore) -> Vec<CustomCategory> {
    let Some(raw) = store.get(keys::CUSTOM_CATEGORIES) else {
        return Vec::new();
    };

    let parsed: Vec<CustomCategory> = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Ignoring malformed custom categories: {e}");
            return Vec::new();
        }
    };

    let mut categories: Vec<CustomCategory> = parsed
        .into_iter()
        .filter(|c| {
            let usable = !c.id.is_empty() && c.id != FREE && c.hours.is_finite();
            if !usable {
                warn!(id = %c.id, "Skipping unusable custom category");
            }
            usable
        })
        .collect();

    if categories.len() > MAX_CUSTOM_CATEGORIES {
        warn!(
            count = categories.len(),
            max = MAX_CUSTOM_CATEGORIES,
            "Too many custom categories, keeping the first ones"
        );
        categories.truncate(MAX_CUSTOM_CATEGORIES);
    }

    categories
}
