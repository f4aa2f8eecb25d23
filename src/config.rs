//! Typed configuration records the engine computes from.
//!
//! Everything here is plain data. Parsing from persisted settings text lives
//! in [`crate::settings`]; the engine only ever sees these types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// `None` means the person has not entered a birth date yet.
    pub birth_date: Option<NaiveDate>,
    pub name: String,
    pub life_expectancy: u32,
    pub retirement_age: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            birth_date: None,
            name: String::new(),
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            retirement_age: DEFAULT_RETIREMENT_AGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHours {
    pub category: String,
    pub hours: f64,
}

/// Hours per day spent on each category, in display order.
///
/// Totals above 24 are allowed; the breakdown absorbs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeAllocation {
    entries: Vec<CategoryHours>,
}

impl TimeAllocation {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Sets the hours for `category`, keeping its position if already present.
    pub fn set(&mut self, category: impl Into<String>, hours: f64) {
        let category = category.into();
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.hours = hours,
            None => self.entries.push(CategoryHours { category, hours }),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.hours)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|e| (e.category.as_str(), e.hours))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }
}

impl Default for TimeAllocation {
    fn default() -> Self {
        DEFAULT_TIME_ALLOCATION.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TimeAllocation {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut allocation = Self::empty();
        for (category, hours) in iter {
            allocation.set(category, hours);
        }
        allocation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParentConfig {
    pub age: f64,
    pub life_expectancy: f64,
    pub visits_per_year: f64,
    pub alive: bool,
}

impl ParentConfig {
    /// Years until the parent's stated life expectancy, zero if not alive.
    pub fn years_left(&self) -> f64 {
        if !self.alive {
            return 0.0;
        }
        (self.life_expectancy - self.age).max(0.0)
    }

    pub fn visits_left(&self) -> i64 {
        ((self.years_left() * self.visits_per_year).round() as i64).max(0)
    }
}

impl Default for ParentConfig {
    fn default() -> Self {
        Self {
            age: DEFAULT_PARENT_AGE,
            life_expectancy: DEFAULT_PARENT_LIFE_EXPECTANCY,
            visits_per_year: DEFAULT_PARENT_VISITS_PER_YEAR,
            alive: DEFAULT_PARENT_ALIVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationshipConfig {
    pub mother: ParentConfig,
    pub father: ParentConfig,
    pub phone_hours_per_day: f64,
}

impl Default for RelationshipConfig {
    fn default() -> Self {
        Self {
            mother: ParentConfig::default(),
            father: ParentConfig::default(),
            phone_hours_per_day: DEFAULT_PHONE_HOURS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentsAlive {
    Both,
    One,
    Neither,
}

impl ParentsAlive {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "both" => Some(Self::Both),
            "one" => Some(Self::One),
            "neither" => Some(Self::Neither),
            _ => None,
        }
    }

    /// (mother, father) alive flags; a single surviving parent maps to the mother.
    pub fn split(self) -> (bool, bool) {
        match self {
            Self::Both => (true, true),
            Self::One => (true, false),
            Self::Neither => (false, false),
        }
    }
}

/// The merged "parents" shape older settings were saved in.
///
/// Only read by the settings migration; converted once into
/// [`RelationshipConfig`] and never seen by the calculations. The old
/// `parentsLiveTogether` flag is not carried: separate mother and father
/// visit counts already cover parents who live apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegacyRelationships {
    pub parents_age: f64,
    pub parents_life_expectancy: f64,
    pub parent_visits_per_year: f64,
    pub parents_alive: ParentsAlive,
    pub phone_hours_per_day: f64,
}

impl From<LegacyRelationships> for RelationshipConfig {
    fn from(legacy: LegacyRelationships) -> Self {
        let (mother_alive, father_alive) = legacy.parents_alive.split();
        let parent = |alive| ParentConfig {
            age: legacy.parents_age,
            life_expectancy: legacy.parents_life_expectancy,
            visits_per_year: legacy.parent_visits_per_year,
            alive,
        };
        Self {
            mother: parent(mother_alive),
            father: parent(father_alive),
            phone_hours_per_day: legacy.phone_hours_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocation_order() {
        let alloc = TimeAllocation::default();
        let keys: Vec<&str> = alloc.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["sleep", "work", "family", "partner", "hobbies", "health", "chores"]
        );
        assert_eq!(alloc.total_hours(), 24.0);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut alloc = TimeAllocation::default();
        alloc.set("work", 10.0);
        alloc.set("guitar", 1.5);
        assert_eq!(alloc.get("work"), Some(10.0));
        assert_eq!(alloc.iter().nth(1).map(|(k, _)| k), Some("work"));
        assert_eq!(alloc.iter().last(), Some(("guitar", 1.5)));
        assert_eq!(alloc.len(), 8);
    }

    #[test]
    fn test_parent_years_and_visits() {
        let mut parent = ParentConfig::default();
        assert_eq!(parent.years_left(), 25.0);
        assert_eq!(parent.visits_left(), 250);

        parent.age = 90.0;
        assert_eq!(parent.years_left(), 0.0);

        parent.age = 55.0;
        parent.alive = false;
        assert_eq!(parent.visits_left(), 0);
    }

    #[test]
    fn test_negative_visit_rate_clamps_to_zero() {
        let parent = ParentConfig {
            visits_per_year: -3.0,
            ..ParentConfig::default()
        };
        assert_eq!(parent.years_left(), 25.0);
        assert_eq!(parent.visits_left(), 0);
    }

    #[test]
    fn test_legacy_conversion() {
        let legacy = LegacyRelationships {
            parents_age: 60.0,
            parents_life_expectancy: 85.0,
            parent_visits_per_year: 4.0,
            parents_alive: ParentsAlive::One,
            phone_hours_per_day: 3.0,
        };
        let rel = RelationshipConfig::from(legacy);
        assert!(rel.mother.alive);
        assert!(!rel.father.alive);
        assert_eq!(rel.father.age, 60.0);
        assert_eq!(rel.phone_hours_per_day, 3.0);
    }
}
