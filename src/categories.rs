//! Display metadata for time categories and life phases.
//!
//! Lookups take the set of custom categories explicitly; a custom definition
//! shadows the built-in one with the same id.

use serde::{Deserialize, Serialize};

use crate::age::LifePhase;

const FALLBACK_COLOR: &str = "#525252";

struct BuiltinCategory {
    key: &'static str,
    label: &'static str,
    color: &'static str,
    emoji: &'static str,
}

static BUILTIN_CATEGORIES: [BuiltinCategory; 10] = [
    BuiltinCategory { key: "sleep", label: "Sleep", color: "#8b7355", emoji: "\u{1F634}" },
    BuiltinCategory { key: "work", label: "Work", color: "#6b8f71", emoji: "\u{1F4BC}" },
    BuiltinCategory { key: "family", label: "Family", color: "#7b6d8e", emoji: "\u{1F46A}" },
    BuiltinCategory { key: "partner", label: "Partner", color: "#8f6b6b", emoji: "\u{2764}\u{FE0F}" },
    BuiltinCategory { key: "hobbies", label: "Hobbies", color: "#6b7e8f", emoji: "\u{1F3A8}" },
    BuiltinCategory { key: "health", label: "Health & Exercise", color: "#8f8b6b", emoji: "\u{1F3CB}\u{FE0F}" },
    BuiltinCategory { key: "chores", label: "Chores & Errands", color: "#7a7a7a", emoji: "\u{1F9F9}" },
    BuiltinCategory { key: "phone", label: "Phone / Screen Time", color: "#e06c75", emoji: "\u{1F4F1}" },
    BuiltinCategory { key: "parents", label: "Time with Parents", color: "#9b8579", emoji: "\u{1F9D3}" },
    BuiltinCategory { key: "free", label: "Free Time", color: FALLBACK_COLOR, emoji: "\u{2728}" },
];

pub const CUSTOM_CATEGORY_PALETTE: [&str; 6] = [
    "#c2855a", // warm amber
    "#6ba39b", // teal
    "#a36b9b", // mauve
    "#8fa36b", // olive green
    "#6b8fa3", // steel blue
    "#a3836b", // clay
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCategory {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub hours: f64,
}

pub fn is_builtin(key: &str) -> bool {
    BUILTIN_CATEGORIES.iter().any(|c| c.key == key)
}

fn builtin(key: &str) -> Option<&'static BuiltinCategory> {
    BUILTIN_CATEGORIES.iter().find(|c| c.key == key)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    custom: Vec<CustomCategory>,
}

impl CategorySet {
    pub fn new(custom: Vec<CustomCategory>) -> Self {
        Self { custom }
    }

    pub fn custom(&self) -> &[CustomCategory] {
        &self.custom
    }

    fn find(&self, key: &str) -> Option<&CustomCategory> {
        self.custom.iter().find(|c| c.id == key)
    }

    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        match self.find(key) {
            Some(custom) => &custom.label,
            None => builtin(key).map_or(key, |c| c.label),
        }
    }

    pub fn color<'a>(&'a self, key: &str) -> &'a str {
        match self.find(key) {
            Some(custom) => &custom.color,
            None => builtin(key).map_or(FALLBACK_COLOR, |c| c.color),
        }
    }

    pub fn emoji<'a>(&'a self, key: &str) -> &'a str {
        match self.find(key) {
            Some(custom) => &custom.emoji,
            None => builtin(key).map_or("", |c| c.emoji),
        }
    }

    /// First palette colour no custom category uses yet; cycles once all are taken.
    pub fn next_palette_color(&self) -> &'static str {
        CUSTOM_CATEGORY_PALETTE
            .iter()
            .copied()
            .find(|color| !self.custom.iter().any(|c| c.color == *color))
            .unwrap_or(CUSTOM_CATEGORY_PALETTE[self.custom.len() % CUSTOM_CATEGORY_PALETTE.len()])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Translucent background tint for a phase band.
    pub fn phase_tint(self, phase: LifePhase) -> &'static str {
        match (self, phase) {
            (Theme::Dark, LifePhase::Childhood) => "rgba(139, 115, 85, 0.06)",
            (Theme::Light, LifePhase::Childhood) => "rgba(139, 115, 85, 0.08)",
            (Theme::Dark, LifePhase::Education) => "rgba(107, 143, 113, 0.06)",
            (Theme::Light, LifePhase::Education) => "rgba(107, 143, 113, 0.08)",
            (Theme::Dark, LifePhase::Career) => "rgba(123, 109, 142, 0.06)",
            (Theme::Light, LifePhase::Career) => "rgba(123, 109, 142, 0.08)",
            (Theme::Dark, LifePhase::Retirement) => "rgba(143, 107, 107, 0.06)",
            (Theme::Light, LifePhase::Retirement) => "rgba(143, 107, 107, 0.08)",
        }
    }
}
