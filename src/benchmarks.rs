//! Real-world averages and the one-line remark comparing a person's answer to them.
//!
//! Sources: WHO, CDC, BLS American Time Use Survey, Pew Research, eMarketer
//! (2023-2024 figures).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    LifeExpectancy,
    RetirementAge,
    Sleep,
    Work,
    Family,
    Partner,
    Hobbies,
    Health,
    Chores,
    Phone,
    ParentVisits,
}

impl Metric {
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "lifeExpectancy" => Metric::LifeExpectancy,
            "retirementAge" => Metric::RetirementAge,
            "sleep" => Metric::Sleep,
            "work" => Metric::Work,
            "family" => Metric::Family,
            "partner" => Metric::Partner,
            "hobbies" => Metric::Hobbies,
            "health" => Metric::Health,
            "chores" => Metric::Chores,
            "phone" => Metric::Phone,
            "parentVisits" => Metric::ParentVisits,
            _ => return None,
        })
    }

    /// Typical value, in the metric's own unit (years, hours/day, visits/year).
    pub fn average(self) -> f64 {
        match self {
            Metric::LifeExpectancy => 73.3,
            Metric::RetirementAge => 64.0,
            Metric::Sleep => 6.8,
            Metric::Work => 8.5,
            Metric::Family => 0.55,
            Metric::Partner => 2.5,
            Metric::Hobbies => 1.2,
            Metric::Health => 0.3,
            Metric::Chores => 2.1,
            Metric::Phone => 4.5,
            Metric::ParentVisits => 2.0,
        }
    }

    pub fn source_note(self) -> &'static str {
        match self {
            Metric::LifeExpectancy => "Global average life expectancy is 73 years (WHO 2024).",
            Metric::RetirementAge => "Average US retirement age is 64 (Census Bureau).",
            Metric::Sleep => "Americans average 6.8 hrs/night — CDC recommends 7-9.",
            Metric::Work => "Full-time US workers average 8.5 hrs/day (BLS).",
            Metric::Family => "Average American spends ~33 min/day with family (ATUS).",
            Metric::Partner => "Couples average about 2-3 hrs/day of quality time (ATUS).",
            Metric::Hobbies => "Average adult spends ~1.2 hrs/day on hobbies (ATUS).",
            Metric::Health => {
                "Only 28% of Americans meet exercise guidelines (CDC). Average is ~20 min/day."
            }
            Metric::Chores => "Americans average ~2.1 hrs/day on household tasks (ATUS).",
            Metric::Phone => "Average American spends 4.5 hrs/day on their phone (eMarketer 2024).",
            Metric::ParentVisits => {
                "The average adult sees their parents about 2× per year after moving out (Pew)."
            }
        }
    }
}

/// Friendly remark on how `value` compares to the average, if there is one to make.
pub fn comparison(metric: Metric, value: f64) -> Option<&'static str> {
    let remark = match metric {
        Metric::LifeExpectancy => match value {
            v if v >= 85.0 => "Optimistic! Only ~15% of people reach 85+.",
            v if v >= 80.0 => "Above the global average — healthy ambition.",
            v if v >= 73.0 => "Right around the global average.",
            _ => "Below average — but every week counts.",
        },
        Metric::RetirementAge => match value {
            v if v <= 50.0 => "Early retirement! The FIRE movement would be proud.",
            v if v <= 55.0 => "Well ahead of average — nice planning.",
            v if v >= 70.0 => "Working longer than 90% of people — by choice?",
            v if v >= 65.0 => "Right around the US average of 64.",
            _ => return None,
        },
        Metric::Sleep => match value {
            v if v >= 9.0 => "You're in the top 10% of sleepers. Rest well.",
            v if v >= 8.0 => "Meeting the CDC recommendation — good for you.",
            v if v >= 7.0 => "Slightly above the US average of 6.8 hrs.",
            v if v < 6.0 => "Less than 6 hrs — only 30% of adults do this.",
            _ => "Close to the national average of 6.8 hrs.",
        },
        Metric::Work => match value {
            v if v == 0.0 => "Not working? Lucky you!",
            v if v >= 12.0 => "That's intense — top 5% of working hours.",
            v if v >= 10.0 => "Above average — you put in serious hours.",
            v if v <= 4.0 => "Part-time or freelance? Nice flexibility.",
            _ => "Right around the full-time average of 8.5 hrs.",
        },
        Metric::Family => match value {
            v if v >= 3.0 => "That's 5× the national average — wonderful!",
            v if v >= 2.0 => "More than 3× average family time.",
            v if v >= 1.0 => "Nearly double the US average of 33 min/day.",
            v if v < 0.5 => "Below average — the typical American spends ~33 min.",
            _ => return None,
        },
        Metric::Partner => match value {
            v if v >= 4.0 => "Lots of quality time together — relationship goals.",
            v if v >= 2.0 => "Right around what most couples manage.",
            v if v < 1.0 => "Less than an hour — busy schedules are real.",
            _ => return None,
        },
        Metric::Hobbies => match value {
            v if v >= 4.0 => "That's 3× the average — passion-driven life!",
            v if v >= 2.0 => "More than most — good for the soul.",
            v if v < 1.0 => "Below average of 1.2 hrs — wish you had more?",
            _ => return None,
        },
        Metric::Health => match value {
            v if v >= 2.0 => "Elite! You exercise 4× more than average.",
            v if v >= 1.0 => "Double the WHO recommendation — impressive.",
            v if v >= 0.5 => "Meeting WHO guidelines of 30 min/day.",
            v if v < 0.3 => "Below the 20 min/day average — small steps help.",
            _ => return None,
        },
        Metric::Chores => match value {
            v if v >= 4.0 => "Double the national average — very tidy.",
            v if v >= 2.0 => "Right around the US average of 2.1 hrs.",
            v if v < 1.0 => "Below average — outsourcing or minimalist?",
            _ => return None,
        },
        Metric::Phone => match value {
            v if v >= 8.0 => "That's nearly all your waking free time on a screen.",
            v if v >= 6.0 => "33% above the 4.5 hr average — that adds up.",
            v if v >= 4.0 => "Right around the national average of 4.5 hrs.",
            v if v <= 1.0 => "Digital minimalist! Less than 25% of the average.",
            v if v <= 2.0 => "Way below average — impressive digital discipline!",
            _ => "Slightly below the 4.5 hr average — not bad.",
        },
        Metric::ParentVisits => match value {
            v if v >= 20.0 => "That's 10× the average! Your parents are lucky.",
            v if v >= 10.0 => "5× the national average — they must love that.",
            v if v >= 4.0 => "Double what most adults manage after moving out.",
            v if v <= 1.0 => "The average is ~2×/year — every visit matters.",
            _ => "Close to the average of about 2× per year.",
        },
    };
    Some(remark)
}
