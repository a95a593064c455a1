//! Experience extraction — year counts and the ordered level decision.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Seniority classification. Ordering matters: higher signals never
/// downgrade the level, so the variants derive `Ord` lowest-to-highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ExperienceLevel {
    #[default]
    #[serde(alias = "entry", alias = "entry-level")]
    Entry,
    #[serde(alias = "mid", alias = "mid-level")]
    Mid,
    #[serde(alias = "senior")]
    Senior,
    #[serde(alias = "expert")]
    Expert,
}

impl ExperienceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Expert => "Expert",
        }
    }

    /// Mid and above count as qualified for the fairness audit.
    pub const fn is_qualified(self) -> bool {
        !matches!(self, ExperienceLevel::Entry)
    }
}

const EXPERT_TITLES: &[&str] = &["director", "vp", "chief"];
const SENIOR_TITLES: &[&str] = &["senior", "lead", "manager"];

/// Tried in order; the first matching pattern wins.
static YEAR_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of)?\s*experience").expect("year pattern compiles"),
        Regex::new(r"(?i)experience[:\s]*(\d+)\s*years?").expect("year pattern compiles"),
        Regex::new(r"(?i)(\d+)\s*years?\s*(?:in|of|working)").expect("year pattern compiles"),
    ]
});

/// Extracts a year count from phrases like "5+ years experience". Defaults to
/// zero when no pattern matches.
pub fn extract_years(text: &str) -> u32 {
    for pattern in YEAR_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(years) = captures.get(1).and_then(|m| m.as_str().parse().ok()) {
                return years;
            }
        }
    }
    0
}

/// Assigns a level by a fixed decision order: title keywords and year
/// thresholds first, then the mid-level heuristics, else Entry.
pub fn classify_level(
    text_lower: &str,
    years: u32,
    skill_count: usize,
    strength_count: usize,
) -> ExperienceLevel {
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| text_lower.contains(k));

    if has_any(EXPERT_TITLES) || years >= 10 {
        ExperienceLevel::Expert
    } else if has_any(SENIOR_TITLES) || years >= 5 {
        ExperienceLevel::Senior
    } else if years >= 2
        || text_lower.contains("mid-level")
        || (skill_count >= 8 && strength_count >= 2)
    {
        ExperienceLevel::Mid
    } else {
        ExperienceLevel::Entry
    }
}
