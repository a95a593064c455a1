//! Feature Extractor — deterministic analysis of raw document text.
//!
//! Pure and side-effect free: identical input always yields identical
//! output. No clock, no randomness, no I/O. The extracted features feed the
//! heuristic scorer and serve as the fallback when the remote evaluator is
//! unavailable.

pub mod experience;
pub mod scoring;
mod skills;
mod strengths;

pub use experience::ExperienceLevel;
pub use scoring::{ProfileName, ScoringProfile};
pub use strengths::MAX_STRENGTHS;

use serde::{Deserialize, Serialize};

/// Placeholder skills when nothing in the text matches the skill table.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem Solving"];
/// Placeholder strength for documents with no detectable achievements.
pub const FALLBACK_STRENGTH: &str = "Document submitted for evaluation";
/// Suggested when the improvement checklist comes up empty.
pub const DEFAULT_IMPROVEMENT: &str = "Consider adding certifications";

/// Structured features derived purely from document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFeatures {
    pub skills: Vec<String>,
    pub strengths: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub experience_years: u32,
    pub summary: String,
    pub heuristic_score: u8,
    pub improvements: Vec<String>,
}

/// Runs the full extraction pass over the document text.
///
/// Order matters: the experience level looks at raw skill and strength
/// counts, and the score uses the uncapped strength count, before the
/// placeholder defaults are substituted.
pub fn extract_features(text: &str, profile: &ScoringProfile) -> ExtractedFeatures {
    let text_lower = text.to_lowercase();
    let char_count = text.chars().count();

    let skills = skills::detect_skills(text);
    let mut strengths = strengths::detect_strengths(text, &text_lower, skills.len());

    let experience_years = experience::extract_years(text);
    let experience_level =
        experience::classify_level(&text_lower, experience_years, skills.len(), strengths.len());

    let heuristic_score = profile.score(
        char_count,
        &text_lower,
        skills.len(),
        strengths.len(),
        experience_level,
    );

    let mut improvements = Vec::new();
    if skills.len() < 5 {
        improvements.push("Add more technical skills".to_string());
    }
    if strengths.len() < 2 {
        improvements.push("Highlight more achievements and projects".to_string());
    }
    if experience_years == 0 {
        improvements.push("Specify years of experience".to_string());
    }
    if !text_lower.contains("education") && !text_lower.contains("degree") {
        improvements.push("Include education details".to_string());
    }
    if char_count < 1000 {
        improvements.push("Add more details to your document".to_string());
    }
    if improvements.is_empty() {
        improvements.push(DEFAULT_IMPROVEMENT.to_string());
    }

    let summary = format!(
        "Document contains {} relevant skills. {}",
        skills.len(),
        strengths
            .first()
            .map(String::as_str)
            .unwrap_or("Document reviewed for evaluation.")
    );

    strengths.truncate(MAX_STRENGTHS);

    let skills = if skills.is_empty() {
        FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        skills
    };
    let strengths = if strengths.is_empty() {
        vec![FALLBACK_STRENGTH.to_string()]
    } else {
        strengths
    };

    ExtractedFeatures {
        skills,
        strengths,
        experience_level,
        experience_years,
        summary,
        heuristic_score,
        improvements,
    }
}
