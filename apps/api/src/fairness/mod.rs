//! Fairness Verifier — a deterministic audit over a finished evaluation.
//!
//! Five weighted checks examine the evaluation and the raw document text and
//! produce a fairness score plus a verification status. The audit is pure:
//! same evaluation and text, same result, every time.

mod status;

pub use status::{map_to_public_status, public_status_for_label, PublicStatus, PublicVerdict};

use serde::{Deserialize, Serialize};

use crate::evaluation::{Evaluation, Shortlist};

// Check weights. They sum to 1.0 and the score normalizes by that sum, so a
// future weight edit changes emphasis without breaking the 0-100 range.
const WEIGHT_EVALUATION_SCORE: f64 = 0.30;
const WEIGHT_SKILLS: f64 = 0.25;
const WEIGHT_EXPERIENCE: f64 = 0.20;
const WEIGHT_SHORTLIST: f64 = 0.15;
const WEIGHT_CONTENT: f64 = 0.10;

const MIN_PASSING_EVALUATION_SCORE: u8 = 65;
const MIN_SKILLS_IDENTIFIED: usize = 3;
const MIN_CONTENT_SCORE: u32 = 50;

const VERIFIED_SCORE: u8 = 70;
const VERIFIED_FAIRNESS: f64 = 70.0;
const REVIEW_SCORE: u8 = 50;
const REVIEW_FAIRNESS: f64 = 45.0;

/// Outcome of the fairness audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    UnderReview,
    Biased,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::UnderReview => "under_review",
            VerificationStatus::Biased => "biased",
        }
    }
}

/// One weighted check and whether it passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessCheck {
    pub passed: bool,
    pub weight: f64,
    pub description: String,
}

impl FairnessCheck {
    fn new(passed: bool, weight: f64, description: String) -> Self {
        Self {
            passed,
            weight,
            description,
        }
    }
}

/// All five checks, named so API consumers can address them individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessChecks {
    pub evaluation_score: FairnessCheck,
    pub skills_identified: FairnessCheck,
    pub experience_level: FairnessCheck,
    pub shortlist_decision: FairnessCheck,
    pub content_quality: FairnessCheck,
}

impl FairnessChecks {
    pub fn iter(&self) -> impl Iterator<Item = &FairnessCheck> {
        [
            &self.evaluation_score,
            &self.skills_identified,
            &self.experience_level,
            &self.shortlist_decision,
            &self.content_quality,
        ]
        .into_iter()
    }
}

/// The audit result. Carries everything a consumer needs to explain the
/// verdict: the status, the aggregate score, and each check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessResult {
    pub status: VerificationStatus,
    pub fairness_score: f64,
    pub checks: FairnessChecks,
}

/// Scores the document text itself: 15 points per content section keyword
/// pair, 10 per length tier, capped at 100.
pub fn content_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut score = 0u32;

    if lower.contains("experience") || lower.contains("work history") {
        score += 15;
    }
    if lower.contains("education") || lower.contains("degree") {
        score += 15;
    }
    if lower.contains("skills") || lower.contains("technologies") {
        score += 15;
    }
    if lower.contains("project") || lower.contains("achievement") {
        score += 15;
    }

    let chars = text.chars().count();
    if chars > 500 {
        score += 10;
    }
    if chars > 1000 {
        score += 10;
    }
    if chars > 2000 {
        score += 10;
    }

    score.min(100)
}

/// Runs the five-check fairness audit over an evaluation and the raw text.
pub fn verify_fairness(evaluation: &Evaluation, text: &str) -> FairnessResult {
    let content = content_score(text);

    let checks = FairnessChecks {
        evaluation_score: FairnessCheck::new(
            evaluation.score >= MIN_PASSING_EVALUATION_SCORE,
            WEIGHT_EVALUATION_SCORE,
            format!("Evaluation Score Check ({}/100)", evaluation.score),
        ),
        skills_identified: FairnessCheck::new(
            evaluation.skills.len() >= MIN_SKILLS_IDENTIFIED,
            WEIGHT_SKILLS,
            format!("Skills Coverage ({} skills found)", evaluation.skills.len()),
        ),
        experience_level: FairnessCheck::new(
            evaluation.experience_level.is_qualified(),
            WEIGHT_EXPERIENCE,
            format!("Experience Level ({})", evaluation.experience_level.label()),
        ),
        shortlist_decision: FairnessCheck::new(
            evaluation.shortlist_recommendation == Shortlist::Yes,
            WEIGHT_SHORTLIST,
            format!(
                "Shortlist Recommendation ({})",
                evaluation.shortlist_recommendation.label()
            ),
        ),
        content_quality: FairnessCheck::new(
            content >= MIN_CONTENT_SCORE,
            WEIGHT_CONTENT,
            format!("Content Quality Score ({content}/100)"),
        ),
    };

    let mut total_score = 0.0;
    let mut total_weight = 0.0;
    for check in checks.iter() {
        if check.passed {
            total_score += check.weight * 100.0;
        }
        total_weight += check.weight;
    }
    let fairness_score = round2(total_score / total_weight);

    FairnessResult {
        status: decide_status(evaluation.score, fairness_score),
        fairness_score,
        checks,
    }
}

/// Maps the pair (evaluation score, fairness score) to a status. The tiers
/// are checked top down, so each document lands in exactly one.
pub fn decide_status(score: u8, fairness_score: f64) -> VerificationStatus {
    if score >= VERIFIED_SCORE && fairness_score >= VERIFIED_FAIRNESS {
        VerificationStatus::Verified
    } else if score >= REVIEW_SCORE && fairness_score >= REVIEW_FAIRNESS {
        VerificationStatus::UnderReview
    } else {
        VerificationStatus::Biased
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
