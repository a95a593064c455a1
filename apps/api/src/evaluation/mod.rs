//! Document evaluation — the pluggable scoring backend and the pipeline that
//! turns raw text into a stored verdict.
//!
//! Two backends implement [`DocumentEvaluator`]: the remote LLM evaluator and
//! the purely heuristic one. The remote backend never fails the request; any
//! transport or parse error degrades to the heuristic evaluation.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::{self, ExperienceLevel, ExtractedFeatures, ScoringProfile};
use crate::fairness::{self, FairnessResult, PublicStatus};
use crate::llm_client::{LlmClient, LlmError};

/// Only this much of the document is sent to the remote evaluator.
const MAX_PROMPT_CHARS: usize = 6000;

/// Shortlist recommendation for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortlist {
    #[serde(alias = "yes")]
    Yes,
    #[serde(alias = "no")]
    No,
    #[serde(alias = "maybe")]
    Maybe,
}

impl Shortlist {
    /// The score-derived recommendation used when no evaluator opinion exists.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Shortlist::Yes
        } else if score >= 50 {
            Shortlist::Maybe
        } else {
            Shortlist::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Shortlist::Yes => "Yes",
            Shortlist::No => "No",
            Shortlist::Maybe => "Maybe",
        }
    }
}

/// A complete evaluation of one document, whichever backend produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub score: u8,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub experience_years: u32,
    pub shortlist_recommendation: Shortlist,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub reasoning: String,
}

/// The JSON shape the LLM is prompted to return. Every field is optional:
/// models omit or rename fields, and each gap is filled from the extracted
/// features during the merge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteEvaluation {
    pub score: Option<f64>,
    pub skills: Option<Vec<String>>,
    pub experience_level: Option<ExperienceLevel>,
    pub experience_years: Option<u32>,
    pub shortlist_recommendation: Option<Shortlist>,
    pub strengths: Option<Vec<String>>,
    pub improvements: Option<Vec<String>>,
    pub reasoning: Option<String>,
}

impl Default for RemoteEvaluation {
    fn default() -> Self {
        RemoteEvaluation {
            score: None,
            skills: None,
            experience_level: None,
            experience_years: None,
            shortlist_recommendation: None,
            strengths: None,
            improvements: None,
            reasoning: None,
        }
    }
}

/// Builds the evaluation used whenever the remote backend is unavailable or
/// returns unusable output. Everything comes from the deterministic features.
pub fn fallback_evaluation(features: &ExtractedFeatures) -> Evaluation {
    Evaluation {
        score: features.heuristic_score,
        skills: features.skills.clone(),
        experience_level: features.experience_level,
        experience_years: features.experience_years,
        shortlist_recommendation: Shortlist::from_score(features.heuristic_score),
        strengths: features.strengths.clone(),
        improvements: features.improvements.clone(),
        reasoning: features.summary.clone(),
    }
}

/// Merges a parsed remote evaluation with the extracted features.
///
/// Thin remote answers are distrusted: fewer than 3 skills or fewer than 2
/// strengths are replaced wholesale by the extracted ones, and any absent
/// field falls back to its heuristic counterpart.
pub fn merge_remote(remote: RemoteEvaluation, features: &ExtractedFeatures) -> Evaluation {
    let score = remote
        .score
        .map(|s| s.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(features.heuristic_score);

    let skills = match remote.skills {
        Some(skills) if skills.len() >= 3 => skills,
        _ => features.skills.clone(),
    };
    let strengths = match remote.strengths {
        Some(strengths) if strengths.len() >= 2 => strengths,
        _ => features.strengths.clone(),
    };

    Evaluation {
        score,
        skills,
        experience_level: remote.experience_level.unwrap_or(features.experience_level),
        experience_years: remote.experience_years.unwrap_or(features.experience_years),
        shortlist_recommendation: remote
            .shortlist_recommendation
            .unwrap_or_else(|| Shortlist::from_score(score)),
        strengths,
        improvements: remote.improvements.unwrap_or_else(|| features.improvements.clone()),
        reasoning: remote.reasoning.unwrap_or_else(|| features.summary.clone()),
    }
}

/// Resolves the outcome of a remote call: a parsed payload is merged with the
/// extracted features, any failure yields the heuristic fallback. This is the
/// seam that keeps remote errors from ever reaching the caller.
fn resolve_remote(
    result: Result<RemoteEvaluation, LlmError>,
    features: &ExtractedFeatures,
) -> Evaluation {
    match result {
        Ok(remote) => {
            debug!("remote evaluation parsed");
            merge_remote(remote, features)
        }
        Err(e) => {
            warn!("remote evaluation failed, using heuristic fallback: {e}");
            fallback_evaluation(features)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluator backends
// ────────────────────────────────────────────────────────────────────────────

/// A scoring backend. Implementations must be infallible: a backend that
/// cannot produce its own answer returns the heuristic fallback instead.
#[async_trait]
pub trait DocumentEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        text: &str,
        file_name: &str,
        features: &ExtractedFeatures,
    ) -> Evaluation;

    /// Stable backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Remote evaluator backed by the LLM client. Falls back to the heuristic
/// evaluation on any transport, API, or parse failure.
pub struct RemoteEvaluator {
    llm: LlmClient,
}

impl RemoteEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DocumentEvaluator for RemoteEvaluator {
    async fn evaluate(
        &self,
        text: &str,
        file_name: &str,
        features: &ExtractedFeatures,
    ) -> Evaluation {
        let excerpt: String = text.chars().take(MAX_PROMPT_CHARS).collect();
        let prompt = prompts::evaluation_prompt(file_name, &excerpt);

        let result = self
            .llm
            .call_json::<RemoteEvaluation>(&prompt, prompts::EVALUATION_SYSTEM)
            .await;
        resolve_remote(result, features)
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

/// Purely deterministic evaluator. Used when no API key is configured and in
/// tests.
pub struct HeuristicEvaluator;

#[async_trait]
impl DocumentEvaluator for HeuristicEvaluator {
    async fn evaluate(
        &self,
        _text: &str,
        _file_name: &str,
        features: &ExtractedFeatures,
    ) -> Evaluation {
        fallback_evaluation(features)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// The full verdict for one document: evaluation, fairness audit, and the
/// public-facing status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVerdict {
    pub evaluation: Evaluation,
    pub fairness_result: FairnessResult,
    pub public_status: PublicStatus,
}

/// Runs the evaluation pipeline over raw document text:
/// extraction, evaluation, fairness verification, status mapping.
pub async fn process_document(
    text: &str,
    file_name: &str,
    evaluator: &dyn DocumentEvaluator,
    profile: &ScoringProfile,
) -> Result<DocumentVerdict, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "no document content provided".to_string(),
        ));
    }

    let features = extraction::extract_features(text, profile);
    debug!(
        backend = evaluator.backend(),
        heuristic_score = features.heuristic_score,
        "features extracted"
    );

    let evaluation = evaluator.evaluate(text, file_name, &features).await;
    let fairness_result = fairness::verify_fairness(&evaluation, text);
    let public_status = fairness::map_to_public_status(fairness_result.status);

    Ok(DocumentVerdict {
        evaluation,
        fairness_result,
        public_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ProfileName;

    fn sample_features() -> ExtractedFeatures {
        extraction::extract_features(
            "Python, React, 5 years experience, team lead, won 1st place hackathon",
            &ScoringProfile::lenient(),
        )
    }

    #[test]
    fn test_shortlist_thresholds() {
        assert_eq!(Shortlist::from_score(70), Shortlist::Yes);
        assert_eq!(Shortlist::from_score(69), Shortlist::Maybe);
        assert_eq!(Shortlist::from_score(50), Shortlist::Maybe);
        assert_eq!(Shortlist::from_score(49), Shortlist::No);
        assert_eq!(Shortlist::from_score(0), Shortlist::No);
    }

    #[test]
    fn test_fallback_mirrors_extracted_features() {
        let features = sample_features();
        let evaluation = fallback_evaluation(&features);

        assert_eq!(evaluation.score, features.heuristic_score);
        assert_eq!(evaluation.skills, features.skills);
        assert_eq!(evaluation.experience_level, features.experience_level);
        assert_eq!(
            evaluation.shortlist_recommendation,
            Shortlist::from_score(features.heuristic_score)
        );
        assert_eq!(evaluation.reasoning, features.summary);
    }

    #[test]
    fn test_merge_distrusts_thin_remote_lists() {
        let features = sample_features();
        let remote = RemoteEvaluation {
            score: Some(88.0),
            skills: Some(vec!["Python".to_string(), "React".to_string()]),
            strengths: Some(vec!["Hackathon win".to_string()]),
            ..Default::default()
        };

        let merged = merge_remote(remote, &features);
        assert_eq!(merged.score, 88);
        // 2 skills and 1 strength are below the trust thresholds.
        assert_eq!(merged.skills, features.skills);
        assert_eq!(merged.strengths, features.strengths);
    }

    #[test]
    fn test_merge_keeps_substantial_remote_lists() {
        let features = sample_features();
        let skills: Vec<String> = ["Python", "React", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let strengths: Vec<String> = ["Won a hackathon", "Led a platform rebuild"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let remote = RemoteEvaluation {
            score: Some(73.4),
            skills: Some(skills.clone()),
            strengths: Some(strengths.clone()),
            experience_level: Some(ExperienceLevel::Senior),
            shortlist_recommendation: Some(Shortlist::Yes),
            reasoning: Some("Strong profile".to_string()),
            ..Default::default()
        };

        let merged = merge_remote(remote, &features);
        assert_eq!(merged.score, 73);
        assert_eq!(merged.skills, skills);
        assert_eq!(merged.strengths, strengths);
        assert_eq!(merged.shortlist_recommendation, Shortlist::Yes);
        assert_eq!(merged.reasoning, "Strong profile");
    }

    #[test]
    fn test_merge_clamps_out_of_range_scores() {
        let features = sample_features();
        let high = RemoteEvaluation {
            score: Some(250.0),
            ..Default::default()
        };
        let low = RemoteEvaluation {
            score: Some(-4.0),
            ..Default::default()
        };
        assert_eq!(merge_remote(high, &features).score, 100);
        assert_eq!(merge_remote(low, &features).score, 0);
    }

    #[test]
    fn test_resolved_remote_success_is_merged() {
        let features = sample_features();
        let remote = RemoteEvaluation {
            score: Some(90.0),
            ..Default::default()
        };
        let resolved = resolve_remote(Ok(remote), &features);
        assert_eq!(resolved.score, 90);
        assert_eq!(resolved.skills, features.skills);
    }

    #[test]
    fn test_any_remote_failure_yields_the_heuristic_fallback() {
        let features = sample_features();
        let parse_error = serde_json::from_str::<RemoteEvaluation>("not json").unwrap_err();

        for error in [
            LlmError::EmptyContent,
            LlmError::NoJsonObject,
            LlmError::RateLimited { retries: 2 },
            LlmError::Parse(parse_error),
            LlmError::Api {
                status: 500,
                message: "upstream down".to_string(),
            },
        ] {
            let resolved = resolve_remote(Err(error), &features);
            assert_eq!(resolved, fallback_evaluation(&features));
        }
    }

    #[test]
    fn test_remote_payload_parses_with_partial_fields() {
        let json = r#"{
            "score": 81,
            "experienceLevel": "senior",
            "shortlistRecommendation": "yes"
        }"#;
        let remote: RemoteEvaluation = serde_json::from_str(json).unwrap();
        assert_eq!(remote.score, Some(81.0));
        assert_eq!(remote.experience_level, Some(ExperienceLevel::Senior));
        assert_eq!(remote.shortlist_recommendation, Some(Shortlist::Yes));
        assert!(remote.skills.is_none());
    }

    #[tokio::test]
    async fn test_heuristic_backend_is_deterministic() {
        let text = "Python, React, 5 years experience, team lead, won 1st place hackathon";
        let profile = ScoringProfile::named(ProfileName::Lenient);
        let features = extraction::extract_features(text, &profile);

        let evaluator = HeuristicEvaluator;
        let first = evaluator.evaluate(text, "sample.txt", &features).await;
        let second = evaluator.evaluate(text, "sample.txt", &features).await;
        assert_eq!(first, second);
        assert_eq!(first, fallback_evaluation(&features));
    }

    #[tokio::test]
    async fn test_pipeline_rejects_blank_text() {
        let profile = ScoringProfile::lenient();
        let result = process_document("   \n\t ", "blank.txt", &HeuristicEvaluator, &profile).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_pipeline_produces_consistent_verdict() {
        let text = "Python, React, 5 years experience, team lead, won 1st place hackathon";
        let profile = ScoringProfile::lenient();
        let verdict = process_document(text, "sample.txt", &HeuristicEvaluator, &profile)
            .await
            .unwrap();

        assert_eq!(verdict.evaluation.score, 52);
        assert_eq!(
            verdict.public_status,
            fairness::map_to_public_status(verdict.fairness_result.status)
        );
    }
}
