use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::DocumentEvaluator;
use crate::extraction::ScoringProfile;
use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable evaluation backend. RemoteEvaluator when an API key is
    /// configured, HeuristicEvaluator otherwise.
    pub evaluator: Arc<dyn DocumentEvaluator>,
    pub store: Arc<dyn DocumentStore>,
    /// Heuristic scoring constants, selected via SCORING_PROFILE.
    pub profile: ScoringProfile,
    /// Full config kept for handlers that need settings beyond the
    /// evaluator/profile split. Nothing reads it yet.
    #[allow(dead_code)]
    pub config: Config,
}
