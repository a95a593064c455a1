//! Heuristic scoring profiles.
//!
//! Two constant sets exist in production: the `lenient` set used by the
//! serverless deployment and the `strict` set used by the long-running
//! server. Both are kept as named profiles and selected via configuration;
//! the constants are pinned by golden tests and must not drift.

use serde::{Deserialize, Serialize};

use super::experience::ExperienceLevel;

/// Which scoring profile a deployment runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    #[default]
    Lenient,
    Strict,
}

/// Character-count tier granting a flat bonus once the document exceeds it.
type LengthTier = (usize, f64);

/// A complete heuristic scoring rubric. All contributions are summed, the
/// total rounded, then clamped into `[floor, ceiling]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    pub name: ProfileName,
    base: f64,
    skill_points: f64,
    skill_cap: f64,
    strength_points: f64,
    strength_cap: f64,
    expert_bonus: f64,
    senior_bonus: f64,
    mid_bonus: f64,
    entry_bonus: f64,
    length_tiers: &'static [LengthTier],
    bachelor_bonus: f64,
    master_bonus: f64,
    certification_bonus: f64,
    floor: u8,
    ceiling: u8,
}

const BACHELOR_KEYWORDS: &[&str] = &["bachelor", "b.tech", "bsc"];
const MASTER_KEYWORDS: &[&str] = &["master", "m.tech", "phd"];
const CERTIFICATION_KEYWORDS: &[&str] = &["certified", "certification"];

impl ScoringProfile {
    pub fn named(name: ProfileName) -> Self {
        match name {
            ProfileName::Lenient => Self::lenient(),
            ProfileName::Strict => Self::strict(),
        }
    }

    pub fn lenient() -> Self {
        ScoringProfile {
            name: ProfileName::Lenient,
            base: 30.0,
            skill_points: 1.0,
            skill_cap: 20.0,
            strength_points: 4.0,
            strength_cap: 20.0,
            expert_bonus: 15.0,
            senior_bonus: 12.0,
            mid_bonus: 8.0,
            entry_bonus: 3.0,
            length_tiers: &[(1500, 3.0), (2500, 4.0), (4000, 3.0)],
            bachelor_bonus: 3.0,
            master_bonus: 5.0,
            certification_bonus: 5.0,
            floor: 25,
            ceiling: 95,
        }
    }

    pub fn strict() -> Self {
        ScoringProfile {
            name: ProfileName::Strict,
            base: 40.0,
            skill_points: 2.5,
            skill_cap: 25.0,
            strength_points: 5.0,
            strength_cap: 20.0,
            expert_bonus: 15.0,
            senior_bonus: 12.0,
            mid_bonus: 8.0,
            entry_bonus: 4.0,
            length_tiers: &[(2000, 5.0), (3000, 5.0)],
            bachelor_bonus: 0.0,
            master_bonus: 0.0,
            certification_bonus: 0.0,
            floor: 30,
            ceiling: 98,
        }
    }

    pub const fn floor(&self) -> u8 {
        self.floor
    }

    pub const fn ceiling(&self) -> u8 {
        self.ceiling
    }

    /// Computes the heuristic score from the extracted signals.
    pub fn score(
        &self,
        char_count: usize,
        text_lower: &str,
        skill_count: usize,
        strength_count: usize,
        level: ExperienceLevel,
    ) -> u8 {
        let mut score = self.base;

        score += (skill_count as f64 * self.skill_points).min(self.skill_cap);
        score += (strength_count as f64 * self.strength_points).min(self.strength_cap);

        score += match level {
            ExperienceLevel::Expert => self.expert_bonus,
            ExperienceLevel::Senior => self.senior_bonus,
            ExperienceLevel::Mid => self.mid_bonus,
            ExperienceLevel::Entry => self.entry_bonus,
        };

        for (threshold, bonus) in self.length_tiers {
            if char_count > *threshold {
                score += bonus;
            }
        }

        let contains_any =
            |keywords: &[&str]| keywords.iter().any(|k| text_lower.contains(k));
        if contains_any(BACHELOR_KEYWORDS) {
            score += self.bachelor_bonus;
        }
        if contains_any(MASTER_KEYWORDS) {
            score += self.master_bonus;
        }
        if contains_any(CERTIFICATION_KEYWORDS) {
            score += self.certification_bonus;
        }

        (score.round() as i64).clamp(self.floor as i64, self.ceiling as i64) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_empty_document_scores_near_floor() {
        let profile = ScoringProfile::lenient();
        // base 30 + entry bonus 3, nothing else.
        assert_eq!(profile.score(0, "", 0, 0, ExperienceLevel::Entry), 33);
    }

    #[test]
    fn test_strict_empty_document_scores_near_floor() {
        let profile = ScoringProfile::strict();
        // base 40 + entry bonus 4.
        assert_eq!(profile.score(0, "", 0, 0, ExperienceLevel::Entry), 44);
    }

    #[test]
    fn test_lenient_golden_constants() {
        let profile = ScoringProfile::lenient();
        // 30 base + min(20, 25 skills) + min(20, 3*4) + senior 12 + 1500-tier 3.
        let score = profile.score(1600, "", 25, 3, ExperienceLevel::Senior);
        assert_eq!(score, 30 + 20 + 12 + 12 + 3);
    }

    #[test]
    fn test_strict_golden_constants() {
        let profile = ScoringProfile::strict();
        // 40 base + min(25, 4*2.5) + min(20, 5*5) + expert 15 + both tiers.
        let score = profile.score(3500, "", 4, 5, ExperienceLevel::Expert);
        assert_eq!(score, 40 + 10 + 20 + 15 + 10);
    }

    #[test]
    fn test_education_bonuses_apply_only_in_lenient() {
        let text = "bachelor degree, master degree, certified kubernetes admin";
        let lenient = ScoringProfile::lenient().score(0, text, 0, 0, ExperienceLevel::Entry);
        let strict = ScoringProfile::strict().score(0, text, 0, 0, ExperienceLevel::Entry);
        assert_eq!(lenient, 33 + 3 + 5 + 5);
        assert_eq!(strict, 44);
    }

    #[test]
    fn test_score_is_clamped_to_ceiling() {
        let profile = ScoringProfile::lenient();
        let text = "bachelor master certified";
        let score = profile.score(5000, text, 50, 10, ExperienceLevel::Expert);
        assert_eq!(score, profile.ceiling());
    }

    #[test]
    fn test_score_never_leaves_declared_bounds() {
        for profile in [ScoringProfile::lenient(), ScoringProfile::strict()] {
            for skills in [0usize, 3, 10, 60] {
                for strengths in [0usize, 2, 9] {
                    for level in [
                        ExperienceLevel::Entry,
                        ExperienceLevel::Mid,
                        ExperienceLevel::Senior,
                        ExperienceLevel::Expert,
                    ] {
                        let score =
                            profile.score(4100, "bachelor certified", skills, strengths, level);
                        assert!(score >= profile.floor() && score <= profile.ceiling());
                    }
                }
            }
        }
    }
}
