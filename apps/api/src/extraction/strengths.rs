//! Achievement and strength detection.
//!
//! Ordered regex templates pick out award, placement, and "built X" phrases;
//! keyword conditions append synthetic strengths afterwards. The caller caps
//! the final list at [`MAX_STRENGTHS`].

use regex::Regex;
use std::sync::LazyLock;

pub const MAX_STRENGTHS: usize = 5;
const MAX_STRENGTH_CHARS: usize = 120;
const MIN_STRENGTH_CHARS: usize = 15;
const DEDUPE_PREFIX_CHARS: usize = 30;

/// Applied in order; earlier templates win ties through prefix dedupe.
const ACHIEVEMENT_TEMPLATES: &[&str] = &[
    r"(?i)(?:won|awarded|received|achieved|secured)\s+[^.]*(?:hackathon|competition|challenge|contest)[^.]*",
    r"(?i)(?:1st|2nd|3rd|first|second|third)\s+(?:place|prize|position|rank)[^.]*",
    r"(?i)(?:winner|champion|finalist)[^.]*",
    r"(?i)(?:built|developed|created)\s+[^.]*(?:platform|system|application|app|website|tool)[^.]*",
];

static ACHIEVEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ACHIEVEMENT_TEMPLATES
        .iter()
        .map(|template| Regex::new(template).expect("achievement pattern must compile"))
        .collect()
});

/// Extracts strengths from the text. `text_lower` is the pre-lowercased text
/// and `skill_count` the number of detected skills (drives one synthetic
/// strength). The returned list is NOT yet capped.
pub fn detect_strengths(text: &str, text_lower: &str, skill_count: usize) -> Vec<String> {
    let mut strengths: Vec<String> = Vec::new();

    for pattern in ACHIEVEMENT_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let clean: String = found.as_str().trim().chars().take(MAX_STRENGTH_CHARS).collect();
            if clean.chars().count() <= MIN_STRENGTH_CHARS {
                continue;
            }
            let prefix: String = clean.chars().take(DEDUPE_PREFIX_CHARS).collect();
            if !strengths.iter().any(|existing| existing.contains(&prefix)) {
                strengths.push(clean);
            }
        }
    }

    if text_lower.contains("team lead") || text_lower.contains("led a team") {
        strengths.push("Leadership & Team Management Experience".to_string());
    }
    if text_lower.contains("intern") || text_lower.contains("internship") {
        strengths.push("Industry Internship Experience".to_string());
    }
    if skill_count >= 10 {
        strengths.push("Diverse Technical Skill Set".to_string());
    }

    strengths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<String> {
        detect_strengths(text, &text.to_lowercase(), 0)
    }

    #[test]
    fn test_hackathon_win_is_extracted() {
        let strengths = detect("Won 1st place at the national hackathon in 2024");
        assert!(!strengths.is_empty());
        assert!(strengths[0].to_lowercase().contains("hackathon"));
    }

    #[test]
    fn test_near_duplicate_prefixes_are_deduplicated() {
        // The placement template would re-match inside the award phrase; the
        // 30-char prefix rule keeps only the first occurrence.
        let strengths = detect("Won 1st place prize at the hackathon challenge");
        assert_eq!(
            strengths
                .iter()
                .filter(|s| s.to_lowercase().contains("hackathon"))
                .count(),
            1
        );
    }

    #[test]
    fn test_short_fragments_are_discarded() {
        // "winner" alone is under the 15-char minimum.
        let strengths = detect("winner");
        assert!(strengths.is_empty());
    }

    #[test]
    fn test_matches_are_truncated_to_120_chars() {
        let long_tail = "x".repeat(300);
        let text = format!("Developed a scalable analytics platform {long_tail}");
        let strengths = detect(&text);
        assert_eq!(strengths.len(), 1);
        assert_eq!(strengths[0].chars().count(), 120);
    }

    #[test]
    fn test_leadership_keyword_appends_synthetic_strength() {
        let strengths = detect("I was the team lead for the payments group");
        assert!(strengths
            .iter()
            .any(|s| s == "Leadership & Team Management Experience"));
    }

    #[test]
    fn test_internship_keyword_appends_synthetic_strength() {
        let strengths = detect("Summer internship at a fintech startup");
        assert!(strengths.iter().any(|s| s == "Industry Internship Experience"));
    }

    #[test]
    fn test_ten_skills_appends_diverse_skill_set() {
        let strengths = detect_strengths("plain text", "plain text", 10);
        assert_eq!(strengths, vec!["Diverse Technical Skill Set".to_string()]);
    }
}
