//! Skill detection — a fixed table of case-insensitive word-boundary patterns.

use regex::Regex;
use std::sync::LazyLock;

/// The (skill name → pattern) table. Table order is the order skills appear
/// in the extracted set, so entries stay grouped by category.
const SKILL_TABLE: &[(&str, &str)] = &[
    // Programming languages
    ("Python", r"(?i)\bpython\b"),
    ("JavaScript", r"(?i)\bjavascript\b"),
    ("TypeScript", r"(?i)\btypescript\b"),
    ("Java", r"(?i)\bjava\b"),
    ("C++", r"(?i)\bc\+\+"),
    ("C#", r"(?i)\bc#"),
    ("Go", r"(?i)\bgolang\b|\bgo\b"),
    ("Rust", r"(?i)\brust\b"),
    ("Ruby", r"(?i)\bruby\b"),
    ("PHP", r"(?i)\bphp\b"),
    ("Swift", r"(?i)\bswift\b"),
    ("Kotlin", r"(?i)\bkotlin\b"),
    // Frontend
    ("React", r"(?i)\breact\b|\breactjs\b|\breact\.js\b"),
    ("Angular", r"(?i)\bangular\b|\bangularjs\b"),
    ("Vue.js", r"(?i)\bvue\b|\bvuejs\b|\bvue\.js\b"),
    ("Next.js", r"(?i)\bnext\.js\b|\bnextjs\b"),
    ("HTML", r"(?i)\bhtml\b|\bhtml5\b"),
    ("CSS", r"(?i)\bcss\b|\bcss3\b"),
    ("Tailwind CSS", r"(?i)\btailwind\b"),
    // Backend
    ("Node.js", r"(?i)\bnode\.js\b|\bnodejs\b|\bnode\b"),
    ("Express", r"(?i)\bexpress\b|\bexpress\.js\b"),
    ("Django", r"(?i)\bdjango\b"),
    ("Flask", r"(?i)\bflask\b"),
    ("FastAPI", r"(?i)\bfastapi\b"),
    ("Spring Boot", r"(?i)\bspring boot\b|\bspringboot\b"),
    // Databases
    ("MySQL", r"(?i)\bmysql\b"),
    ("PostgreSQL", r"(?i)\bpostgresql\b|\bpostgres\b"),
    ("MongoDB", r"(?i)\bmongodb\b|\bmongo\b"),
    ("Redis", r"(?i)\bredis\b"),
    ("Firebase", r"(?i)\bfirebase\b"),
    // Cloud & DevOps
    ("AWS", r"(?i)\baws\b|\bamazon web services\b"),
    ("Azure", r"(?i)\bazure\b|\bmicrosoft azure\b"),
    ("GCP", r"(?i)\bgcp\b|\bgoogle cloud\b"),
    ("Docker", r"(?i)\bdocker\b"),
    ("Kubernetes", r"(?i)\bkubernetes\b|\bk8s\b"),
    ("CI/CD", r"(?i)\bci/cd\b|\bcicd\b"),
    ("Git", r"(?i)\bgit\b|\bgithub\b|\bgitlab\b"),
    // AI / ML
    ("Machine Learning", r"(?i)\bmachine learning\b|\bml\b"),
    ("Deep Learning", r"(?i)\bdeep learning\b"),
    ("TensorFlow", r"(?i)\btensorflow\b"),
    ("PyTorch", r"(?i)\bpytorch\b"),
    ("Data Science", r"(?i)\bdata science\b"),
    // Other
    ("REST API", r"(?i)\brest api\b|\brestful\b"),
    ("GraphQL", r"(?i)\bgraphql\b"),
    ("Agile", r"(?i)\bagile\b"),
    ("Scrum", r"(?i)\bscrum\b"),
];

static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SKILL_TABLE
        .iter()
        .map(|(name, pattern)| {
            (
                *name,
                Regex::new(pattern).expect("skill pattern must compile"),
            )
        })
        .collect()
});

/// Returns every skill whose pattern matches the text, in table order.
/// A pattern either matches or it does not — no fuzzy matching.
pub fn detect_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| (*name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_skills_case_insensitively() {
        let skills = detect_skills("Worked with PYTHON, react and postgres daily.");
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"PostgreSQL".to_string()));
    }

    #[test]
    fn test_word_boundaries_prevent_substring_hits() {
        // "javascript" must not light up the Java entry.
        let skills = detect_skills("Expert in JavaScript applications");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_table_order_is_preserved() {
        let skills = detect_skills("Docker and Python and React");
        let python = skills.iter().position(|s| s == "Python");
        let react = skills.iter().position(|s| s == "React");
        let docker = skills.iter().position(|s| s == "Docker");
        assert!(python < react, "languages come before frontend");
        assert!(react < docker, "frontend comes before devops");
    }

    #[test]
    fn test_no_matches_yields_empty_set() {
        assert!(detect_skills("lorem ipsum dolor sit amet").is_empty());
    }

    #[test]
    fn test_alternate_spellings_match() {
        let skills = detect_skills("node.js backend with k8s deployments");
        assert!(skills.contains(&"Node.js".to_string()));
        assert!(skills.contains(&"Kubernetes".to_string()));
    }
}
