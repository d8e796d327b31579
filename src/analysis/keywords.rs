//! Industry keyword dictionary and keyword matching

use crate::analysis::result::KeywordDensity;
use crate::analysis::text::ResumeText;
use crate::error::{AtsError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum number of entries reported in keyword density
pub const MAX_DENSITY_ENTRIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Technology,
    Academic,
    Executive,
    General,
}

const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "javascript", "python", "java", "react", "node", "typescript", "sql", "aws",
    "docker", "kubernetes", "git", "api", "rest", "agile", "machine learning",
    "cloud", "microservices", "devops", "html", "css", "mongodb", "linux",
];

const ACADEMIC_KEYWORDS: &[&str] = &[
    "research", "thesis", "publication", "analysis", "curriculum", "teaching",
    "laboratory", "methodology", "statistics", "peer review", "grant",
    "dissertation", "academic", "conference", "journal", "mentoring", "seminar",
    "data analysis", "literature review", "scholarship",
];

const EXECUTIVE_KEYWORDS: &[&str] = &[
    "leadership", "strategy", "strategic planning", "management", "budget",
    "stakeholder", "revenue", "growth", "operations", "business development",
    "transformation", "governance", "cross-functional", "roadmap", "vision",
    "partnerships", "profitability", "negotiation", "team building", "board",
];

const GENERAL_KEYWORDS: &[&str] = &[
    "communication", "teamwork", "problem solving", "collaboration",
    "project management", "time management", "customer service", "organization",
    "adaptability", "critical thinking", "attention to detail", "innovation",
    "training", "planning", "reporting", "presentation", "documentation",
    "leadership", "analytical", "initiative", "multitasking", "detail-oriented",
];

/// Curated keyword lists by industry category, all lowercase.
pub const KEYWORD_DICTIONARY: &[(KeywordCategory, &[&str])] = &[
    (KeywordCategory::Technology, TECHNOLOGY_KEYWORDS),
    (KeywordCategory::Academic, ACADEMIC_KEYWORDS),
    (KeywordCategory::Executive, EXECUTIVE_KEYWORDS),
    (KeywordCategory::General, GENERAL_KEYWORDS),
];

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 4] = [
        KeywordCategory::Technology,
        KeywordCategory::Academic,
        KeywordCategory::Executive,
        KeywordCategory::General,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORD_DICTIONARY
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "technology" | "tech" => Some(KeywordCategory::Technology),
            "academic" => Some(KeywordCategory::Academic),
            "executive" => Some(KeywordCategory::Executive),
            "general" => Some(KeywordCategory::General),
            _ => None,
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeywordCategory::Technology => "Technology",
            KeywordCategory::Academic => "Academic",
            KeywordCategory::Executive => "Executive",
            KeywordCategory::General => "General",
        };
        write!(f, "{}", name)
    }
}

/// Every dictionary keyword once, in dictionary order.
pub fn all_keywords() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    KEYWORD_DICTIONARY
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .filter(|keyword| seen.insert(*keyword))
        .collect()
}

/// Keyword matcher over the deduplicated dictionary
pub struct KeywordMatcher {
    keywords: Vec<&'static str>,
    presence_matcher: AhoCorasick,
    counters: Vec<Regex>,
}

impl KeywordMatcher {
    pub fn new() -> Result<Self> {
        let keywords = all_keywords();

        // Standard semantics so overlapping iteration reports every keyword that occurs,
        // including ones nested inside longer keywords.
        let presence_matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&keywords)
            .map_err(|e| AtsError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        let counters = keywords
            .iter()
            .map(|keyword| {
                RegexBuilder::new(&regex::escape(keyword))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        AtsError::Processing(format!("Invalid keyword pattern '{}': {}", keyword, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            keywords,
            presence_matcher,
            counters,
        })
    }

    /// Distinct keywords occurring anywhere in the text, case-insensitively, in dictionary order.
    pub fn find_present(&self, text: &ResumeText) -> Vec<&'static str> {
        let mut found = vec![false; self.keywords.len()];
        for mat in self.presence_matcher.find_overlapping_iter(&text.lower) {
            found[mat.pattern().as_usize()] = true;
        }

        self.keywords
            .iter()
            .zip(found)
            .filter(|(_, present)| *present)
            .map(|(keyword, _)| *keyword)
            .collect()
    }

    /// Occurrence counts of the most frequent keywords relative to the resume's token count.
    pub fn density(&self, text: &ResumeText) -> Vec<KeywordDensity> {
        let mut density: Vec<KeywordDensity> = self
            .keywords
            .iter()
            .zip(&self.counters)
            .filter_map(|(keyword, counter)| {
                let count = counter.find_iter(&text.text).count();
                if count == 0 {
                    return None;
                }
                Some(KeywordDensity {
                    keyword: keyword.to_string(),
                    count,
                    percentage: percentage(count, text.word_count),
                })
            })
            .collect();

        // Stable sort keeps dictionary order between equal counts
        density.sort_by(|a, b| b.count.cmp(&a.count));
        density.truncate(MAX_DENSITY_ENTRIES);
        density
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new().expect("Failed to create default keyword matcher")
    }
}

fn percentage(count: usize, total_tokens: usize) -> f64 {
    if total_tokens == 0 {
        return 0.0;
    }
    let raw = count as f64 / total_tokens as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResumeData;

    fn text_of(name: &str) -> ResumeText {
        let mut resume = ResumeData::default();
        resume.personal_info.full_name = name.to_string();
        ResumeText::extract(&resume)
    }

    #[test]
    fn test_dictionary_shape() {
        for (category, keywords) in KEYWORD_DICTIONARY {
            assert!(
                (20..=25).contains(&keywords.len()),
                "{} has {} keywords",
                category,
                keywords.len()
            );
            for keyword in keywords.iter() {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_all_keywords_is_deduplicated() {
        let keywords = all_keywords();
        let unique: HashSet<_> = keywords.iter().collect();
        assert_eq!(keywords.len(), unique.len());
        // "leadership" appears in both the executive and general lists
        assert_eq!(keywords.iter().filter(|k| **k == "leadership").count(), 1);
    }

    #[test]
    fn test_presence_is_case_insensitive_substring() {
        let matcher = KeywordMatcher::new().unwrap();
        let found = matcher.find_present(&text_of("Wrote JavaScript and PYTHON with Machine Learning"));

        assert!(found.contains(&"javascript"));
        // substring semantics: "java" is inside "javascript"
        assert!(found.contains(&"java"));
        assert!(found.contains(&"python"));
        assert!(found.contains(&"machine learning"));
        assert!(!found.contains(&"docker"));
    }

    #[test]
    fn test_density_counts_and_percentages() {
        let matcher = KeywordMatcher::new().unwrap();
        // 7 tokens; "python" three times, "docker" once
        let text = text_of("Python python PYTHON docker and some other");
        let density = matcher.density(&text);

        assert_eq!(text.word_count, 7);
        assert_eq!(density[0].keyword, "python");
        assert_eq!(density[0].count, 3);
        assert_eq!(density[0].percentage, 42.86);
        assert_eq!(density[1].keyword, "docker");
        assert_eq!(density[1].percentage, 14.29);
    }

    #[test]
    fn test_density_is_sorted_and_capped() {
        let matcher = KeywordMatcher::new().unwrap();
        let text = text_of(
            "python python python docker docker sql aws git api css html linux cloud agile kubernetes",
        );
        let density = matcher.density(&text);

        assert!(density.len() <= MAX_DENSITY_ENTRIES);
        assert!(density.windows(2).all(|w| w[0].count >= w[1].count));
        let unique: HashSet<_> = density.iter().map(|d| d.keyword.as_str()).collect();
        assert_eq!(unique.len(), density.len());
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(KeywordCategory::parse("TECH"), Some(KeywordCategory::Technology));
        assert_eq!(KeywordCategory::parse("unknown"), None);
        assert!(KeywordCategory::Academic.keywords().contains(&"thesis"));

        let listed: Vec<KeywordCategory> = KEYWORD_DICTIONARY.iter().map(|(c, _)| *c).collect();
        assert_eq!(listed, KeywordCategory::ALL.to_vec());
    }

    #[test]
    fn test_matcher_construction() {
        let matcher = KeywordMatcher::new().unwrap();
        assert_eq!(matcher.keyword_count(), all_keywords().len());
        assert_eq!(KeywordMatcher::default().keyword_count(), matcher.keyword_count());
    }
}
