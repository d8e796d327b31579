//! Analysis result structures handed to the presentation layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete outcome of one ATS analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: AtsScore,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub passed_checks: Vec<String>,
    pub keyword_density: Vec<KeywordDensity>,
    #[serde(rename = "estimatedATSCompatibility")]
    pub estimated_ats_compatibility: Compatibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    /// Rounded mean of the five section scores (0-100)
    pub overall: u8,
    pub sections: SectionScores,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub keywords: u8,
    pub formatting: u8,
    pub structure: u8,
    pub completeness: u8,
    pub readability: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub category: IssueCategory,
    pub title: String,
    pub description: String,
    pub fix: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    /// Share of resume tokens, rounded to two decimals
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Error,
    Warning,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Keywords,
    Formatting,
    Structure,
    Completeness,
    Readability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Issue {
    pub fn new(
        issue_type: IssueType,
        category: IssueCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        fix: impl Into<String>,
        impact: Impact,
    ) -> Self {
        Self {
            issue_type,
            category,
            title: title.into(),
            description: description.into(),
            fix: fix.into(),
            impact,
        }
    }
}

impl SectionScores {
    /// Scores in check order, paired with their category
    pub fn iter(&self) -> impl Iterator<Item = (IssueCategory, u8)> {
        [
            (IssueCategory::Keywords, self.keywords),
            (IssueCategory::Formatting, self.formatting),
            (IssueCategory::Structure, self.structure),
            (IssueCategory::Completeness, self.completeness),
            (IssueCategory::Readability, self.readability),
        ]
        .into_iter()
    }

    pub fn get(&self, category: IssueCategory) -> u8 {
        match category {
            IssueCategory::Keywords => self.keywords,
            IssueCategory::Formatting => self.formatting,
            IssueCategory::Structure => self.structure,
            IssueCategory::Completeness => self.completeness,
            IssueCategory::Readability => self.readability,
        }
    }

    /// Rounded arithmetic mean of the five scores
    pub fn overall(&self) -> u8 {
        let sum: u32 = self.iter().map(|(_, score)| u32::from(score)).sum();
        (f64::from(sum) / 5.0).round() as u8
    }
}

impl Compatibility {
    pub fn from_score(overall: u8) -> Self {
        if overall >= 85 {
            Compatibility::Excellent
        } else if overall >= 70 {
            Compatibility::Good
        } else if overall >= 55 {
            Compatibility::Fair
        } else {
            Compatibility::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Compatibility::Excellent => "Excellent",
            Compatibility::Good => "Good",
            Compatibility::Fair => "Fair",
            Compatibility::Poor => "Poor",
        }
    }
}

impl AnalysisResult {
    /// Issues grouped by category, categories in check order
    pub fn issues_by_category(&self) -> Vec<(IssueCategory, Vec<&Issue>)> {
        IssueCategory::ALL
            .iter()
            .map(|category| {
                let issues: Vec<&Issue> =
                    self.issues.iter().filter(|i| i.category == *category).collect();
                (*category, issues)
            })
            .filter(|(_, issues)| !issues.is_empty())
            .collect()
    }

    /// Issues grouped by impact, highest impact first
    pub fn issues_by_impact(&self) -> Vec<(Impact, Vec<&Issue>)> {
        [Impact::High, Impact::Medium, Impact::Low]
            .into_iter()
            .map(|impact| {
                let issues: Vec<&Issue> = self.issues.iter().filter(|i| i.impact == impact).collect();
                (impact, issues)
            })
            .filter(|(_, issues)| !issues.is_empty())
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.issue_type == IssueType::Error)
    }
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Keywords,
        IssueCategory::Formatting,
        IssueCategory::Structure,
        IssueCategory::Completeness,
        IssueCategory::Readability,
    ];
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueCategory::Keywords => "Keywords",
            IssueCategory::Formatting => "Formatting",
            IssueCategory::Structure => "Structure",
            IssueCategory::Completeness => "Completeness",
            IssueCategory::Readability => "Readability",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueType::Error => "error",
            IssueType::Warning => "warning",
            IssueType::Suggestion => "suggestion",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [u8; 5]) -> SectionScores {
        SectionScores {
            keywords: values[0],
            formatting: values[1],
            structure: values[2],
            completeness: values[3],
            readability: values[4],
        }
    }

    #[test]
    fn test_compatibility_thresholds() {
        let cases = [
            (100, Compatibility::Excellent),
            (85, Compatibility::Excellent),
            (84, Compatibility::Good),
            (70, Compatibility::Good),
            (69, Compatibility::Fair),
            (55, Compatibility::Fair),
            (54, Compatibility::Poor),
            (0, Compatibility::Poor),
        ];
        for (score, expected) in cases {
            assert_eq!(Compatibility::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        assert_eq!(scores([85, 90, 80, 100, 85]).overall(), 88);
        // 40 + 75 + 60 + 20 + 55 = 250 -> 50.0
        assert_eq!(scores([40, 75, 60, 20, 55]).overall(), 50);
        // 30 + 65 + 75 + 85 + 57 = 312 -> 62.4
        assert_eq!(scores([30, 65, 75, 85, 57]).overall(), 62);
        // 85 + 90 + 80 + 85 + 88 = 428 -> 85.6
        assert_eq!(scores([85, 90, 80, 85, 88]).overall(), 86);
        assert_eq!(scores([0, 0, 0, 0, 0]).overall(), 0);
        assert_eq!(scores([100, 100, 100, 100, 100]).overall(), 100);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = AnalysisResult {
            score: AtsScore {
                overall: 72,
                sections: scores([60, 75, 75, 100, 55]),
            },
            issues: vec![Issue::new(
                IssueType::Warning,
                IssueCategory::Keywords,
                "Limited Keywords",
                "desc",
                "fix",
                Impact::Medium,
            )],
            recommendations: vec![],
            passed_checks: vec!["ok".to_string()],
            keyword_density: vec![KeywordDensity {
                keyword: "python".to_string(),
                count: 3,
                percentage: 1.25,
            }],
            estimated_ats_compatibility: Compatibility::Good,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"]["overall"], 72);
        assert_eq!(json["score"]["sections"]["completeness"], 100);
        assert_eq!(json["issues"][0]["type"], "warning");
        assert_eq!(json["issues"][0]["category"], "keywords");
        assert_eq!(json["issues"][0]["impact"], "medium");
        assert_eq!(json["passedChecks"][0], "ok");
        assert_eq!(json["keywordDensity"][0]["percentage"], 1.25);
        assert_eq!(json["estimatedATSCompatibility"], "good");
    }

    #[test]
    fn test_issue_grouping() {
        let issue = |category, impact| {
            Issue::new(IssueType::Suggestion, category, "t", "d", "f", impact)
        };
        let result = AnalysisResult {
            score: AtsScore {
                overall: 50,
                sections: scores([50; 5]),
            },
            issues: vec![
                issue(IssueCategory::Readability, Impact::Low),
                issue(IssueCategory::Keywords, Impact::High),
                issue(IssueCategory::Readability, Impact::Medium),
            ],
            recommendations: vec![],
            passed_checks: vec![],
            keyword_density: vec![],
            estimated_ats_compatibility: Compatibility::Poor,
        };

        let by_category = result.issues_by_category();
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category[0].0, IssueCategory::Keywords);
        assert_eq!(by_category[1].1.len(), 2);

        let by_impact = result.issues_by_impact();
        assert_eq!(by_impact.len(), 3);
        assert_eq!(by_impact[0].0, Impact::High);
        assert!(!result.has_errors());
    }
}
