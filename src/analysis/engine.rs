//! Analysis engine running the five ATS checks over one resume

use crate::analysis::checks::{
    AtsCheck, CheckOutcome, CompletenessCheck, FormattingCheck, KeywordCheck, ReadabilityCheck,
    StructureCheck,
};
use crate::analysis::keywords::KeywordMatcher;
use crate::analysis::recommendations;
use crate::analysis::result::{AnalysisResult, AtsScore, Compatibility, IssueCategory, SectionScores};
use crate::analysis::text::ResumeText;
use crate::error::Result;
use crate::model::ResumeData;
use std::time::Instant;

/// Scores resumes for ATS compatibility.
///
/// Holds only the pre-built keyword matchers, so one analyzer can be shared across threads
/// and reused for any number of resumes.
pub struct AtsAnalyzer {
    matcher: KeywordMatcher,
}

impl AtsAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            matcher: KeywordMatcher::new()?,
        })
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn analyze(&self, resume: &ResumeData) -> AnalysisResult {
        let start_time = Instant::now();

        // 1. Shared text corpus
        let text = ResumeText::extract(resume);
        log::debug!("Extracted {} tokens of resume text", text.word_count);

        // 2. The five checks, in reporting order
        let keyword_check = KeywordCheck::new(&self.matcher);
        let checks: [&dyn AtsCheck; 5] = [
            &keyword_check,
            &FormattingCheck,
            &StructureCheck,
            &CompletenessCheck,
            &ReadabilityCheck,
        ];

        let mut sections = SectionScores::default();
        let mut issues = Vec::new();
        let mut passed_checks = Vec::new();

        for check in checks {
            let CheckOutcome {
                score,
                issues: check_issues,
                passed_checks: check_passes,
            } = check.run(resume, &text);

            log::debug!(
                "{} check scored {} ({} issues, {} passed)",
                check.category(),
                score,
                check_issues.len(),
                check_passes.len()
            );

            set_section(&mut sections, check.category(), score);
            issues.extend(check_issues);
            passed_checks.extend(check_passes);
        }

        // 3. Aggregation, reused for the tier and the recommendations
        let overall = sections.overall();
        let keyword_density = self.matcher.density(&text);

        log::debug!(
            "Analysis finished in {:?}: overall {}",
            start_time.elapsed(),
            overall
        );

        AnalysisResult {
            score: AtsScore { overall, sections },
            issues,
            recommendations: recommendations::for_score(overall),
            passed_checks,
            keyword_density,
            estimated_ats_compatibility: Compatibility::from_score(overall),
        }
    }
}

impl Default for AtsAnalyzer {
    fn default() -> Self {
        Self::new().expect("Failed to create default ATS analyzer")
    }
}

/// Analyze a single resume with a freshly built analyzer.
pub fn analyze(resume: &ResumeData) -> AnalysisResult {
    AtsAnalyzer::default().analyze(resume)
}

fn set_section(sections: &mut SectionScores, category: IssueCategory, score: u8) {
    match category {
        IssueCategory::Keywords => sections.keywords = score,
        IssueCategory::Formatting => sections.formatting = score,
        IssueCategory::Structure => sections.structure = score,
        IssueCategory::Completeness => sections.completeness = score,
        IssueCategory::Readability => sections.readability = score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::{Impact, IssueType};

    #[test]
    fn test_empty_resume() {
        let result = analyze(&ResumeData::default());
        let sections = result.score.sections;

        assert_eq!(sections.keywords, 40);
        assert_eq!(sections.formatting, 75);
        assert_eq!(sections.structure, 55);
        assert_eq!(sections.completeness, 20);
        assert_eq!(sections.readability, 55);
        // (40 + 75 + 55 + 20 + 55) / 5 = 49
        assert_eq!(result.score.overall, 49);
        assert_eq!(result.estimated_ats_compatibility, Compatibility::Poor);
        assert!(result.keyword_density.is_empty());
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.passed_checks, vec!["Standard section headers used"]);
    }

    #[test]
    fn test_issues_follow_check_order() {
        let result = analyze(&ResumeData::default());
        let categories: Vec<IssueCategory> = result.issues.iter().map(|i| i.category).collect();

        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);

        let first = &result.issues[0];
        assert_eq!(first.title, "Resume Too Short");
        assert_eq!(first.issue_type, IssueType::Warning);
        assert_eq!(first.impact, Impact::Medium);
        assert_eq!(
            result
                .issues
                .iter()
                .filter(|i| i.category == IssueCategory::Keywords)
                .count(),
            1
        );
    }

    #[test]
    fn test_analyzer_reuse_is_idempotent() {
        let analyzer = AtsAnalyzer::new().unwrap();
        let mut resume = ResumeData::default();
        resume.personal_info.full_name = "Sam Lee".to_string();
        resume.skills.languages = vec!["Python".to_string(), "SQL".to_string()];

        let first = analyzer.analyze(&resume);
        let second = analyzer.analyze(&resume);
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_section_targets_one_category() {
        let mut sections = SectionScores::default();
        for (score, category) in (10u8..).step_by(10).zip(IssueCategory::ALL) {
            set_section(&mut sections, category, score);
        }

        assert_eq!(sections.get(IssueCategory::Keywords), 10);
        assert_eq!(sections.get(IssueCategory::Readability), 50);
        for (category, score) in sections.iter() {
            assert_eq!(sections.get(category), score);
        }
    }

    #[test]
    fn test_analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AtsAnalyzer>();
    }
}
