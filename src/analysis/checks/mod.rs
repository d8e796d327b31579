//! The five independent ATS checks
//!
//! Each check reads the resume and its aggregate text and returns a subscore together
//! with the issues it raised and the passed-check messages it recorded. The engine merges
//! outcomes in check order.

pub mod completeness;
pub mod formatting;
pub mod keywords;
pub mod readability;
pub mod structure;

use crate::analysis::result::{Impact, Issue, IssueCategory, IssueType};
use crate::analysis::text::ResumeText;
use crate::model::ResumeData;

pub use completeness::CompletenessCheck;
pub use formatting::FormattingCheck;
pub use keywords::KeywordCheck;
pub use readability::ReadabilityCheck;
pub use structure::StructureCheck;

/// Result of running a single check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub score: u8,
    pub issues: Vec<Issue>,
    pub passed_checks: Vec<String>,
}

/// A scoring rule set for one ATS dimension
pub trait AtsCheck {
    fn category(&self) -> IssueCategory;
    fn run(&self, resume: &ResumeData, text: &ResumeText) -> CheckOutcome;
}

/// Accumulates penalties, issues and passed checks on top of a base score.
pub(crate) struct ScoreCard {
    category: IssueCategory,
    score: i32,
    issues: Vec<Issue>,
    passed_checks: Vec<String>,
}

impl ScoreCard {
    pub(crate) fn new(category: IssueCategory, base: i32) -> Self {
        Self {
            category,
            score: base,
            issues: Vec::new(),
            passed_checks: Vec::new(),
        }
    }

    pub(crate) fn penalize(
        &mut self,
        penalty: i32,
        issue_type: IssueType,
        title: &str,
        description: &str,
        fix: &str,
        impact: Impact,
    ) {
        self.score -= penalty;
        self.report(issue_type, title, description, fix, impact);
    }

    /// Record an issue without touching the score
    pub(crate) fn report(
        &mut self,
        issue_type: IssueType,
        title: &str,
        description: &str,
        fix: &str,
        impact: Impact,
    ) {
        self.issues
            .push(Issue::new(issue_type, self.category, title, description, fix, impact));
    }

    pub(crate) fn pass(&mut self, message: impl Into<String>) {
        self.passed_checks.push(message.into());
    }

    pub(crate) fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    pub(crate) fn finish(self) -> CheckOutcome {
        CheckOutcome {
            score: self.score.clamp(0, 100) as u8,
            issues: self.issues,
            passed_checks: self.passed_checks,
        }
    }
}
