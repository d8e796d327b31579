//! Keyword coverage check

use super::{AtsCheck, CheckOutcome, ScoreCard};
use crate::analysis::keywords::KeywordMatcher;
use crate::analysis::result::{Impact, IssueCategory, IssueType};
use crate::analysis::text::ResumeText;
use crate::model::ResumeData;

/// Resumes with fewer tokens than this are scored as too short
pub const MIN_WORD_COUNT: usize = 200;
const INSUFFICIENT_KEYWORDS: usize = 10;
const LIMITED_KEYWORDS: usize = 20;

const SCORE_TOO_SHORT: i32 = 40;
const SCORE_INSUFFICIENT: i32 = 30;
const SCORE_LIMITED: i32 = 60;
const SCORE_STRONG: i32 = 85;

pub struct KeywordCheck<'a> {
    matcher: &'a KeywordMatcher,
}

impl<'a> KeywordCheck<'a> {
    pub fn new(matcher: &'a KeywordMatcher) -> Self {
        Self { matcher }
    }
}

impl AtsCheck for KeywordCheck<'_> {
    fn category(&self) -> IssueCategory {
        IssueCategory::Keywords
    }

    fn run(&self, _resume: &ResumeData, text: &ResumeText) -> CheckOutcome {
        let mut card = ScoreCard::new(self.category(), 0);

        if text.word_count < MIN_WORD_COUNT {
            card.report(
                IssueType::Warning,
                "Resume Too Short",
                &format!(
                    "Your resume contains {} words. ATS systems favor resumes with at least {} words of substantive content.",
                    text.word_count, MIN_WORD_COUNT
                ),
                "Expand your experience and project descriptions with specific responsibilities, tools and outcomes.",
                Impact::Medium,
            );
            card.set_score(SCORE_TOO_SHORT);
            return card.finish();
        }

        let found = self.matcher.find_present(text).len();

        if found < INSUFFICIENT_KEYWORDS {
            card.report(
                IssueType::Error,
                "Insufficient Keywords",
                &format!(
                    "Only {} industry keywords were found. ATS filters rank resumes by keyword matches and may reject this one.",
                    found
                ),
                "Mirror the terminology of the job descriptions you target and name the technologies, methods and skills you used.",
                Impact::High,
            );
            card.set_score(SCORE_INSUFFICIENT);
        } else if found < LIMITED_KEYWORDS {
            card.report(
                IssueType::Warning,
                "Limited Keywords",
                &format!(
                    "{} industry keywords were found. Stronger resumes typically include 20 or more.",
                    found
                ),
                "Add relevant tools, methodologies and domain terms to your experience bullets and skills section.",
                Impact::Medium,
            );
            card.set_score(SCORE_LIMITED);
        } else {
            card.pass(format!("Good keyword coverage ({} industry keywords found)", found));
            card.set_score(SCORE_STRONG);
        }

        card.finish()
    }
}
