//! Formatting check: date consistency, bullet usage and section headers

use super::{AtsCheck, CheckOutcome, ScoreCard};
use crate::analysis::result::{Impact, IssueCategory, IssueType};
use crate::analysis::text::ResumeText;
use crate::model::{Experience, ResumeData};
use std::collections::HashSet;

const BASE_SCORE: i32 = 90;
const DATE_FORMAT_PENALTY: i32 = 10;
const BULLET_PENALTY: i32 = 15;
const HEADER_PENALTY: i32 = 10;

/// Coarse shape of a duration string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStyle {
    Empty,
    Dash,
    To,
    Other,
}

impl DateStyle {
    pub fn of(duration: &str) -> Self {
        if duration.trim().is_empty() {
            DateStyle::Empty
        } else if duration.contains('-') {
            DateStyle::Dash
        } else if duration.contains("to") {
            DateStyle::To
        } else {
            DateStyle::Other
        }
    }
}

pub struct FormattingCheck;

impl FormattingCheck {
    fn has_consistent_dates(experience: &[Experience]) -> bool {
        let styles: HashSet<DateStyle> = experience
            .iter()
            .map(|exp| DateStyle::of(&exp.duration))
            .collect();
        styles.len() <= 1
    }

    fn uses_bullet_points(experience: &[Experience]) -> bool {
        experience.iter().any(|exp| exp.description.len() > 1)
    }

    /// Resumes are rendered from fixed templates, so headers are always standard.
    fn has_standard_headers(_resume: &ResumeData) -> bool {
        true
    }
}

impl AtsCheck for FormattingCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Formatting
    }

    fn run(&self, resume: &ResumeData, _text: &ResumeText) -> CheckOutcome {
        let mut card = ScoreCard::new(self.category(), BASE_SCORE);

        if !Self::has_consistent_dates(&resume.experience) {
            card.penalize(
                DATE_FORMAT_PENALTY,
                IssueType::Warning,
                "Inconsistent Date Format",
                "Your experience entries mix different date formats, which can confuse ATS date parsing.",
                "Use a single format for every entry, for example \"Jan 2020 - Mar 2023\".",
                Impact::Low,
            );
        }

        if Self::uses_bullet_points(&resume.experience) {
            card.pass("Experience descriptions use bullet points");
        } else {
            card.penalize(
                BULLET_PENALTY,
                IssueType::Suggestion,
                "Use Bullet Points",
                "Experience descriptions are written as single blocks of text. ATS systems and recruiters scan bullet points more easily.",
                "Split each role into 3-5 bullet points, each starting with an action verb.",
                Impact::Medium,
            );
        }

        if Self::has_standard_headers(resume) {
            card.pass("Standard section headers used");
        } else {
            card.penalize(
                HEADER_PENALTY,
                IssueType::Warning,
                "Non-Standard Section Headers",
                "Some section headers are not recognized by common ATS parsers.",
                "Use conventional headers such as Experience, Education, Skills and Projects.",
                Impact::Medium,
            );
        }

        card.finish()
    }
}
