//! Structure check: section order, contact details and LinkedIn presence

use super::{AtsCheck, CheckOutcome, ScoreCard};
use crate::analysis::result::{Impact, IssueCategory, IssueType};
use crate::analysis::text::ResumeText;
use crate::model::ResumeData;

const BASE_SCORE: i32 = 80;
const SECTION_ORDER_PENALTY: i32 = 10;
const CONTACT_PENALTY: i32 = 20;
const LINKEDIN_PENALTY: i32 = 5;

/// Section order produced by the resume templates
pub const TEMPLATE_SECTION_ORDER: [&str; 5] =
    ["contact", "experience", "education", "skills", "projects"];

/// Section order preferred by ATS parsers
pub const IDEAL_SECTION_ORDER: [&str; 5] =
    ["contact", "experience", "education", "skills", "projects"];

pub struct StructureCheck;

impl AtsCheck for StructureCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Structure
    }

    fn run(&self, resume: &ResumeData, _text: &ResumeText) -> CheckOutcome {
        let mut card = ScoreCard::new(self.category(), BASE_SCORE);

        if TEMPLATE_SECTION_ORDER != IDEAL_SECTION_ORDER {
            card.penalize(
                SECTION_ORDER_PENALTY,
                IssueType::Suggestion,
                "Non-Standard Section Order",
                "Your sections are not in the order most ATS parsers expect.",
                "Order sections as contact, experience, education, skills, projects.",
                Impact::Low,
            );
        }

        let info = &resume.personal_info;
        if !info.has_email() || !info.has_phone() {
            card.penalize(
                CONTACT_PENALTY,
                IssueType::Error,
                "Missing Contact Information",
                "Your resume is missing an email address or phone number, so recruiters cannot reach you.",
                "Add both a professional email address and a phone number to the header.",
                Impact::High,
            );
        } else {
            card.pass("Complete contact information provided");
        }

        if !info.has_linkedin() {
            card.penalize(
                LINKEDIN_PENALTY,
                IssueType::Suggestion,
                "Missing LinkedIn Profile",
                "Many recruiters cross-check candidates on LinkedIn.",
                "Add the URL of an up-to-date LinkedIn profile to your contact details.",
                Impact::Low,
            );
        }

        card.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checks::test_support::contact_complete;

    fn run(resume: &ResumeData) -> CheckOutcome {
        StructureCheck.run(resume, &ResumeText::extract(resume))
    }

    #[test]
    fn test_complete_contact_scores_base() {
        let outcome = run(&contact_complete());
        assert_eq!(outcome.score, 80);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.passed_checks, vec!["Complete contact information provided"]);
    }

    #[test]
    fn test_missing_phone_and_linkedin() {
        let mut resume = contact_complete();
        resume.personal_info.phone.clear();
        resume.personal_info.linkedin = None;

        let outcome = run(&resume);
        assert_eq!(outcome.score, 80 - 20 - 5);
        assert_eq!(outcome.issues[0].title, "Missing Contact Information");
        assert_eq!(outcome.issues[0].issue_type, IssueType::Error);
        assert_eq!(outcome.issues[0].impact, Impact::High);
        assert_eq!(outcome.issues[1].title, "Missing LinkedIn Profile");
        assert_eq!(outcome.issues[1].impact, Impact::Low);
        assert!(outcome.passed_checks.is_empty());
    }

    #[test]
    fn test_section_order_never_penalized() {
        let outcome = run(&ResumeData::default());
        assert!(outcome
            .issues
            .iter()
            .all(|issue| issue.title != "Non-Standard Section Order"));
    }
}
