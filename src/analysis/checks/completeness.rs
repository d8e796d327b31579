//! Completeness check: core sections present and experience described

use super::{AtsCheck, CheckOutcome, ScoreCard};
use crate::analysis::result::{Impact, IssueCategory, IssueType};
use crate::analysis::text::ResumeText;
use crate::model::{Experience, ResumeData};

const BASE_SCORE: i32 = 100;
const EXPERIENCE_PENALTY: i32 = 30;
const EDUCATION_PENALTY: i32 = 25;
const SKILLS_PENALTY: i32 = 25;
const THIN_DESCRIPTION_PENALTY: i32 = 15;

/// Description lines shorter than this (after trimming) carry no real content
const MIN_DESCRIPTION_CHARS: usize = 10;

pub struct CompletenessCheck;

impl CompletenessCheck {
    fn is_thinly_described(exp: &Experience) -> bool {
        exp.description
            .iter()
            .all(|line| line.trim().chars().count() < MIN_DESCRIPTION_CHARS)
    }
}

impl AtsCheck for CompletenessCheck {
    fn category(&self) -> IssueCategory {
        IssueCategory::Completeness
    }

    fn run(&self, resume: &ResumeData, _text: &ResumeText) -> CheckOutcome {
        let mut card = ScoreCard::new(self.category(), BASE_SCORE);

        if resume.experience.is_empty() {
            card.penalize(
                EXPERIENCE_PENALTY,
                IssueType::Error,
                "No Work Experience",
                "Your resume has no work experience entries. Most ATS filters screen on experience first.",
                "Add internships, part-time roles, freelance or volunteer work with concrete responsibilities.",
                Impact::High,
            );
        } else {
            card.pass(format!(
                "Work experience section present ({} entries)",
                resume.experience.len()
            ));
        }

        if resume.education.is_empty() {
            card.penalize(
                EDUCATION_PENALTY,
                IssueType::Error,
                "No Education Information",
                "Your resume has no education entries. Many ATS filters require a degree field.",
                "Add your highest degree with institution, grade and graduation year.",
                Impact::High,
            );
        } else {
            card.pass(format!(
                "Education section present ({} entries)",
                resume.education.len()
            ));
        }

        if resume.skills.is_empty() {
            card.penalize(
                SKILLS_PENALTY,
                IssueType::Error,
                "No Skills Listed",
                "Your resume lists no skills. ATS keyword matching relies heavily on the skills section.",
                "List your languages, frameworks, tools and databases in the skills section.",
                Impact::High,
            );
        } else {
            card.pass(format!(
                "Skills section present ({} skills listed)",
                resume.skills.count()
            ));
        }

        let thin = resume
            .experience
            .iter()
            .filter(|exp| Self::is_thinly_described(exp))
            .count();
        if thin > 0 {
            card.penalize(
                THIN_DESCRIPTION_PENALTY,
                IssueType::Warning,
                "Insufficient Experience Descriptions",
                &format!(
                    "{} experience {} little or no description.",
                    thin,
                    if thin == 1 { "entry has" } else { "entries have" }
                ),
                "Describe what you did in each role and the results you achieved, in at least two bullet points.",
                Impact::Medium,
            );
        }

        card.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::checks::test_support::{education, experience};

    fn run(resume: &ResumeData) -> CheckOutcome {
        CompletenessCheck.run(resume, &ResumeText::extract(resume))
    }

    #[test]
    fn test_empty_resume() {
        let outcome = run(&ResumeData::default());

        assert_eq!(outcome.score, 100 - 30 - 25 - 25);
        assert_eq!(outcome.issues.len(), 3);
        assert!(outcome
            .issues
            .iter()
            .all(|i| i.issue_type == IssueType::Error && i.category == IssueCategory::Completeness));
        assert!(outcome.passed_checks.is_empty());
    }

    #[test]
    fn test_complete_resume() {
        let mut resume = ResumeData::default();
        resume.experience = vec![experience("2020 - 2022", &["Maintained the billing service"])];
        resume.education = vec![education()];
        resume.skills.tools = vec!["Git".to_string(), "Docker".to_string()];

        let outcome = run(&resume);
        assert_eq!(outcome.score, 100);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.passed_checks.len(), 3);
        assert!(outcome.passed_checks[2].contains("2 skills"));
    }

    #[test]
    fn test_thin_descriptions_penalized_once() {
        let mut resume = ResumeData::default();
        resume.experience = vec![
            experience("2020 - 2022", &[]),
            experience("2018 - 2020", &["  Coding  ", "Tests"]),
            experience("2016 - 2018", &["Short", "Ran the nightly data imports"]),
        ];
        resume.education = vec![education()];
        resume.skills.languages = vec!["Rust".to_string()];

        let outcome = run(&resume);
        assert_eq!(outcome.score, 85);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].title, "Insufficient Experience Descriptions");
        assert_eq!(outcome.issues[0].issue_type, IssueType::Warning);
        assert!(outcome.issues[0].description.starts_with("2 experience entries"));
    }
}
