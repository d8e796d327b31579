//! Aggregate resume text shared by the keyword, readability and length checks

use crate::model::ResumeData;

/// The whitespace-joined text corpus of a resume.
#[derive(Debug, Clone)]
pub struct ResumeText {
    pub text: String,
    pub lower: String,
    pub word_count: usize,
}

impl ResumeText {
    /// Concatenate name, experience, education, skills and projects into one corpus.
    pub fn extract(resume: &ResumeData) -> Self {
        let mut parts: Vec<&str> = vec![resume.personal_info.full_name.as_str()];

        for exp in &resume.experience {
            parts.push(&exp.company);
            parts.push(&exp.position);
            parts.extend(exp.description.iter().map(String::as_str));
        }

        for edu in &resume.education {
            parts.push(&edu.degree);
            parts.push(&edu.institute);
        }

        parts.extend(resume.skills.iter().map(String::as_str));

        for project in &resume.projects {
            parts.push(&project.title);
            parts.extend(project.description.iter().map(String::as_str));
        }

        let text = parts.join(" ");
        let lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();

        Self {
            text,
            lower,
            word_count,
        }
    }

    /// Split on sentence terminators. Fragments keep their surrounding spaces.
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.text.split(['.', '!', '?'])
    }

    pub fn contains_digit(&self) -> bool {
        self.text.chars().any(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, Experience, Project};

    fn sample_resume() -> ResumeData {
        let mut resume = ResumeData::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@example.com".to_string();
        resume.experience.push(Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            duration: "2020 - 2023".to_string(),
            description: vec!["Built APIs.".to_string(), "Led a team of 4.".to_string()],
        });
        resume.education.push(Education {
            degree: "BSc".to_string(),
            institute: "State University".to_string(),
            grade: "3.9".to_string(),
            year: "2019".to_string(),
        });
        resume.skills.languages = vec!["Rust".to_string()];
        resume.skills.concepts = vec!["Caching".to_string()];
        resume.projects.push(Project {
            title: "Ledger".to_string(),
            description: vec!["Double-entry bookkeeping tool.".to_string()],
            ..Default::default()
        });
        resume
    }

    #[test]
    fn test_extraction_order() {
        let text = ResumeText::extract(&sample_resume());
        assert_eq!(
            text.text,
            "Jane Doe Acme Engineer Built APIs. Led a team of 4. BSc State University Rust Caching Ledger Double-entry bookkeeping tool."
        );
        assert_eq!(text.lower, text.text.to_lowercase());
    }

    #[test]
    fn test_contact_and_duration_fields_are_excluded() {
        let text = ResumeText::extract(&sample_resume());
        assert!(!text.text.contains("jane@example.com"));
        assert!(!text.text.contains("2020 - 2023"));
        assert!(!text.text.contains("2019"));
    }

    #[test]
    fn test_word_count_ignores_blank_fields() {
        let text = ResumeText::extract(&ResumeData::default());
        assert_eq!(text.word_count, 0);

        let text = ResumeText::extract(&sample_resume());
        assert_eq!(text.word_count, 20);
    }

    #[test]
    fn test_sentences_and_digits() {
        let text = ResumeText::extract(&sample_resume());
        let non_empty = text.sentences().filter(|s| !s.trim().is_empty()).count();
        assert_eq!(non_empty, 3);
        assert!(text.contains_digit());
    }
}
