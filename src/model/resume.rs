//! Structured resume data as produced by the resume form

use serde::{Deserialize, Serialize};

/// A complete resume snapshot. Every field tolerates absence and falls back to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub achievements: Vec<String>,
    pub coding_profiles: Vec<CodingProfile>,
    pub languages_known: String,
    pub certifications: Vec<String>,
    pub interests: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institute: String,
    pub grade: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub duration: Option<String>,
    pub link: Option<String>,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

/// Skill buckets in the order the resume form presents them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodingProfile {
    pub platform: String,
    pub url: String,
}

impl PersonalInfo {
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    pub fn has_linkedin(&self) -> bool {
        self.linkedin
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Skills {
    /// Iterate every skill across all buckets, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.languages
            .iter()
            .chain(&self.frontend)
            .chain(&self.backend)
            .chain(&self.tools)
            .chain(&self.databases)
            .chain(&self.concepts)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl ResumeData {
    /// Parse a resume snapshot from JSON, rejecting values of the wrong shape.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
