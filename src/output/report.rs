//! Report wrapper pairing an analysis result with generation metadata

use crate::analysis::{AnalysisResult, Compatibility};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analysis result plus the context it was produced in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub analysis: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the analyzer used
    pub analyzer_version: String,

    /// Resume file analyzed
    pub resume_file: String,

    /// Candidate name taken from the resume, may be empty
    pub candidate_name: String,

    pub processing_time_ms: u64,
}

impl AtsReport {
    pub fn new(
        analysis: AnalysisResult,
        resume_file: &str,
        candidate_name: &str,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            analysis,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.to_string(),
                candidate_name: candidate_name.trim().to_string(),
                processing_time_ms,
            },
        }
    }

    /// One-line verdict for the compatibility tier
    pub fn verdict(&self) -> &'static str {
        match self.analysis.estimated_ats_compatibility {
            Compatibility::Excellent => "Excellent - this resume should pass most ATS filters",
            Compatibility::Good => "Good - a few targeted fixes will improve ATS ranking",
            Compatibility::Fair => "Fair - several issues may cause ATS rejections",
            Compatibility::Poor => "Poor - major revisions needed before applying",
        }
    }

    /// File name of the analyzed resume, without directories
    pub fn resume_file_name(&self) -> String {
        Path::new(&self.metadata.resume_file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.metadata.resume_file.clone())
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata
            .generated_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::ResumeData;

    #[test]
    fn test_report_metadata() {
        let analysis = analyze(&ResumeData::default());
        let report = AtsReport::new(analysis, "cv/jane.json", "  Jane Doe ", 3);

        assert_eq!(report.metadata.candidate_name, "Jane Doe");
        assert_eq!(report.metadata.analyzer_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.resume_file_name(), "jane.json");
        assert!(report.verdict().starts_with("Poor"));
        assert!(report.generated_at_display().ends_with("UTC"));
    }
}
