//! ATS compatibility analysis
//! Text extraction, keyword dictionary, the five checks and score aggregation

pub mod checks;
pub mod engine;
pub mod keywords;
pub mod recommendations;
pub mod result;
pub mod text;

pub use engine::{analyze, AtsAnalyzer};
pub use keywords::{KeywordCategory, KeywordMatcher};
pub use result::{
    AnalysisResult, AtsScore, Compatibility, Impact, Issue, IssueCategory, IssueType,
    KeywordDensity, SectionScores,
};
pub use text::ResumeText;
