//! ATS compatibility analyzer library

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use analysis::{analyze, AnalysisResult, AtsAnalyzer};
pub use config::Config;
pub use error::{AtsError, Result};
pub use model::ResumeData;
