//! Deserialization of resume data from supported file formats

use crate::error::{AtsError, Result};
use crate::model::ResumeData;
use std::path::Path;
use tokio::fs;

pub trait ResumeParser: Sync {
    /// Parse resume data from file content. `path` is only used for error reporting.
    fn parse(&self, content: &str, path: &Path) -> Result<ResumeData>;

    fn read(&self, path: &Path) -> impl std::future::Future<Output = Result<ResumeData>> + Send {
        async move {
            let content = fs::read_to_string(path).await?;
            self.parse(&content, path)
        }
    }
}

pub struct JsonParser;

impl ResumeParser for JsonParser {
    fn parse(&self, content: &str, path: &Path) -> Result<ResumeData> {
        ResumeData::from_json_str(content).map_err(|e| AtsError::InvalidResume {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

pub struct TomlParser;

impl ResumeParser for TomlParser {
    fn parse(&self, content: &str, path: &Path) -> Result<ResumeData> {
        toml::from_str(content).map_err(|e| AtsError::InvalidResume {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
