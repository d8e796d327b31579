//! Input manager for loading resume files

use crate::error::{AtsError, Result};
use crate::input::file_detector::ResumeFormat;
use crate::input::parser::{JsonParser, ResumeParser, TomlParser};
use crate::model::ResumeData;
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, ResumeData>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_resume(&mut self, path: &Path) -> Result<ResumeData> {
        if self.enable_cache {
            if let Some(cached) = self.cache.get(path) {
                info!("Using cached resume data for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let resume = match self.detect_format(path)? {
            ResumeFormat::Json => {
                info!("Reading JSON resume: {}", path.display());
                JsonParser.read(path).await?
            }
            ResumeFormat::Toml => {
                info!("Reading TOML resume: {}", path.display());
                TomlParser.read(path).await?
            }
            ResumeFormat::Unknown => {
                return Err(AtsError::UnsupportedFormat(format!(
                    "Unsupported resume file type: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), resume.clone());
        }

        Ok(resume)
    }

    fn detect_format(&self, path: &Path) -> Result<ResumeFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AtsError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(ResumeFormat::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
