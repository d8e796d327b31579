//! Resume file format detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Json,
    Toml,
    Unknown,
}

impl ResumeFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => ResumeFormat::Json,
            "toml" => ResumeFormat::Toml,
            _ => ResumeFormat::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(ResumeFormat::from_extension("json"), ResumeFormat::Json);
        assert_eq!(ResumeFormat::from_extension("JSON"), ResumeFormat::Json);
        assert_eq!(ResumeFormat::from_extension("toml"), ResumeFormat::Toml);
        assert_eq!(ResumeFormat::from_extension("pdf"), ResumeFormat::Unknown);
    }
}
