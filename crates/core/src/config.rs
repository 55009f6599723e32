use crate::error::{Result, SummaryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "structscope.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    pub format: OutputFormat,
    pub log_filter: String,
    pub log_dir: Option<PathBuf>,
    pub log_to_stderr: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_filter: "info".to_string(),
            log_dir: None,
            log_to_stderr: false,
        }
    }
}

impl SummaryConfig {
    /// Loads `path`, or `structscope.json` in the working directory when
    /// `path` is `None`. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(SummaryError::Config("log_filter must not be empty".into()));
        }
        Ok(())
    }

    /// The configured log directory, or `~/.structscope/logs`.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".structscope/logs")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_fields_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "format": "json" }}"#).unwrap();

        let config = SummaryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "info");
        assert!(!config.log_to_stderr);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "colour": true }}"#).unwrap();

        assert!(matches!(
            SummaryConfig::from_file(file.path()),
            Err(SummaryError::Json(_))
        ));
    }

    #[test]
    fn test_empty_filter_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "log_filter": "  " }}"#).unwrap();

        assert!(matches!(
            SummaryConfig::from_file(file.path()),
            Err(SummaryError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            SummaryConfig::load(Some(&missing)),
            Err(SummaryError::Io(_))
        ));
    }

    #[test]
    fn test_explicit_log_dir_wins() {
        let config = SummaryConfig {
            log_dir: Some(PathBuf::from("/tmp/logs")),
            ..SummaryConfig::default()
        };
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/tmp/logs"));
    }
}
