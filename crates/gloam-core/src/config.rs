//! Viewer configuration: a small JSON file with defaults for every
//! field, so no file at all is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gloam_logic::content::{validate_content, ManorContent};
use gloam_logic::tiers::PerfTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Forced performance tier; probed from the window when absent.
    pub tier: Option<PerfTier>,
    /// JSON content file replacing the built-in manor copy.
    pub content_path: Option<PathBuf>,
    /// Portrait image for the hall frame.
    pub portrait_path: Option<PathBuf>,
    /// Deadline for the portrait load, in milliseconds.
    pub portrait_deadline_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tier: None,
            content_path: None,
            portrait_path: None,
            portrait_deadline_ms: 1500,
            window_width: 1280.0,
            window_height: 720.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config io error: {}", e),
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ViewerConfig {
    /// Read a config file; a missing file means the defaults, a present
    /// but malformed one is an error worth surfacing.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Manor content from `content_path` when set, readable, and valid;
    /// the built-in copy otherwise. Bad external content never reaches a
    /// session.
    pub fn load_content(&self) -> ManorContent {
        let path = match &self.content_path {
            Some(path) => path,
            None => return ManorContent::default(),
        };
        let content = match read_content(path) {
            Ok(content) => content,
            Err(err) => {
                log::info!("content file {} unreadable ({}), using built-in copy", path.display(), err);
                return ManorContent::default();
            }
        };
        let problems = validate_content(&content);
        if problems.is_empty() {
            return content;
        }
        for problem in &problems {
            log::debug!("content rejected: {}", problem);
        }
        log::info!(
            "content file {} rejected ({} problems), using built-in copy",
            path.display(),
            problems.len()
        );
        ManorContent::default()
    }
}

fn read_content(path: &Path) -> Result<ManorContent, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let config = ViewerConfig::load_or_default(Path::new("/nonexistent/gloam.json")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let path = std::env::temp_dir().join("gloam_config_partial.json");
        fs::write(&path, r#"{ "tier": "Low", "window_width": 900.0 }"#).unwrap();
        let config = ViewerConfig::load_or_default(&path).unwrap();
        assert_eq!(config.tier, Some(PerfTier::Low));
        assert_eq!(config.window_width, 900.0);
        assert_eq!(config.window_height, ViewerConfig::default().window_height);
        assert_eq!(config.portrait_deadline_ms, 1500);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let path = std::env::temp_dir().join("gloam_config_bad.json");
        fs::write(&path, "{ tier: nonsense").unwrap();
        let result = ViewerConfig::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unreadable_content_falls_back() {
        let config = ViewerConfig {
            content_path: Some(PathBuf::from("/nonexistent/content.json")),
            ..Default::default()
        };
        assert_eq!(config.load_content(), ManorContent::default());
    }

    #[test]
    fn test_valid_content_file_is_used() {
        let path = std::env::temp_dir().join("gloam_content_valid.json");
        let mut content = ManorContent::default();
        content.resident.title = "A Different Resident".to_string();
        fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();
        let config = ViewerConfig { content_path: Some(path.clone()), ..Default::default() };
        assert_eq!(config.load_content().resident.title, "A Different Resident");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let path = std::env::temp_dir().join("gloam_content_invalid.json");
        let mut content = ManorContent::default();
        content.archive.clear();
        fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();
        let config = ViewerConfig { content_path: Some(path.clone()), ..Default::default() };
        assert_eq!(config.load_content(), ManorContent::default());
        let _ = fs::remove_file(&path);
    }
}
