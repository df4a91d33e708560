use crate::core::dirs::get_config_file;
use crate::core::error::PorcelainError;
use crate::core::templates::DEFAULT_TEMPLATE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SHORT_COMMIT_LEN: usize = 7;
pub const DEFAULT_LOG_FILE: &str = "/tmp/porcelain.log";

/// User settings read from `config.json`; the file is never written
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    pub template: String,
    pub short_commit_len: usize,
    /// Overrides git's `init.defaultBranch` for repositories without commits
    pub initial_branch: Option<String>,
    /// Treat a merge in progress as unmerged even when no entry is conflicted
    pub merge_marker_fallback: bool,
    pub log_file: PathBuf,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            short_commit_len: DEFAULT_SHORT_COMMIT_LEN,
            initial_branch: None,
            merge_marker_fallback: true,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl PromptConfig {
    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self, PorcelainError> {
        match get_config_file() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                log::debug!("no config directory: {e}");
                Ok(Self::default())
            }
        }
    }

    pub fn load_or_default(path: &Path) -> Result<Self, PorcelainError> {
        if !path.exists() {
            log::debug!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self, PorcelainError> {
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| PorcelainError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| PorcelainError::config_parse_failed(path, e))
    }
}
