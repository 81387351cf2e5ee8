use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_file_suffix")]
    pub file_suffix: String,

    /// Falls back to the platform temp directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file_suffix: ConfigHelper::default_file_suffix(),
            temp_dir: None,
        }
    }
}
