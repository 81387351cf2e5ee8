use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::tool_config::ToolConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    #[serde(default = "ConfigHelper::default_linter", deserialize_with = "ConfigHelper::linter_section")]
    pub linter: ToolConfig,

    #[serde(default = "ConfigHelper::default_style_checker", deserialize_with = "ConfigHelper::style_checker_section")]
    pub style_checker: ToolConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            linter: ConfigHelper::default_linter(),
            style_checker: ConfigHelper::default_style_checker(),
        }
    }
}
