use crate::config::constants::{
    DEFAULT_BASE_SCORE, DEFAULT_GOOD_QUALITY_THRESHOLD, DEFAULT_ISSUE_PENALTY, DEFAULT_LINTER_ARGS,
    DEFAULT_LINTER_PROGRAM, DEFAULT_MAX_BODY_BYTES, DEFAULT_SCORE_FLOOR, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SOURCE_SUFFIX, DEFAULT_STYLE_CHECKER_ARGS,
    DEFAULT_STYLE_CHECKER_PROGRAM, DEFAULT_TOOL_TIMEOUT_SECS,
};
use serde::{Deserialize, Deserializer};
use crate::structs::config::tool_config::{ToolConfig, ToolOverrides};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub const fn default_max_body_bytes() -> u64 {
        DEFAULT_MAX_BODY_BYTES
    }

    pub fn default_linter() -> ToolConfig {
        ToolConfig {
            program: DEFAULT_LINTER_PROGRAM.to_string(),
            args: DEFAULT_LINTER_ARGS.iter().map(ToString::to_string).collect(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }

    pub fn default_style_checker() -> ToolConfig {
        ToolConfig {
            program: DEFAULT_STYLE_CHECKER_PROGRAM.to_string(),
            args: DEFAULT_STYLE_CHECKER_ARGS.iter().map(ToString::to_string).collect(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }

    pub fn linter_section<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ToolConfig, D::Error> {
        ToolOverrides::deserialize(deserializer).map(|o| Self::default_linter().with_overrides(o))
    }

    pub fn style_checker_section<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ToolConfig, D::Error> {
        ToolOverrides::deserialize(deserializer).map(|o| Self::default_style_checker().with_overrides(o))
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_TOOL_TIMEOUT_SECS
    }

    pub fn default_file_suffix() -> String {
        DEFAULT_SOURCE_SUFFIX.to_string()
    }

    pub const fn default_base_score() -> u32 {
        DEFAULT_BASE_SCORE
    }

    pub const fn default_issue_penalty() -> u32 {
        DEFAULT_ISSUE_PENALTY
    }

    pub const fn default_score_floor() -> u32 {
        DEFAULT_SCORE_FLOOR
    }

    pub const fn default_good_quality_threshold() -> u32 {
        DEFAULT_GOOD_QUALITY_THRESHOLD
    }
}
