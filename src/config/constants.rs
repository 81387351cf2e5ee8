use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

pub const CONFIG_DIR_NAME: &str = "qualyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LINTER_PROGRAM: &str = "pylint";
pub const DEFAULT_LINTER_ARGS: &[&str] = &[
    FILE_PLACEHOLDER,
    "--disable=all",
    "--enable=unused-import,missing-docstring",
];
pub const DEFAULT_STYLE_CHECKER_PROGRAM: &str = "flake8";
pub const DEFAULT_STYLE_CHECKER_ARGS: &[&str] = &[FILE_PLACEHOLDER];
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// Replaced with the temporary source path when a tool is launched.
pub const FILE_PLACEHOLDER: &str = "{file}";

pub const DEFAULT_SOURCE_SUFFIX: &str = ".py";
pub const TEMP_FILE_PREFIX: &str = "qualyzer-";

// Wire names of the two report detail slots.
pub const LINTER_REPORT_KEY: &str = "pylint";
pub const STYLE_CHECKER_REPORT_KEY: &str = "flake8";

pub const DEFAULT_BASE_SCORE: u32 = 100;
pub const DEFAULT_ISSUE_PENALTY: u32 = 10;
pub const DEFAULT_SCORE_FLOOR: u32 = 40;
pub const DEFAULT_GOOD_QUALITY_THRESHOLD: u32 = 80;

/// Diagnostic field separator (`file:line:col: message`).
pub const ISSUE_SEPARATOR: char = ':';

pub const NO_CODE_PROVIDED: &str = "No code provided";
pub const HEALTH_STATUS_RUNNING: &str = "running";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
