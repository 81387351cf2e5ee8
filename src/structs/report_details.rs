use serde::{Deserialize, Serialize};

/// Trimmed raw output of each tool, keyed by the wire names clients expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetails {
    #[serde(rename = "pylint")]
    pub linter: String,
    #[serde(rename = "flake8")]
    pub style_checker: String,
}
