use serde::{Deserialize, Serialize};

/// One external diagnostic program. `args` may contain the `{file}`
/// placeholder; without it the source path is passed as the first argument.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

/// A `[tools.*]` section as written in the file. Keys left out keep the
/// value of that section's default tool.
#[derive(Debug, Default, Deserialize)]
pub struct ToolOverrides {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
}

impl ToolConfig {
    #[must_use]
    pub fn with_overrides(self, overrides: ToolOverrides) -> Self {
        Self {
            program: overrides.program.unwrap_or(self.program),
            args: overrides.args.unwrap_or(self.args),
            timeout_secs: overrides.timeout_secs.unwrap_or(self.timeout_secs),
        }
    }
}
