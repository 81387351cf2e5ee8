use crate::config::constants::ISSUE_SEPARATOR;

/// Combined stdout and stderr of one tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticText(String);

impl DiagnosticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_streams(stdout: &[u8], stderr: &[u8]) -> Self {
        let mut text = String::from_utf8_lossy(stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(stderr));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of field separators in the output, used as the issue count.
    pub fn issue_count(&self) -> u32 {
        let count = self.0.chars().filter(|c| *c == ISSUE_SEPARATOR).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    pub fn trimmed(&self) -> String {
        self.0.trim().to_string()
    }
}
