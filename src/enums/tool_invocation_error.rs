use thiserror::Error;

/// A tool that could not produce diagnostics at all. Non-zero exit codes are
/// not errors: linters report findings that way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolInvocationError {
    #[error("`{program}` was not found on PATH")]
    NotFound { program: String },

    #[error("failed to launch `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    #[error("failed to collect output of `{program}`: {reason}")]
    Io { program: String, reason: String },

    #[error("`{program}` timed out after {timeout_ms}ms")]
    TimedOut { program: String, timeout_ms: u64 },
}
