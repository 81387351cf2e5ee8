pub mod commands;
pub mod tool_invocation_error;
pub mod verdict;
