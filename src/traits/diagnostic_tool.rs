use std::path::Path;
use async_trait::async_trait;
use crate::enums::tool_invocation_error::ToolInvocationError;
use crate::structs::diagnostic_text::DiagnosticText;

#[async_trait]
pub trait DiagnosticTool: Send + Sync {

    fn name(&self) -> &str;

    async fn run(&self, source_path: &Path) -> Result<DiagnosticText, ToolInvocationError>;
}
