use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use crate::config::constants::{timeout_duration_secs, FILE_PLACEHOLDER};
use crate::enums::tool_invocation_error::ToolInvocationError;
use crate::structs::config::tool_config::ToolConfig;
use crate::structs::diagnostic_text::DiagnosticText;
use crate::traits::diagnostic_tool::DiagnosticTool;

/// A diagnostic program launched as a subprocess for each analysis.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ExternalTool {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone(), timeout_duration_secs(config.timeout_secs))
    }

    pub fn command_args(&self, source_path: &Path) -> Vec<OsString> {
        if !self.args.iter().any(|arg| arg.contains(FILE_PLACEHOLDER)) {
            let mut args = Vec::with_capacity(self.args.len() + 1);
            args.push(source_path.as_os_str().to_owned());
            args.extend(self.args.iter().map(OsString::from));
            return args;
        }

        self.args
            .iter()
            .map(|arg| {
                if arg == FILE_PLACEHOLDER {
                    source_path.as_os_str().to_owned()
                } else {
                    OsString::from(arg.replace(FILE_PLACEHOLDER, &source_path.to_string_lossy()))
                }
            })
            .collect()
    }

    fn spawn_error(&self, error: &std::io::Error) -> ToolInvocationError {
        match error.kind() {
            ErrorKind::NotFound => ToolInvocationError::NotFound {
                program: self.program.clone(),
            },
            _ => ToolInvocationError::Spawn {
                program: self.program.clone(),
                reason: error.to_string(),
            },
        }
    }
}

#[async_trait]
impl DiagnosticTool for ExternalTool {
    fn name(&self) -> &str {
        &self.program
    }

    async fn run(&self, source_path: &Path) -> Result<DiagnosticText, ToolInvocationError> {
        let started = Instant::now();

        let child = Command::new(&self.program)
            .args(self.command_args(source_path))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(&e))?;

        match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                log::debug!(
                    "🔧 {} finished with {} in {}ms",
                    self.program,
                    output.status,
                    started.elapsed().as_millis()
                );
                Ok(DiagnosticText::from_streams(&output.stdout, &output.stderr))
            }
            Ok(Err(e)) => Err(ToolInvocationError::Io {
                program: self.program.clone(),
                reason: e.to_string(),
            }),
            Err(_) => {
                log::warn!("⏰ {} timed out after {:?}, killing it", self.program, self.timeout);
                Err(ToolInvocationError::TimedOut {
                    program: self.program.clone(),
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                })
            }
        }
    }
}
