use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;
use crate::config::constants::{LINTER_REPORT_KEY, STYLE_CHECKER_REPORT_KEY, TEMP_FILE_PREFIX};
use crate::enums::tool_invocation_error::ToolInvocationError;
use crate::errors::{QualyzerError, QualyzerResult};
use crate::services::external_tool::ExternalTool;
use crate::services::quality_scorer::QualityScorer;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::config::config::Config;
use crate::structs::diagnostic_text::DiagnosticText;
use crate::structs::report_details::ReportDetails;
use crate::traits::diagnostic_tool::DiagnosticTool;

/// Writes a snippet to a scoped temporary file, runs both diagnostic tools
/// on it and scores the combined output.
pub struct ReportService {
    linter: Arc<dyn DiagnosticTool>,
    style_checker: Arc<dyn DiagnosticTool>,
    scorer: QualityScorer,
    file_suffix: String,
    temp_dir: Option<PathBuf>,
}

impl ReportService {
    pub fn new(
        linter: Arc<dyn DiagnosticTool>,
        style_checker: Arc<dyn DiagnosticTool>,
        scorer: QualityScorer,
        file_suffix: impl Into<String>,
    ) -> Self {
        Self {
            linter,
            style_checker,
            scorer,
            file_suffix: file_suffix.into(),
            temp_dir: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ExternalTool::from_config(&config.tools.linter)),
            Arc::new(ExternalTool::from_config(&config.tools.style_checker)),
            QualityScorer::new(config.scoring),
            config.analysis.file_suffix.clone(),
        )
        .with_temp_dir(config.analysis.temp_dir.clone())
    }

    #[must_use]
    pub fn with_temp_dir(mut self, temp_dir: Option<PathBuf>) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    pub async fn analyze(&self, code: &str) -> QualyzerResult<AnalysisReport> {
        let source = self.write_source(code)?;
        log::debug!("📝 Wrote {} bytes to {}", code.len(), source.path().display());

        let (linter_result, style_result) = tokio::join!(
            self.linter.run(source.path()),
            self.style_checker.run(source.path()),
        );

        let mut errors = BTreeMap::new();
        let linter_output = Self::collect(LINTER_REPORT_KEY, self.linter.name(), linter_result, &mut errors);
        let style_output = Self::collect(STYLE_CHECKER_REPORT_KEY, self.style_checker.name(), style_result, &mut errors);

        let details = ReportDetails {
            linter: linter_output.trimmed(),
            style_checker: style_output.trimmed(),
        };
        let summary = self.scorer.summarize([
            &DiagnosticText::new(details.linter.as_str()),
            &DiagnosticText::new(details.style_checker.as_str()),
        ]);

        let path = source.path().to_path_buf();
        if let Err(e) = source.close() {
            log::warn!("⚠️ Failed to remove temporary file {}: {}", path.display(), e);
        }

        Ok(AnalysisReport {
            summary,
            details,
            errors,
        })
    }

    fn write_source(&self, code: &str) -> QualyzerResult<NamedTempFile> {
        let location = self
            .temp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(&self.file_suffix)
            .tempfile_in(&location)
            .map_err(|e| QualyzerError::file_error(&location.to_string_lossy(), "create", &e.to_string()))?;

        file.write_all(code.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| QualyzerError::file_error(&file.path().to_string_lossy(), "write", &e.to_string()))?;

        Ok(file)
    }

    fn collect(
        key: &str,
        tool_name: &str,
        result: Result<DiagnosticText, ToolInvocationError>,
        errors: &mut BTreeMap<String, String>,
    ) -> DiagnosticText {
        match result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("❌ {} could not be run: {}", tool_name, e);
                errors.insert(key.to_string(), e.to_string());
                DiagnosticText::default()
            }
        }
    }
}
