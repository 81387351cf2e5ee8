use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, FILE_PLACEHOLDER};
use crate::errors::{QualyzerError, QualyzerResult};
use crate::structs::config::config::Config;
use crate::structs::config::tool_config::ToolConfig;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path` when given, otherwise the per-user config file if it
    /// exists, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> QualyzerResult<Config> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> QualyzerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| QualyzerError::config_file_error(&path.to_string_lossy(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn sample_config() -> QualyzerResult<String> {
        let body = toml::to_string_pretty(&Config::default())?;
        Ok(format!(
            "# Qualyzer configuration\n\
             #\n\
             # Tool args may contain {FILE_PLACEHOLDER}, replaced by the temporary source\n\
             # file path. Without it the path is passed as the first argument.\n\
             # Keys left out of a [tools.*] section keep that tool's default.\n\
             # Score = max(base_score - issues * issue_penalty, score_floor);\n\
             # scores at or above good_quality_threshold are \"Good Quality\".\n\n\
             {body}"
        ))
    }

    pub fn create_sample_config(path: &Path) -> QualyzerResult<()> {
        if path.exists() {
            return Err(QualyzerError::config_file_error(
                &path.to_string_lossy(),
                "file already exists",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| QualyzerError::file_error(&parent.to_string_lossy(), "create directory", &e.to_string()))?;
        }

        fs::write(path, Self::sample_config()?)
            .map_err(|e| QualyzerError::file_error(&path.to_string_lossy(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        if config.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }
        if config.server.max_body_bytes == 0 {
            errors.push("server.max_body_bytes must be non-zero".to_string());
        }

        Self::validate_tool("tools.linter", &config.tools.linter, &mut errors);
        Self::validate_tool("tools.style_checker", &config.tools.style_checker, &mut errors);

        if !config.analysis.file_suffix.is_empty() && !config.analysis.file_suffix.starts_with('.') {
            errors.push(format!(
                "analysis.file_suffix '{}' must start with '.'",
                config.analysis.file_suffix
            ));
        }
        if let Some(temp_dir) = &config.analysis.temp_dir {
            if !temp_dir.is_dir() {
                errors.push(format!("analysis.temp_dir does not exist: {}", temp_dir.display()));
            }
        }

        let scoring = &config.scoring;
        if scoring.score_floor > scoring.base_score {
            errors.push(format!(
                "scoring.score_floor ({}) must not exceed scoring.base_score ({})",
                scoring.score_floor, scoring.base_score
            ));
        }
        if scoring.good_quality_threshold > scoring.base_score {
            errors.push(format!(
                "scoring.good_quality_threshold ({}) must not exceed scoring.base_score ({})",
                scoring.good_quality_threshold, scoring.base_score
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn validation_error(errors: Vec<String>) -> QualyzerError {
        QualyzerError::MultipleErrors {
            errors: errors
                .into_iter()
                .map(|e| QualyzerError::config_error(&e, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        }
    }

    fn validate_tool(section: &str, tool: &ToolConfig, errors: &mut Vec<String>) {
        if tool.program.trim().is_empty() {
            errors.push(format!("{section}.program must not be empty"));
        }
        if tool.timeout_secs == 0 {
            errors.push(format!("{section}.timeout_secs must be non-zero"));
        }

        let mut seen = HashSet::new();
        for arg in &tool.args {
            if arg.is_empty() {
                errors.push(format!("{section}.args contains an empty argument"));
            } else if !seen.insert(arg) {
                log::warn!("⚠️ {} passes '{}' more than once", section, arg);
            }
        }
    }

    /// Looks `program` up the way the OS would when spawning it.
    pub fn resolve_program(program: &str) -> Option<PathBuf> {
        let candidate = Path::new(program);
        if candidate.components().count() > 1 {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }

        let path_var = std::env::var_os("PATH")?;
        std::env::split_paths(&path_var)
            .map(|segment| segment.join(program))
            .find(|candidate| candidate.is_file())
    }
}
