use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::NO_CODE_PROVIDED;
use crate::enums::commands::Commands;
use crate::errors::{QualyzerError, QualyzerResult};
use crate::server::analysis_server::AnalysisServer;
use crate::services::report_service::ReportService;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> QualyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Check { file } => self.check_command(&file).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>) -> QualyzerResult<()> {
        let mut config = ConfigManager::load(self.config_path.as_deref())?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        ConfigManager::validate_config(&config).map_err(ConfigManager::validation_error)?;

        Self::warn_about_missing_tools(&config);

        let service = Arc::new(ReportService::from_config(&config));
        let server = AnalysisServer::new(service, config.server);

        server.run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("❌ Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            log::info!("🛑 Shutting down analysis server...");
        }).await
    }

    fn init_command(&self) -> QualyzerResult<()> {
        log::info!("🚀 Initializing qualyzer configuration...");

        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => ConfigManager::default_config_path().ok_or_else(|| {
                QualyzerError::config_error(
                    "Could not determine home directory",
                    None,
                    Some("Pass --config <PATH> to choose where to write the file"),
                )
            })?,
        };

        ConfigManager::create_sample_config(&path)?;
        log::info!("🔧 Run 'qualyzer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> QualyzerResult<()> {
        let config = self.load_valid_config()?;
        log::info!("✅ Configuration is valid");

        let missing = Self::warn_about_missing_tools(&config);
        if missing > 0 {
            return Err(QualyzerError::validation_error(
                "tools",
                &format!("{missing} missing"),
                "every configured tool must be installed",
                Some("Install the tools or point tools.*.program at their location"),
            ));
        }

        Ok(())
    }

    async fn check_command(&self, file: &Path) -> QualyzerResult<()> {
        let config = self.load_valid_config()?;

        let code = fs::read_to_string(file)
            .map_err(|e| QualyzerError::file_error(&file.to_string_lossy(), "read", &e.to_string()))?;
        let report = Self::analyze_code(&ReportService::from_config(&config), &code).await?;

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    pub async fn analyze_code(service: &ReportService, code: &str) -> QualyzerResult<AnalysisReport> {
        if code.trim().is_empty() {
            return Err(QualyzerError::validation_error("code", "", NO_CODE_PROVIDED, None));
        }

        service.analyze(code).await
    }

    fn load_valid_config(&self) -> QualyzerResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config).map_err(ConfigManager::validation_error)?;
        Ok(config)
    }

    fn warn_about_missing_tools(config: &Config) -> usize {
        [&config.tools.linter, &config.tools.style_checker]
            .into_iter()
            .filter(|tool| match ConfigManager::resolve_program(&tool.program) {
                Some(path) => {
                    log::info!("🔧 {} -> {}", tool.program, path.display());
                    false
                }
                None => {
                    log::warn!("⚠️ {} was not found on PATH; its reports will carry an error", tool.program);
                    true
                }
            })
            .count()
    }
}
