use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use qualyzer::server::analysis_server::AnalysisServer;
use qualyzer::services::report_service::ReportService;
use qualyzer::structs::config::config::Config;
use qualyzer::structs::config::tool_config::ToolConfig;

struct RunningServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl RunningServer {
    fn start(mut config: Config, temp_dir: &Path) -> Self {
        config.server.port = 0;
        config.analysis.temp_dir = Some(temp_dir.to_path_buf());

        let service = Arc::new(ReportService::from_config(&config));
        let server = AnalysisServer::new(service, config.server);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (addr, serving) = server
            .bind(async {
                shutdown_rx.await.ok();
            })
            .unwrap();

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle: tokio::spawn(serving),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn post_code(&self, payload: Value) -> (u16, Value) {
        let response = reqwest::Client::new()
            .post(self.url("/analyze"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            tx.send(()).ok();
        }
        self.handle.await.unwrap();
    }
}

fn shell_tool(script: &str) -> ToolConfig {
    ToolConfig {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string(), "{file}".to_string()],
        timeout_secs: 10,
    }
}

fn missing_tool(name: &str) -> ToolConfig {
    ToolConfig {
        program: name.to_string(),
        args: vec![],
        timeout_secs: 10,
    }
}

fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[tokio::test]
async fn health_is_always_running() {
    let dir = tempfile::tempdir().unwrap();
    let server = RunningServer::start(Config::default(), dir.path());

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({ "status": "running" }));

    server.stop().await;
}

#[tokio::test]
async fn empty_code_creates_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let server = RunningServer::start(Config::default(), dir.path());

    for payload in [json!({ "code": "  \n " }), json!({ "other": 1 })] {
        let (status, body) = server.post_code(payload).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "No code provided" }));
    }
    assert_eq!(file_count(dir.path()), 0);

    server.stop().await;
}

#[tokio::test]
async fn unavailable_tools_are_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.linter = missing_tool("qualyzer-test-missing-linter");
    config.tools.style_checker = missing_tool("qualyzer-test-missing-style");
    let server = RunningServer::start(config, dir.path());

    let (status, body) = server.post_code(json!({ "code": "import os\n" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["summary"]["total_issues"], json!(0));
    assert_eq!(body["summary"]["quality_score"], json!(100));
    assert!(body["errors"]["pylint"].as_str().unwrap().contains("qualyzer-test-missing-linter"));
    assert!(body["errors"]["flake8"].as_str().unwrap().contains("qualyzer-test-missing-style"));
    assert_eq!(file_count(dir.path()), 0);

    server.stop().await;
}

#[cfg(unix)]
#[tokio::test]
async fn three_diagnostics_need_improvement() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.linter = shell_tool("printf 'a:b\\n'");
    config.tools.style_checker = shell_tool("printf 'c:d\\n' >&2; printf 'e:'");
    let server = RunningServer::start(config, dir.path());

    let (status, body) = server.post_code(json!({ "code": "x=1\n" })).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "summary": { "quality_score": 70, "total_issues": 3, "verdict": "Needs Improvement" },
            "details": { "pylint": "a:b", "flake8": "e:c:d" }
        })
    );

    server.stop().await;
}

#[cfg(unix)]
#[tokio::test]
async fn many_diagnostics_clamp_at_floor() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.linter = shell_tool("printf '%s:1:0: C0114: Missing module docstring\\n' \"$0\"");
    config.tools.style_checker = shell_tool("printf '%s:1:1: F401 unused\\n%s:2:1: E302 expected\\n' \"$0\" \"$0\"");
    let server = RunningServer::start(config, dir.path());

    let (status, body) = server.post_code(json!({ "code": "import os\nx=1\n" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["summary"]["total_issues"], json!(10));
    assert_eq!(body["summary"]["quality_score"], json!(40));
    assert_eq!(body["summary"]["verdict"], json!("Needs Improvement"));
    assert!(body["details"]["pylint"].as_str().unwrap().ends_with(".py:1:0: C0114: Missing module docstring"));
    assert!(body.get("errors").is_none());
    assert_eq!(file_count(dir.path()), 0);

    server.stop().await;
}

#[cfg(unix)]
#[tokio::test]
async fn tools_read_the_submitted_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.linter = shell_tool("cat \"$0\"");
    config.tools.style_checker = shell_tool("true");
    let server = RunningServer::start(config, dir.path());

    let (status, body) = server.post_code(json!({ "code": "\"\"\"Module doc.\"\"\"\n" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["details"]["pylint"], json!("\"\"\"Module doc.\"\"\""));
    assert_eq!(body["summary"]["verdict"], json!("Good Quality"));

    server.stop().await;
}

#[cfg(unix)]
#[tokio::test]
async fn timed_out_tool_does_not_hang_the_request() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.linter = ToolConfig {
        timeout_secs: 1,
        ..shell_tool("sleep 30")
    };
    config.tools.style_checker = shell_tool("true");
    let server = RunningServer::start(config, dir.path());

    let (status, body) = server.post_code(json!({ "code": "x = 1\n" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["errors"]["pylint"], json!("`sh` timed out after 1000ms"));
    assert_eq!(file_count(dir.path()), 0);

    server.stop().await;
}
