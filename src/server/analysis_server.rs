use std::convert::Infallible;
use std::future::Future;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use warp::Filter;
use crate::errors::{QualyzerError, QualyzerResult};
use crate::server::handlers::{analyze_handler, handle_rejection, health_handler};
use crate::server::json_body::json_body;
use crate::services::report_service::ReportService;
use crate::structs::config::server_config::ServerConfig;

pub struct AnalysisServer {
    service: Arc<ReportService>,
    config: ServerConfig,
}

impl AnalysisServer {
    pub fn new(service: Arc<ReportService>, config: ServerConfig) -> Self {
        Self { service, config }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        routes(Arc::clone(&self.service), self.config.max_body_bytes)
    }

    pub fn address(&self) -> QualyzerResult<SocketAddr> {
        let display = format!("{}:{}", self.config.host, self.config.port);
        (self.config.host.as_str(), self.config.port)
            .to_socket_addrs()
            .map_err(|e| QualyzerError::server_error(&display, &e.to_string()))?
            .next()
            .ok_or_else(|| QualyzerError::server_error(&display, "host did not resolve to any address"))
    }

    /// Binds the listener and returns the bound address with the serving
    /// future, which completes once `shutdown` resolves.
    pub fn bind(
        &self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> QualyzerResult<(SocketAddr, impl Future<Output = ()> + Send + 'static)> {
        let addr = self.address()?;
        warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .map_err(|e| QualyzerError::server_error(&addr.to_string(), &e.to_string()))
    }

    pub async fn run(&self, shutdown: impl Future<Output = ()> + Send + 'static) -> QualyzerResult<()> {
        let (addr, server) = self.bind(shutdown)?;
        log::info!("🌐 Analysis server listening on http://{}", addr);

        server.await;

        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }
}

pub fn routes(
    service: Arc<ReportService>,
    max_body_bytes: u64,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let service_filter = warp::any().map(move || Arc::clone(&service));

    let analyze = warp::path!("analyze")
        .and(warp::post())
        .and(json_body(max_body_bytes))
        .and(service_filter)
        .and_then(analyze_handler);

    let health = warp::path!("health")
        .and(warp::get())
        .and_then(health_handler);

    // Inner recover: route errors still pass through CORS. Outer: forbidden preflights.
    analyze
        .or(health)
        .recover(handle_rejection)
        .with(warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST"]))
        .recover(handle_rejection)
        .with(warp::log("qualyzer::access"))
}
