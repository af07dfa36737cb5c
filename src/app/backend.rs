use crate::config::Settings;
use crate::core::application::Application;
use crate::core::http::{self, HttpResponse};
use crate::core::server::ApplicationServer;
use crate::domain::model::RouteRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use hyper::StatusCode;
use serde::Serialize;

pub const HEALTH_ROUTE: &str = "health";

/// Core backend application: base infrastructure for backend services.
/// Owns no business routes, only the health probe and default error bodies.
#[derive(Debug, Clone, Default)]
pub struct CoreServerApplication;

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// 預設錯誤回應內容
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub path: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, path: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            path: path.to_string(),
        }
    }
}

impl CoreServerApplication {
    pub fn new() -> Self {
        Self
    }

    fn error(&self, status: StatusCode, request: &RouteRequest) -> Result<HttpResponse> {
        http::json(status, &ErrorBody::new(status, &request.path))
    }
}

#[async_trait]
impl Application for CoreServerApplication {
    fn name(&self) -> &str {
        "CoreServerApplication"
    }

    async fn handle(&self, request: &RouteRequest) -> Result<HttpResponse> {
        match request.route() {
            HEALTH_ROUTE if request.is_read() => {
                http::json(StatusCode::OK, &HealthStatus { status: "UP" })
            }
            HEALTH_ROUTE => Ok(http::with_allow(
                self.error(StatusCode::METHOD_NOT_ALLOWED, request)?,
                "GET, HEAD",
            )),
            _ => self.error(StatusCode::NOT_FOUND, request),
        }
    }
}

/// Backend bootstrap: bind and serve until ctrl-c.
pub async fn run_core_server(settings: &Settings) -> Result<()> {
    let server = ApplicationServer::bind(CoreServerApplication::new(), &settings.server).await?;
    server.serve().await
}
