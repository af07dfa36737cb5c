use crate::core::http::HttpResponse;
use crate::domain::model::RouteRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 由 `ApplicationServer` 承載的應用程式
#[async_trait]
pub trait Application: Send + Sync + 'static {
    fn name(&self) -> &str;
    async fn handle(&self, request: &RouteRequest) -> Result<HttpResponse>;
}
