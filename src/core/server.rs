use crate::config::ServerConfig;
use crate::core::application::Application;
use crate::core::http::{self, HttpResponse};
use crate::domain::model::RouteRequest;
use crate::utils::error::{PlatformError, Result};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

/// accept 失敗後重試前的等待時間
pub const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct ApplicationServer<A: Application> {
    application: Arc<A>,
    listener: TcpListener,
    shutdown_grace: Duration,
}

impl<A: Application> ApplicationServer<A> {
    pub async fn bind(application: A, config: &ServerConfig) -> Result<Self> {
        let started = Instant::now();
        let address = config.socket_addr()?;

        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| PlatformError::BindError {
                address: address.to_string(),
                source,
            })?;

        let local_addr = listener.local_addr()?;
        tracing::info!(
            "🚀 Started {} in {:.3} seconds, listening on http://{}",
            application.name(),
            started.elapsed().as_secs_f64(),
            local_addr
        );

        Ok(Self {
            application: Arc::new(application),
            listener,
            shutdown_grace: Duration::from_secs(config.shutdown_grace_seconds),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// 執行到收到 ctrl-c 為止
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let graceful = GracefulShutdown::new();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(connection) => connection,
                        Err(e) => {
                            tracing::warn!("⚠️ Failed to accept connection: {}", e);
                            // EMFILE 之類的錯誤會持續發生
                            tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                            continue;
                        }
                    };
                    tracing::debug!("Accepted connection from {}", peer);

                    let application = Arc::clone(&self.application);
                    let service = service_fn(move |request: Request<Incoming>| {
                        let application = Arc::clone(&application);
                        async move {
                            Ok::<_, Infallible>(dispatch(application.as_ref(), request).await)
                        }
                    });

                    let connection = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service);
                    let connection = graceful.watch(connection);

                    tokio::spawn(async move {
                        if let Err(e) = connection.await {
                            tracing::debug!("Connection from {} closed with error: {}", peer, e);
                        }
                    });
                }
                _ = &mut shutdown => {
                    tracing::info!("🛑 Shutdown requested for {}", self.application.name());
                    break;
                }
            }
        }

        drop(self.listener);

        tokio::select! {
            _ = graceful.shutdown() => {
                tracing::info!("✅ {} stopped", self.application.name());
            }
            _ = tokio::time::sleep(self.shutdown_grace) => {
                tracing::warn!(
                    "⚠️ {} stopped with connections still open after {:?}",
                    self.application.name(),
                    self.shutdown_grace
                );
            }
        }

        Ok(())
    }
}

/// HEAD 的內容由 hyper 丟棄，Content-Length 沿用 GET 的值
async fn dispatch<A: Application + ?Sized>(
    application: &A,
    request: Request<Incoming>,
) -> HttpResponse {
    let started = Instant::now();
    let route_request = RouteRequest::new(request.method().clone(), request.uri().path());

    let response = match application.handle(&route_request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                "❌ {} {} failed: {} (Category: {:?}, Severity: {:?})",
                route_request.method,
                route_request.path,
                e,
                e.category(),
                e.severity()
            );
            http::internal_error()
        }
    };

    tracing::info!(
        "{} {} -> {} ({:?})",
        route_request.method,
        route_request.path,
        response.status().as_u16(),
        started.elapsed()
    );

    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時就一直執行
        std::future::pending::<()>().await;
    }
}
