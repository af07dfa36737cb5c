use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use universo_platformo::config::ServerConfig;
use universo_platformo::core::application::Application;
use universo_platformo::core::http::HttpResponse;
use universo_platformo::core::RouteRequest;
use universo_platformo::{ApplicationServer, PlatformError, Result};

/// 每個請求都回傳錯誤的應用程式
struct FailingApplication;

#[async_trait]
impl Application for FailingApplication {
    fn name(&self) -> &str {
        "FailingApplication"
    }

    async fn handle(&self, _request: &RouteRequest) -> Result<HttpResponse> {
        let broken = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        Err(PlatformError::SerializationError(broken))
    }
}

fn test_server_config(shutdown_grace_seconds: u64) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        shutdown_grace_seconds,
    }
}

#[tokio::test]
async fn test_handler_error_returns_500_and_keeps_serving() {
    let server = ApplicationServer::bind(FailingApplication, &test_server_config(1))
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve_with_shutdown(async {
        let _ = shutdown_rx.await;
    }));

    let client = reqwest::Client::new();
    for _ in 0..2 {
        let response = client
            .get(format!("http://{}/anything", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(response.text().await.unwrap(), "Internal Server Error");
    }

    shutdown_tx.send(()).unwrap();
    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_shutdown_waits_at_most_grace_period() {
    let server = ApplicationServer::bind(FailingApplication, &test_server_config(1))
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve_with_shutdown(async {
        let _ = shutdown_rx.await;
    }));

    // 只送出一半的請求，連線會一直停在讀取標頭
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let started = Instant::now();
    shutdown_tx.send(()).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should stop after the grace period")
        .unwrap();
    let elapsed = started.elapsed();

    assert!(result.is_ok());
    assert!(elapsed < Duration::from_secs(3), "took {:?}", elapsed);

    drop(stream);
}
