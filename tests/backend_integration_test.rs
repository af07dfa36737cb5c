use universo_platformo::config::ServerConfig;
use universo_platformo::{ApplicationServer, CoreServerApplication};

#[tokio::test]
async fn test_backend_health_and_default_errors() {
    let config = ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        shutdown_grace_seconds: 1,
    };
    let server = ApplicationServer::bind(CoreServerApplication::new(), &config)
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve_with_shutdown(async {
        let _ = shutdown_rx.await;
    }));

    let client = reqwest::Client::new();

    let health: serde_json::Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, serde_json::json!({"status": "UP"}));

    let missing = client
        .get(format!("http://{}/api/unknown", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    assert_eq!(missing.headers()["content-type"], "application/json");

    let body: serde_json::Value = missing.json().await.unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["path"], "/api/unknown");

    shutdown_tx.send(()).unwrap();
    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let config = ServerConfig {
        address: "127.0.0.1".to_string(),
        port,
        shutdown_grace_seconds: 1,
    };
    let result = ApplicationServer::bind(CoreServerApplication::new(), &config).await;

    match result {
        Err(e) => {
            assert!(matches!(e, universo_platformo::PlatformError::BindError { .. }));
            assert_eq!(e.severity().exit_code(), 3);
        }
        Ok(_) => panic!("binding an occupied port should fail"),
    }
}
