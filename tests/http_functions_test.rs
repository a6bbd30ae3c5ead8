//! End-to-end tests for the function endpoints over a real socket.

use arith_functions::ServiceConfig;

mod common;

async fn get(server: &common::TestServer, path: &str) -> (u16, String, String) {
    let res = common::client()
        .get(server.url(path))
        .send()
        .await
        .expect("Service unreachable");

    let status = res.status().as_u16();
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = res.text().await.unwrap();
    (status, content_type, body)
}

#[tokio::test]
async fn test_function_scenarios() {
    let server = common::start_server(ServiceConfig::default()).await;

    let cases = [
        ("/api/multiply?A=3&B=4", "12"),
        ("/api/multiply?A=-3&B=-4", "12"),
        ("/api/multiply?B=4", "ERROR: Missing query parameter A"),
        ("/api/multiply?A=3&B=x", "ERROR: Query parameter B must be an integer"),
        ("/api/multiply", "ERROR: Missing query parameter A"),
        ("/api/divide?A=10&B=5", "2"),
        ("/api/divide?A=-10&B=3", "-3"),
        ("/api/divide?A=7&B=-2", "-3"),
        ("/api/divide?A=-8&B=-2", "4"),
        ("/api/divide?A=0&B=0", "ERROR: Division by zero"),
        ("/api/divide?A=7", "ERROR: Missing query parameter B"),
        ("/api/divide?A=3.5&B=2", "ERROR: Query parameter A must be an integer"),
        ("/api/divide?A=&B=2", "ERROR: Query parameter A must be an integer"),
    ];

    for (path, expected) in cases {
        let (status, content_type, body) = get(&server, path).await;
        assert_eq!(status, 200, "{}", path);
        assert_eq!(content_type, "text/plain; charset=utf-8", "{}", path);
        assert_eq!(body, expected, "{}", path);
    }
}

#[tokio::test]
async fn test_percent_encoded_sign() {
    let server = common::start_server(ServiceConfig::default()).await;

    // A bare '+' in a query string decodes to a space.
    let (_, _, body) = get(&server, "/api/multiply?A=%2B6&B=7").await;
    assert_eq!(body, "42");
}

#[tokio::test]
async fn test_custom_prefix() {
    let mut config = ServiceConfig::default();
    config.routes.prefix = String::new();
    let server = common::start_server(config).await;

    let (status, _, body) = get(&server, "/multiply?A=6&B=7").await;
    assert_eq!(status, 200);
    assert_eq!(body, "42");

    let (status, _, _) = get(&server, "/api/multiply?A=6&B=7").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .get(server.url("/api/divide?A=1&B=1"))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "req-42");

    let res = client.get(server.url("/api/divide?A=1&B=1")).send().await.unwrap();
    let generated = res.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&generated).is_ok());
}

#[tokio::test]
async fn test_concurrent_invocations() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..20i64 {
        let client = client.clone();
        let url = server.url(&format!("/api/multiply?A={}&B=-3", i));
        tasks.push(tokio::spawn(async move {
            let body = client.get(&url).send().await.unwrap().text().await.unwrap();
            (i, body)
        }));
    }

    for task in tasks {
        let (i, body) = task.await.unwrap();
        assert_eq!(body, (i * -3).to_string());
    }
}
