//! End-to-end tests against a bound server.
//!
//! Run with: cargo test --package customer-api --test http_server

use customer_api::{CustomerServer, ServerConfig};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const EXPECTED_BODY: &str =
    r#"{"data":{"profile":{"customer_id":"1","name":"Alice"},"metrics":{"loyaltyScore":100}}}"#;

async fn start_server() -> SocketAddr {
    let server = CustomerServer::new(ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    });
    let listener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(CustomerServer::serve(listener));
    addr
}

/// Send a bodiless HTTP/1.1 request and return (status line, body).
async fn request(addr: SocketAddr, method: &str, path: &str) -> (String, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(req.as_bytes()).await.unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status_line = head.lines().next().unwrap().to_string();
    (status_line, body.to_string())
}

#[tokio::test]
async fn test_get_customers() {
    let addr = start_server().await;

    let (status, body) = request(addr, "GET", "/v1/customers").await;
    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(body, EXPECTED_BODY);
}

#[tokio::test]
async fn test_customer_id_is_ignored() {
    let addr = start_server().await;

    let (_, plain) = request(addr, "GET", "/v1/customers").await;
    let (status, filtered) = request(addr, "GET", "/v1/customers?customer_id=999").await;

    assert_eq!(status, "HTTP/1.1 200 OK");
    assert_eq!(filtered, plain);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let addr = start_server().await;

    let mut bodies = Vec::new();
    for _ in 0..5 {
        let (_, body) = request(addr, "GET", "/v1/customers?customer_id=42").await;
        bodies.push(body);
    }
    assert!(bodies.iter().all(|b| b == EXPECTED_BODY));
}

#[tokio::test]
async fn test_post_rejected() {
    let addr = start_server().await;

    let (status, _) = request(addr, "POST", "/v1/customers").await;
    assert_eq!(status, "HTTP/1.1 405 Method Not Allowed");
}
