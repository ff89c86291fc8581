#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use streamsave::save::SaveTarget;
use streamsave::{ControllerBuilder, DownloadController};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_USER_AGENT: &str = "streamsave-test-agent";
pub const TEST_DISPLAY_NAME: &str = "Holiday photo 2024";

/// Save target remembering every offer it receives.
#[derive(Clone, Default)]
pub struct RecordingTarget {
    offers: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offers(&self) -> Vec<(String, Vec<u8>)> {
        self.offers.lock().clone()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.offers.lock().iter().map(|(name, _)| name.clone()).collect()
    }
}

impl SaveTarget for RecordingTarget {
    fn offer(&self, filename: &str, payload: Vec<u8>) {
        self.offers.lock().push((filename.to_string(), payload));
    }
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Creates a hidden controller offering payloads to `target`
pub fn create_test_controller(target: &RecordingTarget) -> DownloadController {
    ControllerBuilder::hidden()
        .save_target(target.clone())
        .build()
}

/// Serves `body` at `route` with the given content type (or none).
pub async fn mount_file(
    server: &MockServer,
    route: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
) -> String {
    let template = match content_type {
        Some(mime) => ResponseTemplate::new(200).set_body_raw(body, mime),
        None => ResponseTemplate::new(200).set_body_bytes(body),
    };
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
    format!("{}{}", server.uri(), route)
}

/// Serves `body` at `route` only after `delay`.
pub async fn mount_slow_file(server: &MockServer, route: &str, body: Vec<u8>, delay: Duration) -> String {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body, "application/pdf")
                .set_delay(delay),
        )
        .mount(server)
        .await;
    format!("{}{}", server.uri(), route)
}

/// Serves an error status at `route`.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) -> String {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
    format!("{}{}", server.uri(), route)
}

/// One-shot server answering without a `Content-Length` header; the body is
/// delimited by closing the connection.
pub async fn serve_without_length(body: Vec<u8>, content_type: Option<&'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let mut head = String::from("HTTP/1.1 200 OK\r\nConnection: close\r\n");
        if let Some(mime) = content_type {
            head.push_str(&format!("Content-Type: {}\r\n", mime));
        }
        head.push_str("\r\n");
        socket.write_all(head.as_bytes()).await.expect("Failed to write head");
        for chunk in body.chunks(512) {
            socket.write_all(chunk).await.expect("Failed to write body");
            socket.flush().await.expect("Failed to flush");
        }
        socket.shutdown().await.ok();
    });

    format!("http://{}/stream", addr)
}

/// Splits a derived filename into (first word, timestamp, token, extension).
///
/// The token is always 4 characters and may itself contain `_`.
pub fn split_filename(filename: &str) -> (String, String, String, String) {
    let (stem, extension) = filename
        .rsplit_once('.')
        .expect("Filename should carry an extension");
    let (rest, token) = stem.split_at(stem.len() - 4);
    let rest = rest.strip_suffix('_').expect("missing separator before token");
    let (first_word, timestamp) = rest.rsplit_once('_').expect("missing timestamp");
    (
        first_word.to_string(),
        timestamp.to_string(),
        token.to_string(),
        extension.to_string(),
    )
}

/// One-shot server declaring `declared` bytes, sending only `sent`, then
/// holding the connection open without writing anything else.
pub async fn serve_stalled(declared: usize, sent: Vec<u8>, content_type: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            content_type, declared
        );
        socket.write_all(head.as_bytes()).await.expect("Failed to write head");
        socket.write_all(&sent).await.expect("Failed to write body");
        socket.flush().await.expect("Failed to flush");

        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    format!("http://{}/partial", addr)
}
