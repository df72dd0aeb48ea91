#![allow(dead_code)]

use std::time::Duration;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

/// A generator endpoint that answers one request with a canned response.
///
/// The join handle yields the request body the server received.
pub async fn spawn_generator(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let endpoint = format!(
        "http://{}/generate-tasks",
        listener.local_addr().expect("Failed to read local address")
    );
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("Failed to accept");
        let request = read_request_body(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason(status),
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("Failed to write response");
        stream.shutdown().await.ok();
        request
    });

    (endpoint, handle)
}

/// A generator endpoint that accepts a connection and never answers.
pub async fn spawn_stalled_generator() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let endpoint = format!(
        "http://{}/generate-tasks",
        listener.local_addr().expect("Failed to read local address")
    );
    tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.expect("Failed to accept");
        tokio::time::sleep(Duration::from_secs(3600)).await;
    });
    endpoint
}

async fn read_request_body(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("Failed to read request");
        if n == 0 {
            return String::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(body) = request_body(&buf) {
            return body;
        }
    }
}

/// The request body, once the headers and `Content-Length` bytes are in.
fn request_body(buf: &[u8]) -> Option<String> {
    let header_end = find(buf, b"\r\n\r\n")?;
    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let body = buf.get(header_end + 4..header_end + 4 + length)?;
    Some(String::from_utf8_lossy(body).into_owned())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}
