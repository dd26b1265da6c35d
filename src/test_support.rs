//! Local HTTP stubs for exercising probes against real sockets.

// Standard library
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What a stub answers to every request.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    body: String,
    declared_len: Option<usize>,
    delay: Duration,
}

impl StubReply {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            declared_len: None,
            delay: Duration::ZERO,
        }
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Announces `len` bytes of body but closes the connection early.
    pub fn truncated_body(mut self, len: usize) -> Self {
        self.body = "partial".to_string();
        self.declared_len = Some(len);
        self
    }

    /// Waits before sending the response headers.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

async fn read_request_head(stream: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let mut head: Vec<u8> = Vec::new();
    while let Ok(n) = stream.read(&mut buf).await {
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
}

async fn answer(mut stream: TcpStream, reply: StubReply) {
    read_request_head(&mut stream).await;
    tokio::time::sleep(reply.delay).await;

    let declared_len = reply.declared_len.unwrap_or(reply.body.len());
    let response = format!(
        "HTTP/1.1 {} Stub\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        reply.status, declared_len, reply.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Serves `reply` to every connection on a fresh local port.
pub async fn spawn_http_stub(reply: StubReply) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        while let Ok((stream, _addr)) = listener.accept().await {
            tokio::spawn(answer(stream, reply.clone()));
        }
    });

    addr
}

/// Like [`spawn_http_stub`], also counting accepted connections.
pub async fn spawn_counting_stub(reply: StubReply) -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local address");
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepted);

    tokio::spawn(async move {
        while let Ok((stream, _addr)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(answer(stream, reply.clone()));
        }
    });

    (addr, accepted)
}

/// Accepts connections and never answers.
pub async fn spawn_silent_stub() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        let mut held: Vec<TcpStream> = Vec::new();
        while let Ok((stream, _addr)) = listener.accept().await {
            held.push(stream);
        }
    });

    addr
}

/// A local address with nothing listening on it.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    listener.local_addr().expect("Failed to get local address")
}
