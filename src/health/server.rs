use std::net::{Ipv4Addr, SocketAddr};

use compio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use compio::net::{TcpListener, TcpStream};
use compio::runtime::spawn;
use snafu::{ResultExt, Snafu};
use tracing::{debug, error, warn};

pub const STATUS_MESSAGE: &str = "File System Simulator is running";

const MAX_REQUEST_SIZE: usize = 8 * 1024;

/// Minimal liveness endpoint. It answers `/` with a fixed plain-text message
/// and knows nothing about the directory tree.
pub struct HealthServer {
    listener: TcpListener,
}

impl HealthServer {
    pub async fn bind(port: u16) -> Result<Self, HealthServerError> {
        let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = TcpListener::bind(address)
            .await
            .context(BindSnafu { port })?;

        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, HealthServerError> {
        self.listener.local_addr().context(LocalAddressSnafu)
    }

    /// Accepts connections until the runtime shuts down. Failures are logged
    /// and never end the loop.
    pub async fn serve(self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    debug!("Health check connection from {}", peer);
                    spawn(async move {
                        if let Err(e) = respond(stream).await {
                            warn!("Failed to answer health check from {}: {}", peer, e);
                        }
                    })
                    .detach();
                }
                Err(e) => error!("ERR: Server error: {}", e),
            }
        }
    }
}

async fn respond(mut stream: TcpStream) -> std::io::Result<()> {
    let res = stream.read(Vec::with_capacity(MAX_REQUEST_SIZE)).await;
    res.0?;

    let res = stream.write_all(response_for(&res.1)).await;
    res.0?;

    stream.shutdown().await
}

/// Builds the full HTTP response for a raw request.
pub fn response_for(request: &[u8]) -> Vec<u8> {
    let request = String::from_utf8_lossy(request);
    let mut request_line = request.lines().next().unwrap_or_default().split_whitespace();

    match (request_line.next(), request_line.next()) {
        (Some(_), Some("/")) => http_response("200 OK", STATUS_MESSAGE),
        (Some(_), Some(_)) => http_response("404 Not Found", "Not Found"),
        _ => http_response("400 Bad Request", "Bad Request"),
    }
}

fn http_response(status: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .into_bytes()
}

#[derive(Debug, Snafu)]
pub enum HealthServerError {
    #[snafu(display("Failed to bind the health check server to port {}", port))]
    BindError { port: u16, source: std::io::Error },
    #[snafu(display("Failed to query the health check server address"))]
    LocalAddressError { source: std::io::Error },
}
