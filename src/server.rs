//! HTTP glue: the `/suggestions` endpoint plus an optional static web root.
//!
//! Deliberately minimal transport: one request-line parse, one query-string
//! scan, task-per-connection. The engine owns none of this; the handler
//! borrows the index through an `Arc` and serializes whatever the query
//! returns. Anything fancier than `GET` gets a 400 and a closed connection.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use crate::index::AutocompleteIndex;

/// Server settings: where to listen, what to serve.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:8080`.
    pub bind: String,
    /// Directory of static files served for non-suggestion paths. `None`
    /// turns every such path into a 404.
    pub web_root: Option<PathBuf>,
    /// Result cap applied when a request carries no `limit` parameter.
    pub max_results: usize,
}

/// Serves suggestions for a fully built, read-only index.
pub struct SuggestServer {
    config: ServerConfig,
    index: Arc<AutocompleteIndex>,
}

impl SuggestServer {
    pub fn new(config: ServerConfig, index: AutocompleteIndex) -> Self {
        Self {
            config,
            index: Arc::new(index),
        }
    }

    /// Bind and serve until the process is killed.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind))?;
        info!(
            bind = %self.config.bind,
            terms = self.index.len(),
            "serving suggestions"
        );

        loop {
            let (stream, peer) = listener.accept().await?;
            let index = Arc::clone(&self.index);
            let config = self.config.clone();
            tokio::spawn(async move {
                if let Err(error) = handle_connection(stream, &index, &config).await {
                    warn!(%peer, "connection closed with error: {error:#}");
                }
            });
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    index: &AutocompleteIndex,
    config: &ServerConfig,
) -> Result<()> {
    let mut buf = vec![0u8; 8192];
    let read = stream.read(&mut buf).await?;
    let request = String::from_utf8_lossy(&buf[..read]).into_owned();

    let reply = match request_target(&request) {
        Some(target) => route(target, index, config).await,
        None => response(400, "text/plain", b"bad request"),
    };
    stream.write_all(&reply).await?;
    stream.shutdown().await?;
    Ok(())
}

async fn route(target: &str, index: &AutocompleteIndex, config: &ServerConfig) -> Vec<u8> {
    let (path, query_string) = match target.split_once('?') {
        Some((path, qs)) => (path, qs),
        None => (target, ""),
    };

    if path == "/suggestions" {
        return match query_param(query_string, "query") {
            Some(pattern) if !pattern.is_empty() => {
                let limit = query_param(query_string, "limit")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(config.max_results);
                let terms: Vec<String> = index
                    .query(&pattern, limit)
                    .into_iter()
                    .map(|s| s.term)
                    .collect();
                // Vec<String> always serializes
                let body = serde_json::to_vec(&terms).unwrap_or_default();
                response(200, "application/json", &body)
            }
            _ => response(400, "text/plain", b"missing query parameter"),
        };
    }

    match &config.web_root {
        Some(root) => serve_static(root, path).await,
        None => response(404, "text/plain", b"not found"),
    }
}

async fn serve_static(root: &Path, path: &str) -> Vec<u8> {
    let relative = match sanitize_path(path) {
        Some(rel) => rel,
        None => return response(404, "text/plain", b"not found"),
    };
    let full = root.join(&relative);
    match tokio::fs::read(&full).await {
        Ok(body) => response(200, content_type(&relative), &body),
        Err(error) => {
            warn!(path = %full.display(), %error, "static file not served");
            response(404, "text/plain", b"not found")
        }
    }
}

/// Map a request path to a relative file path under the web root.
///
/// `/` becomes `index.html`; anything trying to climb out of the root
/// (`..`, absolute components) is rejected.
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let candidate = if trimmed.is_empty() { "index.html" } else { trimmed };
    let rel = Path::new(candidate);
    if rel
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(rel.to_path_buf())
    } else {
        None
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Extract the request target from a `GET <target> HTTP/1.x` request line.
fn request_target(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    if parts.next()? != "GET" {
        return None;
    }
    parts.next()
}

/// Find and decode one parameter in a query string.
fn query_param(query_string: &str, name: &str) -> Option<String> {
    query_string.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| decode_component(value))
    })
}

/// Percent-decode a query component; `+` means space.
fn decode_component(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                match bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn response(status: u16, content_type: &str, body: &[u8]) -> Vec<u8> {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Error",
    };
    let mut out = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: {content_type}\r\n\
         Access-Control-Allow-Origin: *\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    out.extend_from_slice(body);
    out
}
