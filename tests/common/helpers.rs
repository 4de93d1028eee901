#![allow(dead_code)]

use rand::Rng;
use resumedl::{DownloadRequest, Downloader, DownloaderBuilder, PartialFile, ProgressSink};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const MIB: usize = 1024 * 1024;
pub const TEST_USER_AGENT: &str = "resumedl-test-agent";

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates random test content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    let mut content = vec![0u8; size];
    rand::rng().fill(&mut content[..]);
    content
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file has the expected content
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content.len(), expected.len(), "File size mismatch at {:?}", path);
    assert!(content == expected, "File content mismatch at {:?}", path);
}

/// Asserts that no partial file is left next to `target`
pub fn assert_no_partial(target: &Path) {
    let partial = PartialFile::for_target(target);
    assert!(
        !partial.path().exists(),
        "Partial file should be gone: {:?}",
        partial.path()
    );
}

/// Length of the partial file next to `target`, if any
pub fn partial_len(target: &Path) -> Option<u64> {
    fs::metadata(PartialFile::for_target(target).path())
        .ok()
        .map(|m| m.len())
}

/// Downloader with a short timeout
pub fn test_downloader() -> Downloader {
    DownloaderBuilder::new()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build downloader")
}

/// Request with console output turned off
pub fn quiet_request(url: &str, destination: &Path) -> DownloadRequest {
    DownloadRequest::try_new(url, destination)
        .expect("Failed to create request")
        .with_progress(ProgressSink::Hidden)
}

// === Mock server helpers ===

/// Serves a fixed body, answering `Range: bytes=N-` with 206 when `honor_range` is set.
#[derive(Clone)]
pub struct RangeResponder {
    pub body: Vec<u8>,
    pub advertise_ranges: bool,
    pub honor_range: bool,
    pub extra_headers: Vec<(&'static str, String)>,
}

impl RangeResponder {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            advertise_ranges: true,
            honor_range: true,
            extra_headers: Vec::new(),
        }
    }

    pub fn without_ranges(mut self) -> Self {
        self.advertise_ranges = false;
        self.honor_range = false;
        self
    }

    pub fn ignoring_range(mut self) -> Self {
        self.honor_range = false;
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.extra_headers.push((name, value.into()));
        self
    }

    fn requested_offset(request: &Request) -> Option<usize> {
        let value = request.headers.get("range")?.to_str().ok()?;
        value
            .strip_prefix("bytes=")?
            .strip_suffix('-')?
            .parse::<usize>()
            .ok()
    }
}

impl Respond for RangeResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let offset = if self.honor_range {
            Self::requested_offset(request)
        } else {
            None
        };

        let mut template = match offset {
            Some(offset) if offset <= self.body.len() => ResponseTemplate::new(206)
                .insert_header(
                    "Content-Range",
                    format!(
                        "bytes {}-{}/{}",
                        offset,
                        self.body.len().saturating_sub(1),
                        self.body.len()
                    ),
                )
                .set_body_bytes(self.body[offset..].to_vec()),
            Some(_) => ResponseTemplate::new(416),
            None => ResponseTemplate::new(200).set_body_bytes(self.body.clone()),
        };

        if self.advertise_ranges {
            template = template.insert_header("Accept-Ranges", "bytes");
        }
        for (name, value) in &self.extra_headers {
            template = template.insert_header(*name, value.as_str());
        }
        template
    }
}

/// Mounts `responder` for both HEAD and GET on `route`.
pub async fn mount_resource(server: &MockServer, route: &str, responder: RangeResponder) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(responder.clone())
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(responder)
        .mount(server)
        .await;
}

/// Starts a server that declares `content.len()` bytes but closes the
/// connection after sending `cut_at` of them. HEAD requests advertise
/// byte ranges. Returns the base URL.
pub async fn start_truncating_server(content: Vec<u8>, cut_at: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let content = content.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nAccept-Ranges: bytes\r\n\
                     Content-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
                    content.len()
                );
                if socket.write_all(head.as_bytes()).await.is_err() {
                    return;
                }
                if !request.starts_with(b"HEAD") {
                    let _ = socket.write_all(&content[..cut_at]).await;
                    let _ = socket.flush().await;
                }
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}
