//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use tempfile::TempDir;

/// Builder for creating test collection trees (`<root>/<year>/<file>`)
pub struct PaperDirBuilder {
    temp_dir: TempDir,
}

impl PaperDirBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the root directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a year directory containing the given files
    pub fn with_year(self, year: &str, files: &[&str]) -> Self {
        let year_dir = self.temp_dir.path().join(year);
        fs::create_dir_all(&year_dir).expect("Failed to create year dir");

        for filename in files {
            fs::write(year_dir.join(filename), "<html><body>paper</body></html>")
                .expect("Failed to write paper file");
        }

        self
    }

    /// Add a file at a path relative to the root, creating parents
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, "").expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for PaperDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One request seen by [`TestEndpoint`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: String,
    pub body: String,
}

#[derive(Clone)]
struct EndpointState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    reply: &'static str,
    delay: Duration,
}

/// Local HTTP endpoint standing in for the remote spreadsheet script
///
/// Runs on its own tokio runtime in a background thread so blocking clients in
/// the test thread can call it.
pub struct TestEndpoint {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl TestEndpoint {
    /// Start an endpoint answering every POST to `/exec` with `status` and `reply`
    pub fn start(status: StatusCode, reply: &'static str) -> Self {
        Self::start_delayed(status, reply, Duration::ZERO)
    }

    /// Like [`TestEndpoint::start`], but each reply is held back for `delay`
    pub fn start_delayed(status: StatusCode, reply: &'static str, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = EndpointState { requests: Arc::clone(&requests), status, reply, delay };
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("Failed to start runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind test endpoint");
                tx.send(listener.local_addr().expect("Failed to read local addr"))
                    .expect("Failed to report address");

                let app = Router::new().route("/exec", post(handle)).with_state(state);
                axum::serve(listener, app).await.expect("Test endpoint failed");
            });
        });

        let addr = rx.recv().expect("Test endpoint did not start");
        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}/exec", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

async fn handle(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(CapturedRequest { content_type, body });
    tokio::time::sleep(state.delay).await;
    (state.status, state.reply)
}

/// An address nothing is listening on
pub fn unused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}/exec", addr)
}
