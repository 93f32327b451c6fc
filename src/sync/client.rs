use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, info, warn};

use crate::config::{Config, SyncCredentials};
use crate::models::{FileRecord, SyncRequest};
use crate::sync::collector::collect_records;

/// Raw reply from the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResponse {
    pub status: u16,
    pub body: String,
}

/// How a sync run ended
///
/// Remote failures are outcomes, not errors: the run is over either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No eligible files; no request was made
    NothingToSync,
    /// Endpoint answered 200
    Synced { count: usize, response: String },
    /// Endpoint answered with any other status
    Rejected { status: u16, body: String },
    /// The request never produced a response
    Failed { reason: String },
}

/// Delivers one batch request to the endpoint
pub trait SyncTransport {
    fn submit(&self, endpoint: &str, request: &SyncRequest) -> Result<SyncResponse>;
}

/// Blocking HTTPS transport backed by reqwest
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Self::client_builder().build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Client settings every transport starts from
    ///
    /// The batch request has no deadline; the blocking client otherwise gives up
    /// after 30 seconds.
    pub fn client_builder() -> ClientBuilder {
        Client::builder().timeout(None::<Duration>)
    }

    /// Use a preconfigured client (proxy settings)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl SyncTransport for HttpTransport {
    fn submit(&self, endpoint: &str, request: &SyncRequest) -> Result<SyncResponse> {
        let res = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .context("Failed to send sync request")?;

        let status = res.status().as_u16();
        let body = res.text().context("Failed to read sync response body")?;
        Ok(SyncResponse { status, body })
    }
}

/// Submit every record to the endpoint in a single request
///
/// Consumes the credentials; the secret does not outlive the call. Exactly one
/// request is attempted and it is never retried.
pub fn sync_files(
    transport: &dyn SyncTransport,
    credentials: SyncCredentials,
    files: Vec<FileRecord>,
) -> SyncOutcome {
    let SyncCredentials { endpoint, secret } = credentials;
    let count = files.len();
    let request = SyncRequest::batch(secret, files);

    match transport.submit(&endpoint, &request) {
        Ok(SyncResponse { status: 200, body }) => {
            info!("Endpoint accepted batch of {} records", count);
            SyncOutcome::Synced { count, response: body }
        }
        Ok(SyncResponse { status, body }) => {
            warn!("Endpoint rejected batch of {} records with HTTP {}", count, status);
            SyncOutcome::Rejected { status, body }
        }
        Err(e) => {
            error!("Batch request to endpoint did not complete: {:#}", e);
            SyncOutcome::Failed { reason: format!("{:#}", e) }
        }
    }
}

/// Collect records under `root` and submit them, skipping the call when there are none
///
/// # Errors
///
/// Returns an error only when the tree cannot be scanned (missing root). Remote
/// failures are reported through [`SyncOutcome`].
pub fn run_sync(
    root: &Path,
    config: &Config,
    credentials: SyncCredentials,
    transport: &dyn SyncTransport,
) -> Result<SyncOutcome> {
    info!("Collecting {} files under {}", config.extension, root.display());
    let files = collect_records(root, &config.sync, &config.extension)?;
    info!("Collected {} records", files.len());

    if files.is_empty() {
        debug!("Empty manifest, endpoint not contacted");
        return Ok(SyncOutcome::NothingToSync);
    }

    Ok(sync_files(transport, credentials, files))
}
