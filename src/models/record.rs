use serde::{Deserialize, Serialize};

/// Action discriminator expected by the remote endpoint
pub const SYNC_ACTION: &str = "batch_sync";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    pub url: String,
}

impl FileRecord {
    /// Pair a bare filename with `base_url + filename`
    ///
    /// No separator is inserted and no subdirectory is included.
    pub fn new(base_url: &str, filename: &str) -> Self {
        Self { filename: filename.to_string(), url: format!("{}{}", base_url, filename) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRequest {
    pub action: String,
    pub secret: String,
    pub files: Vec<FileRecord>,
}

impl SyncRequest {
    pub fn batch(secret: String, files: Vec<FileRecord>) -> Self {
        Self { action: SYNC_ACTION.to_string(), secret, files }
    }
}
