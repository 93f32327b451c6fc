use std::env;
use std::fmt;

use anyhow::{Result, bail};

use super::SyncConfig;

/// Endpoint and shared secret for the batch sync call
///
/// Loaded once at startup and consumed by the single outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct SyncCredentials {
    pub endpoint: String,
    pub secret: String,
}

impl SyncCredentials {
    /// Read the endpoint URL and secret from the variables named in `config`
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that is unset or empty.
    pub fn from_env(config: &SyncConfig) -> Result<Self> {
        let endpoint = read_required(&config.endpoint_env)?;
        let secret = read_required(&config.secret_env)?;
        Ok(Self { endpoint, secret })
    }
}

impl fmt::Debug for SyncCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncCredentials")
            .field("endpoint", &self.endpoint)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn read_required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => bail!("{} environment variable is missing", name),
    }
}
