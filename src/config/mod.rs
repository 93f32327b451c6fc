//! Explicit configuration for both utilities.
//!
//! Every setting has a built-in default matching the deployed site layout, so both
//! binaries run without arguments. A TOML file may override any subset of fields:
//!
//! ```toml
//! extension = ".html"
//!
//! [index]
//! root = "PastPaper"
//! ignore_dirs = [".git", "js", "css"]
//!
//! [sync]
//! base_url = "https://example.github.io/site/PastPaper/"
//! ```
//!
//! Secrets are never read from the file; see [`credentials`].

pub mod credentials;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub use credentials::SyncCredentials;

const DEFAULT_EXTENSION: &str = ".html";
const DEFAULT_ROOT: &str = "PastPaper";
const DEFAULT_OUTPUT_FILE: &str = "index.html";
const DEFAULT_TITLE: &str = "DSE Question Explanation";
const DEFAULT_GUARD_SCRIPT: &str = "/econ-database/PastPaper/protect.js";
const DEFAULT_BASE_URL: &str = "https://mas-repo.github.io/econ-database/PastPaper/";
const DEFAULT_ENDPOINT_ENV: &str = "GAS_URL";
const DEFAULT_SECRET_ENV: &str = "ACTION_KEY";

/// Infrastructure folders that never hold year content
const DEFAULT_IGNORE_DIRS: &[&str] =
    &[".git", "__pycache__", ".github", "js", "css", "img", "projects"];

/// Generated and tooling files that share the extension but are not papers
const DEFAULT_IGNORE_FILES: &[&str] =
    &["index.html", "generate_index.py", "protect.js", "sync_database.py"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Suffix that makes a file eligible (case-sensitive)
    pub extension: String,
    pub index: IndexConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub root: PathBuf,
    pub output_file: String,
    pub ignore_dirs: BTreeSet<String>,
    pub ignore_files: BTreeSet<String>,
    pub title: String,
    /// Script loaded first in `<head>`; `None` leaves it out
    pub guard_script: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub root: PathBuf,
    /// Prefix for every record URL; the bare filename is appended verbatim
    pub base_url: String,
    pub endpoint_env: String,
    pub secret_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            index: IndexConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            ignore_files: DEFAULT_IGNORE_FILES.iter().map(|s| s.to_string()).collect(),
            title: DEFAULT_TITLE.to_string(),
            guard_script: Some(DEFAULT_GUARD_SCRIPT.to_string()),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_env: DEFAULT_ENDPOINT_ENV.to_string(),
            secret_env: DEFAULT_SECRET_ENV.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file
    ///
    /// `None` yields [`Config::default`]. Fields missing from the file keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Whether a bare filename carries the recognised extension
    pub fn is_eligible_name(&self, name: &str) -> bool {
        name.ends_with(&self.extension)
    }
}
