//! PastPaper Tools - Static index generation and manifest sync for a year-organised
//! collection of HTML files
//!
//! This library backs two independent command-line utilities:
//!
//! - `generate-index` scans `<root>/<year>/*.html` one level deep and writes a
//!   self-contained `index.html` with the catalog embedded as script data
//! - `sync-database` walks the whole tree and submits a flat file manifest to a
//!   remote webhook in a single batch request
//!
//! # Example
//!
//! ```no_run
//! use pastpaper_tools::{Config, build_catalog};
//! use std::path::Path;
//!
//! let config = Config::default();
//! let catalog = build_catalog(Path::new("PastPaper"), &config.index, &config.extension)?;
//! println!("Indexed {} years", catalog.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, IndexConfig, SyncConfig, SyncCredentials};
pub use indexer::{IndexReport, build_catalog, generate_index, render_page, write_page};
pub use models::{Catalog, FileRecord, SyncRequest};
pub use sync::{HttpTransport, SyncOutcome, SyncTransport, collect_records, run_sync, sync_files};
