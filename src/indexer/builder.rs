use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::indexer::page::{render_page, write_page};
use crate::indexer::year_discovery::build_catalog;

/// Summary of one index generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub output_path: PathBuf,
    pub years: usize,
    pub files: usize,
}

/// Scan `root`, render the page and write it into `root`
///
/// # Arguments
///
/// * `root` - The collection directory holding one subdirectory per year
/// * `config` - Ignore lists, output name, page title and extension
///
/// # Errors
///
/// Returns an error if `root` does not exist or cannot be read, or if the page
/// cannot be written. Unreadable year folders are skipped with a warning.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use pastpaper_tools::{Config, generate_index};
///
/// let report = generate_index(Path::new("PastPaper"), &Config::default())?;
/// println!("Wrote {}", report.output_path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_index(root: &Path, config: &Config) -> Result<IndexReport> {
    info!("--- Starting Index Generation ---");
    info!("Collection root: {}", root.display());

    let catalog = build_catalog(root, &config.index, &config.extension)?;
    let html = render_page(&catalog, &config.index, &config.extension)?;
    let output_path = write_page(root, &config.index, &html)?;

    info!(
        "Indexed {} files across {} years",
        catalog.file_count(),
        catalog.len()
    );

    Ok(IndexReport { output_path, years: catalog.len(), files: catalog.file_count() })
}
