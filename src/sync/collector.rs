use std::path::Path;

use anyhow::{Result, bail};
use tracing::warn;
use walkdir::WalkDir;

use crate::config::SyncConfig;
use crate::models::FileRecord;

/// Walk `root` recursively and build one record per file ending in `extension`
///
/// The record URL is `config.base_url` followed by the bare filename. The
/// subdirectory is not part of the URL, so same-named files in different folders
/// produce records with identical URLs. They are kept as separate records.
///
/// Entries are visited in file-name order within each directory, so the output is
/// stable for an unchanged tree.
///
/// # Errors
///
/// Returns an error if `root` does not exist or is not a directory. Unreadable
/// entries below the root are logged and skipped.
pub fn collect_records(
    root: &Path,
    config: &SyncConfig,
    extension: &str,
) -> Result<Vec<FileRecord>> {
    if !root.is_dir() {
        bail!("Directory {} does not exist", root.display());
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Symlinked files count, symlinked directories are not descended
        if !entry.path().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping file with non UTF-8 name: {}", entry.path().display());
            continue;
        };

        if name.ends_with(extension) {
            records.push(FileRecord::new(&config.base_url, name));
        }
    }

    Ok(records)
}
