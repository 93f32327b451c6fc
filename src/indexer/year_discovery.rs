use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::config::IndexConfig;
use crate::models::Catalog;

/// Scan the immediate subdirectories of `root` and collect eligible files per year
///
/// A subdirectory becomes a catalog key when its name is not in
/// `config.ignore_dirs` and it directly contains at least one regular file whose
/// name ends in `extension` and is not in `config.ignore_files`. Nested
/// directories are not descended into.
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or is not a directory
/// - `root` itself cannot be read
///
/// Subdirectories that cannot be read are logged as warnings and skipped
/// (graceful degradation), as are entries whose names are not valid UTF-8.
pub fn build_catalog(root: &Path, config: &IndexConfig, extension: &str) -> Result<Catalog> {
    scan_years(root, config, |dir| list_eligible_files(dir, config, extension))
}

/// Walk the year folders of `root`, listing each one with `list`
fn scan_years<F>(root: &Path, config: &IndexConfig, list: F) -> Result<Catalog>
where
    F: Fn(&Path) -> io::Result<Vec<String>>,
{
    if !root.is_dir() {
        bail!("Directory {} does not exist", root.display());
    }

    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read root directory: {}", root.display()))?;

    let mut catalog = Catalog::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read entry in {}: {}", root.display(), e);
                continue;
            }
        };
        let path = entry.path();

        // Only directories hold year content; `is_dir` follows symlinks
        if !path.is_dir() {
            continue;
        }

        let Some(year) = entry.file_name().to_str().map(str::to_string) else {
            warn!("Skipping directory with non UTF-8 name: {}", path.display());
            continue;
        };

        if config.ignore_dirs.contains(&year) {
            continue;
        }

        let files = match list(&path) {
            Ok(files) => files,
            Err(e) => {
                warn!("Could not read folder {}: {}", year, e);
                continue;
            }
        };

        if files.is_empty() {
            info!("Skipped: {} (No HTML files found)", year);
        } else {
            info!("Indexed: {} ({} files)", year, files.len());
            catalog.insert(year, files);
        }
    }

    Ok(catalog)
}

/// Eligible file names directly inside `dir`, unsorted
fn list_eligible_files(
    dir: &Path,
    config: &IndexConfig,
    extension: &str,
) -> io::Result<Vec<String>> {
    let entries = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path()));
    Ok(eligible_names(dir, entries, config, extension))
}

/// Keep the regular files among `entries` that carry `extension` and are not ignored
///
/// An entry that cannot be read is logged and skipped; the rest of the folder
/// is still listed.
fn eligible_names<I>(dir: &Path, entries: I, config: &IndexConfig, extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut files = Vec::new();

    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Could not read entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            warn!("Skipping file with non UTF-8 name: {}", path.display());
            continue;
        };

        if name.ends_with(extension) && !config.ignore_files.contains(&name) {
            files.push(name);
        }
    }

    files
}
