//! Page rendering and output: template substitution and atomic write

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::IndexConfig;
use crate::models::Catalog;
use crate::models::catalog::script_string_literal;

const TEMPLATE: &str = include_str!("template.html");

const DATA_TOKEN: &str = "__JSON_DATA__";
const TITLE_TOKEN: &str = "__PAGE_TITLE__";
const GUARD_TOKEN: &str = "__GUARD_SCRIPT__";
const EXTENSION_TOKEN: &str = "__EXTENSION__";

/// Render the static page with the catalog embedded as a script literal
///
/// `extension` is stripped from link labels in the browser. The catalog literal is
/// substituted last so that file names which happen to contain another token are
/// never expanded.
pub fn render_page(catalog: &Catalog, config: &IndexConfig, extension: &str) -> Result<String> {
    let guard = match config.guard_script.as_deref() {
        Some(src) if !src.is_empty() => {
            format!(r#"<script src="{}"></script>"#, escape_html(src))
        }
        _ => String::new(),
    };

    let extension = script_string_literal(extension)?;
    let data = catalog.to_script_literal()?;

    Ok(TEMPLATE
        .replace(GUARD_TOKEN, &guard)
        .replace(TITLE_TOKEN, &escape_html(&config.title))
        .replace(EXTENSION_TOKEN, &extension)
        .replace(DATA_TOKEN, &data))
}

/// Write `html` to `<root>/<output_file>`, replacing any existing file
///
/// Writes a temp file next to the target and renames it over the target.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn write_page(root: &Path, config: &IndexConfig, html: &str) -> Result<PathBuf> {
    let output_path = root.join(&config.output_file);
    let temp_path = root.join(format!("{}.tmp", config.output_file));

    fs::write(&temp_path, html)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, &output_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to write {}", output_path.display()));
    }

    Ok(output_path)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
