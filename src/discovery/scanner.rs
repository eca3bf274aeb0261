//! Style directory scanner.
//!
//! Finds the `*.svg` files directly inside one style directory and derives
//! each icon's logical name from the file stem.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SheetError};

/// An SVG file found in a style directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Logical icon name (file stem).
    pub name: String,
    /// Path to the SVG file.
    pub path: PathBuf,
}

/// Scan a style directory for SVG icons.
///
/// Only files directly inside `dir` are considered. The result is sorted by
/// name so that sheet placement never depends on directory listing order.
pub fn scan_style(dir: &Path) -> Result<Vec<IconSource>> {
    if !dir.is_dir() {
        return Err(SheetError::Io {
            path: dir.to_path_buf(),
            message: "Style directory not found".to_string(),
        });
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| SheetError::io(dir, "Failed to read style directory", e))?;
        let path = entry.path();

        if !entry.file_type().is_file() || !is_svg(path) {
            continue;
        }

        let name = icon_name(path).ok_or_else(|| SheetError::MalformedInput {
            path: path.to_path_buf(),
            message: "icon file name is not valid UTF-8".to_string(),
        })?;
        sources.push(IconSource {
            name,
            path: path.to_path_buf(),
        });
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

    if let Some(pair) = sources.windows(2).find(|pair| pair[0].name == pair[1].name) {
        return Err(SheetError::MalformedInput {
            path: pair[1].path.clone(),
            message: format!(
                "icon name '{}' is also used by {}",
                pair[1].name,
                pair[0].path.display()
            ),
        });
    }

    Ok(sources)
}

/// Check for an `.svg` extension (ASCII case-insensitive).
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Logical icon name for a file: its stem.
///
/// `None` when the stem is empty or not valid UTF-8.
pub fn icon_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
