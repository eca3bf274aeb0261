//! Icon discovery and collection.
//!
//! Each style lives in `<source>/<style>/` as a flat directory of SVG
//! files. Collection scans that directory, then rasterizes every file in
//! name order.
//!
//! # Example
//!
//! ```ignore
//! use iconsheet::discovery::{collect_icons, scan_style, style_dir};
//! use iconsheet::render::Rasterizer;
//!
//! let sources = scan_style(&style_dir("svgs".as_ref(), "solid"))?;
//! let icons = collect_icons(&sources, &Rasterizer::new(64)?, |_| {})?;
//! ```

mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::Rasterizer;
use crate::types::Icon;

pub use scanner::{icon_name, is_svg, scan_style, IconSource};

/// Directory holding the SVGs of one style.
pub fn style_dir(source_root: &Path, style: &str) -> PathBuf {
    source_root.join(style)
}

/// Rasterize every scanned source, in order.
///
/// `on_icon` is called after each icon is rasterized. The first file that
/// fails to rasterize aborts the whole collection.
pub fn collect_icons(
    sources: &[IconSource],
    rasterizer: &Rasterizer,
    mut on_icon: impl FnMut(&Icon),
) -> Result<Vec<Icon>> {
    let mut icons = Vec::with_capacity(sources.len());

    for source in sources {
        let icon = rasterizer.rasterize_file(&source.name, &source.path)?;
        on_icon(&icon);
        icons.push(icon);
    }

    Ok(icons)
}
