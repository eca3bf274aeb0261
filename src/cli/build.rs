//! Build command implementation.
//!
//! For each enabled style: scan, rasterize, pack, and write
//! `<output>/<style>/sheet.png` and `sheet.lua`. Both files are written
//! into a staging directory under the output root, which then replaces
//! `<output>/<style>` as a whole, so a failed style leaves no new partial
//! output. The first failure aborts the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;

use crate::discovery::{collect_icons, scan_style, style_dir};
use crate::error::{Result, SheetError};
use crate::manifest::Manifest;
use crate::output::{display_path, format_elapsed, plural, timed, Printer, Progress};
use crate::render::{encode_png, lua_table, GridLayout, Rasterizer, SheetPacker};
use crate::types::StyleSet;

use super::ProjectArgs;

/// File name of the composite image.
pub const SHEET_PNG: &str = "sheet.png";

/// File name of the lookup table.
pub const SHEET_LUA: &str = "sheet.lua";

/// Rasterize icon styles into spritesheets
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Resolved build configuration.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Root holding one SVG directory per style.
    pub source: PathBuf,
    /// Root receiving one output directory per style.
    pub output: PathBuf,
    pub icon_size: u32,
    pub icons_per_row: u32,
    pub styles: StyleSet,
}

impl BuildOptions {
    pub fn new(manifest: &Manifest, styles: StyleSet) -> Self {
        Self {
            source: manifest.source.clone(),
            output: manifest.output.clone(),
            icon_size: manifest.icon_size,
            icons_per_row: manifest.icons_per_row,
            styles,
        }
    }
}

/// What one style produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleReport {
    pub style: String,
    pub icons: usize,
    pub rows: u32,
    pub dir: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut manifest = args.project.manifest()?;
    if let Some(output) = args.output {
        manifest.output = output;
    }
    manifest.validate()?;

    let styles = args.project.style_set(&manifest);
    build(&BuildOptions::new(&manifest, styles), printer)?;
    Ok(())
}

/// Build every enabled style in name order.
pub fn build(options: &BuildOptions, printer: &Printer) -> Result<Vec<StyleReport>> {
    // Checks the geometry before any style is touched
    GridLayout::new(0, options.icon_size, options.icons_per_row)?;

    let started = Instant::now();
    let enabled: Vec<&str> = options.styles.enabled().collect();

    if enabled.is_empty() {
        printer.info("Skipping", "no styles enabled");
        return Ok(Vec::new());
    }

    fs::create_dir_all(&options.output).map_err(|e| {
        SheetError::io(&options.output, "Failed to create output directory", e)
    })?;

    let mut reports = Vec::with_capacity(enabled.len());
    for style in enabled {
        let report = build_style(style, options, printer)?;
        printer.status(
            "Built",
            &format!(
                "{} ({}, {} x {}) -> {}",
                style,
                plural(report.icons, "icon", "icons"),
                options.icons_per_row,
                plural(report.rows as usize, "row", "rows"),
                printer.cyan(&display_path(&report.dir))
            ),
        );
        reports.push(report);
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(reports.len(), "style", "styles"),
            format_elapsed(started.elapsed())
        ),
    );

    Ok(reports)
}

/// Build one style into `<output>/<style>/`.
pub fn build_style(style: &str, options: &BuildOptions, printer: &Printer) -> Result<StyleReport> {
    let sources = scan_style(&style_dir(&options.source, style))?;
    printer.status(
        "Processing",
        &format!("{} ({})", style, plural(sources.len(), "icon", "icons")),
    );

    let rasterizer = Rasterizer::new(options.icon_size)?;
    let progress = Progress::new("Rasterizing", sources.len());
    let icons = collect_icons(&sources, &rasterizer, |_| progress.inc())?;
    progress.finish();

    let packer = SheetPacker::new(options.icon_size, options.icons_per_row);
    let progress = Progress::new("Compositing", icons.len());
    let sheet = packer.pack(&icons, |_| progress.inc())?;
    progress.finish();

    let png = timed(printer, &format!("Encoding {}", SHEET_PNG), || {
        encode_png(&sheet.image)
    })?;
    let lua = lua_table(&sheet.table);

    let dir = options.output.join(style);
    timed(printer, "Writing sheet files", || {
        write_outputs(&options.output, &dir, &png, &lua)
    })?;

    Ok(StyleReport {
        style: style.to_string(),
        icons: icons.len(),
        rows: sheet.layout.rows(),
        dir,
    })
}

/// Stage a complete style directory under `root`, then swap it in for `dir`.
fn write_outputs(root: &Path, dir: &Path, png: &[u8], lua: &str) -> Result<()> {
    let staging = tempfile::Builder::new()
        .prefix(".iconsheet-")
        .tempdir_in(root)
        .map_err(|e| SheetError::io(root, "Failed to create staging directory", e))?;

    let staged = staging.path().join("style");
    fs::create_dir(&staged)
        .map_err(|e| SheetError::io(&staged, "Failed to create staging directory", e))?;

    let staged_png = staged.join(SHEET_PNG);
    let staged_lua = staged.join(SHEET_LUA);
    fs::write(&staged_png, png).map_err(|e| SheetError::io(&staged_png, "Failed to write PNG", e))?;
    fs::write(&staged_lua, lua)
        .map_err(|e| SheetError::io(&staged_lua, "Failed to write lookup table", e))?;

    swap_into_place(&staged, dir, staging.path())
}

/// Replace `dir` with `staged` by renaming whole directories.
///
/// Whatever was at `dir` is first moved into `scratch`, and moved back if
/// the staged directory cannot take its place. `scratch` must be on the
/// same filesystem as `dir`; the caller removes it afterwards.
fn swap_into_place(staged: &Path, dir: &Path, scratch: &Path) -> Result<()> {
    let previous = scratch.join("previous");
    let had_previous = match fs::symlink_metadata(dir) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => return Err(SheetError::io(dir, "Failed to inspect style directory", e)),
    };

    if had_previous {
        fs::rename(dir, &previous)
            .map_err(|e| SheetError::io(dir, "Failed to move previous output aside", e))?;
    }

    if let Err(e) = fs::rename(staged, dir) {
        if had_previous {
            fs::rename(&previous, dir).map_err(|restore| {
                SheetError::io(dir, "Failed to restore previous output", restore)
            })?;
        }
        return Err(SheetError::io(dir, "Failed to move output into place", e));
    }

    Ok(())
}
