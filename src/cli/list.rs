//! List command implementation.
//!
//! Scans every enabled style and prints the icons it would contain, in
//! sheet order.

use std::collections::BTreeMap;
use std::path::Path;

use clap::Args;

use crate::discovery::{scan_style, style_dir};
use crate::error::{Result, SheetError};
use crate::output::{display_path, plural, Printer};
use crate::types::StyleSet;

use super::ProjectArgs;

/// List the icons of each enabled style
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print icon names as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.project.manifest()?;
    let styles = args.project.style_set(&manifest);
    let inventory = inventory(&manifest.source, &styles)?;

    if args.json {
        let json = serde_json::to_string_pretty(&inventory).map_err(|e| SheetError::Build {
            message: format!("Failed to serialize icon list: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for (style, names) in &inventory {
            let dir = style_dir(&manifest.source, style);
            printer.info(
                style,
                &format!("{} in {}", plural(names.len(), "icon", "icons"), display_path(&dir)),
            );
        }
    }

    Ok(())
}

/// Icon names per enabled style, each list in sheet order.
pub fn inventory(source: &Path, styles: &StyleSet) -> Result<BTreeMap<String, Vec<String>>> {
    let mut inventory = BTreeMap::new();
    for style in styles.enabled() {
        let names = scan_style(&style_dir(source, style))?
            .into_iter()
            .map(|source| source.name)
            .collect();
        inventory.insert(style.to_string(), names);
    }

    Ok(inventory)
}
