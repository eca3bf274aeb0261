pub mod build;
pub mod completions;
pub mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::types::StyleSet;

/// iconsheet - SVG icon spritesheet generator
#[derive(Parser, Debug)]
#[command(name = "iconsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rasterize every enabled style into sheet.png and sheet.lua
    Build(build::BuildArgs),

    /// List the icons each enabled style would contain
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that read a project.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArgs {
    /// Manifest file (default: ./iconsheet.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Root directory holding one subdirectory of SVGs per style
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Only process the named style (repeatable)
    #[arg(long = "style", value_name = "STYLE")]
    pub styles: Vec<String>,
}

impl ProjectArgs {
    /// Load the manifest and apply command-line overrides.
    pub fn manifest(&self) -> Result<Manifest> {
        let mut manifest = match &self.config {
            Some(path) => Manifest::load(path)?,
            None => Manifest::discover(&std::env::current_dir()?)?,
        };

        if let Some(source) = &self.source {
            manifest.source = source.clone();
        }

        Ok(manifest)
    }

    /// Effective style toggles for `manifest`.
    pub fn style_set(&self, manifest: &Manifest) -> StyleSet {
        let mut styles = manifest.style_set();
        if !self.styles.is_empty() {
            styles.restrict_to(&self.styles);
        }
        styles
    }
}
