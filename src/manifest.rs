//! Project manifest (iconsheet.yaml) parsing.
//!
//! The manifest holds the source and output roots, the cell geometry,
//! and per-style toggles. Every field is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SheetError, Result};
use crate::types::StyleSet;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "iconsheet.yaml";

/// Default edge length of one icon cell, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Default number of cells per sheet row.
pub const DEFAULT_ICONS_PER_ROW: u32 = 32;

/// Project manifest loaded from iconsheet.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Root directory holding one subdirectory of SVGs per style.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Output root; each style writes into `<output>/<style>/`.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Edge length of one icon cell, in pixels.
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    /// Number of cells per sheet row.
    #[serde(default = "default_icons_per_row")]
    pub icons_per_row: u32,

    /// Style toggles, merged over the default styles.
    #[serde(default)]
    pub styles: BTreeMap<String, bool>,
}

fn default_source() -> PathBuf {
    PathBuf::from("node_modules/@fortawesome/fontawesome-free/svgs")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_icon_size() -> u32 {
    DEFAULT_ICON_SIZE
}

fn default_icons_per_row() -> u32 {
    DEFAULT_ICONS_PER_ROW
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            icon_size: default_icon_size(),
            icons_per_row: default_icons_per_row(),
            styles: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load manifest from an iconsheet.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SheetError::io(path, "Failed to read manifest", e))?;

        Self::parse(&content)
    }

    /// Load `iconsheet.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SheetError::InvalidConfig {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Reject geometry the grid cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.icon_size == 0 {
            return Err(SheetError::InvalidConfig {
                message: "icon_size must be at least 1".to_string(),
                help: Some(format!("The default is {}", DEFAULT_ICON_SIZE)),
            });
        }
        if self.icons_per_row == 0 {
            return Err(SheetError::InvalidConfig {
                message: "icons_per_row must be at least 1".to_string(),
                help: Some(format!("The default is {}", DEFAULT_ICONS_PER_ROW)),
            });
        }
        if self.icon_size.checked_mul(self.icons_per_row).is_none() {
            return Err(SheetError::InvalidConfig {
                message: format!(
                    "sheet width {} x {} does not fit in 32 bits",
                    self.icons_per_row, self.icon_size
                ),
                help: None,
            });
        }
        Ok(())
    }

    /// Effective style toggles: defaults with the manifest's overrides applied.
    pub fn style_set(&self) -> StyleSet {
        let mut set = StyleSet::default();
        set.merge(&self.styles);
        set
    }
}
