//! iconsheet - SVG icon spritesheet generator
//!
//! A library for rasterizing directories of SVG icons into grid-aligned
//! spritesheets, each paired with a Lua table mapping icon names to
//! 1-based cell coordinates.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use cli::build::{build, build_style, BuildOptions, StyleReport};
pub use discovery::{collect_icons, scan_style, style_dir, IconSource};
pub use error::{Result, SheetError};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use render::{
    encode_png, lua_table, Cell, GridLayout, LookupTable, Rasterizer, Sheet, SheetCoord,
    SheetPacker,
};
pub use types::{Colour, Icon, StyleSet, DEFAULT_STYLES};
