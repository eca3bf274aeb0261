//! Rendering module for iconsheet.
//!
//! Rasterizes SVG icons, lays them out on a grid, composites the sheet,
//! and serializes the PNG and Lua outputs.

mod grid;
mod lua;
mod png;
mod raster;
mod sheet;

pub use grid::{Cell, GridLayout, SheetCoord};
pub use lua::lua_table;
pub use png::encode_png;
pub use raster::Rasterizer;
pub use sheet::{LookupTable, Sheet, SheetPacker};
