//! Sprite sheet packer.
//!
//! Packs equally sized icons into a fixed-width grid and records each
//! icon's 1-based cell coordinate in a lookup table.

use std::collections::BTreeMap;
use std::path::PathBuf;

use image::{imageops, RgbaImage};

use crate::error::{Result, SheetError};
use crate::types::Icon;

use super::grid::{GridLayout, SheetCoord};

/// Icon name to 1-based cell coordinate, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: BTreeMap<String, SheetCoord>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an icon's coordinate, returning the previous one if the name
    /// was already present.
    pub fn insert(&mut self, name: impl Into<String>, coord: SheetCoord) -> Option<SheetCoord> {
        self.entries.insert(name.into(), coord)
    }

    pub fn get(&self, name: &str) -> Option<SheetCoord> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SheetCoord)> {
        self.entries.iter().map(|(name, coord)| (name.as_str(), *coord))
    }
}

/// A packed sheet: the composite image plus its lookup table.
#[derive(Debug)]
pub struct Sheet {
    pub image: RgbaImage,
    pub table: LookupTable,
    pub layout: GridLayout,
}

/// Grid sheet packer.
pub struct SheetPacker {
    pub cell_size: u32,
    pub per_row: u32,
}

impl SheetPacker {
    pub fn new(cell_size: u32, per_row: u32) -> Self {
        Self { cell_size, per_row }
    }

    /// Compute the layout for `count` icons.
    pub fn layout(&self, count: usize) -> Result<GridLayout> {
        GridLayout::new(count, self.cell_size, self.per_row)
    }

    /// Pack icons in sequence order.
    ///
    /// `on_placed` is called after each icon is drawn. Icon names must be
    /// unique, a repeated name is `MalformedInput`. With no icons the
    /// image is one transparent row tall, since a PNG cannot be empty; the
    /// layout still reports zero rows.
    pub fn pack(&self, icons: &[Icon], mut on_placed: impl FnMut(&Icon)) -> Result<Sheet> {
        let layout = self.layout(icons.len())?;

        if let Some(icon) = icons.iter().find(|icon| {
            icon.bitmap().width() != self.cell_size || icon.bitmap().height() != self.cell_size
        }) {
            return Err(SheetError::InvalidConfig {
                message: format!(
                    "icon '{}' is {}x{}, expected {}x{}",
                    icon.name,
                    icon.bitmap().width(),
                    icon.bitmap().height(),
                    self.cell_size,
                    self.cell_size
                ),
                help: None,
            });
        }

        let mut image = RgbaImage::new(layout.width(), layout.height().max(self.cell_size));
        let mut table = LookupTable::new();

        for (icon, cell) in icons.iter().zip(layout.cells()) {
            if table.insert(icon.name.clone(), cell.coord()).is_some() {
                return Err(SheetError::MalformedInput {
                    path: PathBuf::from(&icon.name),
                    message: format!("duplicate icon name '{}'", icon.name),
                });
            }
            let (x, y) = cell.origin(self.cell_size);
            imageops::replace(&mut image, icon.bitmap(), i64::from(x), i64::from(y));
            on_placed(icon);
        }

        Ok(Sheet {
            image,
            table,
            layout,
        })
    }
}
