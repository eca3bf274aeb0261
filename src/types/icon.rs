//! A rasterized icon.

use image::RgbaImage;

/// One rasterized icon: its logical name and a square RGBA bitmap.
#[derive(Debug, Clone)]
pub struct Icon {
    /// Logical name, the source file stem.
    pub name: String,

    bitmap: RgbaImage,
}

impl Icon {
    pub fn new(name: impl Into<String>, bitmap: RgbaImage) -> Self {
        Self {
            name: name.into(),
            bitmap,
        }
    }

    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    /// Edge length in pixels (bitmaps are square).
    pub fn size(&self) -> u32 {
        self.bitmap.width()
    }
}
