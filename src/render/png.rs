//! PNG encoding for sheets.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Result, SheetError};

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| SheetError::Build {
            message: format!("Failed to encode {}x{} PNG: {}", image.width(), image.height(), e),
            help: None,
        })?;
    Ok(buffer)
}
