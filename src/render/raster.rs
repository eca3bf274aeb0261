//! SVG rasterizer.
//!
//! Renders an SVG into a square transparent cell, fitting the drawing
//! without cropping, then recolours every covered pixel with a single
//! fill colour.

use std::path::Path;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia;
use resvg::usvg;

use crate::error::{Result, SheetError};
use crate::types::{Colour, Icon};

/// Converts SVG documents into fixed-size icon bitmaps.
pub struct Rasterizer {
    size: u32,
    fill: Colour,
    options: usvg::Options<'static>,
}

impl Rasterizer {
    /// Rasterizer producing `size × size` icons filled with white.
    ///
    /// A zero size is `InvalidConfig`.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(SheetError::InvalidConfig {
                message: "icon size must be at least 1 (got 0)".to_string(),
                help: Some("Set icon_size to a positive value".to_string()),
            });
        }

        Ok(Self {
            size,
            fill: Colour::WHITE,
            options: usvg::Options::default(),
        })
    }

    /// Override the fill colour. Its alpha is ignored.
    pub fn with_fill(mut self, fill: Colour) -> Self {
        self.fill = fill;
        self
    }

    /// Edge length of produced bitmaps.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Read and rasterize an SVG file.
    pub fn rasterize_file(&self, name: &str, path: &Path) -> Result<Icon> {
        let data = std::fs::read(path).map_err(|e| SheetError::io(path, "Failed to read icon", e))?;

        let bitmap = self
            .rasterize(&data)
            .map_err(|message| SheetError::MalformedInput {
                path: path.to_path_buf(),
                message,
            })?;

        Ok(Icon::new(name, bitmap))
    }

    /// Rasterize SVG source bytes into a `size × size` bitmap.
    ///
    /// Returns the parser's message when the data is not a usable SVG.
    pub fn rasterize(&self, data: &[u8]) -> std::result::Result<RgbaImage, String> {
        let tree = usvg::Tree::from_data(data, &self.options)
            .map_err(|e| format!("Failed to parse SVG: {}", e))?;

        let mut pixmap = tiny_skia::Pixmap::new(self.size, self.size)
            .ok_or_else(|| format!("Cannot allocate a {0}x{0} pixmap", self.size))?;

        resvg::render(&tree, self.fit_transform(tree.size()), &mut pixmap.as_mut());

        Ok(self.recolour(&pixmap))
    }

    /// Scale to fit inside the cell and center on the shorter axis.
    fn fit_transform(&self, natural: usvg::Size) -> tiny_skia::Transform {
        let cell = self.size as f32;
        let scale = (cell / natural.width()).min(cell / natural.height());
        let dx = (cell - natural.width() * scale) / 2.0;
        let dy = (cell - natural.height() * scale) / 2.0;

        tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy)
    }

    /// Keep the rendered coverage as alpha; replace all colour with the fill.
    fn recolour(&self, pixmap: &tiny_skia::Pixmap) -> RgbaImage {
        let mut img = RgbaImage::new(self.size, self.size);

        for (pixel, source) in img.pixels_mut().zip(pixmap.pixels()) {
            let colour = Colour::rgb(self.fill.r, self.fill.g, self.fill.b).with_alpha(source.alpha());
            *pixel = Rgba(colour.to_rgba());
        }

        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="red"/></svg>"#;
    const WIDE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10"><rect width="20" height="10"/></svg>"#;
    const TALL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 20"><rect width="10" height="20"/></svg>"#;

    #[test]
    fn test_rasterize_size() {
        let img = Rasterizer::new(64).unwrap().rasterize(SQUARE.as_bytes()).unwrap();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
    }

    #[test]
    fn test_rasterizer_rejects_zero_size() {
        assert!(matches!(
            Rasterizer::new(0),
            Err(SheetError::InvalidConfig { .. })
        ));
        assert_eq!(Rasterizer::new(1).unwrap().size(), 1);
    }

    #[test]
    fn test_rasterize_forces_fill_colour() {
        let img = Rasterizer::new(16).unwrap().rasterize(SQUARE.as_bytes()).unwrap();
        // Red in the source, white in the output
        assert_eq!(img.get_pixel(8, 8).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rasterize_custom_fill() {
        let img = Rasterizer::new(16)
            .unwrap()
            .with_fill(Colour::rgb(0, 128, 255))
            .rasterize(SQUARE.as_bytes())
            .unwrap();
        assert_eq!(img.get_pixel(4, 4).0, [0, 128, 255, 255]);
    }

    #[test]
    fn test_rasterize_wide_pads_vertically() {
        let img = Rasterizer::new(64).unwrap().rasterize(WIDE.as_bytes()).unwrap();

        // 20x10 scales to 64x32, centered: rows 16..48 are covered
        assert_eq!(img.get_pixel(32, 4).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(32, 60).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 20).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rasterize_tall_pads_horizontally() {
        let img = Rasterizer::new(64).unwrap().rasterize(TALL.as_bytes()).unwrap();

        assert_eq!(img.get_pixel(4, 32).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(60, 32).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rasterize_empty_svg_is_transparent() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"></svg>"#;
        let img = Rasterizer::new(8).unwrap().rasterize(svg.as_bytes()).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_rasterize_malformed() {
        assert!(Rasterizer::new(8).unwrap().rasterize(b"<not-svg").is_err());
        assert!(Rasterizer::new(8).unwrap().rasterize(b"").is_err());
    }

    #[test]
    fn test_rasterize_file_names_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, "garbage").unwrap();

        let err = Rasterizer::new(8).unwrap().rasterize_file("broken", &path).unwrap_err();
        match err {
            SheetError::MalformedInput { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rasterize_file_missing() {
        let err = Rasterizer::new(8)
            .unwrap()
            .rasterize_file("gone", Path::new("/nonexistent/gone.svg"))
            .unwrap_err();
        assert!(matches!(err, SheetError::Io { .. }));
    }

    #[test]
    fn test_rasterize_file_keeps_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.svg");
        fs::write(&path, SQUARE).unwrap();

        let icon = Rasterizer::new(8).unwrap().rasterize_file("square", &path).unwrap();
        assert_eq!(icon.name, "square");
        assert_eq!(icon.size(), 8);
    }
}
