//! Colour type.

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// White. Icons are filled with this so the consumer can tint them.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Same RGB with the given alpha, or fully transparent when `alpha` is 0.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        if alpha == 0 {
            Self::TRANSPARENT
        } else {
            Self::new(self.r, self.g, self.b, alpha)
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
