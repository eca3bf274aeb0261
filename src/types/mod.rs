mod colour;
mod icon;
mod style;

pub use colour::Colour;
pub use icon::Icon;
pub use style::{StyleSet, DEFAULT_STYLES};
