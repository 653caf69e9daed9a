mod color;
mod enums;
mod shadow;
mod style;

pub use color::Color;
pub use enums::{Position, Tag};
pub use shadow::BoxShadow;
pub use style::Style;
