use std::fmt;

use super::Color;

/// A single CSS `box-shadow` layer. Offsets are in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadow {
    pub offset_x: i16,
    pub offset_y: i16,
    pub blur: i16,
    pub spread: i16,
    pub color: Color,
    pub inset: bool,
}

impl BoxShadow {
    pub fn new(offset_x: i16, offset_y: i16, blur: i16, spread: i16, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

fn px(f: &mut fmt::Formatter<'_>, value: i16) -> fmt::Result {
    if value == 0 {
        f.write_str("0")
    } else {
        write!(f, "{value}px")
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        px(f, self.offset_x)?;
        f.write_str(" ")?;
        px(f, self.offset_y)?;
        f.write_str(" ")?;
        px(f, self.blur)?;
        f.write_str(" ")?;
        px(f, self.spread)?;
        write!(f, " {}", self.color)?;
        if self.inset {
            f.write_str(" inset")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_shadow_css() {
        let shadow = BoxShadow::new(-4, 0, 4, -4, Color::named("gray")).inset();
        assert_eq!(shadow.to_string(), "-4px 0 4px -4px gray inset");
    }
}
