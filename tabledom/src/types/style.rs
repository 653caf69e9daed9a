use std::fmt::Write;

use super::{BoxShadow, Color, Position};

/// Inline style of an element. Unset properties are not emitted.
///
/// Lengths are in CSS pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub position: Option<Position>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub width: Option<f64>,
    pub box_shadow: Option<BoxShadow>,
    pub opacity: Option<f32>,
    pub z_index: Option<i16>,
    pub background: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn box_shadow(mut self, shadow: BoxShadow) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Overlay `other` on top of `self`: every property set in `other` wins.
    pub fn merge(mut self, other: &Style) -> Self {
        if other.position.is_some() {
            self.position = other.position;
        }
        if other.left.is_some() {
            self.left = other.left;
        }
        if other.right.is_some() {
            self.right = other.right;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.box_shadow.is_some() {
            self.box_shadow.clone_from(&other.box_shadow);
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.z_index.is_some() {
            self.z_index = other.z_index;
        }
        if other.background.is_some() {
            self.background.clone_from(&other.background);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serialize as the value of an HTML `style` attribute.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let mut push = |name: &str, value: &dyn std::fmt::Display| {
            if !css.is_empty() {
                css.push(' ');
            }
            let _ = write!(css, "{name}: {value};");
        };

        if let Some(shadow) = &self.box_shadow {
            push("box-shadow", shadow);
        }
        if let Some(position) = self.position {
            push("position", &position.as_css());
        }
        if let Some(left) = self.left {
            push("left", &Px(left));
        }
        if let Some(right) = self.right {
            push("right", &Px(right));
        }
        if let Some(width) = self.width {
            push("width", &Px(width));
        }
        if let Some(opacity) = self.opacity {
            push("opacity", &opacity);
        }
        if let Some(z_index) = self.z_index {
            push("z-index", &z_index);
        }
        if let Some(background) = &self.background {
            push("background", background);
        }
        css
    }
}

struct Px(f64);

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Adding 0.0 folds -0.0 into 0.0.
        write!(f, "{}px", self.0 + 0.0)
    }
}
