//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

/// A color specified with the HSL notation in the sRGB color space.
/// Hue is in degrees in [0, 360), saturation and lightness are
/// percentages in [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color.
    pub hue: Component,
    /// The saturation component of the color.
    pub saturation: Component,
    /// The lightness component of the color.
    pub lightness: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness)
    /// components.
    pub const fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}
