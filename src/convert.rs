//! Conversions between the RGB and HSL notations of the sRGB color
//! space. The engine only ever moves between these two notations, so
//! the conversions are implemented directly on the two models with no
//! intermediate color space.

use crate::color::{Component, Components};
use crate::{Hsl, Rgb};

impl Rgb {
    /// Convert a color specified in the sRGB color space to the HSL
    /// notation.
    ///
    /// Achromatic colors come back with hue 0 and saturation 0.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&Components(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        ));
        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color
    /// space, rounding each channel to the nearest 8-bit value.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) = util::hsl_to_rgb(&Components(
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        ));
        Rgb::new(
            (red * 255.0).round() as u8,
            (green * 255.0).round() as u8,
            (blue * 255.0).round() as u8,
        )
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::{almost_zero, normalize, normalize_hue};

    /// Calculate the hue from RGB components and return it along with
    /// the min and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            normalize_hue(
                60.0 * if max == red {
                    (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
                } else if max == green {
                    (blue - red) / delta + 2.0
                } else {
                    (red - green) / delta + 4.0
                },
            )
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }
}
