//! WCAG photometrics: relative luminance, contrast ratios, and the
//! conformance level a ratio qualifies for.
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use std::fmt;

use crate::color::{Component, Components};
use crate::math::Vector;
use crate::Rgb;

/// The sRGB-to-linear transfer function with the WCAG 2.x constants.
fn to_linear_light(value: Component) -> Component {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color, in [0, 1].
pub fn luminance(color: Rgb) -> Component {
    let linear = Components(
        Component::from(color.red) / 255.0,
        Component::from(color.green) / 255.0,
        Component::from(color.blue) / 255.0,
    )
    .map(to_linear_light);

    Vector::new(linear.0, linear.1, linear.2).dot(Vector::new(0.2126, 0.7152, 0.0722))
}

/// WCAG 2.x contrast ratio between two colors, in [1, 21]. Symmetric in
/// its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> Component {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// WCAG conformance level for normal text at a given contrast ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Conformance {
    /// Below every conformance threshold.
    Fail,
    /// Contrast ratio of at least 3:1.
    A,
    /// Contrast ratio of at least 4.5:1.
    Aa,
    /// Contrast ratio of at least 7:1.
    Aaa,
}

impl Conformance {
    /// The highest level the given contrast ratio qualifies for.
    pub fn from_ratio(ratio: Component) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "-",
        })
    }
}
