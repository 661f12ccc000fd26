//! Lightness tuning heuristics driven by the seed color.
//!
//! Saturated hues read lighter or darker than a neutral gray of the
//! same HSL lightness. The table below biases the scale lightness per
//! hue band to counteract that, and [`auto_offset`] turns the same
//! table plus the seed's saturation and lightness into a suggested
//! offset for a whole scale.

use crate::color::{Component, ParseColorError};
use crate::{Hsl, Rgb};

/// Lightness bias per hue band, in scale lightness points. The bounds
/// are inclusive and the list is ordered: the first band containing the
/// hue wins, which fixes the behavior at the shared boundaries (45, 75,
/// 180, ...).
#[rustfmt::skip]
const HUE_BIAS: &[(Component, Component, i32)] = &[
    (345.0, 360.0, -2), // red
    (0.0, 15.0, -2),    // red
    (15.0, 45.0, -4),   // orange
    (45.0, 75.0, -6),   // yellow
    (75.0, 90.0, -2),   // yellow-green
    (150.0, 180.0, 2),  // mint
    (180.0, 210.0, 2),  // cyan
    (210.0, 270.0, 4),  // blue
    (270.0, 300.0, 3),  // purple
];

/// Lightness correction counteracting the perceptual lightness bias of
/// a saturated hue. Hues outside every band need no correction.
pub fn hue_adjustment(hue: Component) -> i32 {
    HUE_BIAS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&hue))
        .map_or(0, |&(_, _, bias)| bias)
}

/// Suggest a scale lightness offset for a seed color, in [-10, 10].
pub fn auto_offset(hex: &str) -> Result<i32, ParseColorError> {
    Ok(auto_offset_hsl(&Rgb::from_hex(hex)?.to_hsl()))
}

/// As [`auto_offset`], for an already decomposed seed color.
pub fn auto_offset_hsl(seed: &Hsl) -> i32 {
    let mut offset = hue_adjustment(seed.hue);

    if seed.saturation > 80.0 {
        offset -= 1;
    }
    if seed.saturation < 40.0 {
        offset += 1;
    }
    if seed.lightness > 70.0 {
        offset -= 1;
    }
    if seed.lightness < 40.0 {
        offset += 1;
    }

    offset.clamp(-10, 10)
}
