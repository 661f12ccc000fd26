//! The 13-step tone scale generator.
//!
//! A scale is generated for a mode (light or dark background) by
//! walking the mode's neutral gray reference scale: each step keeps the
//! gray's lightness, applies a step-dependent share of the seed's
//! saturation, and keeps the seed's hue. Every candidate is measured by
//! WCAG contrast against the mode background, and the step whose
//! contrast sits closest to the seed's own is designated the closest
//! match.

use std::fmt;
use std::ops::Index;

use bitflags::bitflags;

use crate::color::{Component, ParseColorError};
use crate::luminance::contrast_ratio;
use crate::tune::{auto_offset_hsl, hue_adjustment};
use crate::{Hsl, Rgb};

/// Seeds with less saturation than this are treated as achromatic and
/// render as the gray reference scale itself.
const ACHROMATIC_THRESHOLD: Component = 5.0;

/// The nominal labels of the 13 tone steps, ordered from the lightest
/// surface tone to the highest-emphasis tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Step {
    /// Tone 50.
    S50 = 50,
    /// Tone 75.
    S75 = 75,
    /// Tone 100.
    S100 = 100,
    /// Tone 150.
    S150 = 150,
    /// Tone 200.
    S200 = 200,
    /// Tone 300.
    S300 = 300,
    /// Tone 400.
    S400 = 400,
    /// Tone 500.
    S500 = 500,
    /// Tone 600.
    S600 = 600,
    /// Tone 700.
    S700 = 700,
    /// Tone 800.
    S800 = 800,
    /// Tone 900.
    S900 = 900,
    /// Tone 950.
    S950 = 950,
}

impl Step {
    /// Number of steps in a scale.
    pub const COUNT: usize = 13;

    /// All steps in fixed scale order.
    pub const ALL: [Step; Self::COUNT] = [
        Step::S50,
        Step::S75,
        Step::S100,
        Step::S150,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
        Step::S900,
        Step::S950,
    ];

    /// The numeric label of this step.
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// The position of this step in the fixed scale order.
    pub const fn index(self) -> usize {
        match self {
            Step::S50 => 0,
            Step::S75 => 1,
            Step::S100 => 2,
            Step::S150 => 3,
            Step::S200 => 4,
            Step::S300 => 5,
            Step::S400 => 6,
            Step::S500 => 7,
            Step::S600 => 8,
            Step::S700 => 9,
            Step::S800 => 10,
            Step::S900 => 11,
            Step::S950 => 12,
        }
    }

    /// The share of the seed saturation applied at this step. Chroma
    /// reads weaker on light tints and stronger on dark shades, so the
    /// tints are desaturated and the darkest shades oversaturated.
    fn saturation_factor(self) -> Component {
        match self.index() {
            0..=2 => 0.3,
            3..=5 => 0.6,
            6..=9 => 1.0,
            _ => 1.2,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The background a scale is generated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// A white application background.
    Light,
    /// A near-black application background.
    Dark,
}

impl Mode {
    /// The fixed background reference for this mode.
    pub const fn background(self) -> Rgb {
        match self {
            Mode::Light => Rgb::new(255, 255, 255),
            Mode::Dark => Rgb::new(12, 12, 12),
        }
    }

    /// The neutral gray reference scale for this mode, index-aligned
    /// with [`Step::ALL`].
    pub const fn grays(self) -> &'static [Rgb; Step::COUNT] {
        match self {
            Mode::Light => &GRAY_LIGHT,
            Mode::Dark => &GRAY_DARK,
        }
    }
}

/// Light-mode gray reference scale. Runs from near-white to near-black
/// so contrast against the white background grows with the step.
const GRAY_LIGHT: [Rgb; Step::COUNT] = [
    Rgb::new(0xfa, 0xfa, 0xfa),
    Rgb::new(0xf5, 0xf5, 0xf5),
    Rgb::new(0xf0, 0xf0, 0xf0),
    Rgb::new(0xe8, 0xe8, 0xe8),
    Rgb::new(0xd9, 0xd9, 0xd9),
    Rgb::new(0xbf, 0xbf, 0xbf),
    Rgb::new(0xa6, 0xa6, 0xa6),
    Rgb::new(0x8c, 0x8c, 0x8c),
    Rgb::new(0x73, 0x73, 0x73),
    Rgb::new(0x59, 0x59, 0x59),
    Rgb::new(0x40, 0x40, 0x40),
    Rgb::new(0x26, 0x26, 0x26),
    Rgb::new(0x17, 0x17, 0x17),
];

/// Dark-mode gray reference scale. Runs the opposite direction so
/// contrast against the near-black background grows with the step.
const GRAY_DARK: [Rgb; Step::COUNT] = [
    Rgb::new(0x17, 0x17, 0x17),
    Rgb::new(0x1f, 0x1f, 0x1f),
    Rgb::new(0x26, 0x26, 0x26),
    Rgb::new(0x2e, 0x2e, 0x2e),
    Rgb::new(0x38, 0x38, 0x38),
    Rgb::new(0x4d, 0x4d, 0x4d),
    Rgb::new(0x66, 0x66, 0x66),
    Rgb::new(0x80, 0x80, 0x80),
    Rgb::new(0x99, 0x99, 0x99),
    Rgb::new(0xb3, 0xb3, 0xb3),
    Rgb::new(0xcc, 0xcc, 0xcc),
    Rgb::new(0xe6, 0xe6, 0xe6),
    Rgb::new(0xf2, 0xf2, 0xf2),
];

/// How the scale lightness offset is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tuning {
    /// Derive the offset from the seed color, see [`crate::auto_offset`].
    Auto,
    /// Use the given offset, in scale lightness points.
    Offset(i32),
}

bitflags! {
    /// Markers attached to a generated swatch.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SwatchFlags: u8 {
        /// Set on the one swatch per scale whose contrast sits closest
        /// to the seed's.
        const CLOSEST_MATCH = 1 << 0;
        /// Set when the seed was near-achromatic and the gray reference
        /// was used unmodified.
        const GRAY_FALLBACK = 1 << 1;
    }
}

/// One generated entry of a tone scale.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    /// The step this swatch was generated for.
    pub step: Step,
    /// The generated color.
    pub color: Rgb,
    /// The gray reference paired with this step.
    pub gray: Rgb,
    /// HSL lightness of the gray reference, the lightness target of
    /// this step.
    pub lightness: Component,
    /// Contrast ratio of the generated color against the mode
    /// background.
    pub contrast: Component,
    /// Distance between this swatch's contrast and the seed's.
    pub contrast_diff: Component,
    /// Markers for this swatch.
    pub flags: SwatchFlags,
}

impl Swatch {
    /// Whether this swatch is the scale's closest contrast match. True
    /// for exactly one swatch per scale.
    pub fn is_closest_match(&self) -> bool {
        self.flags.contains(SwatchFlags::CLOSEST_MATCH)
    }

    /// Whether the gray reference was used unmodified because the seed
    /// was near-achromatic.
    pub fn is_gray_fallback(&self) -> bool {
        self.flags.contains(SwatchFlags::GRAY_FALLBACK)
    }

    /// The generated color as a lowercase hex string.
    pub fn hex(&self) -> String {
        self.color.to_string()
    }
}

/// A generated 13-step tone scale with its designated closest-contrast
/// entry.
#[derive(Clone, Debug)]
pub struct Scale {
    swatches: [Swatch; Step::COUNT],
    closest: usize,
}

impl Scale {
    /// Generate the tone scale for a seed color against the given
    /// mode's background. The only failure is a malformed seed string;
    /// everything past parsing is pure arithmetic.
    pub fn generate(seed: &str, mode: Mode, tuning: Tuning) -> Result<Self, ParseColorError> {
        let seed_rgb = Rgb::from_hex(seed)?;
        let seed_hsl = seed_rgb.to_hsl();

        let offset = match tuning {
            Tuning::Auto => auto_offset_hsl(&seed_hsl),
            Tuning::Offset(offset) => offset,
        };

        let background = mode.background();
        let grays = mode.grays();
        let seed_contrast = contrast_ratio(seed_rgb, background);

        let mut swatches: [Swatch; Step::COUNT] = std::array::from_fn(|index| {
            let step = Step::ALL[index];
            let gray = grays[index];
            let gray_lightness = gray.to_hsl().lightness;

            let (color, flags) = if seed_hsl.saturation < ACHROMATIC_THRESHOLD {
                (gray, SwatchFlags::GRAY_FALLBACK)
            } else {
                let mut lightness = gray_lightness + offset as Component;
                if offset != 0 {
                    lightness += hue_adjustment(seed_hsl.hue) as Component;
                }
                let saturation = seed_hsl.saturation * step.saturation_factor();

                let toned = Hsl::new(
                    seed_hsl.hue,
                    saturation.clamp(0.0, 100.0),
                    lightness.clamp(0.0, 100.0),
                );
                (toned.to_rgb(), SwatchFlags::empty())
            };

            let contrast = contrast_ratio(color, background);

            Swatch {
                step,
                color,
                gray,
                lightness: gray_lightness,
                contrast,
                contrast_diff: (contrast - seed_contrast).abs(),
                flags,
            }
        });

        // min_by keeps the first of equal minima, the required
        // tie-break in step order.
        let closest = swatches
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.contrast_diff.total_cmp(&b.contrast_diff))
            .map_or(0, |(index, _)| index);

        swatches[closest].flags |= SwatchFlags::CLOSEST_MATCH;

        log::debug!(
            "scale for {seed_rgb} ({mode:?}, offset {offset}): seed contrast {seed_contrast:.2}, \
             closest step {}",
            swatches[closest].step
        );

        Ok(Self { swatches, closest })
    }

    /// All 13 swatches in fixed scale order.
    pub fn swatches(&self) -> &[Swatch; Step::COUNT] {
        &self.swatches
    }

    /// The swatch whose contrast sits closest to the seed's.
    pub fn closest(&self) -> &Swatch {
        &self.swatches[self.closest]
    }

    /// Iterate the swatches in fixed scale order.
    pub fn iter(&self) -> std::slice::Iter<'_, Swatch> {
        self.swatches.iter()
    }
}

impl Index<Step> for Scale {
    type Output = Swatch;

    fn index(&self, step: Step) -> &Swatch {
        &self.swatches[step.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast_ratio;

    #[test]
    fn steps_are_ordered_and_indexable() {
        const VALUES: [u16; Step::COUNT] = [
            50, 75, 100, 150, 200, 300, 400, 500, 600, 700, 800, 900, 950,
        ];

        for (index, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.value(), VALUES[index]);
            assert_eq!(step.index(), index);
        }
    }

    #[test]
    fn gray_contrast_grows_with_the_step() {
        for mode in [Mode::Light, Mode::Dark] {
            let background = mode.background();
            let grays = mode.grays();
            for index in 1..Step::COUNT {
                assert!(
                    contrast_ratio(grays[index], background)
                        > contrast_ratio(grays[index - 1], background),
                    "{mode:?} gray scale is not monotonic at index {index}"
                );
            }
        }
    }

    #[test]
    fn scale_has_exactly_one_closest_match() {
        const SEEDS: &[&str] = &["#3366ff", "#ff0000", "#00ff88", "#123456", "#ffdd00"];

        for seed in SEEDS {
            for mode in [Mode::Light, Mode::Dark] {
                for tuning in [Tuning::Auto, Tuning::Offset(0), Tuning::Offset(-8)] {
                    let scale = Scale::generate(seed, mode, tuning).unwrap();

                    let matches = scale.iter().filter(|s| s.is_closest_match()).count();
                    assert_eq!(matches, 1, "{seed} {mode:?} {tuning:?}");

                    let closest = scale.closest();
                    assert!(closest.is_closest_match());
                    for swatch in scale.iter() {
                        assert!(closest.contrast_diff <= swatch.contrast_diff);
                    }
                }
            }
        }
    }

    #[test]
    fn swatches_follow_step_order() {
        let scale = Scale::generate("#3366ff", Mode::Light, Tuning::Offset(0)).unwrap();
        for (index, swatch) in scale.iter().enumerate() {
            assert_eq!(swatch.step, Step::ALL[index]);
            assert_eq!(swatch.gray, GRAY_LIGHT[index]);
            assert!(!swatch.is_gray_fallback());
        }
    }

    #[test]
    fn achromatic_seed_reproduces_the_gray_scale() {
        for (mode, grays) in [(Mode::Light, &GRAY_LIGHT), (Mode::Dark, &GRAY_DARK)] {
            let scale = Scale::generate("#808080", mode, Tuning::Offset(0)).unwrap();
            for (swatch, gray) in scale.iter().zip(grays) {
                assert_eq!(swatch.color, *gray);
                assert!(swatch.is_gray_fallback());
            }
        }
    }

    #[test]
    fn lightness_is_the_gray_reference_lightness() {
        let scale = Scale::generate("#3366ff", Mode::Light, Tuning::Offset(0)).unwrap();
        for (swatch, gray) in scale.iter().zip(&GRAY_LIGHT) {
            assert_eq!(swatch.lightness, gray.to_hsl().lightness);
        }
    }

    #[test]
    fn offset_changes_the_toned_colors() {
        let flat = Scale::generate("#3366ff", Mode::Light, Tuning::Offset(0)).unwrap();
        let lifted = Scale::generate("#3366ff", Mode::Light, Tuning::Offset(10)).unwrap();
        assert_ne!(flat[Step::S500].color, lifted[Step::S500].color);
    }

    #[test]
    fn auto_tuning_matches_the_explicit_offset() {
        let auto = Scale::generate("#3366ff", Mode::Light, Tuning::Auto).unwrap();
        let explicit = Scale::generate(
            "#3366ff",
            Mode::Light,
            Tuning::Offset(crate::auto_offset("#3366ff").unwrap()),
        )
        .unwrap();

        for (a, b) in auto.iter().zip(explicit.iter()) {
            assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn indexing_by_step() {
        let scale = Scale::generate("#3366ff", Mode::Dark, Tuning::Auto).unwrap();
        assert_eq!(scale[Step::S950].step, Step::S950);
        assert_eq!(scale[Step::S50].gray, GRAY_DARK[0]);
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert!(Scale::generate("3366ff", Mode::Light, Tuning::Auto).is_err());
        assert!(Scale::generate("#zzzzzz", Mode::Light, Tuning::Auto).is_err());
    }

    #[test]
    fn swatch_hex_is_lowercase() {
        let scale = Scale::generate("#3366FF", Mode::Light, Tuning::Offset(0)).unwrap();
        for swatch in scale.iter() {
            assert_eq!(swatch.hex(), swatch.hex().to_lowercase());
        }
    }
}
