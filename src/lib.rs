//! toneramp computes accessible tone scales (tint/shade ramps) from a
//! single seed color. Every scale is matched against a neutral gray
//! reference scale by WCAG contrast ratio against a fixed light or dark
//! background, and the step whose contrast sits closest to the seed's
//! is designated the closest match.

#![deny(missing_docs)]

mod color;
mod convert;
mod hsl;
mod luminance;
mod math;
mod rgb;
mod scale;
mod tune;

pub use color::{is_valid_hex, Component, Components, ParseColorError};
pub use hsl::Hsl;
pub use luminance::{contrast_ratio, luminance, Conformance};
pub use rgb::Rgb;
pub use scale::{Mode, Scale, Step, Swatch, SwatchFlags, Tuning};
pub use tune::{auto_offset, auto_offset_hsl, hue_adjustment};
