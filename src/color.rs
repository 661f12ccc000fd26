//! Shared component types and hex-string validation.

use thiserror::Error;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are
/// stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are
/// stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The error returned when a hex color string is not `#` followed by
/// exactly 6 hexadecimal digits.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color format {0:?}, expected '#' followed by 6 hex digits")]
pub struct ParseColorError(String);

impl ParseColorError {
    pub(crate) fn new(input: &str) -> Self {
        Self(input.to_owned())
    }
}

/// Return true if the string is exactly `#` followed by 6 hexadecimal
/// digits, case-insensitive. Input layers must validate user input with
/// this before handing it to the engine.
pub fn is_valid_hex(hex: &str) -> bool {
    match hex.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
