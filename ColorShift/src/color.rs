//! `Color` - a scheme holder with the conversion and shift operations attached
//!
//! ```
//! use colorshift::prelude::*;
//!
//! let color = Color::new(catppuccin_mocha()?);
//! let lavender = color.get("base07")?;
//! assert_eq!(lavender, "#b4befe");
//! assert_eq!(Color::saturation(lavender, 20)?, "#b3bdff");
//! assert_eq!(color.lightness_of("base07", -20)?, "#4f67fd");
//! # Ok::<(), colorshift::Error>(())
//! ```

use crate::convert::{self, Hsl, Rgb};
use crate::error::Result;
use crate::scheme::Scheme;
use crate::shift::{self, Channel};

/// Holds a color scheme and exposes the color operations.
///
/// The operations themselves are associated functions and never touch the
/// scheme; the `*_of` methods look a slot up first and shift its color.
#[derive(Debug, Clone, Default)]
pub struct Color {
    scheme: Scheme,
}

impl Color {
    #[must_use]
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Hex color stored under `slot`.
    pub fn get(&self, slot: &str) -> Result<&str> {
        self.scheme.color(slot)
    }

    // Conversions

    pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
        convert::hex_to_rgb(hex)
    }

    #[must_use]
    pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
        convert::rgb_to_hex(r, g, b)
    }

    pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
        convert::hex_to_hsl(hex)
    }

    #[must_use]
    pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
        convert::hsl_to_hex(h, s, l)
    }

    #[must_use]
    pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
        convert::rgb_to_hsl(r, g, b)
    }

    #[must_use]
    pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
        convert::hsl_to_rgb(h, s, l)
    }

    // Shifts

    pub fn hue(color: &str, shift: i32) -> Result<String> {
        shift::hue(color, shift)
    }

    pub fn saturation(color: &str, shift: i32) -> Result<String> {
        shift::saturation(color, shift)
    }

    pub fn lightness(color: &str, shift: i32) -> Result<String> {
        shift::lightness(color, shift)
    }

    /// Shift one channel of the color stored under `slot`.
    pub fn shift_of(&self, slot: &str, channel: Channel, shift: i32) -> Result<String> {
        shift::shift(self.get(slot)?, channel, shift)
    }

    pub fn hue_of(&self, slot: &str, shift: i32) -> Result<String> {
        self.shift_of(slot, Channel::Hue, shift)
    }

    pub fn saturation_of(&self, slot: &str, shift: i32) -> Result<String> {
        self.shift_of(slot, Channel::Saturation, shift)
    }

    pub fn lightness_of(&self, slot: &str, shift: i32) -> Result<String> {
        self.shift_of(slot, Channel::Lightness, shift)
    }
}

impl From<Scheme> for Color {
    fn from(scheme: Scheme) -> Self {
        Self::new(scheme)
    }
}
