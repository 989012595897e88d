//! Relative shifts along one HSL axis of a hex color
//!
//! Each shift converts `hex -> HSL`, moves exactly one channel, hard-clamps it
//! into `0.0..=1.0` and converts back. Nothing wraps, hue included: a hue
//! pushed past either end of the circle pins at 0 or 1 (both are red).
//!
//! Shift units:
//! - saturation / lightness: percentage points, nominally `-100..=100`
//! - hue: `shift / 100` on the `h * 3.6` scale, so the stored hue fraction
//!   moves by `shift / 360`

use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_hsl, hsl_to_hex};
use crate::error::Result;

/// One axis of the HSL model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Lightness];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
        }
    }
}

/// Range check: pin `value` into `0.0..=1.0`.
#[must_use]
pub fn check_range(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn clamp_channel(channel: Channel, value: f64) -> f64 {
    let clamped = check_range(value);
    if clamped != value {
        tracing::trace!(
            channel = channel.name(),
            value,
            clamped,
            "shift clamped at HSL boundary"
        );
    }
    clamped
}

/// Offset a saturation or lightness fraction by `shift` percentage points.
fn offset_percent(value: f64, shift: i32) -> f64 {
    let delta = f64::from(shift.unsigned_abs()) / 100.0;
    if shift < 0 { value - delta } else { value + delta }
}

/// Offset a hue fraction on the `h * 3.6` scale.
fn offset_hue(h: f64, shift: i32) -> f64 {
    let delta = f64::from(shift.unsigned_abs()) / 100.0;
    if shift < 0 {
        (h * 3.6 - delta) / 3.6
    } else {
        (h * 3.6 + delta) / 3.6
    }
}

/// Shift one HSL channel of `color` and return the new `#rrggbb` color.
pub fn shift(color: &str, channel: Channel, shift: i32) -> Result<String> {
    let (mut h, mut s, mut l) = hex_to_hsl(color)?;

    match channel {
        Channel::Hue => h = clamp_channel(channel, offset_hue(h, shift)),
        Channel::Saturation => s = clamp_channel(channel, offset_percent(s, shift)),
        Channel::Lightness => l = clamp_channel(channel, offset_percent(l, shift)),
    }

    Ok(hsl_to_hex(h, s, l))
}

/// Move the hue of `color`; the hue fraction changes by `shift / 360`.
pub fn hue(color: &str, shift: i32) -> Result<String> {
    self::shift(color, Channel::Hue, shift)
}

/// Move the saturation of `color` by `shift` percentage points.
pub fn saturation(color: &str, shift: i32) -> Result<String> {
    self::shift(color, Channel::Saturation, shift)
}

/// Move the lightness of `color` by `shift` percentage points.
pub fn lightness(color: &str, shift: i32) -> Result<String> {
    self::shift(color, Channel::Lightness, shift)
}
