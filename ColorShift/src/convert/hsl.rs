//! RGB triple <-> HSL triple
//!
//! HSL components are fractions in `0.0..=1.0`: hue is a fraction of the full
//! circle, saturation and lightness are fractions of 100%. No rounding is
//! applied on the way into HSL.

use super::{Hsl, Rgb};

pub const ONE_THIRD: f64 = 1.0 / 3.0;
pub const ONE_SIXTH: f64 = 1.0 / 6.0;
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Convert 8-bit RGB channels to `(h, s, l)`.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;

    let l = sum / 2.0;
    if min == max {
        return (0.0, 0.0, l);
    }

    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - sum)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0), s, l)
}

/// Convert `(h, s, l)` back to 8-bit RGB channels.
///
/// Channels are scaled by 255 and rounded half away from zero (`f64::round`).
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        let v = to_channel(l);
        return (v, v, v);
    }

    let m2 = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - (l * s)
    };
    let m1 = 2.0 * l - m2;

    (
        to_channel(component(m1, m2, h + ONE_THIRD)),
        to_channel(component(m1, m2, h)),
        to_channel(component(m1, m2, h - ONE_THIRD)),
    )
}

/// Piecewise hue-to-channel reconstruction.
///
/// Breakpoints at 1/6, 1/2 and 2/3 of the (wrapped) hue.
#[must_use]
pub fn component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

// `as u8` saturates, so stray values outside 0..=1 pin to 0 or 255
#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}
