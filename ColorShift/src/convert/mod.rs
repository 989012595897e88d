//! Conversions between hex strings, RGB triples and HSL triples
//!
//! - `hex.rs` - `#rrggbb` parsing and formatting
//! - `hsl.rs` - RGB <-> HSL math
//!
//! The hex <-> HSL helpers here are straight compositions of the two.

pub mod hex;
pub mod hsl;

pub use hex::{hex_to_rgb, normalize_hex, rgb_to_hex, try_rgb_to_hex};
pub use hsl::{ONE_SIXTH, ONE_THIRD, TWO_THIRDS, component, hsl_to_rgb, rgb_to_hsl};

use crate::error::Result;

/// `(r, g, b)` channels in `0..=255`
pub type Rgb = (u8, u8, u8);

/// `(h, s, l)` fractions in `0.0..=1.0`
pub type Hsl = (f64, f64, f64);

/// Parse a hex color straight into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(rgb_to_hsl(r, g, b))
}

/// Format an HSL triple as a `#rrggbb` string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    rgb_to_hex(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_hsl_round_trip() {
        for hex in [
            "#11111b", "#181825", "#313244", "#45475a", "#585b70", "#cdd6f4", "#f5e0dc",
            "#b4befe", "#f38ba8", "#fab387", "#f9e2af", "#a6e3a1", "#94e2d5", "#89b4fa",
            "#cba6f7", "#f2cdcd",
        ] {
            let (h, s, l) = hex_to_hsl(hex).unwrap();
            assert_eq!(hsl_to_hex(h, s, l), hex);
        }
    }

    #[test]
    fn test_hex_to_hsl_propagates_format_errors() {
        assert!(hex_to_hsl("#b4be").unwrap_err().is_format_error());
        assert!(hex_to_hsl("#b4bexx").unwrap_err().is_format_error());
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 1.0), "#ffffff");
    }
}
