//! Hex string <-> RGB triple

use crate::error::{Error, Result};

use super::Rgb;

/// Strip the optional `#` and check the remainder is exactly 6 hex digits.
fn hex_digits(hex: &str) -> Result<&str> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let len = digits.chars().count();
    if len != 6 {
        return Err(Error::InvalidHexLength {
            input: hex.to_string(),
            len,
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexDigit {
            input: hex.to_string(),
        });
    }

    Ok(digits)
}

/// Parse a hex color (e.g. `"#b4befe"` or `"B4BEFE"`) into `(r, g, b)`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex_digits(hex)?;

    // All ASCII at this point, so byte slicing lands on char boundaries
    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| Error::InvalidHexDigit {
            input: hex.to_string(),
        })
    };

    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Format an RGB triple as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Format wide-integer channels, rejecting anything outside `0..=255`.
pub fn try_rgb_to_hex(r: i64, g: i64, b: i64) -> Result<String> {
    let narrow = |channel: &'static str, value: i64| {
        u8::try_from(value).map_err(|_| Error::ChannelOutOfRange { channel, value })
    };

    Ok(rgb_to_hex(
        narrow("red", r)?,
        narrow("green", g)?,
        narrow("blue", b)?,
    ))
}

/// Canonical form of a hex color: lowercase with a `#` prefix.
pub fn normalize_hex(hex: &str) -> Result<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(rgb_to_hex(r, g, b))
}
