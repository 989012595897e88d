//! # `ColorShift`
//!
//! Color-model conversion and adjustment for base16-style color schemes.
//!
//! ## Representations
//!
//! - **Hex** - `#rrggbb` (the `#` is optional on input, always present on output)
//! - **RGB** - `(r, g, b)` channels in `0..=255`
//! - **HSL** - `(h, s, l)` fractions in `0.0..=1.0`
//!
//! ## Quick Start
//!
//! ```
//! use colorshift::prelude::*;
//!
//! assert_eq!(hex_to_rgb("#b4befe")?, (180, 190, 254));
//! assert_eq!(rgb_to_hex(180, 190, 254), "#b4befe");
//!
//! // Shift saturation by 20 percentage points
//! assert_eq!(saturation("#b4befe", 20)?, "#b3bdff");
//!
//! // Darken a whole palette
//! let darker = catppuccin_mocha()?.map_colors(|hex| lightness(hex, -10))?;
//! assert_eq!(darker.len(), 16);
//! # Ok::<(), colorshift::Error>(())
//! ```
//!
//! Shifts clamp at the HSL boundaries rather than wrapping, hue included.

pub mod color;
pub mod convert;
pub mod error;
pub mod scheme;
pub mod shift;

// Re-exports for convenience
pub use color::Color;
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::convert::{
        Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hex, rgb_to_hex,
        rgb_to_hsl, try_rgb_to_hex,
    };
    pub use crate::error::{Error, Result};
    pub use crate::scheme::{Scheme, SlotRole, catppuccin_mocha, find_scheme, find_slot};
    pub use crate::shift::{Channel, check_range, hue, lightness, saturation, shift};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
