//! Bundled base16 schemes
//!
//! Presets are TOML files compiled into the crate: an optional `name` plus a
//! `[colors]` table of slot -> hex.

use super::types::Scheme;
use crate::error::Result;

// Bundled scheme TOML files
const CATPPUCCIN_MOCHA: &str = include_str!("presets/catppuccin_mocha.toml");

const BUNDLED: &[&str] = &[CATPPUCCIN_MOCHA];

fn parse_scheme(src: &str) -> Result<Scheme> {
    let scheme: Scheme = toml::from_str(src)?;
    tracing::debug!(
        "Loaded bundled scheme {:?} ({} slots)",
        scheme.name(),
        scheme.len()
    );
    Ok(scheme)
}

/// Catppuccin Mocha, mapped onto the 16 base16 slots.
pub fn catppuccin_mocha() -> Result<Scheme> {
    parse_scheme(CATPPUCCIN_MOCHA)
}

/// Load all bundled schemes, skipping any that fail to parse
pub fn load_bundled_schemes() -> Vec<Scheme> {
    BUNDLED
        .iter()
        .filter_map(|src| match parse_scheme(src) {
            Ok(scheme) => Some(scheme),
            Err(e) => {
                tracing::warn!("Failed to parse bundled scheme: {}", e);
                None
            }
        })
        .collect()
}

/// Find a bundled scheme by display name (case-insensitive)
pub fn find_scheme(name: &str) -> Option<Scheme> {
    load_bundled_schemes()
        .into_iter()
        .find(|s| s.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
}
