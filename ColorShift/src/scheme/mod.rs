//! Color schemes - named slot -> hex color mappings
//!
//! - Base16 slot registry with the conventional role of each slot
//! - The `Scheme` mapping itself
//! - Bundled presets

pub mod presets;
pub mod registry;
pub mod types;

pub use presets::{catppuccin_mocha, find_scheme, load_bundled_schemes};
pub use registry::{BASE16_SLOTS, SLOT_COUNT, SlotDef, SlotRole, find_slot, slots_by_role};
pub use types::Scheme;
