//! Base16 slot registry - the 16 conventional palette slots

/// Role a slot plays in a base16 palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    /// base00-base03: backgrounds, selections, comments
    Background,
    /// base04-base07: foreground shades
    Foreground,
    /// base08-base0F: syntax accents
    Accent,
}

/// Definition of a single base16 slot
#[derive(Debug, Clone, Copy)]
pub struct SlotDef {
    /// Slot key used in schemes (e.g., "base08")
    pub name: &'static str,
    pub role: SlotRole,
    /// Conventional usage
    pub usage: &'static str,
}

/// All base16 slots, in palette order
pub const BASE16_SLOTS: &[SlotDef] = &[
    SlotDef {
        name: "base00",
        role: SlotRole::Background,
        usage: "Default background",
    },
    SlotDef {
        name: "base01",
        role: SlotRole::Background,
        usage: "Lighter background (status bars, line numbers)",
    },
    SlotDef {
        name: "base02",
        role: SlotRole::Background,
        usage: "Selection background",
    },
    SlotDef {
        name: "base03",
        role: SlotRole::Background,
        usage: "Comments, invisibles, line highlighting",
    },
    SlotDef {
        name: "base04",
        role: SlotRole::Foreground,
        usage: "Dark foreground (status bars)",
    },
    SlotDef {
        name: "base05",
        role: SlotRole::Foreground,
        usage: "Default foreground, caret, delimiters",
    },
    SlotDef {
        name: "base06",
        role: SlotRole::Foreground,
        usage: "Light foreground",
    },
    SlotDef {
        name: "base07",
        role: SlotRole::Foreground,
        usage: "Light background",
    },
    SlotDef {
        name: "base08",
        role: SlotRole::Accent,
        usage: "Variables, markup link text, diff deleted",
    },
    SlotDef {
        name: "base09",
        role: SlotRole::Accent,
        usage: "Integers, booleans, constants",
    },
    SlotDef {
        name: "base0A",
        role: SlotRole::Accent,
        usage: "Classes, markup bold, search text background",
    },
    SlotDef {
        name: "base0B",
        role: SlotRole::Accent,
        usage: "Strings, markup code, diff inserted",
    },
    SlotDef {
        name: "base0C",
        role: SlotRole::Accent,
        usage: "Support, regular expressions, escape characters",
    },
    SlotDef {
        name: "base0D",
        role: SlotRole::Accent,
        usage: "Functions, methods, headings",
    },
    SlotDef {
        name: "base0E",
        role: SlotRole::Accent,
        usage: "Keywords, storage, selectors",
    },
    SlotDef {
        name: "base0F",
        role: SlotRole::Accent,
        usage: "Deprecated, embedded language tags",
    },
];

/// Total number of base16 slots
pub const SLOT_COUNT: usize = 16;

/// Get slots filtered by role
pub fn slots_by_role(role: SlotRole) -> impl Iterator<Item = &'static SlotDef> {
    BASE16_SLOTS.iter().filter(move |s| s.role == role)
}

/// Find a slot definition by name
#[must_use]
pub fn find_slot(name: &str) -> Option<&'static SlotDef> {
    BASE16_SLOTS.iter().find(|s| s.name == name)
}
