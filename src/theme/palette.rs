//! Accent palettes and colour modes.

use serde::{Serialize, Serializer};

/// One CSS custom property: name without the leading `--`, and its value.
pub type ColorEntry = (&'static str, &'static str);

/// Custom properties every palette defines, in write order.
pub const PALETTE_KEYS: [&str; 5] = [
    "primary",
    "primary-foreground",
    "accent",
    "accent-foreground",
    "ring",
];

/// Light or dark rendering of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    /// Explicit mode first, then the system preference, then light.
    pub fn effective(resolved: Option<ColorMode>, system: Option<ColorMode>) -> ColorMode {
        resolved.or(system).unwrap_or(ColorMode::Light)
    }
}

/// The closed set of accent palettes a visitor can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Golden,
    Cyan,
    Purple,
    Emerald,
    Rose,
}

impl Palette {
    /// Picker order.
    pub const ALL: [Palette; 5] = [
        Palette::Golden,
        Palette::Cyan,
        Palette::Purple,
        Palette::Emerald,
        Palette::Rose,
    ];

    /// Used whenever nothing valid has been persisted.
    pub const DEFAULT: Palette = Palette::Emerald;

    /// Persisted identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Golden => "golden",
            Palette::Cyan => "cyan",
            Palette::Purple => "purple",
            Palette::Emerald => "emerald",
            Palette::Rose => "rose",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Palette::Golden => "Golden",
            Palette::Cyan => "Cyan",
            Palette::Purple => "Purple",
            Palette::Emerald => "Emerald",
            Palette::Rose => "Rose",
        }
    }

    /// Gradient classes for the picker swatch.
    pub fn swatch(&self) -> &'static str {
        match self {
            Palette::Golden => "bg-gradient-to-br from-amber-400 to-yellow-600",
            Palette::Cyan => "bg-gradient-to-br from-cyan-400 to-blue-500",
            Palette::Purple => "bg-gradient-to-br from-purple-400 to-violet-600",
            Palette::Emerald => "bg-gradient-to-br from-emerald-400 to-green-600",
            Palette::Rose => "bg-gradient-to-br from-rose-400 to-pink-600",
        }
    }

    /// Strict lookup; anything that is not an exact palette name is rejected.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Colour table for the given mode.
    pub fn colors(&self, mode: ColorMode) -> &'static [ColorEntry; 5] {
        match (self, mode) {
            (Palette::Golden, ColorMode::Light) => &GOLDEN_LIGHT,
            (Palette::Golden, ColorMode::Dark) => &GOLDEN_DARK,
            (Palette::Cyan, ColorMode::Light) => &CYAN_LIGHT,
            (Palette::Cyan, ColorMode::Dark) => &CYAN_DARK,
            (Palette::Purple, ColorMode::Light) => &PURPLE_LIGHT,
            (Palette::Purple, ColorMode::Dark) => &PURPLE_DARK,
            (Palette::Emerald, ColorMode::Light) => &EMERALD_LIGHT,
            (Palette::Emerald, ColorMode::Dark) => &EMERALD_DARK,
            (Palette::Rose, ColorMode::Light) => &ROSE_LIGHT,
            (Palette::Rose, ColorMode::Dark) => &ROSE_DARK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

static GOLDEN_LIGHT: [ColorEntry; 5] = [
    ("primary", "oklch(0.72 0.15 75)"),
    ("primary-foreground", "oklch(0.2 0.03 75)"),
    ("accent", "oklch(0.94 0.05 85)"),
    ("accent-foreground", "oklch(0.32 0.06 75)"),
    ("ring", "oklch(0.72 0.15 75)"),
];

static GOLDEN_DARK: [ColorEntry; 5] = [
    ("primary", "oklch(0.8 0.16 80)"),
    ("primary-foreground", "oklch(0.16 0.02 80)"),
    ("accent", "oklch(0.3 0.05 80)"),
    ("accent-foreground", "oklch(0.9 0.07 85)"),
    ("ring", "oklch(0.8 0.16 80)"),
];

static CYAN_LIGHT: [ColorEntry; 5] = [
    ("primary", "oklch(0.62 0.13 215)"),
    ("primary-foreground", "oklch(0.98 0.01 215)"),
    ("accent", "oklch(0.94 0.04 210)"),
    ("accent-foreground", "oklch(0.3 0.06 220)"),
    ("ring", "oklch(0.62 0.13 215)"),
];

static CYAN_DARK: [ColorEntry; 5] = [
    ("primary", "oklch(0.78 0.13 210)"),
    ("primary-foreground", "oklch(0.16 0.03 220)"),
    ("accent", "oklch(0.3 0.05 220)"),
    ("accent-foreground", "oklch(0.9 0.06 205)"),
    ("ring", "oklch(0.78 0.13 210)"),
];

static PURPLE_LIGHT: [ColorEntry; 5] = [
    ("primary", "oklch(0.56 0.2 295)"),
    ("primary-foreground", "oklch(0.98 0.01 295)"),
    ("accent", "oklch(0.94 0.04 300)"),
    ("accent-foreground", "oklch(0.32 0.1 295)"),
    ("ring", "oklch(0.56 0.2 295)"),
];

static PURPLE_DARK: [ColorEntry; 5] = [
    ("primary", "oklch(0.72 0.17 300)"),
    ("primary-foreground", "oklch(0.16 0.03 300)"),
    ("accent", "oklch(0.3 0.07 300)"),
    ("accent-foreground", "oklch(0.9 0.06 300)"),
    ("ring", "oklch(0.72 0.17 300)"),
];

static EMERALD_LIGHT: [ColorEntry; 5] = [
    ("primary", "oklch(0.6 0.15 160)"),
    ("primary-foreground", "oklch(0.98 0.01 160)"),
    ("accent", "oklch(0.94 0.05 165)"),
    ("accent-foreground", "oklch(0.3 0.07 160)"),
    ("ring", "oklch(0.6 0.15 160)"),
];

static EMERALD_DARK: [ColorEntry; 5] = [
    ("primary", "oklch(0.77 0.16 160)"),
    ("primary-foreground", "oklch(0.16 0.03 160)"),
    ("accent", "oklch(0.3 0.06 160)"),
    ("accent-foreground", "oklch(0.9 0.07 160)"),
    ("ring", "oklch(0.77 0.16 160)"),
];

static ROSE_LIGHT: [ColorEntry; 5] = [
    ("primary", "oklch(0.62 0.2 10)"),
    ("primary-foreground", "oklch(0.98 0.01 10)"),
    ("accent", "oklch(0.94 0.04 10)"),
    ("accent-foreground", "oklch(0.32 0.1 10)"),
    ("ring", "oklch(0.62 0.2 10)"),
];

static ROSE_DARK: [ColorEntry; 5] = [
    ("primary", "oklch(0.74 0.17 5)"),
    ("primary-foreground", "oklch(0.16 0.03 5)"),
    ("accent", "oklch(0.3 0.07 5)"),
    ("accent-foreground", "oklch(0.9 0.06 5)"),
    ("ring", "oklch(0.74 0.17 5)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_strict() {
        assert_eq!(Palette::from_name("cyan"), Some(Palette::Cyan));
        assert_eq!(Palette::from_name("Cyan"), None);
        assert_eq!(Palette::from_name(""), None);
        assert_eq!(Palette::from_name("{\"bad\":1}"), None);
    }

    #[test]
    fn test_every_table_has_all_keys() {
        for palette in Palette::ALL {
            for mode in [ColorMode::Light, ColorMode::Dark] {
                let keys: Vec<&str> = palette.colors(mode).iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, PALETTE_KEYS, "{} {}", palette.name(), mode.as_str());
            }
        }
    }

    #[test]
    fn test_light_and_dark_differ() {
        for palette in Palette::ALL {
            assert_ne!(palette.colors(ColorMode::Light), palette.colors(ColorMode::Dark));
        }
    }

    #[test]
    fn test_effective_mode() {
        use ColorMode::*;
        assert_eq!(ColorMode::effective(Some(Dark), Some(Light)), Dark);
        assert_eq!(ColorMode::effective(None, Some(Dark)), Dark);
        assert_eq!(ColorMode::effective(None, None), Light);
    }

    #[test]
    fn test_default_is_emerald() {
        assert_eq!(Palette::default(), Palette::Emerald);
        assert_eq!(serde_json::to_string(&Palette::Rose).unwrap(), "\"rose\"");
    }
}
