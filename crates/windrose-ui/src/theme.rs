//! Brand palette and design tokens for the Windrose front end.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "500").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens (e.g., primary shades).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Look up the hex value for a shade by token name.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

/// Primary brand palette (harbor blues).
pub const PRIMARY: Palette = Palette {
    id: "primary",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#D7E6EA",
        },
        ColorToken {
            name: "300",
            hex: "#8FB9C4",
        },
        ColorToken {
            name: "500",
            hex: "#31708A",
        },
        ColorToken {
            name: "700",
            hex: "#1F4A5C",
        },
        ColorToken {
            name: "900",
            hex: "#102831",
        },
    ],
};

/// Accent palette for calls to action (sunset ambers).
pub const ACCENT: Palette = Palette {
    id: "accent",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#FCE8D4",
        },
        ColorToken {
            name: "300",
            hex: "#F4B97F",
        },
        ColorToken {
            name: "500",
            hex: "#E8913B",
        },
        ColorToken {
            name: "700",
            hex: "#A8621F",
        },
        ColorToken {
            name: "900",
            hex: "#5C340F",
        },
    ],
};

/// Neutral palette for surfaces, borders, and copy.
pub const NEUTRALS: Palette = Palette {
    id: "neutral",
    shades: &[
        ColorToken {
            name: "100",
            hex: "#F7F7F5",
        },
        ColorToken {
            name: "300",
            hex: "#D9DBD6",
        },
        ColorToken {
            name: "500",
            hex: "#9AA09B",
        },
        ColorToken {
            name: "700",
            hex: "#565D58",
        },
        ColorToken {
            name: "900",
            hex: "#1E2320",
        },
    ],
};

/// Spacing scale in pixels.
pub const SPACING: [u8; 6] = [4, 8, 12, 16, 24, 32];
/// Corner radius tokens in pixels.
pub const RADII: [u8; 3] = [4, 8, 16];

/// Inline CSS background for the landing hero banner.
#[must_use]
pub fn hero_gradient() -> String {
    let deep = PRIMARY.shade("900").unwrap_or("#102831");
    let mid = PRIMARY.shade("500").unwrap_or("#31708A");
    let glow = ACCENT.shade("500").unwrap_or("#E8913B");
    format!("background:linear-gradient(140deg, {deep} 0%, {mid} 60%, {glow} 100%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_expected_lengths() {
        assert_eq!(PRIMARY.shades.len(), 5);
        assert_eq!(ACCENT.shades.len(), 5);
        assert_eq!(NEUTRALS.shades.len(), 5);
    }

    #[test]
    fn shade_lookup_matches_tokens() {
        assert_eq!(PRIMARY.shade("500"), Some("#31708A"));
        assert_eq!(NEUTRALS.shade("950"), None);
    }

    #[test]
    fn hero_gradient_uses_brand_colors() {
        let css = hero_gradient();
        assert!(css.starts_with("background:linear-gradient"));
        assert!(css.contains("#102831"));
        assert!(css.contains("#E8913B"));
    }
}
