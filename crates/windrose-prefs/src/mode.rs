//! Layout mode enumeration persisted as the admin listing preference.

/// Rendering styles for the operator console listing. Defaults to
/// [`LayoutMode::Table`] for first-run users.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Dense tabular rows.
    #[default]
    Table,
    /// Card grid sized for visual scanning.
    Grid,
}

impl LayoutMode {
    /// Stable token written to the backing store. Once published, do not
    /// rename.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Grid => "grid",
        }
    }

    /// Parse a stored token. Unknown tokens return `None` so corrupted
    /// entries degrade to the default at the call site.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "table" => Some(Self::Table),
            "grid" => Some(Self::Grid),
            _ => None,
        }
    }

    /// All supported modes for toggle controls.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Table, Self::Grid]
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutMode;

    #[test]
    fn tokens_match_storage_contract() {
        assert_eq!(LayoutMode::Table.as_str(), "table");
        assert_eq!(LayoutMode::Grid.as_str(), "grid");
        assert_eq!(LayoutMode::parse("table"), Some(LayoutMode::Table));
        assert_eq!(LayoutMode::parse("grid"), Some(LayoutMode::Grid));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(LayoutMode::parse("gridX"), None);
        assert_eq!(LayoutMode::parse("TABLE"), None);
        assert_eq!(LayoutMode::parse(" grid"), None);
        assert_eq!(LayoutMode::parse(""), None);
    }

    #[test]
    fn default_is_table() {
        assert_eq!(LayoutMode::default(), LayoutMode::Table);
    }

    #[test]
    fn all_lists_every_mode_once() {
        assert_eq!(LayoutMode::all(), [LayoutMode::Table, LayoutMode::Grid]);
    }
}
