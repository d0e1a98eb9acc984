//! Responsive breakpoint definitions for the Windrose front end.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Token emitted as the `data-bp` attribute on the document body.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound, or `None` for the widest tier.
    pub max_width: Option<u16>,
}

impl Breakpoint {
    /// Whether the admin sidebar stays pinned open at this width.
    #[must_use]
    pub const fn pins_sidebar(self) -> bool {
        self.min_width >= WIDE.min_width
    }
}

/// Single-column phone layout.
pub const NARROW: Breakpoint = Breakpoint {
    name: "narrow",
    min_width: 0,
    max_width: Some(767),
};
/// Tablets and small laptops; the admin sidebar collapses behind a toggle.
pub const MEDIUM: Breakpoint = Breakpoint {
    name: "medium",
    min_width: 768,
    max_width: Some(1199),
};
/// Desktop layout with the sidebar pinned.
pub const WIDE: Breakpoint = Breakpoint {
    name: "wide",
    min_width: 1200,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions and CSS variable emission.
pub const BREAKPOINTS: [Breakpoint; 3] = [NARROW, MEDIUM, WIDE];

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(WIDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_cover_the_axis_without_gaps() {
        for pair in BREAKPOINTS.windows(2) {
            let upper = pair[0].max_width.unwrap();
            assert_eq!(upper + 1, pair[1].min_width);
        }
        assert!(BREAKPOINTS.last().unwrap().max_width.is_none());
    }

    #[test]
    fn only_the_wide_tier_pins_the_sidebar() {
        assert!(!NARROW.pins_sidebar());
        assert!(!MEDIUM.pins_sidebar());
        assert!(WIDE.pins_sidebar());
    }
}
