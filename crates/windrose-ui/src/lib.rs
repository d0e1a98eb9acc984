#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Windrose web front end: the public marketing pages plus the operator
//! console. DOM-free primitives (catalogue models, breakpoints, brand tokens)
//! live at the crate root so they compile and test on any target; rendering
//! modules are wasm32-only.

pub mod breakpoints;
pub mod models;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::breakpoints::{self, for_width};
    use crate::models::{TourStatus, demo_tours};

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(for_width(0).name, breakpoints::NARROW.name);
        assert_eq!(for_width(767).name, breakpoints::NARROW.name);
        assert_eq!(for_width(768).name, breakpoints::MEDIUM.name);
        assert_eq!(for_width(1200).name, breakpoints::WIDE.name);
        assert_eq!(for_width(u16::MAX).name, breakpoints::WIDE.name);
    }

    #[test]
    fn demo_catalogue_is_presentable() {
        let tours = demo_tours();
        assert!(tours.len() >= 4);
        assert!(tours.iter().any(|tour| tour.status == TourStatus::Published));
        assert!(tours.iter().all(|tour| tour.seats_booked <= tour.seats_total));
    }
}
