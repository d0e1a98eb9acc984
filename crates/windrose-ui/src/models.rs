//! Tour catalogue records shared by the marketing pages and the admin console.

use chrono::NaiveDate;
use uuid::Uuid;

/// Publication state for a tour listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourStatus {
    /// Visible on the marketing site and bookable.
    Published,
    /// Hidden from the marketing site while being edited.
    Draft,
    /// Visible but closed for booking.
    SoldOut,
}

impl TourStatus {
    /// Stable token used for CSS classes and filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::SoldOut => "sold-out",
        }
    }

    /// Human-readable badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::SoldOut => "Sold out",
        }
    }
}

/// Single tour as shown in the admin listing and on the marketing site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourRow {
    /// Stable tour identifier.
    pub id: Uuid,
    /// Marketing title for the tour.
    pub title: String,
    /// Destination country or region.
    pub destination: String,
    /// Departure date of the next run.
    pub departure: NaiveDate,
    /// Total seats on the departure.
    pub seats_total: u16,
    /// Seats already booked.
    pub seats_booked: u16,
    /// Price per seat in whole euros.
    pub price_eur: u32,
    /// Current publication state.
    pub status: TourStatus,
}

impl TourRow {
    /// Whether every seat on the departure is taken.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.seats_booked >= self.seats_total
    }

    /// Occupancy summary, e.g. "11 / 16 seats".
    #[must_use]
    pub fn seats_label(&self) -> String {
        format!("{} / {} seats", self.seats_booked, self.seats_total)
    }

    /// Departure date formatted for display, e.g. "12 Jun 2026".
    #[must_use]
    pub fn departure_label(&self) -> String {
        self.departure.format("%-d %b %Y").to_string()
    }

    /// Price formatted for display, e.g. "€2,490".
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("€{}", group_thousands(self.price_eur))
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Copy of `tours` with the matching tour moved back to draft.
#[must_use]
pub fn mark_unpublished(tours: &[TourRow], id: Uuid) -> Vec<TourRow> {
    tours
        .iter()
        .map(|tour| {
            let mut tour = tour.clone();
            if tour.id == id {
                tour.status = TourStatus::Draft;
            }
            tour
        })
        .collect()
}

/// Up to three non-draft tours closest to departure, for the homepage.
#[must_use]
pub fn featured(tours: &[TourRow]) -> Vec<TourRow> {
    let mut picks: Vec<TourRow> = tours
        .iter()
        .filter(|tour| tour.status != TourStatus::Draft)
        .cloned()
        .collect();
    picks.sort_by_key(|tour| tour.departure);
    picks.truncate(3);
    picks
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Demo catalogue used by the initial UI shell.
#[must_use]
pub fn demo_tours() -> Vec<TourRow> {
    vec![
        TourRow {
            id: Uuid::from_u128(1),
            title: "Lofoten Under the Midnight Sun".to_string(),
            destination: "Norway".to_string(),
            departure: demo_date(2026, 6, 12),
            seats_total: 16,
            seats_booked: 11,
            price_eur: 2_490,
            status: TourStatus::Published,
        },
        TourRow {
            id: Uuid::from_u128(2),
            title: "Atlas Mountains Traverse".to_string(),
            destination: "Morocco".to_string(),
            departure: demo_date(2026, 4, 18),
            seats_total: 12,
            seats_booked: 12,
            price_eur: 1_180,
            status: TourStatus::SoldOut,
        },
        TourRow {
            id: Uuid::from_u128(3),
            title: "Patagonia Ice Fields".to_string(),
            destination: "Chile".to_string(),
            departure: demo_date(2026, 11, 3),
            seats_total: 10,
            seats_booked: 4,
            price_eur: 3_950,
            status: TourStatus::Published,
        },
        TourRow {
            id: Uuid::from_u128(4),
            title: "Kyoto Autumn Colours".to_string(),
            destination: "Japan".to_string(),
            departure: demo_date(2026, 11, 19),
            seats_total: 14,
            seats_booked: 9,
            price_eur: 2_860,
            status: TourStatus::Published,
        },
        TourRow {
            id: Uuid::from_u128(5),
            title: "Danube Cycle Week".to_string(),
            destination: "Austria".to_string(),
            departure: demo_date(2026, 5, 24),
            seats_total: 20,
            seats_booked: 7,
            price_eur: 940,
            status: TourStatus::Draft,
        },
        TourRow {
            id: Uuid::from_u128(6),
            title: "Azores Whale Watch".to_string(),
            destination: "Portugal".to_string(),
            departure: demo_date(2026, 7, 2),
            seats_total: 12,
            seats_booked: 5,
            price_eur: 1_320,
            status: TourStatus::Published,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens_are_stable() {
        assert_eq!(TourStatus::Published.as_str(), "published");
        assert_eq!(TourStatus::Draft.as_str(), "draft");
        assert_eq!(TourStatus::SoldOut.as_str(), "sold-out");
        assert_eq!(TourStatus::SoldOut.label(), "Sold out");
    }

    #[test]
    fn occupancy_reports_full_departures() {
        let tours = demo_tours();
        let atlas = &tours[1];
        assert!(atlas.is_full());
        assert_eq!(atlas.seats_label(), "12 / 12 seats");
        assert!(!tours[0].is_full());
    }

    #[test]
    fn price_label_groups_thousands() {
        let mut tour = demo_tours().remove(0);
        assert_eq!(tour.price_label(), "€2,490");
        tour.price_eur = 940;
        assert_eq!(tour.price_label(), "€940");
        tour.price_eur = 1_234_567;
        assert_eq!(tour.price_label(), "€1,234,567");
    }

    #[test]
    fn departure_label_is_human_readable() {
        let tour = demo_tours().remove(0);
        assert_eq!(tour.departure_label(), "12 Jun 2026");
    }

    #[test]
    fn mark_unpublished_only_touches_the_target() {
        let tours = demo_tours();
        let target = tours[0].id;
        let updated = mark_unpublished(&tours, target);
        assert_eq!(updated[0].status, TourStatus::Draft);
        for (before, after) in tours.iter().zip(&updated).skip(1) {
            assert_eq!(before.status, after.status);
        }
    }

    #[test]
    fn featured_skips_drafts_and_caps_at_three() {
        let picks = featured(&demo_tours());
        assert_eq!(picks.len(), 3);
        assert!(picks.iter().all(|tour| tour.status != TourStatus::Draft));
        for pair in picks.windows(2) {
            assert!(pair[0].departure <= pair[1].departure);
        }
    }
}
