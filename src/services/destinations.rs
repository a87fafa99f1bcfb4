//! Destination catalog service

use crate::{
    models::{
        destination::{Destination, DestinationSection, DestinationView, Zone},
        enums::Beach,
    },
    seed::DESTINATIONS,
};

/// Format a rupiah amount with dot thousand separators, e.g. `Rp 10.000`
pub fn format_rupiah(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}

fn view(destination: &Destination) -> DestinationView {
    DestinationView {
        occupancy_percent: destination.occupancy_percent(),
        price_label: format_rupiah(destination.price),
        destination: destination.clone(),
    }
}

#[derive(Clone, Default)]
pub struct DestinationsService;

impl DestinationsService {
    pub fn new() -> Self {
        Self
    }

    /// Destinations grouped by zone, east to west
    pub fn sections(&self) -> Vec<DestinationSection> {
        [Zone::East, Zone::Central, Zone::West]
            .into_iter()
            .map(|zone| DestinationSection {
                zone,
                title: zone.title().to_string(),
                destinations: DESTINATIONS
                    .iter()
                    .filter(|d| d.zone == zone)
                    .map(view)
                    .collect(),
            })
            .collect()
    }

    pub fn get(&self, beach: Beach) -> Option<DestinationView> {
        DESTINATIONS.iter().find(|d| d.beach == beach).map(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(7_500), "Rp 7.500");
        assert_eq!(format_rupiah(10_000), "Rp 10.000");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
    }

    #[test]
    fn test_occupancy() {
        let parangtritis = DestinationsService::new().get(Beach::Parangtritis).unwrap();
        assert!((parangtritis.occupancy_percent - 56.666).abs() < 0.01);

        let mut empty = parangtritis.destination.clone();
        empty.capacity = 0;
        assert_eq!(empty.occupancy_percent(), 0.0);
    }

    #[test]
    fn test_sections_cover_catalog() {
        let sections = DestinationsService::new().sections();
        let sizes: Vec<_> = sections.iter().map(|s| s.destinations.len()).collect();
        assert_eq!(sizes, vec![3, 4, 3]);
        assert_eq!(sections[2].destinations[1].destination.beach, Beach::Baru);
    }
}
