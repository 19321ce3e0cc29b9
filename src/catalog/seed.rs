//! Built-in catalog used when no catalog file is found

use super::config::{AvEntry, CatalogConfig, MealEntry, VenueEntry};

/// Default catalog of rooms, equipment, and catering options
pub fn seed_catalog() -> CatalogConfig {
    CatalogConfig {
        venue: vec![
            VenueEntry::new("Conference Room (Capacity:15)", 3500),
            VenueEntry::new("Auditorium Hall (Capacity:200)", 5500),
            VenueEntry::new("Presentation Room (Capacity:50)", 700),
            VenueEntry::new("Large Meeting Room (Capacity:10)", 900),
            VenueEntry::new("Small Meeting Room (Capacity:5)", 1100),
        ],
        av: vec![
            AvEntry::new("Projectors", 200),
            AvEntry::new("Speaker", 35),
            AvEntry::new("Signage Board", 80),
            AvEntry::new("Microphones", 45),
            AvEntry::new("White Boards", 80),
        ],
        meals: vec![
            MealEntry::per_person("Breakfast", 50),
            MealEntry::per_person("High Tea", 25),
            MealEntry::per_person("Lunch", 65),
            MealEntry::per_person("Dinner", 70),
        ],
    }
}
