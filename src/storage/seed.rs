//! Demo inventory loaded into a fresh store when seeding is enabled.

use crate::domain::{ImageRef, ValidatedMint};
use crate::storage::backend::ListingStore;

/// `(name, model, year, price, image)` for each demo car, oldest first.
const DEMO_CARS: [(&str, &str, i32, f64, &str); 3] = [
    (
        "BMW M4",
        "Competition",
        2024,
        1.9,
        "https://images.pexels.com/photos/170811/pexels-photo-170811.jpeg",
    ),
    (
        "Porsche 911",
        "Carrera",
        2023,
        2.8,
        "https://images.pexels.com/photos/112460/pexels-photo-112460.jpeg",
    ),
    (
        "Tesla Model S",
        "Plaid",
        2024,
        1.5,
        "https://images.pexels.com/photos/35967/mini-cooper-auto-model-vehicle.jpg",
    ),
];

/// Inserts the demo cars so the marketplace reads Tesla, Porsche, BMW.
pub fn seed_demo_listings(store: &mut impl ListingStore) {
    for (name, model, year, price, image) in DEMO_CARS {
        store.insert(ValidatedMint {
            name: name.to_string(),
            model: model.to_string(),
            year,
            price,
            image: ImageRef::new(image),
        });
    }
    tracing::debug!(count = DEMO_CARS.len(), "seeded demo listings");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn seed_orders_most_recent_first() {
        let mut store = MemoryStore::default();
        seed_demo_listings(&mut store);
        let names: Vec<_> = store.listings().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Tesla Model S", "Porsche 911", "BMW M4"]);
    }
}
