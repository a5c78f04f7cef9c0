//! Case-insensitive listing search.

use crate::domain::Listing;

/// Returns the listings matching `query`, preserving collection order.
///
/// A listing matches when the lower-cased query is a substring of its
/// lower-cased name, model or status label. An empty query matches everything.
///
/// # Examples
///
/// ```
/// use cardealer::app::filter::filter_listings;
///
/// let listings = Vec::new();
/// assert!(filter_listings("tesla", &listings).is_empty());
/// ```
#[must_use]
pub fn filter_listings<'a>(query: &str, listings: &'a [Listing]) -> Vec<&'a Listing> {
    if query.is_empty() {
        return listings.iter().collect();
    }

    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|listing| {
            listing.name.to_lowercase().contains(&needle)
                || listing.model.to_lowercase().contains(&needle)
                || listing.status.label().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ImageRef, ListingId, ListingStatus};

    fn listing(id: u64, name: &str, model: &str, status: ListingStatus) -> Listing {
        Listing {
            id: ListingId::new(id),
            name: name.into(),
            model: model.into(),
            year: 2024,
            price: 1.0,
            image: ImageRef::new("img"),
            status,
            created_at: 0,
        }
    }

    fn fixture() -> Vec<Listing> {
        vec![
            listing(3, "Tesla Model S", "Plaid", ListingStatus::Available),
            listing(2, "Porsche 911", "Carrera", ListingStatus::Sold),
            listing(1, "BMW M4", "Competition", ListingStatus::Available),
        ]
    }

    fn ids(found: &[&Listing]) -> Vec<u64> {
        found.iter().map(|l| l.id.get()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let listings = fixture();
        assert_eq!(ids(&filter_listings("", &listings)), vec![3, 2, 1]);
    }

    #[test]
    fn matching_ignores_case() {
        let listings = fixture();
        assert_eq!(filter_listings("tesla", &listings), filter_listings("TESLA", &listings));
        assert_eq!(ids(&filter_listings("TeSlA", &listings)), vec![3]);
    }

    #[test]
    fn matches_model_and_status() {
        let listings = fixture();
        assert_eq!(ids(&filter_listings("carrera", &listings)), vec![2]);
        assert_eq!(ids(&filter_listings("SOLD", &listings)), vec![2]);
        assert_eq!(ids(&filter_listings("avail", &listings)), vec![3, 1]);
    }

    #[test]
    fn no_match_yields_empty() {
        let listings = fixture();
        assert!(filter_listings("ferrari", &listings).is_empty());
    }
}
