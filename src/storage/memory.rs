//! In-memory listing store.
//!
//! The whole collection lives in a `Vec` for the lifetime of the plugin
//! instance; nothing is persisted.

use crate::domain::error::{CarDealerError, Result};
use crate::domain::{Listing, ListingId, ListingStatus, ValidatedMint};
use crate::storage::backend::ListingStore;

/// Process-local listing store with a monotonic id counter.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Most recent first.
    listings: Vec<Listing>,
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    fn issue_id(&mut self) -> ListingId {
        let id = ListingId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: ListingId) -> Option<usize> {
        self.listings.iter().position(|listing| listing.id == id)
    }
}

impl ListingStore for MemoryStore {
    fn insert(&mut self, mint: ValidatedMint) -> ListingId {
        let _span = tracing::debug_span!("store_insert", name = %mint.name).entered();

        let id = self.issue_id();
        self.listings.insert(
            0,
            Listing {
                id,
                name: mint.name,
                model: mint.model,
                year: mint.year,
                price: mint.price,
                image: mint.image,
                status: ListingStatus::Available,
                created_at: chrono::Utc::now().timestamp(),
            },
        );

        tracing::debug!(listing_id = %id, total = self.listings.len(), "listing created");
        id
    }

    fn remove(&mut self, id: ListingId) -> Result<Listing> {
        let _span = tracing::debug_span!("store_remove", listing_id = %id).entered();

        let index = self.position(id).ok_or(CarDealerError::NotFound(id))?;
        let removed = self.listings.remove(index);

        tracing::debug!(remaining = self.listings.len(), "listing removed");
        Ok(removed)
    }

    fn mark_sold(&mut self, id: ListingId) -> Result<&Listing> {
        let _span = tracing::debug_span!("store_mark_sold", listing_id = %id).entered();

        let listing = self
            .listings
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or(CarDealerError::NotFound(id))?;

        match listing.status {
            ListingStatus::Available => {}
            ListingStatus::Sold => return Err(CarDealerError::AlreadySold(id)),
            ListingStatus::Pending => return Err(CarDealerError::NotAvailable(id)),
        }
        listing.status = ListingStatus::Sold;

        tracing::debug!(price = listing.price, "listing sold");
        Ok(listing)
    }

    fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    fn listings(&self) -> &[Listing] {
        &self.listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MintFields;

    fn mint(name: &str) -> MintFields {
        MintFields {
            name: name.into(),
            model: "Model".into(),
            year: "2024".into(),
            price: "1.0".into(),
            image: "car.png".into(),
        }
    }

    #[test]
    fn create_prepends_and_starts_available() {
        let mut store = MemoryStore::default();
        let first = store.create(&mint("first")).unwrap();
        let second = store.create(&mint("second")).unwrap();

        let names: Vec<_> = store.listings().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
        assert_ne!(first, second);
        assert_eq!(store.get(first).unwrap().status, ListingStatus::Available);
    }

    #[test]
    fn rapid_creates_get_distinct_ids() {
        let mut store = MemoryStore::default();
        let ids: Vec<_> = (0..100).map(|_| store.create(&mint("x")).unwrap()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn invalid_create_leaves_store_untouched() {
        let mut store = MemoryStore::default();
        let err = store.create(&MintFields::default()).unwrap_err();
        assert!(matches!(err, CarDealerError::Validation(report) if !report.is_valid()));
        assert!(store.is_empty());
    }

    #[test]
    fn mark_sold_twice_fails() {
        let mut store = MemoryStore::default();
        let id = store.create(&mint("car")).unwrap();
        assert_eq!(store.mark_sold(id).unwrap().status, ListingStatus::Sold);
        assert!(matches!(store.mark_sold(id), Err(CarDealerError::AlreadySold(got)) if got == id));
    }

    #[test]
    fn pending_listing_cannot_be_sold() {
        let mut store = MemoryStore::default();
        let id = store.create(&mint("car")).unwrap();
        store.listings[0].status = ListingStatus::Pending;

        assert!(matches!(store.mark_sold(id), Err(CarDealerError::NotAvailable(got)) if got == id));
        assert_eq!(store.get(id).unwrap().status, ListingStatus::Pending);
    }

    #[test]
    fn remove_absent_id_reports_not_found() {
        let mut store = MemoryStore::default();
        store.create(&mint("car")).unwrap();
        let missing = ListingId::new(99);
        assert!(matches!(store.remove(missing), Err(CarDealerError::NotFound(_))));
        assert!(matches!(store.mark_sold(missing), Err(CarDealerError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut store = MemoryStore::default();
        let id = store.create(&mint("car")).unwrap();
        store.remove(id).unwrap();
        let next = store.create(&mint("car")).unwrap();
        assert_ne!(id, next);
        assert!(store.get(id).is_none());
    }
}
