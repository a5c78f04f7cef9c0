//! Listing store abstraction.
//!
//! This module defines the [`ListingStore`] trait, the only API through which the
//! listing collection is mutated. Each method maps directly to a marketplace use
//! case: minting, confirmed deletion and confirmed purchase.

use crate::domain::error::{CarDealerError, Result};
use crate::domain::{Listing, ListingId, MintFields, ValidatedMint};

/// Owner of the canonical, ordered listing collection.
///
/// The collection is ordered most-recent-first: new listings are prepended.
/// Ids are unique for the lifetime of the store.
///
/// # Implementations
///
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local `Vec` (default)
///
/// # Examples
///
/// ```
/// use cardealer::domain::{ListingStatus, MintFields};
/// use cardealer::storage::{ListingStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// let fields = MintFields {
///     name: "BMW M4".into(),
///     model: "Competition".into(),
///     year: "2024".into(),
///     price: "1.9".into(),
///     image: "m4.png".into(),
/// };
/// let id = store.create(&fields)?;
/// assert_eq!(store.get(id).map(|l| l.status), Some(ListingStatus::Available));
/// # Ok::<(), cardealer::CarDealerError>(())
/// ```
pub trait ListingStore {
    /// Stores an already validated listing and returns its fresh id.
    fn insert(&mut self, mint: ValidatedMint) -> ListingId;

    /// Removes the listing with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CarDealerError::NotFound`] if no such listing exists; the
    /// collection is left unchanged.
    fn remove(&mut self, id: ListingId) -> Result<Listing>;

    /// Transitions an `Available` listing to `Sold`.
    ///
    /// # Errors
    ///
    /// Returns [`CarDealerError::NotFound`] if absent,
    /// [`CarDealerError::AlreadySold`] if the listing was already sold and
    /// [`CarDealerError::NotAvailable`] if it is pending.
    fn mark_sold(&mut self, id: ListingId) -> Result<&Listing>;

    /// Looks up a listing by id.
    fn get(&self, id: ListingId) -> Option<&Listing>;

    /// Current snapshot of the collection, most recent first.
    fn listings(&self) -> &[Listing];

    /// Validates a mint submission and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`CarDealerError::Validation`] with the per-field report when any
    /// field is missing or malformed. Nothing is stored in that case.
    fn create(&mut self, fields: &MintFields) -> Result<ListingId> {
        let mint = fields.validate().map_err(CarDealerError::Validation)?;
        Ok(self.insert(mint))
    }

    fn len(&self) -> usize {
        self.listings().len()
    }

    fn is_empty(&self) -> bool {
        self.listings().is_empty()
    }
}
