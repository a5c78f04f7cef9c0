//! Confirm/cancel/auto-dismiss workflows for deleting and buying listings.
//!
//! Both workflows share the same shape, [`ConfirmFlow`]:
//!
//! ```text
//! Idle --request--> Confirming --cancel--> Idle
//!                        |
//!                        +--confirm--> (delete)   Idle
//!                        +--confirm--> (purchase) Committed --dismiss--> Idle
//! ```
//!
//! The purchase flow holds `Committed` while its success notice is visible. The
//! notice is cleared by a [`DismissToken`] the caller schedules after a fixed
//! delay. Only the most recently issued token is honoured, so any transition
//! that invalidates the notice (a new request, teardown) cancels the pending
//! dismiss by simply forgetting its token.

use crate::domain::error::{CarDealerError, Result};
use crate::domain::{Listing, ListingId, ListingStatus};
use crate::storage::ListingStore;

/// State of a single confirmation workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    /// Confirmation prompt visible for this listing.
    Confirming(ListingId),
    /// Action applied; success notice visible until dismissed.
    Committed(ListingId),
}

/// Which workflow a dialog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Delete,
    Purchase,
}

/// One confirmation workflow: a target listing plus its prompt visibility.
#[derive(Debug, Clone, Default)]
pub struct ConfirmFlow {
    state: FlowState,
}

impl ConfirmFlow {
    #[must_use]
    pub const fn state(&self) -> FlowState {
        self.state
    }

    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        matches!(self.state, FlowState::Confirming(_))
    }

    fn request(&mut self, id: ListingId) {
        self.state = FlowState::Confirming(id);
    }

    /// Leaves `Confirming` and returns the target, if a prompt was open.
    fn take_target(&mut self) -> Option<ListingId> {
        match self.state {
            FlowState::Confirming(id) => {
                self.state = FlowState::Idle;
                Some(id)
            }
            _ => None,
        }
    }

    fn commit(&mut self, id: ListingId) {
        self.state = FlowState::Committed(id);
    }

    fn reset(&mut self) {
        self.state = FlowState::Idle;
    }
}

/// Handle for one scheduled auto-dismiss of the purchase notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissToken(u64);

/// Outcome of a confirmed workflow step.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// The listing was removed from the store.
    Deleted(Listing),
    /// The listing was marked sold; `dismiss` must be scheduled by the caller.
    Purchased {
        listing: Listing,
        dismiss: DismissToken,
    },
}

/// Orchestrates the delete and purchase workflows over a [`ListingStore`].
///
/// # Example
///
/// ```
/// use cardealer::app::workflow::{Commit, FlowState, WorkflowController};
/// use cardealer::storage::{seed_demo_listings, ListingStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// seed_demo_listings(&mut store);
/// let target = store.listings()[0].clone();
///
/// let mut workflow = WorkflowController::default();
/// workflow.request_purchase(&target)?;
/// let Commit::Purchased { dismiss, .. } = workflow.confirm(&mut store)? else {
///     unreachable!()
/// };
/// assert!(workflow.notice_visible());
/// assert!(workflow.dismiss_elapsed(dismiss));
/// assert_eq!(workflow.purchase_state(), FlowState::Idle);
/// # Ok::<(), cardealer::CarDealerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkflowController {
    delete: ConfirmFlow,
    purchase: ConfirmFlow,
    pending_dismiss: Option<DismissToken>,
    next_token: u64,
}

impl WorkflowController {
    #[must_use]
    pub const fn delete_state(&self) -> FlowState {
        self.delete.state()
    }

    #[must_use]
    pub const fn purchase_state(&self) -> FlowState {
        self.purchase.state()
    }

    /// Whether any confirmation prompt is visible.
    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.delete.is_confirming() || self.purchase.is_confirming()
    }

    /// The open confirmation prompt, if any.
    #[must_use]
    pub const fn active_dialog(&self) -> Option<(FlowKind, ListingId)> {
        match (self.delete.state(), self.purchase.state()) {
            (FlowState::Confirming(id), _) => Some((FlowKind::Delete, id)),
            (_, FlowState::Confirming(id)) => Some((FlowKind::Purchase, id)),
            _ => None,
        }
    }

    /// Listing whose purchase success notice is currently shown.
    #[must_use]
    pub const fn notice(&self) -> Option<ListingId> {
        match self.purchase.state() {
            FlowState::Committed(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn notice_visible(&self) -> bool {
        self.notice().is_some()
    }

    #[must_use]
    pub const fn pending_dismiss(&self) -> Option<DismissToken> {
        self.pending_dismiss
    }

    /// Opens the delete prompt for `listing`. Any listing may be deleted.
    ///
    /// # Errors
    ///
    /// [`CarDealerError::WorkflowBusy`] if another prompt is open.
    pub fn request_delete(&mut self, listing: &Listing) -> Result<()> {
        self.ensure_no_dialog()?;
        self.dismiss_early();
        self.delete.request(listing.id);
        tracing::debug!(listing_id = %listing.id, "delete requested");
        Ok(())
    }

    /// Opens the purchase prompt for `listing`.
    ///
    /// # Errors
    ///
    /// [`CarDealerError::AlreadySold`] for a sold listing,
    /// [`CarDealerError::NotAvailable`] for a pending one, and
    /// [`CarDealerError::WorkflowBusy`] if another prompt is open.
    pub fn request_purchase(&mut self, listing: &Listing) -> Result<()> {
        match listing.status {
            ListingStatus::Available => {}
            ListingStatus::Sold => return Err(CarDealerError::AlreadySold(listing.id)),
            ListingStatus::Pending => return Err(CarDealerError::NotAvailable(listing.id)),
        }
        self.ensure_no_dialog()?;
        self.dismiss_early();
        self.purchase.request(listing.id);
        tracing::debug!(listing_id = %listing.id, "purchase requested");
        Ok(())
    }

    /// Closes the open prompt without touching the store.
    ///
    /// # Errors
    ///
    /// [`CarDealerError::NothingToConfirm`] if no prompt is open.
    pub fn cancel(&mut self) -> Result<FlowKind> {
        let kind = if self.delete.take_target().is_some() {
            FlowKind::Delete
        } else if self.purchase.take_target().is_some() {
            FlowKind::Purchase
        } else {
            return Err(CarDealerError::NothingToConfirm);
        };
        tracing::debug!(flow = ?kind, "confirmation cancelled");
        Ok(kind)
    }

    /// Applies the open prompt's action to `store`.
    ///
    /// The prompt is closed whether or not the store accepts the change.
    ///
    /// # Errors
    ///
    /// [`CarDealerError::NothingToConfirm`] with no prompt open, or the store's
    /// `NotFound`/`AlreadySold`/`NotAvailable` error. The flow is back in `Idle` on error.
    pub fn confirm<S: ListingStore + ?Sized>(&mut self, store: &mut S) -> Result<Commit> {
        if let Some(id) = self.delete.take_target() {
            let listing = store.remove(id)?;
            tracing::debug!(listing_id = %id, "delete committed");
            return Ok(Commit::Deleted(listing));
        }

        let id = self
            .purchase
            .take_target()
            .ok_or(CarDealerError::NothingToConfirm)?;
        let listing = store.mark_sold(id)?.clone();

        self.purchase.commit(id);
        let dismiss = self.issue_token();
        self.pending_dismiss = Some(dismiss);

        tracing::debug!(listing_id = %id, token = dismiss.0, "purchase committed");
        Ok(Commit::Purchased { listing, dismiss })
    }

    /// Delivers an elapsed dismiss timer.
    ///
    /// Returns `true` if `token` was the pending one and the notice was cleared.
    /// Stale or cancelled tokens are ignored.
    pub fn dismiss_elapsed(&mut self, token: DismissToken) -> bool {
        if self.pending_dismiss != Some(token) {
            tracing::trace!(token = token.0, "ignoring stale dismiss");
            return false;
        }
        self.pending_dismiss = None;
        self.purchase.reset();
        true
    }

    /// Cancels any pending dismiss and returns both flows to `Idle`.
    pub fn teardown(&mut self) {
        self.pending_dismiss = None;
        self.delete.reset();
        self.purchase.reset();
    }

    fn ensure_no_dialog(&self) -> Result<()> {
        if self.is_confirming() {
            return Err(CarDealerError::WorkflowBusy);
        }
        Ok(())
    }

    /// Clears a visible purchase notice ahead of its timer.
    fn dismiss_early(&mut self) {
        if self.notice_visible() {
            self.pending_dismiss = None;
            self.purchase.reset();
        }
    }

    fn issue_token(&mut self) -> DismissToken {
        self.next_token += 1;
        DismissToken(self.next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListingStatus;
    use crate::storage::{seed_demo_listings, MemoryStore};

    fn seeded() -> MemoryStore {
        let mut store = MemoryStore::default();
        seed_demo_listings(&mut store);
        store
    }

    fn listing(store: &MemoryStore, id: u64) -> Listing {
        store.get(ListingId::new(id)).cloned().expect("seeded id")
    }

    #[test]
    fn cancel_delete_leaves_store_unchanged() {
        let mut store = seeded();
        let mut workflow = WorkflowController::default();

        workflow.request_delete(&listing(&store, 2)).unwrap();
        assert_eq!(workflow.delete_state(), FlowState::Confirming(ListingId::new(2)));

        assert_eq!(workflow.cancel().unwrap(), FlowKind::Delete);
        assert_eq!(workflow.delete_state(), FlowState::Idle);
        assert_eq!(store.len(), 3);
        assert!(matches!(workflow.confirm(&mut store), Err(CarDealerError::NothingToConfirm)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn confirm_delete_removes_and_returns_to_idle() {
        let mut store = seeded();
        let mut workflow = WorkflowController::default();

        workflow.request_delete(&listing(&store, 2)).unwrap();
        let commit = workflow.confirm(&mut store).unwrap();

        assert!(matches!(commit, Commit::Deleted(ref l) if l.id == ListingId::new(2)));
        assert_eq!(workflow.delete_state(), FlowState::Idle);
        assert!(store.get(ListingId::new(2)).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn sold_listing_can_still_be_deleted() {
        let mut store = seeded();
        store.mark_sold(ListingId::new(1)).unwrap();
        let mut workflow = WorkflowController::default();

        workflow.request_delete(&listing(&store, 1)).unwrap();
        workflow.confirm(&mut store).unwrap();
        assert!(store.get(ListingId::new(1)).is_none());
    }

    #[test]
    fn purchase_of_sold_listing_never_confirms() {
        let mut store = seeded();
        store.mark_sold(ListingId::new(1)).unwrap();
        let mut workflow = WorkflowController::default();

        let err = workflow.request_purchase(&listing(&store, 1)).unwrap_err();
        assert!(matches!(err, CarDealerError::AlreadySold(_)));
        assert_eq!(workflow.purchase_state(), FlowState::Idle);
    }

    #[test]
    fn pending_listing_cannot_be_bought() {
        let store = seeded();
        let mut workflow = WorkflowController::default();
        let mut pending = listing(&store, 2);
        pending.status = ListingStatus::Pending;

        let err = workflow.request_purchase(&pending).unwrap_err();
        assert!(matches!(err, CarDealerError::NotAvailable(id) if id == pending.id));
        assert_eq!(workflow.purchase_state(), FlowState::Idle);
    }

    #[test]
    fn purchase_shows_notice_until_dismissed() {
        let mut store = seeded();
        let mut workflow = WorkflowController::default();

        workflow.request_purchase(&listing(&store, 3)).unwrap();
        let Commit::Purchased { listing: sold, dismiss } = workflow.confirm(&mut store).unwrap() else {
            panic!("expected purchase commit");
        };
        assert_eq!(sold.status, ListingStatus::Sold);
        assert_eq!(workflow.notice(), Some(ListingId::new(3)));
        assert!(!workflow.is_confirming());

        assert!(workflow.dismiss_elapsed(dismiss));
        assert!(!workflow.notice_visible());
        assert_eq!(workflow.purchase_state(), FlowState::Idle);
        assert!(!workflow.dismiss_elapsed(dismiss));
    }

    #[test]
    fn new_request_cancels_pending_dismiss() {
        let mut store = seeded();
        let mut workflow = WorkflowController::default();

        workflow.request_purchase(&listing(&store, 3)).unwrap();
        let Commit::Purchased { dismiss: first, .. } = workflow.confirm(&mut store).unwrap() else {
            panic!("expected purchase commit");
        };

        workflow.request_purchase(&listing(&store, 2)).unwrap();
        assert_eq!(workflow.pending_dismiss(), None);
        assert!(!workflow.dismiss_elapsed(first));
        assert_eq!(workflow.purchase_state(), FlowState::Confirming(ListingId::new(2)));

        let Commit::Purchased { dismiss: second, .. } = workflow.confirm(&mut store).unwrap() else {
            panic!("expected purchase commit");
        };
        assert!(!workflow.dismiss_elapsed(first));
        assert!(workflow.notice_visible());
        assert!(workflow.dismiss_elapsed(second));
    }

    #[test]
    fn second_request_while_confirming_is_busy() {
        let store = seeded();
        let mut workflow = WorkflowController::default();

        workflow.request_purchase(&listing(&store, 3)).unwrap();
        let err = workflow.request_delete(&listing(&store, 2)).unwrap_err();
        assert!(matches!(err, CarDealerError::WorkflowBusy));
        assert_eq!(workflow.active_dialog(), Some((FlowKind::Purchase, ListingId::new(3))));
    }

    #[test]
    fn confirm_on_vanished_listing_returns_to_idle() {
        let mut store = seeded();
        let mut workflow = WorkflowController::default();
        let target = listing(&store, 3);

        workflow.request_purchase(&target).unwrap();
        store.remove(target.id).unwrap();

        assert!(matches!(workflow.confirm(&mut store), Err(CarDealerError::NotFound(_))));
        assert_eq!(workflow.purchase_state(), FlowState::Idle);
        assert!(workflow.pending_dismiss().is_none());
    }

    #[test]
    fn teardown_cancels_pending_dismiss() {
        let mut store = seeded();
        let mut workflow = WorkflowController::default();

        workflow.request_purchase(&listing(&store, 3)).unwrap();
        let Commit::Purchased { dismiss, .. } = workflow.confirm(&mut store).unwrap() else {
            panic!("expected purchase commit");
        };
        workflow.teardown();
        assert!(!workflow.notice_visible());
        assert!(!workflow.dismiss_elapsed(dismiss));
    }
}
