//! Error types for the Car Dealer plugin.
//!
//! This module defines the centralized error type [`CarDealerError`] and a type alias
//! [`Result`] used by the store, the workflow controller and the event handler. All
//! errors are implemented using the `thiserror` crate.

use crate::domain::listing::{ListingId, ValidityReport};
use thiserror::Error;

/// The main error type for Car Dealer operations.
///
/// Workflow and validation variants are resolved locally by the event handler;
/// none of them cross a process boundary.
///
/// # Examples
///
/// ```
/// use cardealer::domain::{CarDealerError, ListingId};
///
/// let err = CarDealerError::NotFound(ListingId::new(7));
/// assert_eq!(err.to_string(), "listing #7 not found");
/// ```
#[derive(Debug, Error)]
pub enum CarDealerError {
    /// One or more mint fields failed validation.
    ///
    /// Carries the per-field report so the form can mark the invalid inputs.
    #[error("invalid mint fields: {}", .0.invalid_fields().join(", "))]
    Validation(ValidityReport),

    /// No listing with this id exists in the collection.
    #[error("listing {0} not found")]
    NotFound(ListingId),

    /// The listing has already been sold.
    #[error("listing {0} is already sold")]
    AlreadySold(ListingId),

    /// The listing is not on offer (pending).
    #[error("listing {0} is not available")]
    NotAvailable(ListingId),

    /// Another confirmation dialog is already open.
    #[error("another confirmation is already in progress")]
    WorkflowBusy,

    /// Confirm or cancel was issued with no dialog open.
    #[error("no confirmation is pending")]
    NothingToConfirm,

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Car Dealer operations.
pub type Result<T> = std::result::Result<T, CarDealerError>;
