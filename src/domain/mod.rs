//! Domain layer for the Car Dealer plugin.
//!
//! Core types independent of Zellij APIs and rendering: listings and their
//! validation, the demo wallet, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing model, ids, status and mint validation
//! - [`wallet`]: Wallet balance and activity feed
//!
//! # Examples
//!
//! ```
//! use cardealer::domain::{ListingStatus, MintFields};
//!
//! let fields = MintFields {
//!     name: "Tesla Model S".into(),
//!     model: "Plaid".into(),
//!     year: "2024".into(),
//!     price: "1.5".into(),
//!     image: "tesla.png".into(),
//! };
//! assert!(fields.validate().is_ok());
//! assert_eq!(ListingStatus::default(), ListingStatus::Available);
//! ```

pub mod error;
pub mod listing;
pub mod wallet;

pub use error::{CarDealerError, Result};
pub use listing::{
    ImageRef, Listing, ListingId, ListingStatus, MintFields, ValidatedMint, ValidityReport,
};
pub use wallet::{Activity, ActivityKind, Wallet};
