//! Storage layer for the listing collection.
//!
//! Listings live only in memory for the lifetime of the plugin instance. The
//! [`ListingStore`] trait is the single mutation API; [`MemoryStore`] is its
//! implementation.
//!
//! # Modules
//!
//! - `backend`: Store trait with create/remove/mark-sold operations
//! - `memory`: `Vec`-backed implementation with monotonic ids
//! - `seed`: Demo inventory

pub mod backend;
pub mod memory;
pub mod seed;

pub use backend::ListingStore;
pub use memory::MemoryStore;
pub use seed::seed_demo_listings;
