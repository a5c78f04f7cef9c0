//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/storage layers.
//!
//! ```text
//! Key press → Event → handle_event → AppState mutations → Actions → host calls
//!                 ↑                                          │
//!                 └────────── DismissElapsed (timer) ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Case-insensitive listing search
//! - [`form`]: Mint form editing state
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input and view mode types
//! - [`state`]: Central application state and view model computation
//! - [`workflow`]: Delete and purchase confirmation workflows

pub mod actions;
pub mod filter;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod workflow;

pub use actions::Action;
pub use filter::filter_listings;
pub use form::MintForm;
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode, ViewMode};
pub use state::AppState;
pub use workflow::{Commit, DismissToken, FlowKind, FlowState, WorkflowController};
