//! Sandbox filesystem helpers.
//!
//! The Zellij sandbox mounts the host filesystem under `/host`; these helpers
//! translate between what a user types and what the plugin can open.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
