//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready state for one frame
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Header, table, form, wallet, dialog and footer renderers
//! - [`helpers`]: Width-aware text utilities and match highlighting
//! - [`theme`]: Color themes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DialogInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, NoticeInfo, SearchBarInfo,
    UIViewModel, ViewBody,
};
