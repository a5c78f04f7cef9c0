//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` via `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready strings and flags only.
//!
//! # Example
//!
//! ```rust
//! use cardealer::ui::viewmodel::{FooterInfo, HeaderInfo, TabInfo};
//!
//! let header = HeaderInfo {
//!     title: " Car Dealer ".to_string(),
//!     tabs: vec![TabInfo { label: "1 Marketplace".to_string(), is_active: true }],
//! };
//! let footer = FooterInfo { keybindings: "q: quit".to_string() };
//! assert!(header.tabs[0].is_active);
//! assert_eq!(footer.keybindings, "q: quit");
//! ```

use crate::domain::ListingStatus;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Content of the active view.
    pub body: ViewBody,

    /// Search bar, present while the search query is being edited or non-empty.
    pub search_bar: Option<SearchBarInfo>,

    /// Open confirmation dialog.
    pub dialog: Option<DialogInfo>,

    /// Transient success notice.
    pub notice: Option<NoticeInfo>,

    pub footer: FooterInfo,
}

/// Per-view content.
#[derive(Debug, Clone)]
pub enum ViewBody {
    Marketplace(MarketplaceInfo),
    Mint(MintFormInfo),
    Wallet(WalletInfo),
}

/// Visible window of the listing table.
#[derive(Debug, Clone)]
pub struct MarketplaceInfo {
    pub items: Vec<DisplayItem>,

    /// Index of the selected item within `items`.
    pub selected_index: usize,

    /// Shown instead of the table when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Image reference of the selected listing, host paths shown as `~/...`.
    pub selected_image: Option<String>,
}

/// Display information for a single listing row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub name: String,
    pub model: String,
    pub year: String,
    /// Price with currency label, e.g. `1.50 ETH`.
    pub price: String,
    pub status: ListingStatus,
    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Mint form state.
#[derive(Debug, Clone)]
pub struct MintFormInfo {
    pub fields: Vec<FormFieldInfo>,

    /// Summary shown under the form after a rejected submission.
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    pub label: &'static str,
    pub value: String,
    pub is_focused: bool,
    pub is_invalid: bool,
}

/// Wallet screen.
#[derive(Debug, Clone)]
pub struct WalletInfo {
    pub address: String,
    /// Balance with currency label.
    pub balance: String,
    pub activity: Vec<ActivityLine>,
}

#[derive(Debug, Clone)]
pub struct ActivityLine {
    /// e.g. `Sold Tesla Model S`.
    pub description: String,
    pub amount: String,
    pub time_ago: String,
}

/// Header with title and view tabs.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone)]
pub struct TabInfo {
    pub label: String,
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub is_editing: bool,
}

/// Confirmation dialog.
#[derive(Debug, Clone)]
pub struct DialogInfo {
    pub title: String,
    pub message: String,
    pub hint: String,
}

/// Transient notice line.
#[derive(Debug, Clone)]
pub struct NoticeInfo {
    pub message: String,
}
